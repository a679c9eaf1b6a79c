// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lock model with its two command protocols.

use std::sync::Arc;

use crate::command::{Command, LockCommand, SecureLockCommand};
use crate::device::{BaseDevice, HubDevice};
use crate::error::DeviceError;
use crate::hub::{CommandResult, HubClient};
use crate::types::{DeviceNode, DeviceType, DeviceTypeInfo};

/// How a lock is driven, decided by its catalog tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockProtocol {
    /// Plain `DON`/`DOF`. Raw state 0 is unlocked, anything else locked.
    Simple,
    /// `SECMD 1`/`SECMD 0`. Positive raw state is locked.
    Secure,
}

impl LockProtocol {
    /// Picks the protocol for a device-type tag.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedLockType`] for tags that are not a
    /// lock.
    pub fn for_device_type(device_type: &DeviceType) -> Result<Self, DeviceError> {
        match device_type {
            DeviceType::Lock => Ok(Self::Simple),
            DeviceType::SecureLock => Ok(Self::Secure),
            other => Err(DeviceError::UnsupportedLockType(other.to_string())),
        }
    }

    fn is_locked(self, raw: i32) -> bool {
        match self {
            Self::Simple => raw != 0,
            Self::Secure => raw > 0,
        }
    }
}

/// A door lock.
#[derive(Debug)]
pub struct LockDevice<H: HubClient> {
    base: BaseDevice<H>,
    protocol: LockProtocol,
}

impl<H: HubClient> LockDevice<H> {
    /// Creates a lock model for a node.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedLockType`] if the catalog tag is
    /// neither `Lock` nor `SecureLock`.
    pub fn new(
        hub: Arc<H>,
        node: &DeviceNode,
        type_info: &DeviceTypeInfo,
    ) -> Result<Self, DeviceError> {
        let protocol = LockProtocol::for_device_type(&type_info.device_type)?;
        Ok(Self {
            base: BaseDevice::new(hub, node, type_info),
            protocol,
        })
    }

    /// Returns the command protocol of this lock.
    #[must_use]
    pub fn protocol(&self) -> LockProtocol {
        self.protocol
    }

    /// Returns `true` if the hub reports the lock as locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.protocol.is_locked(self.base.current_state())
    }

    /// Locks or unlocks using the lock's protocol.
    pub fn send_lock_state<F>(&self, locked: bool, on_result: F)
    where
        F: FnOnce(CommandResult) + Send + 'static,
    {
        let command: &dyn Command = match (self.protocol, locked) {
            (LockProtocol::Simple, true) => &LockCommand::Lock,
            (LockProtocol::Simple, false) => &LockCommand::Unlock,
            (LockProtocol::Secure, true) => &SecureLockCommand::Lock,
            (LockProtocol::Secure, false) => &SecureLockCommand::Unlock,
        };
        self.base.send(command, Box::new(on_result));
    }
}

impl<H: HubClient> HubDevice<H> for LockDevice<H> {
    fn base(&self) -> &BaseDevice<H> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDevice<H> {
        &mut self.base
    }
}
