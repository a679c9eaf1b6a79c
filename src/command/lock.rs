// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lock commands for the two lock protocols.

use crate::command::{CMD_OFF, CMD_ON, CMD_SECURE_LOCK, Command};

/// Command for locks driven by plain on/off codes.
///
/// # Examples
///
/// ```
/// use isy_devices::command::{Command, LockCommand};
///
/// assert_eq!(LockCommand::Lock.name(), "DON");
/// assert_eq!(LockCommand::Unlock.name(), "DOF");
/// assert_eq!(LockCommand::Lock.parameter(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockCommand {
    /// Engage the bolt.
    Lock,
    /// Release the bolt.
    Unlock,
}

impl Command for LockCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Lock => CMD_ON,
            Self::Unlock => CMD_OFF,
        }
    }

    fn parameter(&self) -> Option<String> {
        None
    }
}

/// Command for locks driven by the secure-command protocol.
///
/// # Examples
///
/// ```
/// use isy_devices::command::{Command, SecureLockCommand};
///
/// assert_eq!(SecureLockCommand::Lock.name(), "SECMD");
/// assert_eq!(SecureLockCommand::Lock.parameter(), Some("1".to_string()));
/// assert_eq!(SecureLockCommand::Unlock.parameter(), Some("0".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecureLockCommand {
    /// Engage the bolt.
    Lock,
    /// Release the bolt.
    Unlock,
}

impl Command for SecureLockCommand {
    fn name(&self) -> &'static str {
        CMD_SECURE_LOCK
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::Lock => Some("1".to_string()),
            Self::Unlock => Some("0".to_string()),
        }
    }
}
