// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan controller model.

use std::sync::Arc;

use crate::command::FanCommand;
use crate::device::{BaseDevice, HubDevice};
use crate::error::DeviceError;
use crate::hub::{CommandResult, HubClient};
use crate::types::{DeviceNode, DeviceTypeInfo, FanLevel};

/// A fan controller with four quantized speeds.
#[derive(Debug)]
pub struct FanDevice<H: HubClient> {
    base: BaseDevice<H>,
}

impl<H: HubClient> FanDevice<H> {
    /// Creates a fan model for a node.
    #[must_use]
    pub fn new(hub: Arc<H>, node: &DeviceNode, type_info: &DeviceTypeInfo) -> Self {
        Self {
            base: BaseDevice::new(hub, node, type_info),
        }
    }

    /// Returns the current speed.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnexpectedFanState`] if the hub reported a raw
    /// value that is not one of the four levels.
    pub fn fan_level(&self) -> Result<FanLevel, DeviceError> {
        FanLevel::from_native(self.base.current_state())
    }

    /// Sets the speed. `Off` sends a plain off command.
    pub fn send_fan_level<F>(&self, level: FanLevel, on_result: F)
    where
        F: FnOnce(CommandResult) + Send + 'static,
    {
        self.base.send(&FanCommand(level), Box::new(on_result));
    }
}

impl<H: HubClient> HubDevice<H> for FanDevice<H> {
    fn base(&self) -> &BaseDevice<H> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDevice<H> {
        &mut self.base
    }
}
