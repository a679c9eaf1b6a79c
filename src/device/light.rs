// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light model.

use std::sync::Arc;

use crate::command::LightCommand;
use crate::device::{BaseDevice, HubDevice};
use crate::hub::{CommandResult, HubClient};
use crate::types::{DeviceNode, DeviceType, DeviceTypeInfo, Dimmer};

/// An on/off or dimmable light.
///
/// The raw state is the native brightness (0-255); any non-zero value means
/// the light is on.
#[derive(Debug)]
pub struct LightDevice<H: HubClient> {
    base: BaseDevice<H>,
    dimmable: bool,
}

impl<H: HubClient> LightDevice<H> {
    /// Creates a light model for a node.
    #[must_use]
    pub fn new(hub: Arc<H>, node: &DeviceNode, type_info: &DeviceTypeInfo) -> Self {
        Self {
            base: BaseDevice::new(hub, node, type_info),
            dimmable: type_info.device_type == DeviceType::DimmableLight,
        }
    }

    /// Returns `true` if the catalog lists this light as dimmable.
    #[must_use]
    pub fn is_dimmable(&self) -> bool {
        self.dimmable
    }

    /// Returns `true` if the light is on at any level.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.base.current_state() > 0
    }

    /// Returns the brightness as a percentage, rounded down.
    #[must_use]
    pub fn dim_level(&self) -> Dimmer {
        Dimmer::from_native(self.base.current_state())
    }

    /// Turns the light on or off.
    pub fn send_on_off<F>(&self, on: bool, on_result: F)
    where
        F: FnOnce(CommandResult) + Send + 'static,
    {
        self.base
            .send(&LightCommand::from_on_off(on), Box::new(on_result));
    }

    /// Turns the light on at `level`.
    ///
    /// The percentage is converted to the native range rounding up, so 50%
    /// is sent as 128.
    pub fn send_dim_level<F>(&self, level: Dimmer, on_result: F)
    where
        F: FnOnce(CommandResult) + Send + 'static,
    {
        self.base.send(&LightCommand::Level(level), Box::new(on_result));
    }
}

impl<H: HubClient> HubDevice<H> for LightDevice<H> {
    fn base(&self) -> &BaseDevice<H> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDevice<H> {
        &mut self.base
    }
}
