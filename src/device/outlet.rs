// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outlet model.

use std::sync::Arc;

use crate::command::OutletCommand;
use crate::device::{BaseDevice, HubDevice};
use crate::hub::{CommandResult, HubClient};
use crate::types::{DeviceNode, DeviceTypeInfo};

/// A switched outlet.
#[derive(Debug)]
pub struct OutletDevice<H: HubClient> {
    base: BaseDevice<H>,
}

impl<H: HubClient> OutletDevice<H> {
    /// Creates an outlet model for a node.
    #[must_use]
    pub fn new(hub: Arc<H>, node: &DeviceNode, type_info: &DeviceTypeInfo) -> Self {
        Self {
            base: BaseDevice::new(hub, node, type_info),
        }
    }

    /// Returns `true` if the outlet is switched on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.base.current_state() > 0
    }

    /// Switches the outlet on or off.
    pub fn send_on_off<F>(&self, on: bool, on_result: F)
    where
        F: FnOnce(CommandResult) + Send + 'static,
    {
        self.base
            .send(&OutletCommand::from_on_off(on), Box::new(on_result));
    }
}

impl<H: HubClient> HubDevice<H> for OutletDevice<H> {
    fn base(&self) -> &BaseDevice<H> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDevice<H> {
        &mut self.base
    }
}
