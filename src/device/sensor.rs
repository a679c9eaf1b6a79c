// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only boolean sensors.

use std::sync::Arc;

use crate::device::{BaseDevice, HubDevice};
use crate::hub::HubClient;
use crate::types::{DeviceNode, DeviceTypeInfo};

/// Raw state of a motion sensor that is reporting motion.
const MOTION_DETECTED: i32 = 255;

/// Water leak sensor. Raw state 0 is dry.
#[derive(Debug)]
pub struct LeakSensorDevice<H: HubClient> {
    base: BaseDevice<H>,
}

impl<H: HubClient> LeakSensorDevice<H> {
    /// Creates a leak sensor model for a node.
    #[must_use]
    pub fn new(hub: Arc<H>, node: &DeviceNode, type_info: &DeviceTypeInfo) -> Self {
        Self {
            base: BaseDevice::new(hub, node, type_info),
        }
    }

    /// Returns `true` if the sensor reports water.
    #[must_use]
    pub fn is_wet(&self) -> bool {
        self.base.current_state() != 0
    }
}

impl<H: HubClient> HubDevice<H> for LeakSensorDevice<H> {
    fn base(&self) -> &BaseDevice<H> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDevice<H> {
        &mut self.base
    }
}

/// Door or window contact. Raw state 0 is closed.
#[derive(Debug)]
pub struct DoorWindowSensorDevice<H: HubClient> {
    base: BaseDevice<H>,
}

impl<H: HubClient> DoorWindowSensorDevice<H> {
    /// Creates a door/window sensor model for a node.
    #[must_use]
    pub fn new(hub: Arc<H>, node: &DeviceNode, type_info: &DeviceTypeInfo) -> Self {
        Self {
            base: BaseDevice::new(hub, node, type_info),
        }
    }

    /// Returns `true` if the contact reports open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.base.current_state() != 0
    }
}

impl<H: HubClient> HubDevice<H> for DoorWindowSensorDevice<H> {
    fn base(&self) -> &BaseDevice<H> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDevice<H> {
        &mut self.base
    }
}

/// Motion sensor.
///
/// Only the full-scale value 255 means motion; intermediate values are
/// sensor noise and read as no motion.
#[derive(Debug)]
pub struct MotionSensorDevice<H: HubClient> {
    base: BaseDevice<H>,
}

impl<H: HubClient> MotionSensorDevice<H> {
    /// Creates a motion sensor model for a node.
    #[must_use]
    pub fn new(hub: Arc<H>, node: &DeviceNode, type_info: &DeviceTypeInfo) -> Self {
        Self {
            base: BaseDevice::new(hub, node, type_info),
        }
    }

    /// Returns `true` if the sensor reports motion.
    #[must_use]
    pub fn motion_detected(&self) -> bool {
        self.base.current_state() == MOTION_DETECTED
    }
}

impl<H: HubClient> HubDevice<H> for MotionSensorDevice<H> {
    fn base(&self) -> &BaseDevice<H> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDevice<H> {
        &mut self.base
    }
}
