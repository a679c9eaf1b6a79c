// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat model.
//!
//! A thermostat reports on several properties of its primary node, and
//! announces what it is running by pulsing sub-addresses 2 (heat), 3 (cool)
//! and 4 (fan) with the value 255. Temperatures and set points travel at
//! half-degree resolution.

use std::sync::Arc;

use crate::command::ThermostatCommand;
use crate::device::base::track;
use crate::device::{BaseDevice, HubDevice, PendingChange};
use crate::hub::{CommandResult, HubClient};
use crate::types::{DeviceNode, DeviceTypeInfo, PropertyKind, ThermostatActivity};

/// Pulse value that signals an activity on a sub-address.
const ACTIVITY_PULSE: i32 = 255;

/// Requested mode before the hub reports one.
const INITIAL_MODE: i32 = 3;

fn from_half_degrees(raw: i32) -> f64 {
    f64::from(raw) / 2.0
}

/// A heating/cooling thermostat.
#[derive(Debug)]
pub struct ThermostatDevice<H: HubClient> {
    base: BaseDevice<H>,
    cool_set_point: i32,
    heat_set_point: i32,
    humidity: i32,
    mode: i32,
    current_mode: i32,
    fan_state: i32,
}

impl<H: HubClient> ThermostatDevice<H> {
    /// Creates a thermostat model for a node.
    #[must_use]
    pub fn new(hub: Arc<H>, node: &DeviceNode, type_info: &DeviceTypeInfo) -> Self {
        Self {
            base: BaseDevice::new(hub, node, type_info),
            cool_set_point: 0,
            heat_set_point: 0,
            humidity: 0,
            mode: INITIAL_MODE,
            current_mode: 0,
            fan_state: 0,
        }
    }

    /// Returns the measured temperature in degrees.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        from_half_degrees(self.base.current_state())
    }

    /// Returns the cooling set point in degrees.
    #[must_use]
    pub fn cool_set_point(&self) -> f64 {
        from_half_degrees(self.cool_set_point)
    }

    /// Returns the heating set point in degrees.
    #[must_use]
    pub fn heat_set_point(&self) -> f64 {
        from_half_degrees(self.heat_set_point)
    }

    /// Returns the requested operating mode, as reported by the hub.
    #[must_use]
    pub fn heating_cooling_mode(&self) -> i32 {
        self.mode
    }

    /// Returns the raw running state.
    #[must_use]
    pub fn heating_cooling_state(&self) -> i32 {
        self.current_mode
    }

    /// Returns the running state, or `None` if the hub reported a code this
    /// crate does not know.
    #[must_use]
    pub fn activity(&self) -> Option<ThermostatActivity> {
        ThermostatActivity::from_code(self.current_mode)
    }

    /// Returns the raw fan state.
    #[must_use]
    pub fn fan_state(&self) -> i32 {
        self.fan_state
    }

    /// Returns the relative humidity in percent.
    #[must_use]
    pub fn humidity(&self) -> f64 {
        f64::from(self.humidity) / 255.0 * 100.0
    }

    /// Returns the humidity as reported (0-255).
    #[must_use]
    pub fn raw_humidity(&self) -> i32 {
        self.humidity
    }

    /// Requests a new cooling set point, in degrees.
    ///
    /// The value is rounded to the nearest half degree, the resolution the
    /// hub reports set points in.
    pub fn send_cool_set_point<F>(&self, degrees: f64, on_result: F)
    where
        F: FnOnce(CommandResult) + Send + 'static,
    {
        self.base
            .send(&ThermostatCommand::CoolSetPoint(degrees), Box::new(on_result));
    }

    /// Requests a new heating set point, in degrees, rounded to the nearest
    /// half degree.
    pub fn send_heat_set_point<F>(&self, degrees: f64, on_result: F)
    where
        F: FnOnce(CommandResult) + Send + 'static,
    {
        self.base
            .send(&ThermostatCommand::HeatSetPoint(degrees), Box::new(on_result));
    }

    /// Requests a new operating mode.
    pub fn send_heating_cooling_mode<F>(&self, mode: i32, on_result: F)
    where
        F: FnOnce(CommandResult) + Send + 'static,
    {
        self.base
            .send(&ThermostatCommand::Mode(mode), Box::new(on_result));
    }

    fn apply_activity_pulse(&mut self, activity: ThermostatActivity, value: i32) -> bool {
        value == ACTIVITY_PULSE && track(&mut self.current_mode, activity.code())
    }

    fn apply_property(&mut self, kind: &PropertyKind, value: i32) -> bool {
        let field = match kind {
            PropertyKind::State => self.base.current_state_mut(),
            PropertyKind::CoolSetPoint => &mut self.cool_set_point,
            PropertyKind::HeatSetPoint => &mut self.heat_set_point,
            PropertyKind::Mode => &mut self.mode,
            PropertyKind::Humidity => &mut self.humidity,
            PropertyKind::HeatingCoolingState => &mut self.current_mode,
            PropertyKind::FanState => &mut self.fan_state,
            PropertyKind::Other(_) => return false,
        };
        track(field, value)
    }
}

impl<H: HubClient> HubDevice<H> for ThermostatDevice<H> {
    fn base(&self) -> &BaseDevice<H> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDevice<H> {
        &mut self.base
    }

    fn record_update(
        &mut self,
        value: i32,
        kind: &PropertyKind,
        sub_address: Option<u8>,
    ) -> Option<PendingChange> {
        let changed = match sub_address.and_then(ThermostatActivity::from_sub_address) {
            Some(activity) => self.apply_activity_pulse(activity, value),
            None => self.apply_property(kind, value),
        };
        self.base.commit(changed, kind, value)
    }
}
