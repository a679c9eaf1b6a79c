// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed set of device models, selected from the catalog.

use std::sync::Arc;

use crate::device::{
    BaseDevice, DoorWindowSensorDevice, FanDevice, HubDevice, LeakSensorDevice, LightDevice,
    LockDevice, MotionSensorDevice, OutletDevice, PendingChange, ThermostatDevice,
};
use crate::error::DeviceError;
use crate::hub::HubClient;
use crate::types::{DeviceNode, DeviceType, DeviceTypeInfo, PropertyKind};

/// Any supported device model.
///
/// Use [`AnyDevice::from_catalog`] to pick the model for a discovered node,
/// then match on the variant (or use the `as_*` accessors) for kind-specific
/// reads and commands.
#[derive(Debug)]
pub enum AnyDevice<H: HubClient> {
    /// On/off or dimmable light.
    Light(LightDevice<H>),
    /// Simple or secure lock.
    Lock(LockDevice<H>),
    /// Water leak sensor.
    LeakSensor(LeakSensorDevice<H>),
    /// Door or window contact.
    DoorWindowSensor(DoorWindowSensorDevice<H>),
    /// Motion sensor.
    MotionSensor(MotionSensorDevice<H>),
    /// Thermostat.
    Thermostat(ThermostatDevice<H>),
    /// Switched outlet.
    Outlet(OutletDevice<H>),
    /// Fan controller.
    Fan(FanDevice<H>),
}

macro_rules! dispatch {
    ($self:expr, $device:ident => $body:expr) => {
        match $self {
            AnyDevice::Light($device) => $body,
            AnyDevice::Lock($device) => $body,
            AnyDevice::LeakSensor($device) => $body,
            AnyDevice::DoorWindowSensor($device) => $body,
            AnyDevice::MotionSensor($device) => $body,
            AnyDevice::Thermostat($device) => $body,
            AnyDevice::Outlet($device) => $body,
            AnyDevice::Fan($device) => $body,
        }
    };
}

macro_rules! accessor {
    ($name:ident, $name_mut:ident, $variant:ident, $ty:ident) => {
        #[doc = concat!("Returns the model if this is a `", stringify!($variant), "`.")]
        #[must_use]
        pub fn $name(&self) -> Option<&$ty<H>> {
            match self {
                Self::$variant(device) => Some(device),
                _ => None,
            }
        }

        #[doc = concat!("Returns the model mutably if this is a `", stringify!($variant), "`.")]
        #[must_use]
        pub fn $name_mut(&mut self) -> Option<&mut $ty<H>> {
            match self {
                Self::$variant(device) => Some(device),
                _ => None,
            }
        }
    };
}

impl<H: HubClient> AnyDevice<H> {
    /// Builds the model that matches a node's catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedDeviceType`] for device-type tags
    /// no model handles.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use isy_devices::device::AnyDevice;
    /// use isy_devices::hub::ChannelHubClient;
    /// use isy_devices::types::{DeviceNode, DeviceType, DeviceTypeInfo};
    ///
    /// let (hub, _commands) = ChannelHubClient::new();
    /// let hub = Arc::new(hub);
    /// let node = DeviceNode::new("Garage", "2C 4D 1E 1", "15.2.68.0");
    ///
    /// let lock = DeviceTypeInfo::new("Deadbolt", DeviceType::SecureLock, "Z-Wave");
    /// let device = AnyDevice::from_catalog(hub.clone(), &node, &lock).unwrap();
    /// assert!(device.as_lock().is_some());
    ///
    /// let remote = DeviceTypeInfo::new("Mini Remote", DeviceType::from("Remote"), "Insteon");
    /// assert!(AnyDevice::from_catalog(hub, &node, &remote).is_err());
    /// ```
    pub fn from_catalog(
        hub: Arc<H>,
        node: &DeviceNode,
        type_info: &DeviceTypeInfo,
    ) -> Result<Self, DeviceError> {
        let device = match &type_info.device_type {
            DeviceType::Light | DeviceType::DimmableLight => {
                Self::Light(LightDevice::new(hub, node, type_info))
            }
            DeviceType::Lock | DeviceType::SecureLock => {
                Self::Lock(LockDevice::new(hub, node, type_info)?)
            }
            DeviceType::LeakSensor => Self::LeakSensor(LeakSensorDevice::new(hub, node, type_info)),
            DeviceType::DoorWindowSensor => {
                Self::DoorWindowSensor(DoorWindowSensorDevice::new(hub, node, type_info))
            }
            DeviceType::MotionSensor => {
                Self::MotionSensor(MotionSensorDevice::new(hub, node, type_info))
            }
            DeviceType::Thermostat => Self::Thermostat(ThermostatDevice::new(hub, node, type_info)),
            DeviceType::Outlet => Self::Outlet(OutletDevice::new(hub, node, type_info)),
            DeviceType::Fan => Self::Fan(FanDevice::new(hub, node, type_info)),
            DeviceType::Other(tag) => {
                tracing::debug!(
                    address = %node.address,
                    device_type = %tag,
                    "No device model for catalog entry"
                );
                return Err(DeviceError::UnsupportedDeviceType(tag.clone()));
            }
        };

        tracing::debug!(
            address = %node.address,
            name = %node.name,
            device_type = %type_info.device_type,
            "Created device model"
        );
        Ok(device)
    }

    accessor!(as_light, as_light_mut, Light, LightDevice);
    accessor!(as_lock, as_lock_mut, Lock, LockDevice);
    accessor!(as_leak_sensor, as_leak_sensor_mut, LeakSensor, LeakSensorDevice);
    accessor!(
        as_door_window_sensor,
        as_door_window_sensor_mut,
        DoorWindowSensor,
        DoorWindowSensorDevice
    );
    accessor!(as_motion_sensor, as_motion_sensor_mut, MotionSensor, MotionSensorDevice);
    accessor!(as_thermostat, as_thermostat_mut, Thermostat, ThermostatDevice);
    accessor!(as_outlet, as_outlet_mut, Outlet, OutletDevice);
    accessor!(as_fan, as_fan_mut, Fan, FanDevice);
}

impl<H: HubClient> HubDevice<H> for AnyDevice<H> {
    fn base(&self) -> &BaseDevice<H> {
        dispatch!(self, device => device.base())
    }

    fn base_mut(&mut self) -> &mut BaseDevice<H> {
        dispatch!(self, device => device.base_mut())
    }

    fn record_update(
        &mut self,
        value: i32,
        kind: &PropertyKind,
        sub_address: Option<u8>,
    ) -> Option<PendingChange> {
        dispatch!(self, device => device.record_update(value, kind, sub_address))
    }
}
