// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device catalog entries supplied by the hub client at discovery time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Device-type tag from the hub's device catalog.
///
/// The tag decides which device model a node becomes and, for locks, which
/// command protocol it speaks. Tags this library does not model are kept
/// verbatim in [`DeviceType::Other`].
///
/// # Examples
///
/// ```
/// use isy_devices::types::DeviceType;
///
/// assert_eq!(DeviceType::from("SecureLock"), DeviceType::SecureLock);
/// assert_eq!(DeviceType::MotionSensor.as_str(), "MotionSensor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceType {
    /// On/off light.
    Light,
    /// Light with brightness control.
    DimmableLight,
    /// Lock driven by plain on/off commands.
    Lock,
    /// Lock driven by the secure-command protocol.
    SecureLock,
    /// Multi-speed fan controller.
    Fan,
    /// Switched outlet.
    Outlet,
    /// Door or window contact.
    DoorWindowSensor,
    /// Battery-powered motion sensor.
    MotionSensor,
    /// Water leak sensor.
    LeakSensor,
    /// Heating/cooling thermostat.
    Thermostat,
    /// Any other catalog tag (remotes, scenes, unknown hardware).
    Other(String),
}

impl DeviceType {
    /// Returns the catalog tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Light => "Light",
            Self::DimmableLight => "DimmableLight",
            Self::Lock => "Lock",
            Self::SecureLock => "SecureLock",
            Self::Fan => "Fan",
            Self::Outlet => "Outlet",
            Self::DoorWindowSensor => "DoorWindowSensor",
            Self::MotionSensor => "MotionSensor",
            Self::LeakSensor => "LeakSensor",
            Self::Thermostat => "Thermostat",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for DeviceType {
    fn from(tag: &str) -> Self {
        match tag {
            "Light" => Self::Light,
            "DimmableLight" => Self::DimmableLight,
            "Lock" => Self::Lock,
            "SecureLock" => Self::SecureLock,
            "Fan" => Self::Fan,
            "Outlet" => Self::Outlet,
            "DoorWindowSensor" => Self::DoorWindowSensor,
            "MotionSensor" => Self::MotionSensor,
            "LeakSensor" => Self::LeakSensor,
            "Thermostat" => Self::Thermostat,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for DeviceType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<DeviceType> for String {
    fn from(device_type: DeviceType) -> Self {
        match device_type {
            DeviceType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity record of a node as reported by the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceNode {
    /// User-assigned node name.
    pub name: String,
    /// Hub-assigned unique address (e.g. `"1A 2B 3C 1"`).
    pub address: String,
    /// Raw hub node type (e.g. `"1.32.65.0"`).
    #[serde(rename = "type")]
    pub node_type: String,
}

impl DeviceNode {
    /// Creates a node record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        node_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            node_type: node_type.into(),
        }
    }
}

/// Catalog classification of a node.
///
/// # Examples
///
/// ```
/// use isy_devices::types::{DeviceType, DeviceTypeInfo};
///
/// let info: DeviceTypeInfo = serde_json::from_str(
///     r#"{"name":"SwitchLinc Dimmer","deviceType":"DimmableLight","connectionType":"Insteon Wired"}"#,
/// )
/// .unwrap();
/// assert_eq!(info.device_type, DeviceType::DimmableLight);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTypeInfo {
    /// Product name.
    pub name: String,
    /// Device-type tag.
    pub device_type: DeviceType,
    /// Device family / connection type (e.g. `"Insteon Wired"`).
    pub connection_type: String,
}

impl DeviceTypeInfo {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        device_type: DeviceType,
        connection_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            device_type,
            connection_type: connection_type.into(),
        }
    }
}
