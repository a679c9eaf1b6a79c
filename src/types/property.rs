// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property notifications reported by the hub.
//!
//! Every inbound notification names the node it belongs to, the property it
//! describes (a short hub code such as `ST` or `CLISPC`), the new value and,
//! for composite nodes, a sub-address identifying an internal channel.

use std::fmt;

use crate::error::ParseError;

/// Hub property codes.
pub(crate) mod codes {
    pub const STATE: &str = "ST";
    pub const COOL_SETPOINT: &str = "CLISPC";
    pub const HEAT_SETPOINT: &str = "CLISPH";
    pub const MODE: &str = "CLIMD";
    pub const HUMIDITY: &str = "CLIHUM";
    pub const HEATING_COOLING_STATE: &str = "CLIHCS";
    pub const FAN_STATE: &str = "CLIFS";
}

/// The device attribute a notification describes.
///
/// # Examples
///
/// ```
/// use isy_devices::types::PropertyKind;
///
/// assert_eq!(PropertyKind::from("ST"), PropertyKind::State);
/// assert_eq!(PropertyKind::CoolSetPoint.code(), "CLISPC");
/// assert_eq!(PropertyKind::from("ERR"), PropertyKind::Other("ERR".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyKind {
    /// Primary state of the node (`ST`).
    State,
    /// Thermostat cool set point (`CLISPC`).
    CoolSetPoint,
    /// Thermostat heat set point (`CLISPH`).
    HeatSetPoint,
    /// Thermostat requested mode (`CLIMD`).
    Mode,
    /// Thermostat relative humidity (`CLIHUM`).
    Humidity,
    /// Thermostat running state (`CLIHCS`).
    HeatingCoolingState,
    /// Thermostat fan state (`CLIFS`).
    FanState,
    /// Any property code no device model tracks.
    Other(String),
}

impl PropertyKind {
    /// Returns the hub code for this property.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::State => codes::STATE,
            Self::CoolSetPoint => codes::COOL_SETPOINT,
            Self::HeatSetPoint => codes::HEAT_SETPOINT,
            Self::Mode => codes::MODE,
            Self::Humidity => codes::HUMIDITY,
            Self::HeatingCoolingState => codes::HEATING_COOLING_STATE,
            Self::FanState => codes::FAN_STATE,
            Self::Other(code) => code,
        }
    }
}

impl From<&str> for PropertyKind {
    fn from(code: &str) -> Self {
        match code {
            codes::STATE => Self::State,
            codes::COOL_SETPOINT => Self::CoolSetPoint,
            codes::HEAT_SETPOINT => Self::HeatSetPoint,
            codes::MODE => Self::Mode,
            codes::HUMIDITY => Self::Humidity,
            codes::HEATING_COOLING_STATE => Self::HeatingCoolingState,
            codes::FAN_STATE => Self::FanState,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PropertyKind {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<PropertyKind> for String {
    fn from(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single property notification addressed to one node.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PropertyUpdate {
    /// Address of the node the notification is for.
    pub address: String,
    /// Which property changed.
    pub kind: PropertyKind,
    /// The new raw value.
    pub value: i32,
    /// Internal channel of a composite node, if any.
    pub sub_address: Option<u8>,
}

impl PropertyUpdate {
    /// Creates an update from already-typed parts.
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        kind: PropertyKind,
        value: i32,
        sub_address: Option<u8>,
    ) -> Self {
        Self {
            address: address.into(),
            kind,
            value,
            sub_address,
        }
    }

    /// Builds an update from the textual fields of a hub event.
    ///
    /// The action value is coerced to a number; surrounding whitespace is
    /// ignored. An empty sub-address is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NonNumericValue`] if `action` is not an integer,
    /// or [`ParseError::InvalidSubAddress`] if `sub_address` is not a small
    /// non-negative integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use isy_devices::types::{PropertyKind, PropertyUpdate};
    ///
    /// let update = PropertyUpdate::parse("14 A4 F 1", "CLISPC", "156", Some("")).unwrap();
    /// assert_eq!(update.kind, PropertyKind::CoolSetPoint);
    /// assert_eq!(update.value, 156);
    /// assert_eq!(update.sub_address, None);
    /// ```
    pub fn parse(
        address: &str,
        control: &str,
        action: &str,
        sub_address: Option<&str>,
    ) -> Result<Self, ParseError> {
        let value = action
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseError::NonNumericValue {
                property: control.to_string(),
                value: action.to_string(),
            })?;

        let sub_address = match sub_address.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<u8>()
                    .map_err(|_| ParseError::InvalidSubAddress(raw.to_string()))?,
            ),
        };

        Ok(Self::new(address, PropertyKind::from(control), value, sub_address))
    }
}
