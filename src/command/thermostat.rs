// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat commands.
//!
//! Thermostat commands reuse the property codes as command codes. Set
//! points travel at double resolution (half degrees); the requested mode is
//! doubled as well, see [`mode_command_parameter`].

use crate::command::Command;
use crate::types::codes;

/// Converts a set point in degrees to the hub's half-degree units.
///
/// Set points are reported back as whole half-degrees, so the value is
/// rounded to the nearest half degree (halves away from zero) before it is
/// sent. Out-of-range and NaN inputs saturate to the `i32` bounds and 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn set_point_to_native(degrees: f64) -> i32 {
    (degrees * 2.0).round() as i32
}

/// Converts a requested mode to the parameter the hub expects for `CLIMD`.
///
/// The hub has been observed to take the mode doubled, like a set point,
/// even though the mode is a small enumerated value. This is kept as the
/// single place to change if hub documentation shows otherwise. No range
/// check is done; out-of-range modes saturate.
#[must_use]
pub const fn mode_command_parameter(mode: i32) -> i32 {
    mode.saturating_mul(2)
}

/// Command to change a thermostat setting.
///
/// # Examples
///
/// ```
/// use isy_devices::command::{Command, ThermostatCommand};
///
/// let cmd = ThermostatCommand::CoolSetPoint(72.0);
/// assert_eq!(cmd.name(), "CLISPC");
/// assert_eq!(cmd.parameter(), Some("144".to_string()));
///
/// let half = ThermostatCommand::HeatSetPoint(68.5);
/// assert_eq!(half.parameter(), Some("137".to_string()));
///
/// let mode = ThermostatCommand::Mode(3);
/// assert_eq!(mode.name(), "CLIMD");
/// assert_eq!(mode.parameter(), Some("6".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThermostatCommand {
    /// Set the cooling set point, in degrees.
    CoolSetPoint(f64),
    /// Set the heating set point, in degrees.
    HeatSetPoint(f64),
    /// Set the requested operating mode.
    Mode(i32),
}

impl Command for ThermostatCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::CoolSetPoint(_) => codes::COOL_SETPOINT,
            Self::HeatSetPoint(_) => codes::HEAT_SETPOINT,
            Self::Mode(_) => codes::MODE,
        }
    }

    fn parameter(&self) -> Option<String> {
        let parameter = match *self {
            Self::CoolSetPoint(degrees) | Self::HeatSetPoint(degrees) => {
                set_point_to_native(degrees).to_string()
            }
            Self::Mode(mode) => mode_command_parameter(mode).to_string(),
        };
        Some(parameter)
    }
}
