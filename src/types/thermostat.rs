// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat running state.

use std::fmt;

/// What a thermostat is actively doing.
///
/// The hub encodes this as a small integer, either in a `CLIHCS` property
/// or implied by an activity pulse on sub-addresses 2 (heat), 3 (cool) and
/// 4 (fan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ThermostatActivity {
    /// Nothing running.
    Idle,
    /// Only the fan is running.
    FanOnly,
    /// Cooling.
    Cooling,
    /// Heating.
    Heating,
}

impl ThermostatActivity {
    /// Returns the hub encoding.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Idle => 0,
            Self::FanOnly => 1,
            Self::Cooling => 2,
            Self::Heating => 3,
        }
    }

    /// Decodes a hub value; `None` for codes outside 0-3.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Idle),
            1 => Some(Self::FanOnly),
            2 => Some(Self::Cooling),
            3 => Some(Self::Heating),
            _ => None,
        }
    }

    /// Activity announced by a pulse on a thermostat sub-address.
    #[must_use]
    pub const fn from_sub_address(sub_address: u8) -> Option<Self> {
        match sub_address {
            2 => Some(Self::Heating),
            3 => Some(Self::Cooling),
            4 => Some(Self::FanOnly),
            _ => None,
        }
    }
}

impl fmt::Display for ThermostatActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::FanOnly => "fan only",
            Self::Cooling => "cooling",
            Self::Heating => "heating",
        };
        f.write_str(name)
    }
}
