// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On/off style commands for lights, outlets and fans.
//!
//! All three share the hub's `DON`/`DOF` vocabulary. A level is expressed
//! as a `DON` carrying a native parameter; there is no separate dim command.

use crate::command::{CMD_OFF, CMD_ON, Command};
use crate::types::{Dimmer, FanLevel};

/// Command to control a light.
///
/// # Examples
///
/// ```
/// use isy_devices::command::{Command, LightCommand};
///
/// assert_eq!(LightCommand::On.name(), "DON");
/// assert_eq!(LightCommand::On.parameter(), None);
/// assert_eq!(LightCommand::Off.name(), "DOF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// Turn on at the node's configured on-level.
    On,
    /// Turn off.
    Off,
    /// Turn on at a brightness level.
    Level(Dimmer),
}

impl LightCommand {
    /// Creates an on or off command.
    #[must_use]
    pub const fn from_on_off(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl Command for LightCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::On | Self::Level(_) => CMD_ON,
            Self::Off => CMD_OFF,
        }
    }

    fn parameter(&self) -> Option<String> {
        match self {
            Self::On | Self::Off => None,
            Self::Level(level) => Some(level.to_native().to_string()),
        }
    }
}

/// Command to switch an outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutletCommand {
    /// Switch on.
    On,
    /// Switch off.
    Off,
}

impl OutletCommand {
    /// Creates an on or off command.
    #[must_use]
    pub const fn from_on_off(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl Command for OutletCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::On => CMD_ON,
            Self::Off => CMD_OFF,
        }
    }

    fn parameter(&self) -> Option<String> {
        None
    }
}

/// Command to set a fan speed.
///
/// `Off` maps to a plain `DOF`; every other level is a `DON` carrying the
/// level's native value.
///
/// # Examples
///
/// ```
/// use isy_devices::command::{Command, FanCommand};
/// use isy_devices::types::FanLevel;
///
/// let cmd = FanCommand(FanLevel::Medium);
/// assert_eq!(cmd.name(), "DON");
/// assert_eq!(cmd.parameter(), Some("191".to_string()));
///
/// let off = FanCommand(FanLevel::Off);
/// assert_eq!(off.name(), "DOF");
/// assert_eq!(off.parameter(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanCommand(pub FanLevel);

impl Command for FanCommand {
    fn name(&self) -> &'static str {
        match self.0 {
            FanLevel::Off => CMD_OFF,
            FanLevel::Low | FanLevel::Medium | FanLevel::High => CMD_ON,
        }
    }

    fn parameter(&self) -> Option<String> {
        match self.0 {
            FanLevel::Off => None,
            level => Some(level.native().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_level_uses_on_code() {
        let cmd = LightCommand::Level(Dimmer::MAX);
        assert_eq!(cmd.name(), "DON");
        assert_eq!(cmd.parameter(), Some("255".to_string()));
    }

    #[test]
    fn light_from_on_off() {
        assert_eq!(LightCommand::from_on_off(true), LightCommand::On);
        assert_eq!(LightCommand::from_on_off(false), LightCommand::Off);
    }

    #[test]
    fn outlet_commands() {
        assert_eq!(OutletCommand::from_on_off(true).name(), "DON");
        assert_eq!(OutletCommand::from_on_off(false).name(), "DOF");
        assert_eq!(OutletCommand::On.parameter(), None);
    }

    #[test]
    fn fan_levels() {
        assert_eq!(
            FanCommand(FanLevel::Low).parameter(),
            Some("63".to_string())
        );
        assert_eq!(
            FanCommand(FanLevel::High).parameter(),
            Some("255".to_string())
        );
    }
}
