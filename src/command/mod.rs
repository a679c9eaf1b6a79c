// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub command definitions.
//!
//! Each device model translates user intents into one of the typed commands
//! below. A command is a hub command code plus an optional parameter; hub
//! clients decide how to put that on the wire.
//!
//! # Available Commands
//!
//! | Command Type | Devices | Codes |
//! |-------------|---------|-------|
//! | [`LightCommand`] | Lights | `DON`, `DOF`, `DON <level>` |
//! | [`OutletCommand`] | Outlets | `DON`, `DOF` |
//! | [`FanCommand`] | Fans | `DOF`, `DON <speed>` |
//! | [`LockCommand`] | Simple locks | `DON`, `DOF` |
//! | [`SecureLockCommand`] | Secure locks | `SECMD 1`, `SECMD 0` |
//! | [`ThermostatCommand`] | Thermostats | `CLISPC`, `CLISPH`, `CLIMD` |
//!
//! # Examples
//!
//! ```
//! use isy_devices::command::{Command, LightCommand};
//! use isy_devices::types::Dimmer;
//!
//! let cmd = LightCommand::Level(Dimmer::new(50).unwrap());
//! assert_eq!(cmd.name(), "DON");
//! assert_eq!(cmd.parameter(), Some("128".to_string()));
//! assert_eq!(cmd.rest_path("1A 2B 3C 1"), "/rest/nodes/1A%202B%203C%201/cmd/DON/128");
//! ```

mod lock;
mod switch;
mod thermostat;

pub use lock::{LockCommand, SecureLockCommand};
pub use switch::{FanCommand, LightCommand, OutletCommand};
pub use thermostat::{ThermostatCommand, mode_command_parameter, set_point_to_native};

/// Turns a node on, optionally at a level.
pub const CMD_ON: &str = "DON";

/// Turns a node off.
pub const CMD_OFF: &str = "DOF";

/// Secure-lock command; parameter `1` locks, `0` unlocks.
pub const CMD_SECURE_LOCK: &str = "SECMD";

/// A command that can be sent to a hub node.
pub trait Command {
    /// Returns the hub command code, e.g. `"DON"` or `"CLISPC"`.
    fn name(&self) -> &'static str;

    /// Returns the command parameter, if any.
    ///
    /// For example:
    /// - `DOF` has parameter `None`
    /// - `DON` at half brightness has parameter `Some("128")`
    fn parameter(&self) -> Option<String>;

    /// Returns the REST path that issues this command to `address`.
    ///
    /// Format: `/rest/nodes/<address>/cmd/<name>[/<parameter>]`, with the
    /// address and parameter percent-encoded.
    fn rest_path(&self, address: &str) -> String {
        let address = urlencoding::encode(address);
        match self.parameter() {
            Some(parameter) => format!(
                "/rest/nodes/{address}/cmd/{}/{}",
                self.name(),
                urlencoding::encode(&parameter)
            ),
            None => format!("/rest/nodes/{address}/cmd/{}", self.name()),
        }
    }
}
