// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `isy_devices` - typed device models for ISY home-automation hubs.
//!
//! The hub reports property changes for its nodes and accepts short
//! textual commands. This crate turns each node into a typed model that
//! keeps the last reported state, exposes it in domain terms and sends
//! commands through a pluggable [`HubClient`].
//!
//! # Supported Devices
//!
//! - **Lights**: on/off and dimmable, level in percent
//! - **Locks**: plain `DON`/`DOF` locks and `SECMD` secure locks
//! - **Sensors**: leak, door/window and motion
//! - **Thermostats**: temperature, set points, mode, humidity, activity
//! - **Outlets** and **fans** with four quantized speeds
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use isy_devices::{AnyDevice, ChannelHubClient, DeviceRegistry, HubDevice};
//! use isy_devices::types::{DeviceNode, DeviceType, DeviceTypeInfo};
//!
//! # fn main() -> isy_devices::Result<()> {
//! // Commands are queued on a channel for the transport task to drain.
//! let (hub, mut outbound) = ChannelHubClient::new();
//! let hub = Arc::new(hub);
//!
//! let node = DeviceNode::new("Hallway Fan", "3B 1C 9A 1", "1.46.68.0");
//! let info = DeviceTypeInfo::new("FanLinc", DeviceType::Fan, "Insteon Wired");
//!
//! let registry = DeviceRegistry::new();
//! let fan = registry.register(AnyDevice::from_catalog(hub, &node, &info)?);
//!
//! // An event from the hub's subscription stream.
//! registry.route("3B 1C 9A 1", "ST", "191", None)?;
//!
//! let level = fan.read().as_fan().map(|fan| fan.fan_level()).transpose()?;
//! assert_eq!(level.map(|level| level.to_string()), Some("Medium".to_string()));
//!
//! if let Some(fan) = fan.read().as_fan() {
//!     fan.send_fan_level(isy_devices::FanLevel::High, |_result| {});
//! }
//! let command = outbound.try_recv().expect("queued");
//! assert_eq!(command.rest_path(), "/rest/nodes/3B%201C%209A%201/cmd/DON/255");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior
//!
//! Local state changes only when the hub reports it. Sending a command never
//! updates a model; the hub echoes the new value back as a property update.
//! Every update that changes a tracked value returns `true`, refreshes the
//! device's last-changed time and invokes its change callback once.

pub mod command;
pub mod device;
pub mod error;
pub mod hub;
pub mod registry;
pub mod types;

pub use command::Command;
pub use device::{
    AnyDevice, BaseDevice, DeviceInfo, DoorWindowSensorDevice, FanDevice, HubDevice,
    LeakSensorDevice, LightDevice, LockDevice, LockProtocol, MotionSensorDevice, OutletDevice,
    ThermostatDevice,
};
pub use error::{DeviceError, Error, HubError, ParseError, Result, ValueError};
pub use hub::{ChannelHubClient, CommandResponse, CommandResult, HubClient, OutboundCommand};
pub use registry::{DeviceRegistry, SharedDevice};
pub use types::{Dimmer, FanLevel, PropertyKind, PropertyUpdate, ThermostatActivity};
