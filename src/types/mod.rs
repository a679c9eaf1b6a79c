// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by device models and commands.
//!
//! The hub speaks in raw integers (mostly 0-255). The types here give those
//! integers a meaning and own the conversions between the hub's native
//! range and the units consumers work with.
//!
//! # Types
//!
//! - [`Dimmer`] - Brightness percentage (0-100) and its native 0-255 mapping
//! - [`FanLevel`] - The four quantized fan speeds
//! - [`PropertyKind`] / [`PropertyUpdate`] - Inbound property notifications
//! - [`DeviceType`], [`DeviceNode`], [`DeviceTypeInfo`] - Catalog entries
//! - [`ThermostatActivity`] - What a thermostat is currently running

mod catalog;
mod dimmer;
mod fan;
mod property;
mod thermostat;

pub use catalog::{DeviceNode, DeviceType, DeviceTypeInfo};
pub use dimmer::Dimmer;
pub use fan::FanLevel;
pub use property::{PropertyKind, PropertyUpdate};
pub use thermostat::ThermostatActivity;

pub(crate) use property::codes;
