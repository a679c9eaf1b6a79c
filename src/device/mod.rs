// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device models for hub nodes.
//!
//! Every node the hub reports becomes one device model, chosen from its
//! catalog entry. All models share a [`BaseDevice`] (identity, raw state,
//! last-changed timestamp, change callback) and the [`HubDevice`] update
//! contract; each kind adds its own reads and command senders.
//!
//! | Model | Catalog tags | Reads | Commands |
//! |-------|--------------|-------|----------|
//! | [`LightDevice`] | `Light`, `DimmableLight` | on/off, dim level | on/off, dim level |
//! | [`LockDevice`] | `Lock`, `SecureLock` | locked | lock/unlock |
//! | [`LeakSensorDevice`] | `LeakSensor` | wet | - |
//! | [`DoorWindowSensorDevice`] | `DoorWindowSensor` | open | - |
//! | [`MotionSensorDevice`] | `MotionSensor` | motion | - |
//! | [`ThermostatDevice`] | `Thermostat` | temperature, set points, mode, humidity | set points, mode |
//! | [`OutletDevice`] | `Outlet` | on/off | on/off |
//! | [`FanDevice`] | `Fan` | level | level |
//!
//! Local state only ever reflects what the hub reported. Sending a command
//! does not touch it; the model changes when the hub echoes the new value
//! back through [`HubDevice::handle_update`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use isy_devices::device::{HubDevice, LightDevice};
//! use isy_devices::hub::ChannelHubClient;
//! use isy_devices::types::{DeviceNode, DeviceType, DeviceTypeInfo, PropertyKind};
//!
//! let (hub, mut commands) = ChannelHubClient::new();
//! let node = DeviceNode::new("Kitchen", "1A 2B 3C 1", "1.32.65.0");
//! let info = DeviceTypeInfo::new("SwitchLinc Dimmer", DeviceType::DimmableLight, "Insteon Wired");
//!
//! let mut light = LightDevice::new(Arc::new(hub), &node, &info)
//!     .with_change_callback(|kind, value| println!("{kind} -> {value}"));
//!
//! light.send_on_off(true, |_| {});
//! assert_eq!(commands.try_recv().unwrap().command(), "DON");
//! assert!(!light.is_on());
//!
//! assert!(light.handle_update(255, &PropertyKind::State, None));
//! assert!(light.is_on());
//! ```

mod any;
mod base;
mod fan;
mod light;
mod lock;
mod outlet;
mod sensor;
mod thermostat;

pub use any::AnyDevice;
pub use base::{BaseDevice, ChangeCallback, DeviceInfo, PendingChange};
pub use fan::FanDevice;
pub use light::LightDevice;
pub use lock::{LockDevice, LockProtocol};
pub use outlet::OutletDevice;
pub use sensor::{DoorWindowSensorDevice, LeakSensorDevice, MotionSensorDevice};
pub use thermostat::ThermostatDevice;

use chrono::{DateTime, Utc};

use crate::hub::HubClient;
use crate::types::{PropertyKind, PropertyUpdate};

/// The update contract shared by every device model.
///
/// Models only need to expose their [`BaseDevice`]. Models that track more
/// than the primary state override [`record_update`](Self::record_update).
pub trait HubDevice<H: HubClient> {
    /// Returns the shared device core.
    fn base(&self) -> &BaseDevice<H>;

    /// Returns the shared device core mutably.
    fn base_mut(&mut self) -> &mut BaseDevice<H>;

    /// Stores a property notification from the hub without running the
    /// change callback.
    ///
    /// Returns the pending notification if any tracked value changed; the
    /// last-changed timestamp is already refreshed at that point. Callers
    /// that hold a lock around the device should release it before calling
    /// [`PendingChange::notify`].
    fn record_update(
        &mut self,
        value: i32,
        kind: &PropertyKind,
        sub_address: Option<u8>,
    ) -> Option<PendingChange> {
        self.base_mut().record_update(value, kind, sub_address)
    }

    /// Applies a property notification from the hub.
    ///
    /// Returns `true` if any tracked value changed. In that case the
    /// last-changed timestamp is refreshed and the change callback, if any,
    /// is invoked exactly once with `(kind, value)`. Repeating a value that
    /// is already stored returns `false` and notifies nobody.
    fn handle_update(&mut self, value: i32, kind: &PropertyKind, sub_address: Option<u8>) -> bool {
        match self.record_update(value, kind, sub_address) {
            Some(change) => {
                change.notify();
                true
            }
            None => false,
        }
    }

    /// Applies a parsed [`PropertyUpdate`].
    fn apply(&mut self, update: &PropertyUpdate) -> bool {
        self.handle_update(update.value, &update.kind, update.sub_address)
    }

    /// Returns the device identity.
    fn info(&self) -> &DeviceInfo {
        self.base().info()
    }

    /// Returns the raw state last reported by the hub.
    fn current_state(&self) -> i32 {
        self.base().current_state()
    }

    /// Returns when a tracked value last changed.
    fn last_changed(&self) -> DateTime<Utc> {
        self.base().last_changed()
    }

    /// Replaces the change callback.
    fn set_change_callback<F>(&mut self, callback: F)
    where
        Self: Sized,
        F: Fn(&PropertyKind, i32) + Send + Sync + 'static,
    {
        self.base_mut().set_change_callback(callback);
    }

    /// Builder-style variant of [`set_change_callback`](Self::set_change_callback).
    #[must_use]
    fn with_change_callback<F>(mut self, callback: F) -> Self
    where
        Self: Sized,
        F: Fn(&PropertyKind, i32) + Send + Sync + 'static,
    {
        self.set_change_callback(callback);
        self
    }
}
