// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Address-based routing of hub notifications to device models.
//!
//! # Architecture
//!
//! ```text
//! Hub event: node "1A 2B 3C 1", control ST, action 255
//!                     ↓
//!          PropertyUpdate::parse()
//!                     ↓
//!          DeviceRegistry.dispatch()
//!                     ↓
//!      Lookup "1A 2B 3C 1" in devices
//!                     ↓
//!    device.write().record_update(255, ST, None)
//!                     ↓
//!        device lock released
//!                     ↓
//!     PendingChange::notify() → callback
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::device::{AnyDevice, HubDevice};
use crate::error::ParseError;
use crate::hub::HubClient;
use crate::types::PropertyUpdate;

/// A device model shared between the registry and its consumers.
pub type SharedDevice<H> = Arc<RwLock<AnyDevice<H>>>;

/// Routes property updates to device models by hub address.
///
/// The registry owns its devices. Consumers keep the [`SharedDevice`]
/// returned by [`register`](Self::register) to read state or send commands.
pub struct DeviceRegistry<H: HubClient> {
    devices: RwLock<HashMap<String, SharedDevice<H>>>,
}

impl<H: HubClient> DeviceRegistry<H> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a device under its own address.
    ///
    /// A previous registration for the same address is replaced.
    pub fn register(&self, device: AnyDevice<H>) -> SharedDevice<H> {
        let address = device.info().address.clone();
        tracing::debug!(
            address = %address,
            device_type = %device.info().device_type,
            "Registering device for routing"
        );
        let shared = Arc::new(RwLock::new(device));
        self.devices.write().insert(address, Arc::clone(&shared));
        shared
    }

    /// Removes a device. Returns it if it was registered.
    pub fn unregister(&self, address: &str) -> Option<SharedDevice<H>> {
        tracing::debug!(address = %address, "Unregistering device from routing");
        self.devices.write().remove(address)
    }

    /// Returns the device registered at `address`.
    #[must_use]
    pub fn get(&self, address: &str) -> Option<SharedDevice<H>> {
        self.devices.read().get(address).cloned()
    }

    /// Applies an update to the device at its address.
    ///
    /// Returns `None` if no device is registered there, otherwise whether
    /// the device changed. The change callback runs after both the map lock
    /// and the device lock are released, so it may read or lock the device.
    pub fn dispatch(&self, update: &PropertyUpdate) -> Option<bool> {
        let Some(device) = self.get(&update.address) else {
            tracing::trace!(
                address = %update.address,
                property = %update.kind,
                "No registered device for update"
            );
            return None;
        };

        let pending = device
            .write()
            .record_update(update.value, &update.kind, update.sub_address);

        match pending {
            Some(change) => {
                change.notify();
                Some(true)
            }
            None => Some(false),
        }
    }

    /// Parses a raw hub event and dispatches it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the action value or sub-address is not
    /// numeric. Nothing is dispatched in that case.
    pub fn route(
        &self,
        address: &str,
        control: &str,
        action: &str,
        sub_address: Option<&str>,
    ) -> Result<Option<bool>, ParseError> {
        let update = PropertyUpdate::parse(address, control, action, sub_address)?;
        Ok(self.dispatch(&update))
    }

    /// Returns the addresses of all registered devices.
    #[must_use]
    pub fn addresses(&self) -> Vec<String> {
        self.devices.read().keys().cloned().collect()
    }

    /// Returns the number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Returns `true` if no devices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }
}

impl<H: HubClient> Default for DeviceRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HubClient> std::fmt::Debug for DeviceRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceRegistry")
            .field("devices", &self.len())
            .finish()
    }
}
