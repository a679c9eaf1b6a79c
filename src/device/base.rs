// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared device core: identity, raw state and change notification.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::command::Command;
use crate::device::AnyDevice;
use crate::hub::{HubClient, ResultHandler};
use crate::types::{DeviceNode, DeviceType, DeviceTypeInfo, PropertyKind};

/// Callback invoked with `(property kind, value)` after a state change.
pub type ChangeCallback = Arc<dyn Fn(&PropertyKind, i32) + Send + Sync>;

/// Identity of a device, combined from its node record and catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceInfo {
    /// User-assigned node name.
    pub name: String,
    /// Hub-assigned unique address.
    pub address: String,
    /// Product name from the catalog.
    pub product_name: String,
    /// Raw hub node type.
    pub node_type: String,
    /// Device-type tag from the catalog.
    pub device_type: DeviceType,
    /// Device family / connection type.
    pub connection_type: String,
    /// Display name; defaults to the device-type tag.
    pub friendly_name: String,
}

impl DeviceInfo {
    /// Combines a node record with its catalog entry.
    #[must_use]
    pub fn new(node: &DeviceNode, type_info: &DeviceTypeInfo) -> Self {
        Self {
            name: node.name.clone(),
            address: node.address.clone(),
            product_name: type_info.name.clone(),
            node_type: node.node_type.clone(),
            device_type: type_info.device_type.clone(),
            connection_type: type_info.connection_type.clone(),
            friendly_name: type_info.device_type.to_string(),
        }
    }

    /// Returns `true` for devices that run on batteries.
    ///
    /// Only motion sensors are known to be battery operated.
    #[must_use]
    pub fn battery_operated(&self) -> bool {
        self.device_type == DeviceType::MotionSensor
    }
}

/// Compares and assigns one tracked field. Returns `true` if it changed.
pub(crate) fn track(field: &mut i32, value: i32) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}

/// A recorded change whose callback has not run yet.
///
/// Returned by [`HubDevice::record_update`](crate::device::HubDevice::record_update).
/// Call [`notify`](Self::notify) once any lock guarding the device is
/// released, so the callback may read the device it belongs to.
#[must_use = "the change callback only runs when the change is notified"]
pub struct PendingChange {
    callback: Option<ChangeCallback>,
    kind: PropertyKind,
    value: i32,
}

impl PendingChange {
    /// Returns the property kind that changed.
    #[must_use]
    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    /// Returns the new raw value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Runs the change callback, if one was registered when the change was
    /// recorded.
    pub fn notify(self) {
        if let Some(callback) = self.callback {
            callback(&self.kind, self.value);
        }
    }
}

impl fmt::Debug for PendingChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingChange")
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// State and plumbing common to every device model.
///
/// The base only tracks the primary `ST` property. Models with more
/// properties keep their own fields, compare them with the same rules and
/// report through the same commit step, so the timestamp and the pending
/// notification are produced in one place.
pub struct BaseDevice<H: HubClient> {
    hub: Arc<H>,
    info: DeviceInfo,
    current_state: i32,
    last_changed: DateTime<Utc>,
    child_devices: HashMap<String, AnyDevice<H>>,
    change_callback: Option<ChangeCallback>,
}

impl<H: HubClient> BaseDevice<H> {
    /// Creates the core for a freshly discovered node.
    ///
    /// The raw state starts at 0 and the last-changed time at construction.
    #[must_use]
    pub fn new(hub: Arc<H>, node: &DeviceNode, type_info: &DeviceTypeInfo) -> Self {
        Self {
            hub,
            info: DeviceInfo::new(node, type_info),
            current_state: 0,
            last_changed: Utc::now(),
            child_devices: HashMap::new(),
            change_callback: None,
        }
    }

    /// Returns the device identity.
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Returns the node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Returns the hub address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.info.address
    }

    /// Returns `true` for battery-operated devices.
    #[must_use]
    pub fn battery_operated(&self) -> bool {
        self.info.battery_operated()
    }

    /// Returns the raw state last reported by the hub.
    #[must_use]
    pub fn current_state(&self) -> i32 {
        self.current_state
    }

    /// Returns when a tracked value last changed.
    #[must_use]
    pub fn last_changed(&self) -> DateTime<Utc> {
        self.last_changed
    }

    /// Returns the hub client this device sends through.
    #[must_use]
    pub fn hub(&self) -> &Arc<H> {
        &self.hub
    }

    /// Returns the child devices of a composite node, keyed by identifier.
    #[must_use]
    pub fn child_devices(&self) -> &HashMap<String, AnyDevice<H>> {
        &self.child_devices
    }

    /// Attaches a child device. Returns the previous child with that id.
    pub fn add_child_device(
        &mut self,
        id: impl Into<String>,
        device: AnyDevice<H>,
    ) -> Option<AnyDevice<H>> {
        self.child_devices.insert(id.into(), device)
    }

    /// Replaces the change callback.
    ///
    /// A device holds at most one callback. It runs synchronously inside
    /// the update handler, after the new state has been stored.
    pub fn set_change_callback<F>(&mut self, callback: F)
    where
        F: Fn(&PropertyKind, i32) + Send + Sync + 'static,
    {
        self.change_callback = Some(Arc::new(callback));
    }

    /// Removes the change callback.
    pub fn clear_change_callback(&mut self) {
        self.change_callback = None;
    }

    /// Returns `true` if a change callback is registered.
    #[must_use]
    pub fn has_change_callback(&self) -> bool {
        self.change_callback.is_some()
    }

    /// Applies a notification to the primary state and notifies on change.
    ///
    /// Only [`PropertyKind::State`] is tracked here; other kinds are ignored.
    pub fn handle_update(&mut self, value: i32, kind: &PropertyKind, sub_address: Option<u8>) -> bool {
        match self.record_update(value, kind, sub_address) {
            Some(change) => {
                change.notify();
                true
            }
            None => false,
        }
    }

    /// Applies a notification to the primary state without notifying.
    ///
    /// Returns the pending notification if the state changed.
    pub fn record_update(
        &mut self,
        value: i32,
        kind: &PropertyKind,
        _sub_address: Option<u8>,
    ) -> Option<PendingChange> {
        let changed = *kind == PropertyKind::State && track(&mut self.current_state, value);
        self.commit(changed, kind, value)
    }

    pub(crate) fn current_state_mut(&mut self) -> &mut i32 {
        &mut self.current_state
    }

    /// Finishes an update: stamps the time and hands back the notification
    /// if `changed`.
    ///
    /// The state is already stored when this runs, so the notification can
    /// be delivered after any lock around the device has been released.
    pub(crate) fn commit(
        &mut self,
        changed: bool,
        kind: &PropertyKind,
        value: i32,
    ) -> Option<PendingChange> {
        if !changed {
            tracing::trace!(
                address = %self.info.address,
                property = %kind,
                value,
                "Update left device unchanged"
            );
            return None;
        }

        self.last_changed = Utc::now();
        tracing::debug!(
            address = %self.info.address,
            property = %kind,
            value,
            "Device state changed"
        );

        Some(PendingChange {
            callback: self.change_callback.clone(),
            kind: kind.clone(),
            value,
        })
    }

    /// Hands a command for this device to the hub client.
    pub(crate) fn send(&self, command: &dyn Command, on_result: ResultHandler) {
        tracing::debug!(
            address = %self.info.address,
            command = command.name(),
            parameter = ?command.parameter(),
            "Sending command"
        );
        self.hub.send_command(&self.info.address, command, on_result);
    }
}

impl<H: HubClient> fmt::Debug for BaseDevice<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseDevice")
            .field("info", &self.info)
            .field("current_state", &self.current_state)
            .field("last_changed", &self.last_changed)
            .field("child_devices", &self.child_devices.len())
            .field("has_change_callback", &self.change_callback.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::device::test_support::{RecordingHub, hub, node, type_info};

    fn base(device_type: DeviceType) -> BaseDevice<RecordingHub> {
        BaseDevice::new(hub(), &node(), &type_info(device_type))
    }

    #[test]
    fn identity_from_catalog() {
        let device = base(DeviceType::Outlet);
        let info = device.info();
        assert_eq!(info.name, "Test Node");
        assert_eq!(info.address, "1A 2B 3C 1");
        assert_eq!(info.product_name, "Test Product");
        assert_eq!(info.node_type, "1.32.65.0");
        assert_eq!(info.connection_type, "Insteon Wired");
        assert_eq!(info.friendly_name, "Outlet");
        assert_eq!(device.current_state(), 0);
        assert!(device.child_devices().is_empty());
    }

    #[test]
    fn battery_operated_only_for_motion_sensors() {
        assert!(base(DeviceType::MotionSensor).battery_operated());
        assert!(!base(DeviceType::LeakSensor).battery_operated());
    }

    #[test]
    fn state_update_changes_and_stamps() {
        let mut device = base(DeviceType::Light);
        let before = device.last_changed();

        assert!(device.handle_update(255, &PropertyKind::State, None));
        assert_eq!(device.current_state(), 255);
        assert!(device.last_changed() >= before);
    }

    #[test]
    fn repeated_value_is_not_a_change() {
        let mut device = base(DeviceType::Light);
        assert!(device.handle_update(10, &PropertyKind::State, None));
        let stamp = device.last_changed();

        assert!(!device.handle_update(10, &PropertyKind::State, None));
        assert_eq!(device.last_changed(), stamp);
    }

    #[test]
    fn other_properties_are_ignored() {
        let mut device = base(DeviceType::Light);
        assert!(!device.handle_update(50, &PropertyKind::from("OL"), None));
        assert!(!device.handle_update(50, &PropertyKind::Humidity, None));
        assert_eq!(device.current_state(), 0);
    }

    #[test]
    fn callback_fires_once_per_change() {
        let mut device = base(DeviceType::Light);
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = calls.clone();
        device.set_change_callback(move |kind, value| {
            assert_eq!(*kind, PropertyKind::State);
            assert_eq!(value, 128);
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        device.handle_update(128, &PropertyKind::State, None);
        device.handle_update(128, &PropertyKind::State, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn recorded_change_notifies_only_when_asked() {
        let mut device = base(DeviceType::Light);
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = calls.clone();
        device.set_change_callback(move |_, _| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        let change = device.record_update(42, &PropertyKind::State, None).unwrap();
        assert_eq!(device.current_state(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(change.kind(), &PropertyKind::State);
        assert_eq!(change.value(), 42);

        change.notify();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(device.record_update(42, &PropertyKind::State, None).is_none());
    }

    #[test]
    fn cleared_callback_is_not_called() {
        let mut device = base(DeviceType::Light);
        device.set_change_callback(|_, _| panic!("should not be called"));
        device.clear_change_callback();
        assert!(!device.has_change_callback());
        assert!(device.handle_update(1, &PropertyKind::State, None));
    }

    #[test]
    fn panicking_callback_leaves_state_committed() {
        let mut device = base(DeviceType::Light);
        device.set_change_callback(|_, _| panic!("consumer bug"));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            device.handle_update(77, &PropertyKind::State, None)
        }));
        assert!(result.is_err());
        assert_eq!(device.current_state(), 77);
    }

    #[test]
    fn child_devices_are_keyed() {
        let mut parent = base(DeviceType::Thermostat);
        let child = AnyDevice::from_catalog(hub(), &node(), &type_info(DeviceType::Outlet)).unwrap();
        assert!(parent.add_child_device("1A 2B 3C 2", child).is_none());
        assert!(parent.child_devices().contains_key("1A 2B 3C 2"));
    }

    #[test]
    fn send_forwards_address() {
        let device = base(DeviceType::Outlet);
        device.send(&crate::command::OutletCommand::On, Box::new(|_| {}));
        let sent = device.hub().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].address, "1A 2B 3C 1");
        assert_eq!(sent[0].command, "DON");
    }
}
