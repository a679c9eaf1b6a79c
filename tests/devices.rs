// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests driving device models through a channel-backed hub.
//!
//! A spawned task stands in for the hub: it drains outbound commands,
//! echoes the resulting property value back through the registry, then
//! completes the command.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use isy_devices::types::{DeviceNode, DeviceTypeInfo};
use isy_devices::{
    AnyDevice, ChannelHubClient, CommandResponse, CommandResult, DeviceRegistry, Dimmer, Error,
    FanLevel, HubDevice, HubError, OutboundCommand, ParseError, PropertyKind, PropertyUpdate,
    SharedDevice, ThermostatActivity,
};
use tokio::sync::{mpsc, oneshot};

fn node(json: &str) -> DeviceNode {
    serde_json::from_str(json).expect("valid node record")
}

fn type_info(json: &str) -> DeviceTypeInfo {
    serde_json::from_str(json).expect("valid catalog entry")
}

/// Property value the hub reports after executing a command.
fn echo_for(command: &OutboundCommand) -> Option<(&'static str, String)> {
    match (command.command(), command.parameter()) {
        ("DON", Some(level)) => Some(("ST", level.to_string())),
        ("DON", None) => Some(("ST", "255".to_string())),
        ("DOF", _) => Some(("ST", "0".to_string())),
        ("SECMD", Some(locked)) => Some(("ST", locked.to_string())),
        (code @ ("CLISPC" | "CLISPH" | "CLIMD"), Some(value)) => Some((code, value.to_string())),
        _ => None,
    }
}

/// Spawns a fake hub that applies every command and acknowledges it.
fn spawn_hub(
    registry: Arc<DeviceRegistry<ChannelHubClient>>,
    mut commands: mpsc::UnboundedReceiver<OutboundCommand>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(command) = commands.recv().await {
            if let Some((control, action)) = echo_for(&command) {
                registry
                    .route(command.address(), control, &action, None)
                    .expect("numeric echo");
            }
            command.complete(Ok(CommandResponse::new(
                r#"<RestResponse succeeded="true"><status>200</status></RestResponse>"#,
            )));
        }
    })
}

fn register(
    registry: &DeviceRegistry<ChannelHubClient>,
    hub: &Arc<ChannelHubClient>,
    node_json: &str,
    info_json: &str,
) -> SharedDevice<ChannelHubClient> {
    let device = AnyDevice::from_catalog(Arc::clone(hub), &node(node_json), &type_info(info_json))
        .expect("supported device");
    registry.register(device)
}

fn result_channel() -> (
    impl FnOnce(CommandResult) + Send + 'static,
    oneshot::Receiver<CommandResult>,
) {
    let (tx, rx) = oneshot::channel();
    let handler = move |result: CommandResult| {
        let _ = tx.send(result);
    };
    (handler, rx)
}

// ============================================================================
// Command round trips
// ============================================================================

mod round_trips {
    use super::*;

    #[tokio::test]
    async fn dimmable_light_round_trip() {
        let (hub, commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let registry = Arc::new(DeviceRegistry::new());
        let light = register(
            &registry,
            &hub,
            r#"{"name":"Kitchen","address":"1A 2B 3C 1","type":"1.32.65.0"}"#,
            r#"{"name":"SwitchLinc Dimmer","deviceType":"DimmableLight","connectionType":"Insteon Wired"}"#,
        );
        let hub_task = spawn_hub(Arc::clone(&registry), commands);

        let (handler, done) = result_channel();
        light
            .read()
            .as_light()
            .expect("light model")
            .send_dim_level(Dimmer::new(50).unwrap(), handler);

        let response = done.await.unwrap().unwrap();
        assert!(response.body().contains("succeeded=\"true\""));

        let device = light.read();
        let light = device.as_light().unwrap();
        assert!(light.is_dimmable());
        assert!(light.is_on());
        assert_eq!(light.current_state(), 128);
        assert_eq!(light.dim_level().value(), 50);

        drop(device);
        hub_task.abort();
    }

    #[tokio::test]
    async fn secure_lock_round_trip() {
        let (hub, commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let registry = Arc::new(DeviceRegistry::new());
        let lock = register(
            &registry,
            &hub,
            r#"{"name":"Front Door","address":"ZW 002","type":"4.64.3.0"}"#,
            r#"{"name":"Deadbolt","deviceType":"SecureLock","connectionType":"Z-Wave"}"#,
        );
        let hub_task = spawn_hub(Arc::clone(&registry), commands);

        let (handler, done) = result_channel();
        lock.read().as_lock().unwrap().send_lock_state(true, handler);
        done.await.unwrap().unwrap();
        assert!(lock.read().as_lock().unwrap().is_locked());

        let (handler, done) = result_channel();
        lock.read().as_lock().unwrap().send_lock_state(false, handler);
        done.await.unwrap().unwrap();
        assert!(!lock.read().as_lock().unwrap().is_locked());

        hub_task.abort();
    }

    #[tokio::test]
    async fn fan_round_trip() {
        let (hub, commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let registry = Arc::new(DeviceRegistry::new());
        let fan = register(
            &registry,
            &hub,
            r#"{"name":"Bedroom Fan","address":"3B 1C 9A 2","type":"1.46.68.0"}"#,
            r#"{"name":"FanLinc","deviceType":"Fan","connectionType":"Insteon Wired"}"#,
        );
        let hub_task = spawn_hub(Arc::clone(&registry), commands);

        for level in [FanLevel::Medium, FanLevel::High, FanLevel::Off] {
            let (handler, done) = result_channel();
            fan.read().as_fan().unwrap().send_fan_level(level, handler);
            done.await.unwrap().unwrap();
            assert_eq!(fan.read().as_fan().unwrap().fan_level(), Ok(level));
        }

        hub_task.abort();
    }

    #[tokio::test]
    async fn thermostat_set_point_round_trip() {
        let (hub, commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let registry = Arc::new(DeviceRegistry::new());
        let thermostat = register(
            &registry,
            &hub,
            r#"{"name":"Upstairs","address":"2F 4A 11 1","type":"5.10.8.0"}"#,
            r#"{"name":"Insteon Thermostat","deviceType":"Thermostat","connectionType":"Insteon Wired"}"#,
        );
        let hub_task = spawn_hub(Arc::clone(&registry), commands);

        // Set points are rounded to the half degrees the hub reports in.
        for (requested, reported) in [(75.5, 75.5), (72.25, 72.5), (68.2, 68.0)] {
            let (handler, done) = result_channel();
            thermostat
                .read()
                .as_thermostat()
                .unwrap()
                .send_cool_set_point(requested, handler);
            done.await.unwrap().unwrap();

            let cool_set_point = thermostat.read().as_thermostat().unwrap().cool_set_point();
            assert!(
                (cool_set_point - reported).abs() < f64::EPSILON,
                "sent {requested}, read back {cool_set_point}"
            );
        }

        hub_task.abort();
    }
}

// ============================================================================
// Notification handling
// ============================================================================

mod notifications {
    use super::*;

    #[test]
    fn thermostat_activity_pulses() {
        let (hub, _commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let registry = DeviceRegistry::new();
        let thermostat = register(
            &registry,
            &hub,
            r#"{"name":"Upstairs","address":"2F 4A 11 1","type":"5.10.8.0"}"#,
            r#"{"name":"Insteon Thermostat","deviceType":"Thermostat","connectionType":"Insteon Wired"}"#,
        );

        let notified = Arc::new(AtomicU32::new(0));
        let notified_clone = Arc::clone(&notified);
        thermostat
            .write()
            .set_change_callback(move |_, _| {
                notified_clone.fetch_add(1, Ordering::SeqCst);
            });

        assert_eq!(registry.route("2F 4A 11 1", "ST", "255", Some("2")), Ok(Some(true)));
        assert_eq!(registry.route("2F 4A 11 1", "ST", "255", Some("2")), Ok(Some(false)));
        assert_eq!(registry.route("2F 4A 11 1", "ST", "0", Some("3")), Ok(Some(false)));
        assert_eq!(registry.route("2F 4A 11 1", "ST", "144", None), Ok(Some(true)));

        let device = thermostat.read();
        let thermostat = device.as_thermostat().unwrap();
        assert_eq!(thermostat.activity(), Some(ThermostatActivity::Heating));
        assert!((thermostat.temperature() - 72.0).abs() < f64::EPSILON);
        assert_eq!(notified.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn callback_reads_its_own_device() {
        let (hub, _commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let registry = DeviceRegistry::new();
        let light = register(
            &registry,
            &hub,
            r#"{"name":"Kitchen","address":"1A 2B 3C 1","type":"1.32.65.0"}"#,
            r#"{"name":"SwitchLinc Dimmer","deviceType":"DimmableLight","connectionType":"Insteon Wired"}"#,
        );

        let levels = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let levels_clone = Arc::clone(&levels);
        let weak = Arc::downgrade(&light);
        light.write().set_change_callback(move |_, _| {
            let light = weak.upgrade().expect("device registered");
            let level = light.read().as_light().map(|light| light.dim_level().value());
            levels_clone.lock().extend(level);
        });

        assert_eq!(registry.route("1A 2B 3C 1", "ST", "128", None), Ok(Some(true)));
        assert_eq!(registry.route("1A 2B 3C 1", "ST", "255", None), Ok(Some(true)));
        assert_eq!(*levels.lock(), vec![50, 100]);
    }

    #[test]
    fn motion_sensor_threshold() {
        let (hub, _commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let registry = DeviceRegistry::new();
        let sensor = register(
            &registry,
            &hub,
            r#"{"name":"Hall Motion","address":"4E 5F 60 1","type":"16.1.0.0"}"#,
            r#"{"name":"Motion Sensor II","deviceType":"MotionSensor","connectionType":"Insteon Wireless"}"#,
        );

        registry.route("4E 5F 60 1", "ST", "254", None).unwrap();
        assert!(!sensor.read().as_motion_sensor().unwrap().motion_detected());

        registry.route("4E 5F 60 1", "ST", "255", None).unwrap();
        assert!(sensor.read().as_motion_sensor().unwrap().motion_detected());
        assert!(sensor.read().info().battery_operated());
    }

    #[test]
    fn unrelated_property_is_ignored() {
        let (hub, _commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let registry = DeviceRegistry::new();
        let outlet = register(
            &registry,
            &hub,
            r#"{"name":"Lamp Plug","address":"7A 7B 7C 1","type":"2.55.72.0"}"#,
            r#"{"name":"On/Off Outlet","deviceType":"Outlet","connectionType":"Insteon Wired"}"#,
        );
        let before = outlet.read().last_changed();

        assert_eq!(registry.route("7A 7B 7C 1", "OL", "255", None), Ok(Some(false)));
        assert_eq!(outlet.read().current_state(), 0);
        assert_eq!(outlet.read().last_changed(), before);
        assert_eq!(
            PropertyKind::from("OL"),
            PropertyKind::Other("OL".to_string())
        );
    }
}

// ============================================================================
// Failure paths
// ============================================================================

mod failures {
    use super::*;

    #[tokio::test]
    async fn closed_transport_fails_command() {
        let (hub, commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        drop(commands);

        let registry = DeviceRegistry::new();
        let outlet = register(
            &registry,
            &hub,
            r#"{"name":"Lamp Plug","address":"7A 7B 7C 1","type":"2.55.72.0"}"#,
            r#"{"name":"On/Off Outlet","deviceType":"Outlet","connectionType":"Insteon Wired"}"#,
        );

        let (handler, done) = result_channel();
        outlet.read().as_outlet().unwrap().send_on_off(true, handler);

        let result = done.await.unwrap();
        assert!(matches!(result, Err(HubError::ChannelClosed(_))));
        assert!(!outlet.read().as_outlet().unwrap().is_on());
    }

    #[tokio::test]
    async fn rejected_command_reaches_handler() {
        let (hub, mut commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let registry = DeviceRegistry::new();
        let light = register(
            &registry,
            &hub,
            r#"{"name":"Porch","address":"1A 2B 3C 4","type":"2.42.67.0"}"#,
            r#"{"name":"SwitchLinc Relay","deviceType":"Light","connectionType":"Insteon Wired"}"#,
        );

        let (handler, done) = result_channel();
        light.read().as_light().unwrap().send_on_off(true, handler);

        let outbound = commands.recv().await.unwrap();
        assert_eq!(outbound.rest_path(), "/rest/nodes/1A%202B%203C%204/cmd/DON");
        outbound.complete(Err(HubError::CommandRejected {
            address: "1A 2B 3C 4".to_string(),
            command: "DON".to_string(),
            reason: "device not responding".to_string(),
        }));

        assert!(matches!(
            done.await.unwrap(),
            Err(HubError::CommandRejected { .. })
        ));
        assert!(!light.read().as_light().unwrap().is_on());
    }

    #[test]
    fn unsupported_catalog_entries() {
        let (hub, _commands) = ChannelHubClient::new();
        let hub = Arc::new(hub);
        let node = node(r#"{"name":"Keypad","address":"9C 8B 7A 1","type":"0.5.0.0"}"#);

        let remote = type_info(r#"{"name":"Mini Remote","deviceType":"Remote","connectionType":"Insteon Wireless"}"#);
        let err = AnyDevice::from_catalog(Arc::clone(&hub), &node, &remote).unwrap_err();
        assert_eq!(err.to_string(), "device type Remote is not supported");

        let err: Error =
            PropertyUpdate::parse("9C 8B 7A 1", "ST", "not a number", None).unwrap_err().into();
        assert!(matches!(
            err,
            Error::Parse(ParseError::NonNumericValue { ref value, .. }) if value == "not a number"
        ));
    }
}
