// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `isy_devices` library.
//!
//! Failures fall into two families:
//!
//! - **Hub failures** ([`HubError`]) are produced by a hub client and handed
//!   to the result handler of a command. Devices never inspect them.
//! - **Catalog mismatches** ([`DeviceError`]) signal that the hub reported
//!   something this library has no mapping for: an unknown lock protocol, a
//!   fan speed outside the four quantized levels, and so on. They are
//!   returned instead of defaulting so that protocol drift stays visible.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing a hub notification.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The hub reported a device or state this library cannot model.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// The hub client failed to deliver a command.
    #[error("hub error: {0}")]
    Hub(#[from] HubError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
        /// The actual value that was provided.
        actual: i32,
    },
}

/// Errors related to parsing raw hub notifications.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The action value of a notification is not numeric.
    #[error("non-numeric value {value:?} for property {property}")]
    NonNumericValue {
        /// The property code the value was reported for.
        property: String,
        /// The raw value as received.
        value: String,
    },

    /// The sub-address of a notification is not a small integer.
    #[error("invalid sub-address: {0:?}")]
    InvalidSubAddress(String),
}

/// Catalog or protocol mismatches between the hub and this library.
///
/// Every variant describes a situation the hub is never expected to
/// produce. Hosting applications decide whether to log, skip the device, or
/// abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// A lock was constructed from a device type with no known lock protocol.
    #[error("device type {0} is not a known lock type")]
    UnsupportedLockType(String),

    /// The catalog entry names a device type no variant models.
    #[error("device type {0} is not supported")]
    UnsupportedDeviceType(String),

    /// A fan reported a raw state outside its quantized levels.
    #[error("unexpected fan state: {0}")]
    UnexpectedFanState(i32),

    /// A fan level name did not match any known level.
    #[error("unknown fan level: {0}")]
    UnknownFanLevel(String),
}

/// Errors reported by a hub client for an outbound command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HubError {
    /// Connection to the hub failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The hub did not answer in time.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The hub answered but refused the command.
    #[error("command {command} rejected for {address}: {reason}")]
    CommandRejected {
        /// Address of the target node.
        address: String,
        /// The command code that was refused.
        command: String,
        /// Reason given by the hub.
        reason: String,
    },

    /// The channel to the transport task was closed.
    #[error("channel closed: {0}")]
    ChannelClosed(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
