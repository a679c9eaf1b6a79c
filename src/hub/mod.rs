// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The hub client seam.
//!
//! Devices never talk to the network. They hand each command to a
//! [`HubClient`] together with a result handler and return immediately; the
//! client delivers the command and later calls the handler with the hub's
//! answer or a [`HubError`].
//!
//! # Implementations
//!
//! - [`ChannelHubClient`]: forwards commands over a tokio channel to a
//!   transport task owned by the application

mod channel;

pub use channel::{ChannelHubClient, OutboundCommand};

use crate::command::Command;
use crate::error::HubError;

/// Response from the hub for a delivered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    /// The raw response body.
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Outcome of an outbound command, as reported by the hub client.
pub type CommandResult = Result<CommandResponse, HubError>;

/// Callback invoked by the hub client once a command completes.
pub type ResultHandler = Box<dyn FnOnce(CommandResult) + Send + 'static>;

/// Trait for hub clients that accept outbound commands.
///
/// Implementations must not block: `send_command` is called from the same
/// event loop that delivers property updates.
///
/// Devices hold their client in an `Arc` for their whole life, so clients
/// must not borrow anything.
pub trait HubClient: 'static {
    /// Queues `command` for the node at `address`.
    ///
    /// The implementation owns `on_result` and must call it exactly once,
    /// with either the hub's response or the failure.
    fn send_command(&self, address: &str, command: &dyn Command, on_result: ResultHandler);
}
