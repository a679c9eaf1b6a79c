// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub client that hands commands to a transport task over a channel.

use std::fmt;

use tokio::sync::mpsc;

use crate::command::Command;
use crate::error::HubError;
use crate::hub::{CommandResult, HubClient, ResultHandler};

/// A command waiting to be delivered to the hub.
///
/// The transport task that drains the channel sends the command however it
/// likes and then calls [`OutboundCommand::complete`].
pub struct OutboundCommand {
    address: String,
    command: &'static str,
    parameter: Option<String>,
    rest_path: String,
    on_result: ResultHandler,
}

impl OutboundCommand {
    /// Address of the target node.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Hub command code.
    #[must_use]
    pub fn command(&self) -> &'static str {
        self.command
    }

    /// Command parameter, if any.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// REST path that issues this command.
    #[must_use]
    pub fn rest_path(&self) -> &str {
        &self.rest_path
    }

    /// Reports the outcome to the issuer's result handler.
    pub fn complete(self, result: CommandResult) {
        (self.on_result)(result);
    }
}

impl fmt::Debug for OutboundCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutboundCommand")
            .field("address", &self.address)
            .field("command", &self.command)
            .field("parameter", &self.parameter)
            .finish_non_exhaustive()
    }
}

/// [`HubClient`] backed by an unbounded tokio channel.
///
/// Sending never blocks or awaits. If the receiving side has been dropped,
/// the command's result handler is called right away with
/// [`HubError::ChannelClosed`].
///
/// # Examples
///
/// ```
/// use isy_devices::command::LightCommand;
/// use isy_devices::hub::{ChannelHubClient, CommandResponse, HubClient};
///
/// let (client, mut rx) = ChannelHubClient::new();
/// client.send_command("1A 2B 3C 1", &LightCommand::On, Box::new(|_| {}));
///
/// let outbound = rx.try_recv().unwrap();
/// assert_eq!(outbound.command(), "DON");
/// outbound.complete(Ok(CommandResponse::new("ok")));
/// ```
#[derive(Debug, Clone)]
pub struct ChannelHubClient {
    sender: mpsc::UnboundedSender<OutboundCommand>,
}

impl ChannelHubClient {
    /// Creates a client and the receiver the transport task should drain.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutboundCommand>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl HubClient for ChannelHubClient {
    fn send_command(&self, address: &str, command: &dyn Command, on_result: ResultHandler) {
        let outbound = OutboundCommand {
            address: address.to_string(),
            command: command.name(),
            parameter: command.parameter(),
            rest_path: command.rest_path(address),
            on_result,
        };

        if let Err(mpsc::error::SendError(outbound)) = self.sender.send(outbound) {
            tracing::warn!(
                address = %outbound.address,
                command = %outbound.command,
                "Hub transport is gone, failing command"
            );
            outbound.complete(Err(HubError::ChannelClosed(
                "hub transport receiver dropped".to_string(),
            )));
        }
    }
}
