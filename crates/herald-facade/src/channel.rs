//! Provider that forwards notifications to the toast stack over the bridge.

use herald_bridge::ToastCommand;
use herald_bridge::notification::{Presentation, Tone};
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::TrySendError;

use crate::provider::NotificationProvider;

/// Sends every presentation to the toast provider as a
/// [`ToastCommand::Show`].
///
/// Sending never waits: when the channel is full or the provider has shut
/// down, the notification is logged and dropped.
#[derive(Debug, Clone)]
pub struct ChannelProvider {
    tx: Sender<ToastCommand>,
}

impl ChannelProvider {
    pub fn new(tx: Sender<ToastCommand>) -> Self {
        Self { tx }
    }

    /// Send a command to the toast provider without blocking.
    fn send(&self, command: ToastCommand) {
        match self.tx.try_send(command) {
            Ok(()) => {}
            Err(TrySendError::Full(command)) => {
                log::warn!("Toast channel is full, dropping {command:?}");
            }
            Err(TrySendError::Closed(command)) => {
                log::warn!("Toast provider has shut down, dropping {command:?}");
            }
        }
    }

    fn send_presentation(&self, tone: Tone, presentation: Presentation) {
        log::debug!("Forwarding {tone} notification: {presentation:?}");
        self.send(ToastCommand::Show { tone, presentation });
    }
}

impl NotificationProvider for ChannelProvider {
    fn show(&self, presentation: Presentation) {
        self.send_presentation(Tone::Neutral, presentation);
    }

    fn show_error(&self, presentation: Presentation) {
        self.send_presentation(Tone::Error, presentation);
    }
}
