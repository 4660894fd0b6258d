//! Communication bridge between the application and the toast provider.
//!
//! This crate defines the value types shared by the notification facade and
//! by provider implementations, plus the messages used to drive the
//! in-process toast stack.
//!
//! The design is deliberately lightweight:
//! - The application sends commands (show a toast, dismiss one, clear all).
//! - The toast provider pushes events back (a toast was shown, dismissed, or
//!   its action was invoked).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure and a clean separation
//! between callers and the provider.

pub mod config;
pub mod notification;

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::notification::{Presentation, ToastId, Tone};

/// Commands sent by the application to the toast provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastCommand {
    /// Display a new toast on the given presentation path.
    Show {
        tone: Tone,
        presentation: Presentation,
    },
    /// Dismiss a toast, whether it is visible or still queued.
    Dismiss(ToastId),
    /// Invoke the action attached to a toast.
    InvokeAction(ToastId),
    /// Remove every toast.
    Clear,
}

/// Why a toast left the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Its display duration ran out.
    Expired,
    /// It was dismissed explicitly, or its action was used.
    User,
    /// The whole stack was cleared.
    Cleared,
}

/// Events emitted by the toast provider to inform the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    /// A toast was accepted and assigned an identifier.
    Shown(ToastId),
    /// A toast was removed from the stack.
    Dismissed { id: ToastId, reason: DismissReason },
    /// The action attached to a toast was invoked.
    ActionInvoked { id: ToastId, key: String },
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// the application and the toast provider.
pub struct BridgeChannels {
    /// Sender used by the application to send commands to the provider.
    pub app_tx: Sender<ToastCommand>,
    /// Receiver used by the application to get events from the provider.
    pub app_rx: Receiver<ToastEvent>,

    /// Receiver used by the provider to get commands from the application.
    pub toaster_rx: Receiver<ToastCommand>,
    /// Sender used by the provider to send events to the application.
    pub toaster_tx: Sender<ToastEvent>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_toaster_tx, to_toaster_rx) = mpsc::channel(buffer);
        let (to_app_tx, to_app_rx) = mpsc::channel(buffer);
        Self {
            app_tx: to_toaster_tx,
            app_rx: to_app_rx,
            toaster_rx: to_toaster_rx,
            toaster_tx: to_app_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_flow_from_app_to_toaster() {
        let mut channels = BridgeChannels::new(4);
        channels.app_tx.try_send(ToastCommand::Clear).unwrap();
        assert_eq!(channels.toaster_rx.try_recv().unwrap(), ToastCommand::Clear);
    }

    #[test]
    fn events_flow_from_toaster_to_app() {
        let mut channels = BridgeChannels::new(4);
        let id = ToastId::next();
        channels.toaster_tx.try_send(ToastEvent::Shown(id)).unwrap();
        assert_eq!(channels.app_rx.try_recv().unwrap(), ToastEvent::Shown(id));
    }
}
