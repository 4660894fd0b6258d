//! Toaster context and command dispatching.
//!
//! The context owns the toast stack and provides helpers for reporting
//! events back to the application over the bridge.

use std::time::Instant;

use herald_bridge::{DismissReason, ToastCommand, ToastEvent};
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::TrySendError;

use crate::formatting::render_stack;
use crate::stack::ToastStack;

/// State owned by the toaster task.
pub(crate) struct ToasterContext {
    pub stack: ToastStack,
    /// Outbound channel to the application.
    pub tx: Sender<ToastEvent>,
}

impl ToasterContext {
    /// Applies one command to the stack. Returns whether the stack changed.
    pub fn dispatch_command(&mut self, command: ToastCommand, now: Instant) -> bool {
        match command {
            ToastCommand::Show { tone, presentation } => {
                let id = self.stack.push(tone, presentation, now);
                log::debug!("Accepted {tone} toast {id}");
                self.send(ToastEvent::Shown(id));
                true
            }
            ToastCommand::Dismiss(id) => match self.stack.dismiss(id, now) {
                Some(_) => {
                    self.send(ToastEvent::Dismissed {
                        id,
                        reason: DismissReason::User,
                    });
                    true
                }
                None => {
                    log::debug!("Ignoring dismissal of unknown toast {id}");
                    false
                }
            },
            ToastCommand::InvokeAction(id) => match self.stack.invoke_action(id, now) {
                Some(key) => {
                    self.send(ToastEvent::ActionInvoked { id, key });
                    self.send(ToastEvent::Dismissed {
                        id,
                        reason: DismissReason::User,
                    });
                    true
                }
                None => {
                    log::debug!("Toast {id} has no action to invoke");
                    false
                }
            },
            ToastCommand::Clear => {
                let cleared = self.stack.clear();
                for id in &cleared {
                    self.send(ToastEvent::Dismissed {
                        id: *id,
                        reason: DismissReason::Cleared,
                    });
                }
                !cleared.is_empty()
            }
        }
    }

    /// Expires toasts whose time ran out. Returns whether the stack changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.stack.expire(now);
        for id in &expired {
            self.send(ToastEvent::Dismissed {
                id: *id,
                reason: DismissReason::Expired,
            });
        }
        !expired.is_empty()
    }

    /// Prints the current stack to stdout.
    pub fn render(&self, now: Instant) {
        let lines = render_stack(&self.stack, now);
        if lines.is_empty() {
            println!("-- no notifications --");
            return;
        }
        println!("-- notifications --");
        for line in lines {
            println!("{line}");
        }
    }

    /// Send an event to the application without waiting. Events that do not
    /// fit are dropped, so a slow listener cannot stall the stack.
    fn send(&self, event: ToastEvent) {
        if let Err(err) = self.tx.try_send(event) {
            match err {
                TrySendError::Full(event) => {
                    log::warn!("Event channel is full, dropping {event:?}")
                }
                TrySendError::Closed(event) => {
                    log::trace!("Nobody listens for toast events, dropping {event:?}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use herald_bridge::BridgeChannels;
    use herald_bridge::config::ToastConfig;
    use herald_bridge::notification::{Action, Presentation, Tone};

    use super::*;

    fn context(channels: &BridgeChannels) -> ToasterContext {
        ToasterContext {
            stack: ToastStack::new(ToastConfig::default()),
            tx: channels.toaster_tx.clone(),
        }
    }

    fn show(tone: Tone, action: Option<Action>) -> ToastCommand {
        ToastCommand::Show {
            tone,
            presentation: Presentation {
                headline: Some("Bonus credited".to_string()),
                body: None,
                action,
            },
        }
    }

    #[test]
    fn show_reports_the_assigned_id() {
        let mut channels = BridgeChannels::new(8);
        let mut context = context(&channels);

        assert!(context.dispatch_command(show(Tone::Neutral, None), Instant::now()));

        let Ok(ToastEvent::Shown(id)) = channels.app_rx.try_recv() else {
            panic!("expected a shown event");
        };
        assert!(context.stack.get(id).is_some());
    }

    #[test]
    fn invoking_an_action_reports_key_then_dismissal() {
        let mut channels = BridgeChannels::new(8);
        let mut context = context(&channels);
        let now = Instant::now();

        context.dispatch_command(
            show(Tone::Neutral, Some(Action::new("Undo", "undo-transfer"))),
            now,
        );
        let Ok(ToastEvent::Shown(id)) = channels.app_rx.try_recv() else {
            panic!("expected a shown event");
        };

        assert!(context.dispatch_command(ToastCommand::InvokeAction(id), now));
        assert_eq!(
            channels.app_rx.try_recv().unwrap(),
            ToastEvent::ActionInvoked {
                id,
                key: "undo-transfer".to_string(),
            }
        );
        assert_eq!(
            channels.app_rx.try_recv().unwrap(),
            ToastEvent::Dismissed {
                id,
                reason: DismissReason::User,
            }
        );
    }

    #[test]
    fn unknown_dismissal_changes_nothing() {
        let mut channels = BridgeChannels::new(8);
        let mut context = context(&channels);

        let unknown = herald_bridge::notification::ToastId::next();
        assert!(!context.dispatch_command(ToastCommand::Dismiss(unknown), Instant::now()));
        assert!(channels.app_rx.try_recv().is_err());
    }

    #[test]
    fn tick_reports_expired_toasts() {
        let mut channels = BridgeChannels::new(8);
        let mut context = context(&channels);
        let start = Instant::now();

        context.dispatch_command(show(Tone::Neutral, None), start);
        context.dispatch_command(show(Tone::Error, None), start);
        let _ = channels.app_rx.try_recv();
        let _ = channels.app_rx.try_recv();

        assert!(context.tick(start + Duration::from_secs(3)));
        assert!(matches!(
            channels.app_rx.try_recv().unwrap(),
            ToastEvent::Dismissed {
                reason: DismissReason::Expired,
                ..
            }
        ));
        assert_eq!(context.stack.visible_count(), 1);
        assert!(!context.tick(start + Duration::from_secs(3600)));
    }

    #[test]
    fn clear_reports_every_toast() {
        let mut channels = BridgeChannels::new(8);
        let mut context = context(&channels);
        let now = Instant::now();
        for _ in 0..4 {
            context.dispatch_command(show(Tone::Neutral, None), now);
        }
        for _ in 0..4 {
            let _ = channels.app_rx.try_recv();
        }

        assert!(context.dispatch_command(ToastCommand::Clear, now));
        let mut cleared = 0;
        while let Ok(event) = channels.app_rx.try_recv() {
            assert!(matches!(
                event,
                ToastEvent::Dismissed {
                    reason: DismissReason::Cleared,
                    ..
                }
            ));
            cleared += 1;
        }
        assert_eq!(cleared, 4);
        assert!(!context.dispatch_command(ToastCommand::Clear, now));
    }
}
