//! Notification facade used by application code to raise transient
//! notifications.
//!
//! UI event handlers only ever see [`Notifier::notify`]; the concrete
//! provider is injected at construction time through the
//! [`NotificationProvider`] trait, so it can be swapped without touching call
//! sites and replaced by a [`RecordingProvider`] in tests.

mod channel;
mod notifier;
mod provider;
mod recording;

pub use crate::channel::ChannelProvider;
pub use crate::notifier::Notifier;
pub use crate::provider::NotificationProvider;
pub use crate::recording::{RecordedCall, RecordingProvider};

pub use herald_bridge::notification::{Action, NotificationRequest, Variant};
