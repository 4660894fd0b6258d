use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Severity of a notification as chosen by the caller.
///
/// The variant decides which provider entry point a request is routed to;
/// it carries no styling of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Neutral, informational or success feedback.
    #[default]
    Default,
    /// Failure or otherwise destructive outcome.
    Destructive,
}

/// An interactive control attached to a notification, e.g. an "Undo" button.
///
/// The application keeps its own mapping from `key` to whatever should happen
/// when the control is used; the provider only reports the key back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Text shown on the control.
    pub label: String,
    /// Opaque identifier reported back when the control is invoked.
    pub key: String,
}

impl Action {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }
}

/// A single notification to display, built by caller code right when it is
/// needed and handed over once.
///
/// Every field is optional. A request with neither a title nor a description
/// is still valid and simply produces an empty notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Short headline.
    pub title: Option<String>,
    /// Longer body text.
    pub description: Option<String>,
    /// Presentation severity.
    pub variant: Variant,
    /// Optional interactive control, moved into the provider with the request.
    pub action: Option<Action>,
}

impl NotificationRequest {
    /// Creates an empty request with the default variant.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Shorthand for `variant(Variant::Destructive)`.
    #[must_use]
    pub fn destructive(self) -> Self {
        self.variant(Variant::Destructive)
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Splits the request into its presentation payload, dropping the variant
    /// once it has been used for routing.
    pub fn into_presentation(self) -> Presentation {
        Presentation {
            headline: self.title,
            body: self.description,
            action: self.action,
        }
    }
}

/// Provider entry point a notification is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The neutral/default presentation path.
    Neutral,
    /// The error presentation path.
    Error,
}

impl From<Variant> for Tone {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Default => Tone::Neutral,
            Variant::Destructive => Tone::Error,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Neutral => write!(f, "info"),
            Tone::Error => write!(f, "error"),
        }
    }
}

/// What a provider entry point receives: headline, body and an optional
/// action, all passed through from the request unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    pub headline: Option<String>,
    pub body: Option<String>,
    pub action: Option<Action>,
}

impl Presentation {
    /// Returns whether there is no text to show at all.
    pub fn is_empty(&self) -> bool {
        self.headline.is_none() && self.body.is_none()
    }
}

/// Identifier the toast provider assigns to each displayed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocates a new process-wide unique identifier.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Rebuilds an identifier from its raw value, e.g. one typed by a user.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
