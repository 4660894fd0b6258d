use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::notification::Tone;

/// How long a toast stays on screen.
///
/// Stored in TOML either as a number of milliseconds or as the string
/// `"never"`, which keeps the toast until it is dismissed by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "TimeoutRepr", into = "TimeoutRepr")]
pub enum Timeout {
    /// Stay until dismissed.
    Never,
    /// Expire after this many milliseconds.
    Millis(u64),
}

impl Timeout {
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Timeout::Never => None,
            Timeout::Millis(millis) => Some(Duration::from_millis(*millis)),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum TimeoutRepr {
    Millis(u64),
    Keyword(TimeoutKeyword),
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
enum TimeoutKeyword {
    Never,
}

impl From<TimeoutRepr> for Timeout {
    fn from(repr: TimeoutRepr) -> Self {
        match repr {
            TimeoutRepr::Millis(millis) => Timeout::Millis(millis),
            TimeoutRepr::Keyword(TimeoutKeyword::Never) => Timeout::Never,
        }
    }
}

impl From<Timeout> for TimeoutRepr {
    fn from(timeout: Timeout) -> Self {
        match timeout {
            Timeout::Never => TimeoutRepr::Keyword(TimeoutKeyword::Never),
            Timeout::Millis(millis) => TimeoutRepr::Millis(millis),
        }
    }
}

/// Controls how the toast provider stacks and expires notifications.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Maximum number of toasts on screen at once. Further toasts wait in a
    /// queue until a slot frees up. Values below 1 are treated as 1.
    pub max_visible: usize,
    /// Lifetime of neutral toasts in milliseconds, or `"never"`.
    pub neutral_timeout_ms: Timeout,
    /// Lifetime of error toasts in milliseconds, or `"never"`. Default value
    /// is `"never"`.
    pub error_timeout_ms: Timeout,
    /// How often the provider checks for expired toasts, in milliseconds.
    pub tick_interval_ms: u64,
}

impl ToastConfig {
    /// Returns the lifetime for toasts of the given tone, if they expire.
    pub fn timeout_for(&self, tone: Tone) -> Option<Duration> {
        match tone {
            Tone::Neutral => self.neutral_timeout_ms.duration(),
            Tone::Error => self.error_timeout_ms.duration(),
        }
    }

    /// Number of visible slots; at least one so toasts are never only queued.
    pub fn max_visible(&self) -> usize {
        self.max_visible.max(1)
    }

    pub fn tick_interval(&self) -> Duration {
        // a zero interval would make `tokio::time::interval` panic
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: 3,
            neutral_timeout_ms: Timeout::Millis(3000),
            error_timeout_ms: Timeout::Never,
            tick_interval_ms: 250,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Buffer size of both bridge channels.
    pub channel_capacity: usize,
    /// Configuration for the toast stack.
    pub toasts: ToastConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
            toasts: ToastConfig::default(),
        }
    }
}
