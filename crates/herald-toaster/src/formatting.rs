use std::fmt::Write;
use std::time::{Duration, Instant};

use crate::stack::ToastStack;
use crate::toast::Toast;

/// Text shown for a toast that has neither a headline nor a body.
const EMPTY_TOAST: &str = "(empty)";

/// Formats a remaining duration in a human-readable `HH:MM:SS` or `MM:SS`
/// format.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.as_secs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Renders a single toast as one line, e.g.
/// `[#4 error] Failed: Could not reach the server (Retry)`.
///
/// Missing parts are left out rather than rendered as placeholders.
pub fn render_toast(toast: &Toast, now: Instant) -> String {
    let presentation = toast.presentation();
    let mut line = format!("[{} {}]", toast.id(), toast.tone());

    match (&presentation.headline, &presentation.body) {
        (Some(headline), Some(body)) => {
            let _ = write!(line, " {headline}: {body}");
        }
        (Some(text), None) | (None, Some(text)) => {
            let _ = write!(line, " {text}");
        }
        (None, None) => {
            let _ = write!(line, " {EMPTY_TOAST}");
        }
    }

    if let Some(action) = &presentation.action {
        let _ = write!(line, " ({})", action.label);
    }

    if let Some(remaining) = toast.remaining(now) {
        let _ = write!(line, " {}", format_remaining(remaining));
    }

    line
}

/// Renders every visible toast, newest first, followed by a summary of the
/// queue when toasts are waiting.
pub fn render_stack(stack: &ToastStack, now: Instant) -> Vec<String> {
    let mut lines: Vec<String> = stack.visible().map(|t| render_toast(t, now)).collect();
    if stack.queued_count() > 0 {
        lines.push(format!("... {} more queued", stack.queued_count()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use herald_bridge::config::{Timeout, ToastConfig};
    use herald_bridge::notification::{Action, Presentation, Tone};

    use super::*;

    #[test]
    fn remaining_time_uses_hours_only_when_needed() {
        assert_eq!(format_remaining(Duration::from_millis(2900)), "00:02");
        assert_eq!(format_remaining(Duration::from_secs(75)), "01:15");
        assert_eq!(format_remaining(Duration::from_secs(3725)), "01:02:05");
    }

    #[test]
    fn error_toast_without_body_renders_headline_only() {
        let now = Instant::now();
        let toast = Toast::new(
            Tone::Error,
            Presentation {
                headline: Some("Failed".to_string()),
                ..Presentation::default()
            },
            None,
        );

        assert_eq!(render_toast(&toast, now), format!("[{} error] Failed", toast.id()));
    }

    #[test]
    fn empty_toast_renders_placeholder() {
        let toast = Toast::new(Tone::Neutral, Presentation::default(), None);
        assert!(render_toast(&toast, Instant::now()).ends_with("(empty)"));
    }

    #[test]
    fn stack_lists_visible_toasts_and_queue_size() {
        let mut stack = ToastStack::new(ToastConfig {
            max_visible: 1,
            neutral_timeout_ms: Timeout::Never,
            ..ToastConfig::default()
        });
        let now = Instant::now();
        stack.push(
            Tone::Neutral,
            Presentation {
                headline: Some("Saved".to_string()),
                body: Some("Your changes were saved.".to_string()),
                action: Some(Action::new("Undo", "undo-save")),
            },
            now,
        );
        stack.push(Tone::Neutral, Presentation::default(), now);

        let lines = render_stack(&stack, now);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Saved: Your changes were saved. (Undo)"));
        assert_eq!(lines[1], "... 1 more queued");
    }
}
