use herald_bridge::notification::{NotificationRequest, Variant};

use crate::provider::NotificationProvider;

/// The single call surface the application uses to raise transient
/// notifications.
///
/// A `Notifier` holds its provider by value and keeps no other state. Each
/// [`notify`](Self::notify) call performs exactly one provider call and
/// returns; nothing is validated, batched or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct Notifier<P> {
    provider: P,
}

impl<P: NotificationProvider> Notifier<P> {
    /// Creates a facade over the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Routes the request to the provider's error path when it is
    /// destructive, and to the neutral path otherwise.
    ///
    /// Never fails: empty requests are passed through and rendered however
    /// the provider sees fit.
    pub fn notify(&self, request: NotificationRequest) {
        let variant = request.variant;
        let presentation = request.into_presentation();
        match variant {
            Variant::Default => self.provider.show(presentation),
            Variant::Destructive => self.provider.show_error(presentation),
        }
    }

    /// Raises a neutral notification with the given title and description.
    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(NotificationRequest::new().title(title).description(description));
    }

    /// Raises a destructive notification with the given title and description.
    pub fn failure(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(
            NotificationRequest::new()
                .title(title)
                .description(description)
                .destructive(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use herald_bridge::notification::{Action, Presentation, Tone};

    use super::*;
    use crate::recording::{RecordedCall, RecordingProvider};

    fn notifier() -> (Notifier<RecordingProvider>, RecordingProvider) {
        let provider = RecordingProvider::new();
        (Notifier::new(provider.clone()), provider)
    }

    #[test]
    fn destructive_requests_use_only_the_error_path() {
        let (notifier, provider) = notifier();
        notifier.notify(NotificationRequest::new().title("Failed").destructive());

        assert_eq!(provider.count(Tone::Error), 1);
        assert_eq!(provider.count(Tone::Neutral), 0);
    }

    #[test]
    fn default_requests_use_only_the_neutral_path() {
        let (notifier, provider) = notifier();
        notifier.notify(NotificationRequest::new().variant(Variant::Default).title("Hi"));

        assert_eq!(provider.count(Tone::Neutral), 1);
        assert_eq!(provider.count(Tone::Error), 0);
    }

    #[test]
    fn empty_request_reaches_the_neutral_path_once() {
        let (notifier, provider) = notifier();
        notifier.notify(NotificationRequest::default());

        assert_eq!(
            provider.calls(),
            vec![RecordedCall {
                tone: Tone::Neutral,
                presentation: Presentation::default(),
            }]
        );
    }

    #[test]
    fn title_and_description_pass_through_unchanged() {
        let (notifier, provider) = notifier();
        notifier.notify(
            NotificationRequest::new()
                .title("Saved")
                .description("Your changes were saved."),
        );

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tone, Tone::Neutral);
        assert_eq!(calls[0].presentation.headline.as_deref(), Some("Saved"));
        assert_eq!(
            calls[0].presentation.body.as_deref(),
            Some("Your changes were saved.")
        );
    }

    #[test]
    fn destructive_without_description_keeps_body_empty() {
        let (notifier, provider) = notifier();
        notifier.notify(NotificationRequest::new().title("Failed").destructive());

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tone, Tone::Error);
        assert_eq!(calls[0].presentation.headline.as_deref(), Some("Failed"));
        assert_eq!(calls[0].presentation.body, None);
    }

    #[test]
    fn every_call_reaches_the_provider() {
        let (notifier, provider) = notifier();
        for _ in 0..5 {
            notifier.notify(NotificationRequest::new().title("Referral bonus credited"));
        }
        notifier.failure("Withdrawal failed", "Try again later.");

        assert_eq!(provider.calls().len(), 6);
        assert_eq!(provider.count(Tone::Neutral), 5);
        assert_eq!(provider.count(Tone::Error), 1);
    }

    #[test]
    fn action_is_handed_to_the_provider() {
        let (notifier, provider) = notifier();
        notifier.notify(
            NotificationRequest::new()
                .title("Card removed")
                .action(Action::new("Undo", "undo-remove-card")),
        );

        let calls = provider.calls();
        assert_eq!(
            calls[0].presentation.action,
            Some(Action::new("Undo", "undo-remove-card"))
        );
    }

    #[test]
    fn shared_providers_work_through_references_and_arcs() {
        let provider = Arc::new(RecordingProvider::new());
        Notifier::new(provider.clone()).success("Balance updated", "");
        Notifier::new(&*provider).success("Balance updated", "");

        let boxed: Box<dyn NotificationProvider> = Box::new((*provider).clone());
        Notifier::new(boxed).failure("Session expired", "Please sign in again.");

        assert_eq!(provider.count(Tone::Neutral), 2);
        assert_eq!(provider.count(Tone::Error), 1);
    }
}
