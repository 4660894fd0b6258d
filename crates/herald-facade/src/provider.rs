//! The seam between the facade and whatever actually renders notifications.

use std::sync::Arc;

use herald_bridge::notification::Presentation;

/// An underlying notification provider with a neutral and an error
/// presentation path.
///
/// Implementations own everything that happens after the call: display
/// duration, stacking order, dismissal. Both entry points are fire-and-forget
/// and must return promptly.
pub trait NotificationProvider {
    /// Presents a notification on the neutral/default path.
    fn show(&self, presentation: Presentation);

    /// Presents a notification on the error path.
    fn show_error(&self, presentation: Presentation);
}

impl<P: NotificationProvider + ?Sized> NotificationProvider for &P {
    fn show(&self, presentation: Presentation) {
        (**self).show(presentation)
    }

    fn show_error(&self, presentation: Presentation) {
        (**self).show_error(presentation)
    }
}

impl<P: NotificationProvider + ?Sized> NotificationProvider for Arc<P> {
    fn show(&self, presentation: Presentation) {
        (**self).show(presentation)
    }

    fn show_error(&self, presentation: Presentation) {
        (**self).show_error(presentation)
    }
}

impl<P: NotificationProvider + ?Sized> NotificationProvider for Box<P> {
    fn show(&self, presentation: Presentation) {
        (**self).show(presentation)
    }

    fn show_error(&self, presentation: Presentation) {
        (**self).show_error(presentation)
    }
}
