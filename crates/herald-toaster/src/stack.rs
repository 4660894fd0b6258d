//! Toast lifecycle management.
//!
//! The `ToastStack` handles queuing, display timing, and dismissal of toasts.
//! It limits the number of visible toasts and promotes queued ones as slots
//! free up.

use std::collections::VecDeque;
use std::time::Instant;

use herald_bridge::config::ToastConfig;
use herald_bridge::notification::{Presentation, ToastId, Tone};

use crate::toast::Toast;

/// Visible toasts plus an overflow queue.
#[derive(Debug, Default)]
pub struct ToastStack {
    /// Currently visible toasts (newest first).
    visible: VecDeque<Toast>,
    /// Toasts waiting for a visible slot (oldest first).
    queue: VecDeque<Toast>,
    config: ToastConfig,
}

impl ToastStack {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            config,
        }
    }

    /// Pushes a new toast and returns its identifier.
    ///
    /// The toast is displayed immediately if fewer than `max_visible` toasts
    /// are showing, otherwise it waits in the queue.
    pub fn push(&mut self, tone: Tone, presentation: Presentation, now: Instant) -> ToastId {
        let mut toast = Toast::new(tone, presentation, self.config.timeout_for(tone));
        let id = toast.id();

        if self.visible.len() < self.config.max_visible() {
            toast.mark_shown(now);
            self.visible.push_front(toast);
        } else {
            log::debug!("Stack is full, queueing toast {id}");
            self.queue.push_back(toast);
        }

        id
    }

    /// Removes a toast by its identifier, wherever it is.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> Option<Toast> {
        if let Some(pos) = self.visible.iter().position(|t| t.id() == id) {
            let toast = self.visible.remove(pos);
            self.promote_from_queue(now);
            return toast;
        }

        let pos = self.queue.iter().position(|t| t.id() == id)?;
        self.queue.remove(pos)
    }

    /// Dismisses every visible toast whose timeout ran out and returns their
    /// identifiers. Promoted toasts start aging at `now`.
    pub fn expire(&mut self, now: Instant) -> Vec<ToastId> {
        let expired: Vec<ToastId> = self
            .visible
            .iter()
            .filter(|t| t.is_expired(now))
            .map(Toast::id)
            .collect();

        for id in &expired {
            self.dismiss(*id, now);
        }

        expired
    }

    /// Uses the action attached to a toast.
    ///
    /// Returns the action key and removes the toast, or `None` (leaving the
    /// stack untouched) if the toast is unknown or has no action.
    pub fn invoke_action(&mut self, id: ToastId, now: Instant) -> Option<String> {
        let key = self
            .get(id)?
            .presentation()
            .action
            .as_ref()
            .map(|action| action.key.clone())?;
        self.dismiss(id, now);
        Some(key)
    }

    /// Removes every toast, visible and queued, returning their identifiers.
    pub fn clear(&mut self) -> Vec<ToastId> {
        self.visible
            .drain(..)
            .chain(self.queue.drain(..))
            .map(|t| t.id())
            .collect()
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.visible
            .iter()
            .chain(self.queue.iter())
            .find(|t| t.id() == id)
    }

    /// Returns the visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < self.config.max_visible() {
            let Some(mut toast) = self.queue.pop_front() else {
                break;
            };
            toast.mark_shown(now);
            // queued toasts are newer than every visible one
            self.visible.push_front(toast);
        }
    }
}
