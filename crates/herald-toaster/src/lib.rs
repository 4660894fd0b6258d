//! In-process toast provider.
//!
//! This crate owns everything the notification facade deliberately leaves
//! to its provider: how many toasts are on screen, how long each one stays,
//! what happens to the overflow, and how toasts get dismissed. It listens on
//! the bridge for [`herald_bridge::ToastCommand`]s and reports back with
//! [`herald_bridge::ToastEvent`]s.
//!
//! Toasts are rendered as plain text lines; see [`formatting`].

mod app;
pub mod config;
pub mod formatting;
mod runtime;
pub mod stack;
pub mod toast;

pub use crate::runtime::{run, run_headless};
pub use crate::stack::ToastStack;
pub use crate::toast::Toast;
