// ABOUTME: Library crate for toast-stack exposing the notification manager for testing and external use

//! Stacked toast notifications with optional auto-hide.
//!
//! [`notifications::NotificationManager`] owns the notifications and shows them
//! in a [`container::Container`]. `app` and `components` hold the terminal demo.

#[allow(missing_docs)]
pub mod app;
#[allow(missing_docs)]
pub mod components;
pub mod config;
pub mod container;
pub mod notifications;
