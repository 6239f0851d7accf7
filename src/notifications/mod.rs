// ABOUTME: Stacked toast notifications with optional auto-hide
// Re-exports the manager, handle, notification and rendering types

//! Notification lifecycle: create, show, hide and auto-hide.

pub mod error;
pub mod manager;
pub mod notification;
pub mod render;
pub mod timer;

pub use error::{NotificationError, Result};
pub use manager::{Handle, NotificationManager};
pub use notification::{CreateConfig, Notification, NotificationId};
pub use render::{EscapedHtml, InitContext, PlainText, Render};
