// ABOUTME: Error types for the notification lifecycle
// Every variant is local and non-fatal; callers decide whether to care

use thiserror::Error;

use super::NotificationId;

/// Why a lifecycle call did nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// Show called on a notification already on screen.
    #[error("Notification {0} has already been displayed")]
    AlreadyVisible(NotificationId),

    /// Hide called on a notification that was never shown.
    #[error("Notification {0} is not visible")]
    NotVisible(NotificationId),

    /// The handle's notification was already hidden and removed.
    #[error("Handle has already been consumed, the notification needs re-creating")]
    Consumed,

    /// No live notification holds this id.
    #[error("Notification {0} is invalid or has already been removed")]
    Unknown(NotificationId),

    /// The id handed out is still held by a live notification.
    #[error("A notification with id {0} already exists within the stack")]
    SlotOccupied(NotificationId),

    /// A timeout was set but no tokio runtime is running.
    #[error("No async runtime available to schedule the auto-hide timer")]
    NoRuntime,
}

/// Result of a notification lifecycle call.
pub type Result<T> = std::result::Result<T, NotificationError>;
