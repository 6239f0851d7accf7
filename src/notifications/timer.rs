// ABOUTME: Deferred auto-hide timers backed by tokio tasks
// Expiries are delivered over a channel so the host loop performs the hide

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tracing::debug;

use super::error::{NotificationError, Result};
use super::NotificationId;

/// Delivered when a notification's timeout elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    /// Notification whose timeout elapsed.
    pub id: NotificationId,
    /// Matches the [`PendingTimer`] that produced it.
    pub token: u64,
}

/// A scheduled auto-hide. Cancelled on drop.
#[derive(Debug)]
pub struct PendingTimer {
    token: u64,
    abort: AbortHandle,
}

impl PendingTimer {
    /// Token carried by this timer's [`Expiry`].
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Stops the timer; its expiry is never delivered.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for PendingTimer {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Arms auto-hide timers that report back on the manager's channel.
#[derive(Debug)]
pub struct Scheduler {
    tx: UnboundedSender<Expiry>,
    next_token: u64,
}

impl Scheduler {
    /// Scheduler delivering expiries to `tx`.
    pub fn new(tx: UnboundedSender<Expiry>) -> Self {
        Self { tx, next_token: 0 }
    }

    /// Spawns a task that reports `id` as expired after `delay`.
    ///
    /// Fails with [`NotificationError::NoRuntime`] outside a tokio runtime.
    pub fn schedule(&mut self, id: NotificationId, delay: Duration) -> Result<PendingTimer> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| NotificationError::NoRuntime)?;

        let token = self.next_token;
        self.next_token = self.next_token.wrapping_add(1);

        let tx = self.tx.clone();
        let expiry = Expiry { id, token };
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver only goes away with the manager.
            let _ = tx.send(expiry);
        });

        debug!("Scheduled auto-hide for [{}] in {:?}", id, delay);
        Ok(PendingTimer {
            token,
            abort: task.abort_handle(),
        })
    }
}
