// ABOUTME: Notification lifecycle manager owning the slot table and id counter
// Creates, shows and hides notifications and keeps the container visibility in sync

use std::cell::Cell;
use std::rc::Rc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info, warn};

use super::error::{NotificationError, Result};
use super::notification::{CreateConfig, Notification, NotificationId};
use super::render::{InitContext, PlainText, Render};
use super::timer::{Expiry, Scheduler};
use crate::config::ManagerConfig;
use crate::container::{Container, Presentation};

/// Non-owning reference to a notification held by a [`NotificationManager`].
///
/// Clones share state: once the notification is hidden, through any clone or
/// by its timeout, every clone reports itself consumed.
#[derive(Debug, Clone)]
pub struct Handle {
    id: Rc<Cell<Option<NotificationId>>>,
}

impl Handle {
    fn new(id: NotificationId) -> Self {
        Self {
            id: Rc::new(Cell::new(Some(id))),
        }
    }

    /// `None` once the notification has been hidden and removed.
    pub fn id(&self) -> Option<NotificationId> {
        self.id.get()
    }

    /// True once the notification has been hidden and removed.
    pub fn is_consumed(&self) -> bool {
        self.id.get().is_none()
    }

    fn invalidate(&self) {
        self.id.set(None);
    }

    /// Shorthand for [`NotificationManager::show`].
    pub fn show<C: Container>(&self, manager: &mut NotificationManager<C>) -> Result<()> {
        manager.show(self)
    }

    /// Shorthand for [`NotificationManager::hide`].
    pub fn hide<C: Container>(&self, manager: &mut NotificationManager<C>) -> Result<()> {
        manager.hide(self)
    }

    /// Shorthand for [`NotificationManager::is_visible`].
    pub fn is_visible<C: Container>(&self, manager: &NotificationManager<C>) -> bool {
        manager.is_visible(self)
    }
}

#[derive(Debug)]
struct Slot {
    notification: Notification,
    handle: Handle,
}

/// Owns every live notification and the container they are shown in.
///
/// Identifiers are slot indices handed out from a counter. The counter only
/// returns to zero once every slot is empty, so a live id is never reused.
/// Checking for that costs a scan of the slot table on each hide.
///
/// Auto-hide timers report back through a channel; the host loop must call
/// [`drain_expired`](Self::drain_expired) or await
/// [`next_expired`](Self::next_expired) for timeouts to take effect.
#[derive(Debug)]
pub struct NotificationManager<C: Container> {
    container: C,
    config: ManagerConfig,
    slots: Vec<Option<Slot>>,
    counter: usize,
    container_visible: bool,
    scheduler: Scheduler,
    expired: UnboundedReceiver<Expiry>,
}

impl<C: Container> NotificationManager<C> {
    /// Manager over `container` with the default config.
    pub fn new(container: C) -> Self {
        Self::with_config(container, ManagerConfig::default())
    }

    /// Manager over `container` using `config` for names, classes and default text.
    pub fn with_config(container: C, config: ManagerConfig) -> Self {
        let (tx, expired) = mpsc::unbounded_channel();
        Self {
            container,
            config,
            slots: Vec::new(),
            counter: 0,
            container_visible: false,
            scheduler: Scheduler::new(tx),
            expired,
        }
    }

    /// Creates a notification rendering its text verbatim.
    pub fn create(&mut self, config: CreateConfig) -> Result<Handle> {
        self.create_with(config, Box::new(PlainText))
    }

    /// Creates a notification whose body is produced by `renderer`.
    ///
    /// The renderer's `init` hook runs once the slot is known to be free.
    pub fn create_with(&mut self, config: CreateConfig, renderer: Box<dyn Render>) -> Result<Handle> {
        debug!(
            text = ?config.text,
            timeout_ms = ?config.timeout_ms,
            class_name = ?config.class_name,
            name = ?config.name,
            "Creating notification"
        );

        let id = NotificationId::new(self.counter);
        self.counter += 1;

        if self.slot(id).is_some() {
            warn!("A notification with the id [{}] already exists within the stack", id);
            return Err(NotificationError::SlotOccupied(id));
        }

        let mut notification = Notification::new(id, config, &self.config, renderer);
        let name = notification.name().to_string();
        notification.init_renderer(&InitContext {
            id,
            name: &name,
            active: self.active_count(),
        });

        let handle = Handle::new(id);
        if self.slots.len() <= id.index() {
            self.slots.resize_with(id.index() + 1, || None);
        }
        self.slots[id.index()] = Some(Slot {
            notification,
            handle: handle.clone(),
        });

        info!("Notification created [{}]", id);
        Ok(handle)
    }

    /// Creates a default notification showing `text` and displays it.
    pub fn show_text(&mut self, text: &str) -> Result<Handle> {
        let handle = self.create(CreateConfig::new(text))?;
        self.show(&handle)?;
        Ok(handle)
    }

    /// Inserts the notification into the container and arms its timeout.
    ///
    /// Makes the container visible if it was not already.
    pub fn show(&mut self, handle: &Handle) -> Result<()> {
        let Some(id) = handle.id() else {
            warn!("This notification has already been shown. It needs re-creating");
            return Err(NotificationError::Consumed);
        };

        let Some(slot) = self.slots.get_mut(id.index()).and_then(Option::as_mut) else {
            warn!(
                "The notification [{}] is not valid, it may have already been shown and removed",
                id
            );
            return Err(NotificationError::Unknown(id));
        };

        info!("Showing notification [{}]", id);
        slot.notification.show(&mut self.container, &mut self.scheduler)?;

        if !self.container_visible {
            self.container.set_presentation(Presentation::Visible);
            self.container_visible = true;
        }

        Ok(())
    }

    /// Hides the notification and frees its slot.
    ///
    /// The slot is freed and the handle consumed even when the notification
    /// was never shown; the returned error then reports that it was not visible.
    pub fn hide(&mut self, handle: &Handle) -> Result<()> {
        let Some(id) = handle.id() else {
            warn!("The notification is either invalid or has already been removed");
            return Err(NotificationError::Consumed);
        };

        let Some(mut slot) = self.slots.get_mut(id.index()).and_then(Option::take) else {
            warn!(
                "The notification [{}] is either invalid or has already been removed",
                id
            );
            return Err(NotificationError::Unknown(id));
        };

        let result = slot.notification.hide(&mut self.container);
        slot.handle.invalidate();
        handle.invalidate();
        self.reset_if_empty();

        result
    }

    /// False for consumed handles.
    pub fn is_visible(&self, handle: &Handle) -> bool {
        handle
            .id()
            .and_then(|id| self.slot(id))
            .is_some_and(|slot| slot.notification.is_visible())
    }

    /// Hides every notification whose timeout has already been delivered.
    ///
    /// Returns how many were hidden. Never waits.
    pub fn drain_expired(&mut self) -> usize {
        let mut hidden = 0;
        while let Ok(expiry) = self.expired.try_recv() {
            if self.expire(expiry) {
                hidden += 1;
            }
        }
        hidden
    }

    /// Waits for the next timeout and hides that notification.
    pub async fn next_expired(&mut self) -> Option<NotificationId> {
        loop {
            let expiry = self.expired.recv().await?;
            if self.expire(expiry) {
                return Some(expiry.id);
            }
        }
    }

    fn expire(&mut self, expiry: Expiry) -> bool {
        let handle = match self.slot(expiry.id) {
            Some(slot) if slot.notification.pending_timer() == Some(expiry.token) => {
                slot.handle.clone()
            }
            _ => {
                debug!("Ignoring stale expiry for [{}]", expiry.id);
                return false;
            }
        };

        debug!("Auto-hiding notification [{}]", expiry.id);
        self.hide(&handle).is_ok()
    }

    /// Resets the counter and hides the container once no slot is live.
    fn reset_if_empty(&mut self) {
        if self.slots.iter().any(Option::is_some) {
            return;
        }

        debug!("Notification stack is empty, resetting counter");
        self.counter = 0;
        self.slots = Vec::new();
        self.container.set_presentation(Presentation::Hidden);
        self.container_visible = false;
    }

    fn slot(&self, id: NotificationId) -> Option<&Slot> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Looks up a live notification by handle.
    pub fn get(&self, handle: &Handle) -> Option<&Notification> {
        handle.id().and_then(|id| self.slot(id)).map(|slot| &slot.notification)
    }

    /// Live notifications, shown or not.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Identifier the next `create` will assign.
    pub fn next_id(&self) -> NotificationId {
        NotificationId::new(self.counter)
    }

    /// Whether the container currently has its visible class.
    pub fn is_container_visible(&self) -> bool {
        self.container_visible
    }

    /// The container notifications are shown in.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Config the manager was built with.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }
}
