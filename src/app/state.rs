// ABOUTME: Demo application state wiring key presses to the notification manager
// Shows a welcome toast on start and a warning every fourth space press

use tracing::{info, warn};

use crate::config::ManagerConfig;
use crate::container::MarkupContainer;
use crate::notifications::{CreateConfig, Handle, NotificationManager};

pub const WELCOME_TEXT: &str = "Challenge Accepted!";
pub const WELCOME_TIMEOUT_MS: u64 = 5000;
pub const WARNING_TEXT: &str = "Warning: Time is running out!";
pub const WARNING_CLASS: &str = "warning";
pub const WARNING_TIMEOUT_MS: u64 = 3000;

/// Space presses needed to raise the warning.
pub const WARNING_PRESSES: u32 = 4;

#[derive(Debug)]
pub struct AppState {
    pub manager: NotificationManager<MarkupContainer>,
    pub space_presses: u32,
    pub warning: Option<Handle>,
    pub should_quit: bool,
    pub help_visible: bool,
}

impl AppState {
    pub fn new(config: ManagerConfig) -> Self {
        let container = MarkupContainer::from_config(&config);
        Self {
            manager: NotificationManager::with_config(container, config),
            space_presses: 0,
            warning: None,
            should_quit: false,
            help_visible: false,
        }
    }

    pub fn show_welcome(&mut self) {
        let config = CreateConfig::new(WELCOME_TEXT).with_timeout_ms(WELCOME_TIMEOUT_MS);
        match self.manager.create(config) {
            Ok(handle) => {
                if let Err(e) = handle.show(&mut self.manager) {
                    warn!("Failed to show welcome notification: {}", e);
                }
            }
            Err(e) => warn!("Failed to create welcome notification: {}", e),
        }
    }

    /// The fourth press raises the warning; the first press after that
    /// dismisses it early if it is still on screen.
    pub fn on_space(&mut self) {
        self.space_presses += 1;

        if self.space_presses == WARNING_PRESSES {
            self.raise_warning();
            self.space_presses = 0;
        } else if self.space_presses == 1 && self.warning_visible() {
            if let Some(handle) = &self.warning {
                if let Err(e) = handle.hide(&mut self.manager) {
                    warn!("Failed to hide warning: {}", e);
                }
            }
            self.space_presses = 0;
        }
    }

    pub fn warning_visible(&self) -> bool {
        self.warning
            .as_ref()
            .is_some_and(|handle| handle.is_visible(&self.manager))
    }

    fn raise_warning(&mut self) {
        let config = CreateConfig::new(WARNING_TEXT)
            .with_class(WARNING_CLASS)
            .with_timeout_ms(WARNING_TIMEOUT_MS);

        match self.manager.create(config) {
            Ok(handle) => {
                if let Err(e) = handle.show(&mut self.manager) {
                    warn!("Failed to show warning: {}", e);
                }
                info!("Warning raised as [{:?}]", handle.id());
                self.warning = Some(handle);
            }
            Err(e) => warn!("Failed to create warning: {}", e),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: ManagerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn init(&mut self) {
        self.state.show_welcome();
    }

    /// Applies any auto-hide timeouts that fired since the last tick.
    pub fn tick(&mut self) -> usize {
        self.state.manager.drain_expired()
    }
}
