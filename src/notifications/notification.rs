// ABOUTME: A single stacked notification and its hidden/visible lifecycle
// Renders itself into an Element and inserts or removes it from a container

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::{NotificationError, Result};
use super::render::{InitContext, Render};
use super::timer::{PendingTimer, Scheduler};
use crate::config::ManagerConfig;
use crate::container::{Container, Element};

/// Identifier of a notification, equal to its slot index in the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(usize);

impl NotificationId {
    /// Id for slot `index`.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Slot index this id refers to.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Options accepted when creating a notification.
///
/// Empty strings count as absent, so the manager's defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateConfig {
    /// Message text.
    pub text: Option<String>,
    /// Auto-hide delay in milliseconds. `None` keeps the notification until hidden.
    #[serde(rename = "timeout", deserialize_with = "lenient_timeout")]
    pub timeout_ms: Option<u64>,
    /// Extra class added after the base class.
    pub class_name: Option<String>,
    /// Element name, replacing `{name_prefix}{id}`.
    pub name: Option<String>,
}

impl CreateConfig {
    /// Config with only the text set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Hide automatically after `timeout_ms` once shown.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Add an extra class to the element.
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Override the element name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parses the camelCase JSON form, e.g. `{"text":"Hi","className":"red"}`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Any number is a delay: negatives clamp to zero, fractions truncate.
/// Anything else, including `NaN` and infinities, means no auto-hide.
fn lenient_timeout<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Ok(None);
    };

    if let Some(ms) = number.as_u64() {
        return Ok(Some(ms));
    }
    if number.as_i64().is_some() {
        return Ok(Some(0));
    }
    Ok(number
        .as_f64()
        .filter(|ms| ms.is_finite())
        // Saturating float-to-int cast.
        .map(|ms| ms.max(0.0).trunc() as u64))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// One notification: its text, styling, timeout and visibility.
#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    name: String,
    text: String,
    base_class: String,
    class_name: Option<String>,
    timeout: Option<Duration>,
    visible: bool,
    timer: Option<PendingTimer>,
    renderer: Box<dyn Render>,
}

impl Notification {
    /// Applies `defaults` to whatever `config` leaves empty.
    pub fn new(
        id: NotificationId,
        config: CreateConfig,
        defaults: &ManagerConfig,
        renderer: Box<dyn Render>,
    ) -> Self {
        Self {
            id,
            name: non_empty(config.name).unwrap_or_else(|| format!("{}{}", defaults.name_prefix, id)),
            text: non_empty(config.text).unwrap_or_else(|| defaults.default_text.clone()),
            base_class: defaults.base_class.clone(),
            class_name: non_empty(config.class_name),
            timeout: config.timeout_ms.map(Duration::from_millis),
            visible: false,
            timer: None,
            renderer,
        }
    }

    /// Slot id assigned by the manager.
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Element name in the container.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message text before rendering.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Extra class, if any.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Auto-hide delay, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Whether the notification is currently in the container.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Token of the auto-hide timer currently armed, if any.
    pub fn pending_timer(&self) -> Option<u64> {
        self.timer.as_ref().map(PendingTimer::token)
    }

    pub(crate) fn init_renderer(&mut self, ctx: &InitContext<'_>) {
        self.renderer.init(ctx);
    }

    /// Body markup, produced by the notification's renderer.
    pub fn render(&self) -> String {
        self.renderer.render(&self.text)
    }

    /// The element inserted into the container on show.
    pub fn element(&self) -> Element {
        let mut classes = vec![self.base_class.clone()];
        if let Some(extra) = &self.class_name {
            classes.push(extra.clone());
        }

        Element {
            name: self.name.clone(),
            classes,
            body: self.render(),
        }
    }

    /// Inserts the notification into `container` and arms its timeout.
    pub fn show(&mut self, container: &mut dyn Container, scheduler: &mut Scheduler) -> Result<()> {
        if self.visible {
            warn!("Notification [{}] has already been displayed", self.id);
            return Err(NotificationError::AlreadyVisible(self.id));
        }

        self.timer = None;
        let timer = match self.timeout {
            Some(delay) => Some(scheduler.schedule(self.id, delay)?),
            None => None,
        };

        container.insert(&self.element());
        self.timer = timer;
        self.visible = true;

        Ok(())
    }

    /// Removes the notification from `container` and disarms its timeout.
    pub fn hide(&mut self, container: &mut dyn Container) -> Result<()> {
        if !self.visible {
            debug!("Notification [{}] is not visible", self.id);
            return Err(NotificationError::NotVisible(self.id));
        }

        self.visible = false;
        if !container.remove(&self.name) {
            warn!("Element {} was missing from the container", self.name);
        }
        self.timer = None;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::MarkupContainer;
    use crate::notifications::render::{EscapedHtml, PlainText};
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn build(id: usize, config: CreateConfig) -> Notification {
        Notification::new(
            NotificationId::new(id),
            config,
            &ManagerConfig::default(),
            Box::new(PlainText),
        )
    }

    fn scheduler() -> Scheduler {
        let (tx, _rx) = mpsc::unbounded_channel();
        Scheduler::new(tx)
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let notification = build(4, CreateConfig::default());

        assert_eq!(notification.name(), "Notifications-4");
        assert_eq!(notification.text(), "This is a notification");
        assert_eq!(notification.class_name(), None);
        assert_eq!(notification.timeout(), None);
        assert!(!notification.is_visible());
    }

    #[test]
    fn empty_strings_fall_back_to_defaults() {
        let config = CreateConfig {
            text: Some(String::new()),
            class_name: Some(String::new()),
            name: Some(String::new()),
            timeout_ms: None,
        };
        let notification = build(1, config);

        assert_eq!(notification.name(), "Notifications-1");
        assert_eq!(notification.text(), "This is a notification");
        assert_eq!(notification.element().classes, vec!["notification".to_string()]);
    }

    #[test]
    fn custom_name_overrides_element_name() {
        let notification = build(0, CreateConfig::new("x").with_name("banner"));
        assert_eq!(notification.element().name, "banner");
    }

    #[test]
    fn config_accepts_camel_case_fields() {
        let config = CreateConfig::from_json(r#"{"text":"Hi","timeout":250,"className":"red"}"#)
            .expect("valid json");

        assert_eq!(config, CreateConfig::new("Hi").with_timeout_ms(250).with_class("red"));
    }

    #[test]
    fn non_numeric_timeout_means_no_auto_hide() {
        for raw in [r#""soon""#, "null", "true", "[100]", r#"{"ms":100}"#] {
            let json = format!(r#"{{"text":"Hi","timeout":{raw}}}"#);
            let config = CreateConfig::from_json(&json).expect("config still parses");

            assert_eq!(config.timeout_ms, None, "timeout {raw}");
            assert_eq!(config.text.as_deref(), Some("Hi"));
        }
    }

    #[test]
    fn numeric_timeout_is_clamped_and_truncated() {
        let cases = [("-5", 0), ("1.5", 1), ("-0.5", 0), ("0", 0), ("3000", 3000)];

        for (raw, expected) in cases {
            let json = format!(r#"{{"timeout":{raw}}}"#);
            let config = CreateConfig::from_json(&json).expect("config parses");
            assert_eq!(config.timeout_ms, Some(expected), "timeout {raw}");
        }
    }

    #[test]
    fn missing_timeout_means_no_auto_hide() {
        let config = CreateConfig::from_json(r#"{"text":"Hi"}"#).expect("config parses");
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn show_then_hide_round_trips_container() {
        let mut container = MarkupContainer::default();
        let mut scheduler = scheduler();
        let mut notification = build(0, CreateConfig::new("Hello").with_class("red"));

        notification.show(&mut container, &mut scheduler).expect("first show");
        assert!(notification.is_visible());
        assert_eq!(
            container.inner_html(),
            r#"<div id="Notifications-0" class="notification red">Hello</div>"#
        );

        notification.hide(&mut container).expect("hide visible");
        assert!(!notification.is_visible());
        assert_eq!(container.inner_html(), "");
    }

    #[test]
    fn show_twice_is_rejected() {
        let mut container = MarkupContainer::default();
        let mut scheduler = scheduler();
        let mut notification = build(2, CreateConfig::new("once"));

        notification.show(&mut container, &mut scheduler).expect("first show");
        assert_eq!(
            notification.show(&mut container, &mut scheduler),
            Err(NotificationError::AlreadyVisible(NotificationId::new(2)))
        );
        assert_eq!(container.children().len(), 1);
    }

    #[test]
    fn hide_when_hidden_is_rejected() {
        let mut container = MarkupContainer::default();
        let mut notification = build(0, CreateConfig::new("never shown"));

        assert_eq!(
            notification.hide(&mut container),
            Err(NotificationError::NotVisible(NotificationId::new(0)))
        );
    }

    #[test]
    fn timeout_without_runtime_leaves_notification_hidden() {
        let mut container = MarkupContainer::default();
        let mut scheduler = scheduler();
        let mut notification = build(0, CreateConfig::new("later").with_timeout_ms(10));

        assert_eq!(
            notification.show(&mut container, &mut scheduler),
            Err(NotificationError::NoRuntime)
        );
        assert!(!notification.is_visible());
        assert!(container.children().is_empty());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn hide_disarms_timer() {
        let mut container = MarkupContainer::default();
        let mut scheduler = scheduler();
        let mut notification = build(0, CreateConfig::new("timed").with_timeout_ms(100));

        notification.show(&mut container, &mut scheduler).expect("show");
        assert!(notification.pending_timer().is_some());

        notification.hide(&mut container).expect("hide");
        assert!(notification.pending_timer().is_none());
    }

    #[test]
    fn renderer_controls_body() {
        let mut notification = Notification::new(
            NotificationId::new(0),
            CreateConfig::new("<script>"),
            &ManagerConfig::default(),
            Box::new(EscapedHtml),
        );
        notification.init_renderer(&InitContext {
            id: NotificationId::new(0),
            name: "Notifications-0",
            active: 0,
        });

        assert_eq!(notification.render(), "&lt;script&gt;");
        assert_eq!(notification.element().body, "&lt;script&gt;");
    }
}
