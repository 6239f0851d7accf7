// ABOUTME: Pluggable body rendering for notifications
// A Render strategy is chosen when the notification is created

use std::fmt;

use super::NotificationId;

/// Manager-side context handed to [`Render::init`].
#[derive(Debug, Clone, Copy)]
pub struct InitContext<'a> {
    /// Id of the notification being created.
    pub id: NotificationId,
    /// Its element name.
    pub name: &'a str,
    /// Live notifications in the manager, not counting this one.
    pub active: usize,
}

/// Produces the body markup of a notification.
pub trait Render: fmt::Debug {
    /// Called once, right after the notification is stored by the manager.
    fn init(&mut self, _ctx: &InitContext<'_>) {}

    /// Body markup for `text`. Inserted into the container as-is.
    fn render(&self, text: &str) -> String;
}

/// Returns the text verbatim.
///
/// The result is injected straight into the container, so untrusted text
/// must be sanitized by the caller or rendered with [`EscapedHtml`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Render for PlainText {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Escapes `& < > " '` so the text shows literally.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapedHtml;

impl Render for EscapedHtml {
    fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(ch),
            }
        }
        out
    }
}
