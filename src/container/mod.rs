// ABOUTME: Container seam that notification markup is inserted into
// Defines the element unit, the presentation toggle and the Container trait

//! Where notification markup ends up.

pub mod markup;

pub use markup::MarkupContainer;

use std::fmt;

/// Well-known identifier of the notification container.
pub const DEFAULT_CONTAINER_ID: &str = "Notifications";

/// The two presentation states a container can be toggled between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Container carries the visible class.
    Visible,
    /// Container carries the hidden class.
    Hidden,
}

/// One rendered notification, ready to be inserted into a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element name, used to locate the node again on removal.
    pub name: String,
    /// Class list, base class first.
    pub classes: Vec<String>,
    /// Rendered body. Inserted verbatim, no escaping happens here.
    pub body: String,
}

impl Element {
    /// Whether `class` is in the class list.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Class list joined the way a `class` attribute spells it.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<div id=\"{}\" class=\"{}\">{}</div>",
            self.name,
            self.class_attr(),
            self.body
        )
    }
}

/// Where notifications are displayed.
///
/// Implementations own the stacked children and the container's own
/// presentation class. The manager only ever talks to a container through
/// this trait, so headless and terminal backends are interchangeable.
#[cfg_attr(test, mockall::automock)]
pub trait Container {
    /// Append an element after the existing children.
    fn insert(&mut self, element: &Element);

    /// Remove the first child named `name`. Returns false if none matched.
    fn remove(&mut self, name: &str) -> bool;

    /// Switch the container between its visible and hidden classes.
    fn set_presentation(&mut self, presentation: Presentation);
}
