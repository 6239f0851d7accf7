// ABOUTME: Headless in-memory container that keeps notifications as markup
// Mirrors a DOM element: an ordered child list plus a class list

use tracing::debug;

use super::{Container, Element, Presentation, DEFAULT_CONTAINER_ID};
use crate::config::ManagerConfig;

/// In-memory container, inspectable as markup.
#[derive(Debug, Clone)]
pub struct MarkupContainer {
    id: String,
    classes: Vec<String>,
    children: Vec<Element>,
    visible_class: String,
    hidden_class: String,
}

impl MarkupContainer {
    /// Container using the `show`/`hide` presentation classes.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_classes(id, "show", "hide")
    }

    /// Container with custom presentation classes.
    pub fn with_classes(
        id: impl Into<String>,
        visible_class: impl Into<String>,
        hidden_class: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            classes: Vec::new(),
            children: Vec::new(),
            visible_class: visible_class.into(),
            hidden_class: hidden_class.into(),
        }
    }

    /// Container id and classes taken from `config`.
    pub fn from_config(config: &ManagerConfig) -> Self {
        Self::with_classes(
            config.container_id.clone(),
            config.visible_class.clone(),
            config.hidden_class.clone(),
        )
    }

    /// Identifier of the container element.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Concatenated markup of every child, in insertion order.
    pub fn inner_html(&self) -> String {
        self.children.iter().map(ToString::to_string).collect()
    }

    /// Markup of the container element itself, children included.
    pub fn outer_html(&self) -> String {
        format!(
            "<div id=\"{}\" class=\"{}\">{}</div>",
            self.id,
            self.classes.join(" "),
            self.inner_html()
        )
    }

    /// Inserted elements, oldest first.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child named `name`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|e| e.name == name)
    }

    /// Whether the container itself carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The container's own class list.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

impl Default for MarkupContainer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID)
    }
}

impl Container for MarkupContainer {
    fn insert(&mut self, element: &Element) {
        debug!("Inserting {} into #{}", element.name, self.id);
        self.children.push(element.clone());
    }

    fn remove(&mut self, name: &str) -> bool {
        match self.children.iter().position(|e| e.name == name) {
            Some(pos) => {
                self.children.remove(pos);
                true
            }
            None => false,
        }
    }

    fn set_presentation(&mut self, presentation: Presentation) {
        let (add, drop) = match presentation {
            Presentation::Visible => (self.visible_class.clone(), self.hidden_class.clone()),
            Presentation::Hidden => (self.hidden_class.clone(), self.visible_class.clone()),
        };
        self.add_class(&add);
        self.remove_class(&drop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn element(name: &str, body: &str) -> Element {
        Element {
            name: name.to_string(),
            classes: vec!["notification".to_string()],
            body: body.to_string(),
        }
    }

    #[test]
    fn insert_appends_in_order() {
        let mut container = MarkupContainer::default();
        container.insert(&element("a", "first"));
        container.insert(&element("b", "second"));

        assert_eq!(
            container.inner_html(),
            concat!(
                r#"<div id="a" class="notification">first</div>"#,
                r#"<div id="b" class="notification">second</div>"#
            )
        );
    }

    #[test]
    fn outer_html_wraps_children() {
        let mut container = MarkupContainer::default();
        container.set_presentation(Presentation::Visible);
        container.insert(&element("a", "hi"));

        assert_eq!(
            container.outer_html(),
            r#"<div id="Notifications" class="show"><div id="a" class="notification">hi</div></div>"#
        );
    }

    #[test]
    fn remove_only_drops_first_match() {
        let mut container = MarkupContainer::default();
        container.insert(&element("dup", "one"));
        container.insert(&element("dup", "two"));

        assert!(container.remove("dup"));
        assert_eq!(container.children().len(), 1);
        assert_eq!(container.children()[0].body, "two");
        assert!(container.remove("dup"));
        assert!(!container.remove("dup"));
    }

    #[test]
    fn presentation_classes_are_exclusive() {
        let mut container = MarkupContainer::default();

        container.set_presentation(Presentation::Visible);
        assert!(container.has_class("show"));
        assert!(!container.has_class("hide"));

        container.set_presentation(Presentation::Hidden);
        assert!(container.has_class("hide"));
        assert!(!container.has_class("show"));

        container.set_presentation(Presentation::Hidden);
        assert_eq!(container.classes(), ["hide".to_string()]);
    }

    #[test]
    fn custom_classes_from_config() {
        let config = ManagerConfig {
            container_id: "Toasts".to_string(),
            visible_class: "on".to_string(),
            hidden_class: "off".to_string(),
            ..ManagerConfig::default()
        };
        let mut container = MarkupContainer::from_config(&config);

        container.set_presentation(Presentation::Visible);
        assert_eq!(container.id(), "Toasts");
        assert!(container.has_class("on"));
    }
}
