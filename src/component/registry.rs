//! Component registry - tag name to constructor mapping.
//!
//! The process-wide custom-element registry of the browser, made explicit:
//! a registry object populated once at startup and handed to the display
//! tree, never ambient global state. Tags follow the custom-element rule
//! of lowercase ascii with at least one hyphen.

use std::collections::BTreeMap;

use thiserror::Error;

use super::contract::Component;

type Factory = Box<dyn Fn() -> Box<dyn Component>>;

/// Errors from populating the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Tag names need a hyphen and only lowercase ascii, like custom elements.
    #[error("invalid component tag `{0}`")]
    InvalidTag(String),
    /// A tag can only be defined once for the registry's lifetime.
    #[error("component tag `{0}` is already defined")]
    DuplicateTag(String),
}

/// Mapping from tag name to component factory.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: BTreeMap<String, Factory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Define a tag. Fails on malformed or already-defined tags.
    pub fn define<C, F>(&mut self, tag: &str, factory: F) -> Result<(), RegistryError>
    where
        C: Component + 'static,
        F: Fn() -> C + 'static,
    {
        if !is_valid_tag(tag) {
            return Err(RegistryError::InvalidTag(tag.to_string()));
        }
        if self.factories.contains_key(tag) {
            return Err(RegistryError::DuplicateTag(tag.to_string()));
        }
        self.factories
            .insert(tag.to_string(), Box::new(move || Box::new(factory())));
        Ok(())
    }

    /// Whether a tag has been defined.
    pub fn is_defined(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Construct a fresh component for a tag.
    pub fn instantiate(&self, tag: &str) -> Option<Box<dyn Component>> {
        self.factories.get(tag).map(|factory| factory())
    }

    /// All defined tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

fn is_valid_tag(tag: &str) -> bool {
    tag.contains('-')
        && !tag.starts_with('-')
        && !tag.ends_with('-')
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Node, StyleSheet};
    use crate::View;

    struct Blank;

    impl Component for Blank {
        fn style(&self, _view: &View) -> StyleSheet {
            StyleSheet::new("")
        }

        fn content(&self, _view: &View) -> Node {
            Node::element("section").with_text("Hey it works!")
        }
    }

    #[test]
    fn test_define_and_instantiate() {
        let mut registry = ComponentRegistry::new();
        registry.define("new-component", || Blank).unwrap();

        assert!(registry.is_defined("new-component"));
        assert!(!registry.is_defined("other-component"));

        let component = registry.instantiate("new-component").unwrap();
        let attributes = Default::default();
        let properties = Default::default();
        let view = View::new(&attributes, &properties);
        assert_eq!(component.content(&view).text(), Some("Hey it works!"));
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let mut registry = ComponentRegistry::new();
        registry.define("vit-icon", || Blank).unwrap();

        let err = registry.define("vit-icon", || Blank).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTag("vit-icon".to_string()));
    }

    #[test]
    fn test_invalid_tags_rejected() {
        let mut registry = ComponentRegistry::new();
        for tag in ["icon", "Vit-Icon", "-icon", "icon-", "vit icon"] {
            let err = registry.define(tag, || Blank).unwrap_err();
            assert_eq!(err, RegistryError::InvalidTag(tag.to_string()));
        }
    }

    #[test]
    fn test_instantiate_unknown_tag() {
        let registry = ComponentRegistry::new();
        assert!(registry.instantiate("vit-unknown").is_none());
    }
}
