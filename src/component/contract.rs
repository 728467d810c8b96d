//! The component contract.
//!
//! A component is a pure description: given the current attribute and
//! property mapping (exposed read-only through [`View`]) it produces a
//! style sheet and a content tree. All state lives in the display tree;
//! the component itself holds no mutable render state, which is what
//! makes every render a pure function of its inputs.

use std::collections::BTreeMap;

use crate::dom::{Node, StyleSheet};
use crate::types::{CustomEvent, NavEntry, PropertyValue};

// =============================================================================
// View
// =============================================================================

/// Read-only access to an instance's current attributes and properties,
/// handed to every component hook.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    attributes: &'a BTreeMap<String, String>,
    properties: &'a BTreeMap<String, PropertyValue>,
}

impl<'a> View<'a> {
    pub(crate) fn new(
        attributes: &'a BTreeMap<String, String>,
        properties: &'a BTreeMap<String, PropertyValue>,
    ) -> Self {
        Self {
            attributes,
            properties,
        }
    }

    /// Current value of a content attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value with a default, mirroring the `|| "home"` getters
    /// the markup surface relies on.
    pub fn attr_or(&self, name: &str, default: &'a str) -> &'a str {
        self.attr(name).unwrap_or(default)
    }

    /// Whether a boolean-ish attribute is set to `"true"`.
    pub fn attr_is_true(&self, name: &str) -> bool {
        self.attr(name) == Some("true")
    }

    /// Current value of a non-reflecting property.
    pub fn prop(&self, name: &str) -> Option<&'a PropertyValue> {
        self.properties.get(name)
    }

    /// Entry-list property, or an empty slice when unset.
    pub fn entries(&self, name: &str) -> &'a [NavEntry] {
        self.prop(name)
            .and_then(PropertyValue::as_entries)
            .unwrap_or(&[])
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Effects a component asks the display tree to perform in response to an
/// event. Executed in order after the hook returns; a component never sees
/// a return value from them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Dispatch a custom event upward from this instance's scope.
    Emit { kind: String, detail: String },
    /// Replace the component mounted in a slot element (found by id in
    /// this instance's rendered content) with a fresh instance of `tag`.
    SwapSlot { slot: String, tag: String },
    /// Set a content attribute on the child instance whose host element
    /// carries the given id.
    SetChildAttribute {
        child: String,
        name: String,
        value: String,
    },
    /// Set a non-reflecting property on a child instance.
    SetChildProperty {
        child: String,
        name: String,
        value: PropertyValue,
    },
}

// =============================================================================
// Component
// =============================================================================

/// The uniform render contract every visual unit satisfies.
///
/// The display tree owns the lifecycle; implementations only describe
/// output and declare which inputs matter:
///
/// - [`observed_attributes`](Self::observed_attributes) - content
///   attributes whose change must re-render
/// - [`observed_non_reflecting_properties`](Self::observed_non_reflecting_properties) -
///   programmatic inputs whose change must re-render
/// - [`style`](Self::style) / [`content`](Self::content) - the render
///   itself, deterministic in the [`View`]
/// - [`setup`](Self::setup) - commands run once per render, after child
///   elements have been upgraded (constructor-style wiring)
/// - [`on_event`](Self::on_event) - reaction to an event bubbling up from
///   a descendant scope
pub trait Component {
    /// Attribute names whose mutation triggers a re-render.
    fn observed_attributes(&self) -> &'static [&'static str] {
        &[]
    }

    /// Property names settable through `set_property`. Everything else is
    /// rejected as a no-op.
    fn observed_non_reflecting_properties(&self) -> &'static [&'static str] {
        &[]
    }

    /// Build the scoped style sheet from the current inputs.
    fn style(&self, view: &View) -> StyleSheet;

    /// Build the content tree from the current inputs.
    fn content(&self, view: &View) -> Node;

    /// Wiring commands executed right after each render, once child
    /// elements are upgraded.
    fn setup(&self, view: &View) -> Vec<Command> {
        let _ = view;
        Vec::new()
    }

    /// React to an event dispatched on this scope or bubbling through it.
    fn on_event(&self, view: &View, event: &CustomEvent) -> Vec<Command> {
        let _ = (view, event);
        Vec::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_accessors() {
        let mut attributes = BTreeMap::new();
        attributes.insert("icon".to_string(), "time".to_string());
        attributes.insert("active".to_string(), "true".to_string());

        let mut properties = BTreeMap::new();
        properties.insert(
            "entries".to_string(),
            PropertyValue::Entries(vec![NavEntry::new("home", "home", "Over ons")]),
        );

        let view = View::new(&attributes, &properties);
        assert_eq!(view.attr("icon"), Some("time"));
        assert_eq!(view.attr_or("text", "home"), "home");
        assert!(view.attr_is_true("active"));
        assert!(!view.attr_is_true("icon"));
        assert_eq!(view.entries("entries").len(), 1);
        assert!(view.entries("missing").is_empty());
    }
}
