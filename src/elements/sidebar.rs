//! The vit-sidebar element - the vertical navigation column.
//!
//! Entries arrive once from the page shell as the non-reflecting
//! `entries` property. Each entry renders a `vit-icon` whose host element
//! id is the entry's target, so every entry provably has a rendered
//! element and the active lookup is total. A click on an icon bubbles
//! through this scope and is translated into a `navigate` signal.

use tracing::trace;

use crate::component::{Command, Component, View};
use crate::dom::{Node, StyleSheet};
use crate::types::CustomEvent;

const STYLE: &str = "
* {
  margin: 0;
  padding: 0;
}

.sidebar {
  height: 100vh;
  width: 70px;
  background: #212121;
  display: flex;
  flex-direction: column;
  align-items: center;
}
";

/// The navigation sidebar.
///
/// Attributes: `active-target` (entry marked as current, exclusive).
/// Properties: `entries` (the navigation entry list).
pub struct Sidebar;

impl Component for Sidebar {
    fn observed_attributes(&self) -> &'static [&'static str] {
        &["active-target"]
    }

    fn observed_non_reflecting_properties(&self) -> &'static [&'static str] {
        &["entries"]
    }

    fn style(&self, _view: &View) -> StyleSheet {
        StyleSheet::new(STYLE)
    }

    fn content(&self, view: &View) -> Node {
        let active = view.attr_or("active-target", "home");
        Node::element("section")
            .with_class("sidebar")
            .with_children(view.entries("entries").iter().map(|entry| {
                Node::element("vit-icon")
                    .with_id(&entry.target)
                    .with_attr("icon", &entry.icon)
                    .with_attr("text", &entry.label)
                    .with_attr("active", if entry.target == active { "true" } else { "false" })
            }))
    }

    fn on_event(&self, view: &View, event: &CustomEvent) -> Vec<Command> {
        if event.kind != "click" {
            return Vec::new();
        }
        let known = view
            .entries("entries")
            .iter()
            .any(|entry| entry.target == event.detail);
        if !known {
            trace!(detail = %event.detail, "click outside navigation entries");
            return Vec::new();
        }
        vec![Command::Emit {
            kind: "navigate".to_string(),
            detail: event.detail.clone(),
        }]
    }
}

// =============================================================================
// Tests
// =============================================================================
