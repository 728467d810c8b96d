//! The vit-page element - the page shell.
//!
//! Owns the sidebar and the content slot, supplies the navigation entry
//! list once per render, and answers navigate signals by swapping the
//! slot and moving the exclusive active mark. Unknown targets fall back
//! to home so the slot is never stale.

use tracing::debug;

use crate::component::{Command, Component, View};
use crate::dom::{Node, StyleSheet};
use crate::types::{CustomEvent, NavEntry, PropertyValue};

const STYLE: &str = "
section {
  display: flex;
  flex-direction: row;
  height: 100vh;
  width: 100vw;
  padding: 0;
  margin: 0;
}

#page {
  width: calc(100vw - 60px);
}
";

/// The shop's navigation entries.
pub fn default_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("home", "home", "Over ons"),
        NavEntry::new("time", "uren", "Openingsuren"),
        NavEntry::new("diamond", "juwelen", "Juwelen merken"),
        NavEntry::new("watch", "uurwerken", "Horloge merken"),
        NavEntry::new("map", "contact", "Bereikbaarheid"),
    ]
}

/// The view tag mounted for a navigation target.
pub fn view_tag(target: &str) -> Option<&'static str> {
    match target {
        "home" => Some("vit-home"),
        "uren" => Some("vit-uren"),
        "juwelen" => Some("vit-juwelen"),
        "uurwerken" => Some("vit-uurwerken"),
        "contact" => Some("vit-contact"),
        _ => None,
    }
}

/// The page shell: sidebar plus content slot.
pub struct Page;

impl Component for Page {
    fn style(&self, _view: &View) -> StyleSheet {
        StyleSheet::new(STYLE)
    }

    fn content(&self, _view: &View) -> Node {
        Node::element("section")
            .with_child(
                Node::element("vit-sidebar")
                    .with_id("sidebar")
                    .with_attr("active-target", "home"),
            )
            .with_child(
                Node::element("aside")
                    .with_id("page")
                    .with_child(Node::element("vit-home")),
            )
    }

    fn setup(&self, _view: &View) -> Vec<Command> {
        // Entries are a non-reflecting property, so they cannot travel
        // through markup; wire them after every render.
        vec![Command::SetChildProperty {
            child: "sidebar".to_string(),
            name: "entries".to_string(),
            value: PropertyValue::Entries(default_entries()),
        }]
    }

    fn on_event(&self, _view: &View, event: &CustomEvent) -> Vec<Command> {
        if event.kind != "navigate" {
            return Vec::new();
        }
        // Unknown targets resolve to home, never to a stale slot.
        let (target, tag) = match view_tag(&event.detail) {
            Some(tag) => (event.detail.as_str(), tag),
            None => {
                debug!(target = %event.detail, "unknown navigation target, falling back to home");
                ("home", "vit-home")
            }
        };
        vec![
            Command::SwapSlot {
                slot: "page".to_string(),
                tag: tag.to_string(),
            },
            Command::SetChildAttribute {
                child: "sidebar".to_string(),
                name: "active-target".to_string(),
                value: target.to_string(),
            },
        ]
    }
}

// =============================================================================
// Tests
// =============================================================================
