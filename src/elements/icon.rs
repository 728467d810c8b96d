//! The vit-icon element - one round navigation glyph with a hover label.

use crate::component::{Component, View};
use crate::dom::{Node, StyleSheet};

/// Glyphs with a shipped asset. Anything else renders the signpost
/// placeholder rather than failing.
const KNOWN_ICONS: &[&str] = &["home", "time", "diamond", "watch", "map"];

const STYLE: &str = "
.icon {
  padding: 8px;
  background: #999999;
  margin: 12px 0;
  border-radius: 50px;
  width: 40px;
  height: 40px;
}

.icon:hover {
  background: #ececf9;
  box-shadow: rgb(230, 255, 255, 035) 0px 5px 15px;
}

.icon:active {
  background: #ffffff;
}

.active {
  background: #ffffff;
}

.hidden {
  position: relative;
  color: #212121;
  font-size: 24px;
  min-width: 250px;
  display: none;
  padding: 25px;
  background-image: url(\"../assets/sign.png\");
  background-repeat: no-repeat;
}

div:hover .hidden {
  display: block;
}

.text {
  width: 100%;
  text-align: center;
  line-height: 10px;
}
";

/// One navigation icon.
///
/// Attributes: `icon` (glyph name), `text` (hover label), `active`
/// (`"true"` marks this entry as the current one).
pub struct Icon;

impl Component for Icon {
    fn observed_attributes(&self) -> &'static [&'static str] {
        &["icon", "text", "active"]
    }

    fn style(&self, _view: &View) -> StyleSheet {
        StyleSheet::new(STYLE)
    }

    fn content(&self, view: &View) -> Node {
        let icon = view.attr_or("icon", "home");
        let glyph = if KNOWN_ICONS.contains(&icon) {
            icon
        } else {
            "sign"
        };
        let class = if view.attr_is_true("active") {
            "icon active"
        } else {
            "icon"
        };

        Node::element("div")
            .with_id("icon")
            .with_class(class)
            .with_child(
                Node::element("img")
                    .with_attr("src", &format!("./assets/{glyph}.png"))
                    .with_attr("alt", "icon")
                    .with_attr("width", "40"),
            )
            .with_child(
                Node::element("div").with_class("hidden").with_child(
                    Node::element("div")
                        .with_class("text")
                        .with_text(view.attr_or("text", "home")),
                ),
            )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentRegistry, ComponentTree};
    use std::rc::Rc;

    fn setup() -> ComponentTree {
        let mut registry = ComponentRegistry::new();
        registry.define("vit-icon", || Icon).unwrap();
        ComponentTree::new(Rc::new(registry))
    }

    #[test]
    fn test_renders_glyph_and_label() {
        let mut tree = setup();
        let id = tree.create("vit-icon").unwrap();
        tree.attach(id, None).unwrap();
        tree.set_attribute(id, "icon", "time").unwrap();
        tree.set_attribute(id, "text", "Openingsuren").unwrap();

        let shadow = tree.shadow(id).unwrap();
        let content = shadow.content().unwrap();
        let img = &content.children()[0];
        assert_eq!(img.attr("src"), Some("./assets/time.png"));
        assert_eq!(content.inner_text(), "Openingsuren");
        assert!(shadow.style().unwrap().css().contains(".icon"));
    }

    #[test]
    fn test_defaults_to_home() {
        let mut tree = setup();
        let id = tree.create("vit-icon").unwrap();
        tree.attach(id, None).unwrap();

        let content = tree.shadow(id).unwrap().content().unwrap();
        assert_eq!(content.children()[0].attr("src"), Some("./assets/home.png"));
    }

    #[test]
    fn test_unknown_glyph_renders_placeholder() {
        let mut tree = setup();
        let id = tree.create("vit-icon").unwrap();
        tree.attach(id, None).unwrap();
        tree.set_attribute(id, "icon", "anchor").unwrap();

        let content = tree.shadow(id).unwrap().content().unwrap();
        assert_eq!(content.children()[0].attr("src"), Some("./assets/sign.png"));
    }

    #[test]
    fn test_active_attribute_toggles_class() {
        let mut tree = setup();
        let id = tree.create("vit-icon").unwrap();
        tree.attach(id, None).unwrap();

        assert!(!tree.shadow(id).unwrap().content().unwrap().has_class("active"));

        tree.set_attribute(id, "active", "true").unwrap();
        assert!(tree.shadow(id).unwrap().content().unwrap().has_class("active"));

        tree.set_attribute(id, "active", "false").unwrap();
        assert!(!tree.shadow(id).unwrap().content().unwrap().has_class("active"));
    }
}
