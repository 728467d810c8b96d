//! The vit-uurwerken view - watch brand grid.

use crate::component::{Component, View};
use crate::dom::{Node, StyleSheet};

use super::{brand_grid, logo, Brand};

const STYLE: &str = "
#page {
  width: calc(100vw - 250px);
  height: 100vh;
  display: flex;
  flex-direction: row;
  flex-wrap: wrap;
  justify-content: space-around;
  align-items: center;
  overflow: auto;
  font-family: 'Quicksand', sans-serif;
}

.brand-container {
  display: flex;
  flex-direction: row;
  flex-wrap: wrap;
  justify-content: space-around;
}

.brand-item {
  height: 120px;
  display: block;
}
";

const BRANDS: &[Brand] = &[
    Brand {
        file: "jaguar.jpg",
        link: "https://jaguarswisswatches.com/en-GB",
    },
    Brand {
        file: "festina.png",
        link: "https://festina.com/en-GB",
    },
    Brand {
        file: "candino.jpg",
        link: "https://www.candino.com/en/",
    },
    Brand {
        file: "lotus.png",
        link: "https://lotus-watches.com/en-GB",
    },
    Brand {
        file: "calypso.jpg",
        link: "https://www.calypso-watch.com/en/",
    },
    Brand {
        file: "seiko.png",
        link: "https://www.seikowatches.com/",
    },
    Brand {
        file: "jacobjensen.png",
        link: "https://jacobjensendesign.com/watches",
    },
    Brand {
        file: "boccia.jpg",
        link: "https://www.boccia.com/collections/mens-watches",
    },
    Brand {
        file: "lorus.png",
        link: "http://www.loruswatches.com/",
    },
    Brand {
        file: "royal.jpg",
        link: "https://royallondonwatches.com/",
    },
];

/// The watch brands view.
pub struct Watches;

impl Component for Watches {
    fn style(&self, _view: &View) -> StyleSheet {
        StyleSheet::new(STYLE)
    }

    fn content(&self, _view: &View) -> Node {
        Node::element("div")
            .with_id("page")
            .with_child(logo())
            .with_child(brand_grid(BRANDS))
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

    #[test]
    fn test_all_brands_linked() {
        let mut registry = ComponentRegistry::new();
        registry.define("vit-uurwerken", || Watches).unwrap();
        let mut tree = ComponentTree::new(Rc::new(registry));

        let id = tree.create("vit-uurwerken").unwrap();
        tree.attach(id, None).unwrap();

        let content = tree.shadow(id).unwrap().content().unwrap();
        let anchors = content.find_all_by_tag("a");
        assert_eq!(anchors.len(), 10);
        assert!(anchors
            .iter()
            .any(|a| a.attr("href") == Some("https://www.seikowatches.com/")));
    }
}
