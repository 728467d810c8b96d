//! The vit-juwelen view - jewelry brand grid.

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
        file: "orage.jpg",
        link: "http://www.orage.be/",
    },
    Brand {
        file: "fjf.png",
        link: "https://www.fjf-jewellery.com/",
    },
    Brand {
        file: "pertutti.png",
        link: "https://www.diamantipertutti.com/",
    },
    Brand {
        file: "ferarri.png",
        link: "https://www.ferrarifirenze.com/",
    },
    Brand {
        file: "auro.jpg",
        link: "https://www.vdbvr.com/en/collections/111/aurodesign",
    },
    Brand {
        file: "dulci.jpg",
        link: "https://www.dulcinea.be/",
    },
];

/// The jewelry brands view.
pub struct Jewels;

impl Component for Jewels {
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
