//! The vit-contact view - address, phone and the route map.

use crate::component::{Component, View};
use crate::dom::{Node, StyleSheet};

use super::logo;

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

.map {
  max-width: 450px;
}

.link-wrapper {
  padding: 10px;
}
";

const ROUTE_LINK: &str = "https://www.google.be/maps/place/Smits+%2F+Boudewijn/@50.9485963,4.7560517,16.5z";

/// The contact view.
pub struct Contact;

impl Component for Contact {
    fn style(&self, _view: &View) -> StyleSheet {
        StyleSheet::new(STYLE)
    }

    fn content(&self, _view: &View) -> Node {
        Node::element("div")
            .with_id("page")
            .with_child(logo())
            .with_child(
                Node::element("div")
                    .with_id("address")
                    .with_child(
                        Node::element("h4").with_text("Telefoon nummer:").with_child(
                            Node::element("a")
                                .with_class("link")
                                .with_attr("href", "tel:016582170")
                                .with_text("016/58 21 70"),
                        ),
                    )
                    .with_child(Node::element("div").with_text("Kerkstraat 17,"))
                    .with_child(Node::element("div").with_text("3111 Wezemaal,"))
                    .with_child(Node::element("div").with_text("België"))
                    .with_child(
                        Node::element("div").with_class("link-wrapper").with_child(
                            Node::element("a")
                                .with_class("link")
                                .with_attr("href", ROUTE_LINK)
                                .with_text("Plan uw rit!"),
                        ),
                    ),
            )
            .with_child(
                Node::element("img")
                    .with_class("map")
                    .with_attr("src", "../assets/access.png"),
            )
    }
}

// =============================================================================
// Tests
// =============================================================================
