//! The vit-uren view - opening hours and the announcement banner.

use crate::component::{Component, View};
use crate::dom::{Node, StyleSheet};

use super::logo;

const STYLE: &str = "
* {
  box-sizing: border-box;
}

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

.announcements {
  width: 100%;
  padding: 25px;
  margin: 65px 15px 25px 15px;
  background-color: #660000;
  color: silver;
  border-radius: 15px;
  font-weight: bold;
}

.time-element {
  display: flex;
  flex-direction: row;
  justify-content: space-between;
  padding: 10px;
  min-width: 350px;
  font-weight: bold;
  font-size: 18px;
}
";

/// Weekly schedule, one row per entry.
const OPENING_HOURS: &[(&str, &str)] = &[
    ("Maandag", "Gesloten"),
    ("Dinsdag", "Gesloten"),
    ("Woensdag", "10:00-12:30, 14:00-18:00"),
    ("Donderdag", "10:00-12:30, 14:00-18:00"),
    ("Vrijdag", "10:00-12:30, 14:00-18:00"),
    ("Zaterdag", "09:00-16:00"),
    ("Zondag en Feestdagen", "Gesloten"),
];

/// The opening-hours view.
///
/// Attributes: `announcement` (optional banner text shown above the
/// table).
pub struct Hours;

impl Component for Hours {
    fn observed_attributes(&self) -> &'static [&'static str] {
        &["announcement"]
    }

    fn style(&self, _view: &View) -> StyleSheet {
        StyleSheet::new(STYLE)
    }

    fn content(&self, view: &View) -> Node {
        let mut page = Node::element("div").with_id("page");
        if let Some(announcement) = view.attr("announcement") {
            page = page.with_child(
                Node::element("div")
                    .with_class("announcements")
                    .with_text(announcement),
            );
        }
        page.with_child(logo()).with_child(
            Node::element("div").with_id("hours").with_children(
                OPENING_HOURS.iter().map(|(day, hours)| {
                    Node::element("div")
                        .with_class("time-element")
                        .with_child(Node::element("span").with_text(day))
                        .with_child(Node::element("span").with_text(hours))
                }),
            ),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
