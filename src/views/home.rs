//! The vit-home view - shop logo and welcome copy.

use crate::component::{Component, View};
use crate::dom::{Node, StyleSheet};

use super::{description_block, logo};

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

.description-block {
  background: rgb(50, 50, 50, 0.7);
  color: silver;
  flex-grow: 1;
  padding: 10px;
  font-size: 18px;
}

.logo {
  flex-grow: 1;
  max-width: 450px;
  background-color: black;
}
";

const DESCRIPTION: &str = "\
Welkom bij Juweliers Smits-Wagemans.

Voor een goede service en precisiewerk moet je bij Juweliers Smits-Wagemans zijn.
Als je langsgaat zal je man en vrouw samen achter de toonbank aantreffen.
Reeds meer dan 30 jaar herstellen ze uurwerken in hun eigen atelier en ontwerpen ze unieke juwelen.
Indien je dat wenst kunnen ze zelfs met jouw oud goud een nieuw design ontwerpen.

Het is dus al sinds 1978 dat ze bij Juweliers Smits-Wagemans met professionele zorg de juwelen en
uurwerken tot een unieke schittering brengen. Ze zijn gelegen vlakbij de kerk van Wezemaal in de
Kerkstraat te Rotselaar.";

/// The landing view.
pub struct Home;

impl Component for Home {
    fn style(&self, _view: &View) -> StyleSheet {
        StyleSheet::new(STYLE)
    }

    fn content(&self, _view: &View) -> Node {
        Node::element("div")
            .with_id("page")
            .with_child(logo())
            .with_child(description_block(DESCRIPTION))
    }
}

// =============================================================================
// Tests
// =============================================================================
