//! Views - the five top-level pages of the shop.
//!
//! Each view is a plain component on the contract: static copy, brand
//! grids and the opening-hours table. Asset paths are opaque relative
//! strings resolved by the hosting environment.

mod contact;
mod home;
mod hours;
mod jewels;
mod watches;

pub use contact::Contact;
pub use home::Home;
pub use hours::Hours;
pub use jewels::Jewels;
pub use watches::Watches;

use crate::component::{ComponentRegistry, RegistryError};
use crate::dom::Node;

/// Define all view tags on a registry.
pub fn register(registry: &mut ComponentRegistry) -> Result<(), RegistryError> {
    registry.define("vit-home", || Home)?;
    registry.define("vit-uren", || Hours)?;
    registry.define("vit-juwelen", || Jewels)?;
    registry.define("vit-uurwerken", || Watches)?;
    registry.define("vit-contact", || Contact)?;
    Ok(())
}

// =============================================================================
// Shared building blocks
// =============================================================================

/// One brand logo linking to the brand's site.
pub struct Brand {
    pub file: &'static str,
    pub link: &'static str,
}

/// The linked logo grid used by the jewelry and watch views.
pub fn brand_grid(brands: &[Brand]) -> Node {
    Node::element("div")
        .with_class("brand-container")
        .with_children(brands.iter().map(|brand| {
            Node::element("a").with_attr("href", brand.link).with_child(
                Node::element("img")
                    .with_class("brand-item")
                    .with_attr("src", &format!("../assets/{}", brand.file)),
            )
        }))
}

/// The prose block under the shop logo.
pub fn description_block(text: &str) -> Node {
    Node::element("section")
        .with_class("description-block")
        .with_text(text)
}

/// The shop logo image.
pub fn logo() -> Node {
    Node::element("img")
        .with_class("logo")
        .with_attr("src", "../assets/logo.jpg")
}

// =============================================================================
// Tests
// =============================================================================
