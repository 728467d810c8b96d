//! # vitrine
//!
//! Headless web-component-style display framework with a client-side
//! path router.
//!
//! ## Architecture
//!
//! Every visual unit implements one contract: declared observed
//! attributes and non-reflecting properties, a style hook and a content
//! hook. Instances live in a display tree that drives the lifecycle and
//! re-renders wholesale on any observed change:
//!
//! ```text
//! attribute/property change → render (style + content, atomic swap)
//! child tags in content     → upgraded via the explicit tag registry
//! user interaction          → events bubble upward, components answer
//!                             with commands the tree executes
//! URL path                  → router resolves one root view, total
//!                             fallback, history push/pop in sync
//! ```
//!
//! Rendered output is a pure function of the current attribute/property
//! mapping; no hidden render state survives a re-render.
//!
//! ## Modules
//!
//! - [`types`] - Core types (PropertyValue, NavEntry, CustomEvent, flags)
//! - [`dom`] - Element tree and shadow scopes
//! - [`component`] - The contract, the tag registry and the display tree
//! - [`router`] - Route table, resolution and the history stack
//! - [`elements`] - Navigation chrome (icon, sidebar, page shell)
//! - [`views`] - The five shop views

pub mod component;
pub mod dom;
pub mod elements;
pub mod router;
pub mod types;
pub mod views;

// Re-export commonly used items
pub use types::{CustomEvent, InstanceFlags, NavEntry, PropertyValue};

pub use dom::{Node, ShadowScope, StyleSheet};

pub use component::{
    Command, Component, ComponentRegistry, ComponentTree, InstanceId, RegistryError, TreeError,
    View,
};

pub use router::{HistoryApi, MemoryHistory, Route, Router, RouterError};

pub use elements::{default_entries, view_tag, Icon, Page, Sidebar};

/// Define every element and view this crate ships on a registry.
pub fn register_defaults(registry: &mut ComponentRegistry) -> Result<(), RegistryError> {
    registry.define("vit-icon", || Icon)?;
    registry.define("vit-sidebar", || Sidebar)?;
    registry.define("vit-page", || Page)?;
    views::register(registry)?;
    Ok(())
}

/// The shop's route table: one path per view, home first so it doubles
/// as the fallback.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("/", "vit-home"),
        Route::new("/uren", "vit-uren"),
        Route::new("/juwelen", "vit-juwelen"),
        Route::new("/uurwerken", "vit-uurwerken"),
        Route::new("/contact", "vit-contact"),
    ]
}
