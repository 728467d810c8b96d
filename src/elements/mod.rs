//! Shop elements - the navigation chrome built on the component contract.
//!
//! [`Icon`] renders one navigation glyph, [`Sidebar`] the icon column,
//! [`Page`] the shell that owns the content slot and answers navigate
//! signals.

mod icon;
mod page;
mod sidebar;

pub use icon::Icon;
pub use page::{default_entries, view_tag, Page};
pub use sidebar::Sidebar;
