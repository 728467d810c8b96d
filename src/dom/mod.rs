//! Element tree - the headless stand-in for the browser DOM.
//!
//! Components render into a [`ShadowScope`]: one style sheet plus one
//! content [`Node`], replaced wholesale on every render. There is no
//! incremental diffing; the scope either holds a complete render or
//! nothing at all.

mod node;
mod shadow;

pub use node::Node;
pub use shadow::{ShadowScope, StyleSheet};
