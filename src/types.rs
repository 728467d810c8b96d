//! Core types for vitrine.
//!
//! These types define the foundation that everything builds on.
//! They flow between the display tree, the components and the router.

// =============================================================================
// Instance Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Lifecycle state of a component instance as a bitfield.
    ///
    /// Combine with bitwise OR: `InstanceFlags::ATTACHED | InstanceFlags::RENDERED`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InstanceFlags: u8 {
        const NONE = 0;
        /// The instance is currently part of the display tree.
        const ATTACHED = 1 << 0;
        /// The instance has produced rendered content at least once.
        const RENDERED = 1 << 1;
    }
}

// =============================================================================
// Property Values
// =============================================================================

/// Value of a non-reflecting property.
///
/// Attributes are always strings (they come from markup); properties are
/// set programmatically and can carry structured data like the navigation
/// entry list.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Entries(Vec<NavEntry>),
}

impl PropertyValue {
    /// The entry list carried by this value, if it is one.
    pub fn as_entries(&self) -> Option<&[NavEntry]> {
        match self {
            PropertyValue::Entries(entries) => Some(entries),
            _ => None,
        }
    }

    /// The string carried by this value, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_string())
    }
}

impl From<Vec<NavEntry>> for PropertyValue {
    fn from(value: Vec<NavEntry>) -> Self {
        PropertyValue::Entries(value)
    }
}

// =============================================================================
// Navigation Entries
// =============================================================================

/// One entry of the sidebar navigation.
///
/// Supplied once by the page shell, read-only from the sidebar's
/// perspective. `target` is the identifier carried by the navigate
/// signal; `icon` names the glyph asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub icon: String,
    pub target: String,
    pub label: String,
}

impl NavEntry {
    pub fn new(icon: &str, target: &str, label: &str) -> Self {
        Self {
            icon: icon.to_string(),
            target: target.to_string(),
            label: label.to_string(),
        }
    }
}

// =============================================================================
// Custom Events
// =============================================================================

/// A signal dispatched from a component instance.
///
/// Events propagate upward through containing scopes only: the target's
/// own scope first, then each ancestor in order. Delivery is synchronous;
/// listeners run in registration order and their return values are never
/// seen by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEvent {
    pub kind: String,
    pub detail: String,
}

impl CustomEvent {
    pub fn new(kind: &str, detail: &str) -> Self {
        Self {
            kind: kind.to_string(),
            detail: detail.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
