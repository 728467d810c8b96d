//! Shadow scopes - isolated style + content per component instance.
//!
//! Each instance owns one scope. A render replaces the whole scope in a
//! single step (style then content, never one without the other), so no
//! partially rendered state is ever observable. Detaching clears it.

use super::Node;

// =============================================================================
// Style Sheets
// =============================================================================

/// Scoped style text. Styles never leak across scopes; the css is only
/// meaningful inside the scope that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheet {
    css: String,
}

impl StyleSheet {
    pub fn new(css: &str) -> Self {
        Self {
            css: css.to_string(),
        }
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

// =============================================================================
// Shadow Scope
// =============================================================================

/// The isolated rendering scope of one component instance.
///
/// Either empty (never rendered, or detached) or holding exactly one
/// complete (style, content) pair.
#[derive(Debug, Default)]
pub struct ShadowScope {
    inner: Option<(StyleSheet, Node)>,
}

impl ShadowScope {
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Replace the scope's content atomically.
    pub fn replace(&mut self, style: StyleSheet, content: Node) {
        self.inner = Some((style, content));
    }

    /// Drop all rendered content.
    pub fn clear(&mut self) {
        self.inner = None;
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    pub fn style(&self) -> Option<&StyleSheet> {
        self.inner.as_ref().map(|(style, _)| style)
    }

    pub fn content(&self) -> Option<&Node> {
        self.inner.as_ref().map(|(_, content)| content)
    }

    pub fn content_mut(&mut self) -> Option<&mut Node> {
        self.inner.as_mut().map(|(_, content)| content)
    }

    /// Serialize the whole scope the way a shadow root would look:
    /// the style element first, then the content.
    pub fn to_html(&self) -> String {
        match &self.inner {
            Some((style, content)) => {
                format!("<style>{}</style>{}", style.css(), content.to_html())
            }
            None => String::new(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_starts_empty() {
        let scope = ShadowScope::new();
        assert!(scope.is_empty());
        assert!(scope.style().is_none());
        assert!(scope.content().is_none());
        assert_eq!(scope.to_html(), "");
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut scope = ShadowScope::new();
        scope.replace(
            StyleSheet::new(".icon { padding: 8px; }"),
            Node::element("div").with_id("icon"),
        );
        assert!(!scope.is_empty());

        scope.replace(StyleSheet::new(""), Node::element("section"));
        // Nothing from the first render survives.
        assert_eq!(scope.style().unwrap().css(), "");
        assert_eq!(scope.content().unwrap().tag(), "section");
        assert!(scope.content().unwrap().find_by_id("icon").is_none());
    }

    #[test]
    fn test_clear() {
        let mut scope = ShadowScope::new();
        scope.replace(StyleSheet::new("* { margin: 0; }"), Node::element("div"));
        scope.clear();
        assert!(scope.is_empty());
    }

    #[test]
    fn test_to_html_style_before_content() {
        let mut scope = ShadowScope::new();
        scope.replace(
            StyleSheet::new(".sidebar { width: 70px; }"),
            Node::element("section").with_class("sidebar"),
        );
        assert_eq!(
            scope.to_html(),
            "<style>.sidebar { width: 70px; }</style><section class=\"sidebar\"></section>"
        );
    }
}
