//! Element nodes.
//!
//! A [`Node`] is an element with a tag, string attributes, optional text
//! and child nodes. Components build these trees in their `content` hook;
//! the display tree stores them inside shadow scopes and upgrades child
//! elements whose tag is registered.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// One element of the rendered content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Create an element with the given tag.
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Whether the space-separated `class` attribute contains `name`.
    pub fn has_class(&self, name: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == name))
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Replace all children at once.
    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Depth-first search for the element with the given `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Mutable variant of [`find_by_id`](Self::find_by_id).
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// All elements with the given tag, in document order (self included).
    pub fn find_all_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Node>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_tag(tag, found);
        }
    }

    /// Concatenated text of this element and all descendants, in document
    /// order, separated by newlines.
    pub fn inner_text(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join("\n")
    }

    fn collect_text(&self, parts: &mut Vec<String>) {
        if let Some(text) = &self.text {
            parts.push(text.clone());
        }
        for child in &self.children {
            child.collect_text(parts);
        }
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize to HTML. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_and_accessors() {
        let node = Node::element("section")
            .with_class("sidebar")
            .with_child(Node::element("span").with_id("day").with_text("Maandag"));

        assert_eq!(node.tag(), "section");
        assert!(node.has_class("sidebar"));
        assert!(!node.has_class("side"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].text(), Some("Maandag"));
    }

    #[test]
    fn test_find_by_id() {
        let tree = Node::element("div").with_child(
            Node::element("aside")
                .with_id("page")
                .with_child(Node::element("img").with_id("logo")),
        );

        assert_eq!(tree.find_by_id("page").map(Node::tag), Some("aside"));
        assert_eq!(tree.find_by_id("logo").map(Node::tag), Some("img"));
        assert!(tree.find_by_id("missing").is_none());
    }

    #[test]
    fn test_find_by_id_mut_replaces_children() {
        let mut tree = Node::element("section")
            .with_child(Node::element("aside").with_id("page").with_child(Node::element("vit-home")));

        let slot = tree.find_by_id_mut("page").unwrap();
        slot.replace_children(vec![Node::element("vit-uren")]);

        assert_eq!(tree.find_all_by_tag("vit-home").len(), 0);
        assert_eq!(tree.find_all_by_tag("vit-uren").len(), 1);
    }

    #[test]
    fn test_inner_text_document_order() {
        let tree = Node::element("div")
            .with_child(Node::element("span").with_text("Woensdag"))
            .with_child(Node::element("span").with_text("10:00-12:30, 14:00-18:00"));

        assert_eq!(tree.inner_text(), "Woensdag\n10:00-12:30, 14:00-18:00");
    }

    #[test]
    fn test_to_html_escapes() {
        let node = Node::element("a")
            .with_attr("href", "/uren?a=\"1\"")
            .with_text("Smits & Wagemans <est. 1978>");

        let html = node.to_html();
        assert_eq!(
            html,
            "<a href=\"/uren?a=&quot;1&quot;\">Smits &amp; Wagemans &lt;est. 1978&gt;</a>"
        );
    }
}
