//! DOM operations adapter.
//!
//! Thin helpers over the `dom_query` tree, keeping traversal details in one
//! place so the facade reads as query assembly plus result shaping.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Get all text content of node and descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Collect an attribute's value from every node of a selection, in document
/// order. Nodes lacking the attribute contribute nothing.
#[must_use]
pub fn attr_values(sel: &Selection, name: &str) -> Vec<String> {
    sel.iter()
        .filter_map(|node| node.attr(name))
        .map(|value| value.to_string())
        .collect()
}

/// The contents of the direct child text nodes of a selection's first node,
/// in document order. Text inside child elements is not included.
#[must_use]
pub fn direct_text_nodes(sel: &Selection) -> Vec<StrTendril> {
    let Some(node) = sel.nodes().first() else {
        return Vec::new();
    };
    let mut texts = Vec::new();
    for child in node.children() {
        if child.is_text() {
            texts.push(child.text());
        }
    }
    texts
}

/// The contents of every text node in a node's subtree, in document order.
#[must_use]
pub fn descendant_text_nodes(node: &NodeRef) -> Vec<StrTendril> {
    let mut texts = Vec::new();
    for desc in node.descendants() {
        if desc.is_text() {
            texts.push(desc.text());
        }
    }
    texts
}

/// Whether any ancestor element of `node` has the given tag name.
#[must_use]
pub fn has_ancestor_tag(node: &NodeRef, tag: &str) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.is_element() {
            if let Some(name) = parent.node_name() {
                if name.eq_ignore_ascii_case(tag) {
                    return true;
                }
            }
        }
        current = parent.parent();
    }
    false
}
