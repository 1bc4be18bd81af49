// ABOUTME: DOM parsing, lookup and mutation helpers over scraper's HTML document tree.
// ABOUTME: Provides id lookup, ancestry checks, class-prefix matching, and extract/insert-after primitives.

//! DOM utilities for HTML document manipulation.
//!
//! Documents are parsed with `scraper` (html5ever underneath), which keeps the
//! tree in an `ego_tree::Tree`. Nodes are addressed by `NodeId` so that a plan
//! can be computed against an immutable borrow and applied afterwards.

use std::collections::HashSet;

use ego_tree::{NodeId, NodeRef};
use scraper::node::Element;
use scraper::{ElementRef, Html, Node};

/// Parse a full HTML document. Malformed markup is tolerated; the parser's
/// recovery notes are only logged.
pub fn parse(text: &str) -> Html {
    let html = Html::parse_document(text);
    if !html.errors.is_empty() {
        tracing::debug!(errors = html.errors.len(), "html parsed with recoverable errors");
    }
    html
}

/// Iterate every element of the document in document order.
pub fn elements(html: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    html.tree.root().descendants().filter_map(ElementRef::wrap)
}

/// Find the first element in document order whose id equals `id`.
pub fn find_by_id(html: &Html, id: &str) -> Option<NodeId> {
    elements(html)
        .find(|el| el.value().id() == Some(id))
        .map(|el| el.id())
}

/// True if `node` or any of its ancestors is in `ids`.
pub fn is_within(node: NodeRef<'_, Node>, ids: &HashSet<NodeId>) -> bool {
    ids.contains(&node.id()) || node.ancestors().any(|a| ids.contains(&a.id()))
}

/// True if `ancestor` is a proper ancestor of `node`.
pub fn is_ancestor(html: &Html, ancestor: NodeId, node: NodeId) -> bool {
    html.tree
        .get(node)
        .map(|n| n.ancestors().any(|a| a.id() == ancestor))
        .unwrap_or(false)
}

/// True if the element's tag name equals `tag` (ASCII case-insensitive).
pub fn has_tag(el: &Element, tag: &str) -> bool {
    el.name().eq_ignore_ascii_case(tag)
}

/// True if the element's id attribute starts with `prefix`.
pub fn id_starts_with(el: &Element, prefix: &str) -> bool {
    el.id().is_some_and(|id| id.starts_with(prefix))
}

/// True if any whitespace-separated class token starts with `prefix`.
pub fn class_has_prefix(el: &Element, prefix: &str) -> bool {
    el.classes().any(|c| c.starts_with(prefix))
}

/// True if `node` is immediately followed by `sibling` (no node in between,
/// including text).
pub fn is_next_sibling(html: &Html, node: NodeId, sibling: NodeId) -> bool {
    html.tree
        .get(node)
        .and_then(|n| n.next_sibling())
        .is_some_and(|next| next.id() == sibling)
}

/// Like [`is_next_sibling`], but siblings listed in `skip` are treated as
/// already gone.
pub fn is_next_sibling_skipping(
    html: &Html,
    node: NodeId,
    sibling: NodeId,
    skip: &HashSet<NodeId>,
) -> bool {
    html.tree
        .get(node)
        .and_then(|n| n.next_siblings().find(|s| !skip.contains(&s.id())))
        .is_some_and(|next| next.id() == sibling)
}

/// Extract a node (and its subtree) from its parent. Returns false if the id
/// is unknown.
pub fn detach(html: &mut Html, id: NodeId) -> bool {
    match html.tree.get_mut(id) {
        Some(mut node) => {
            node.detach();
            true
        }
        None => false,
    }
}

/// Place `node` as the next sibling of `anchor`, detaching it from wherever
/// it currently lives. The anchor must have a parent and must not lie inside
/// `node`.
pub fn insert_after(html: &mut Html, anchor: NodeId, node: NodeId) -> bool {
    let has_parent = html
        .tree
        .get(anchor)
        .is_some_and(|a| a.parent().is_some());
    if !has_parent || anchor == node || is_ancestor(html, node, anchor) {
        return false;
    }
    detach(html, node);
    match html.tree.get_mut(anchor) {
        Some(mut a) => {
            a.insert_id_after(node);
            true
        }
        None => false,
    }
}
