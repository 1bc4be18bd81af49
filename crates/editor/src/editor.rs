// ABOUTME: The document editor: plans the cleanup removals, then moves #sidebar right after #content.
// ABOUTME: preview() runs the same planning step read-only so its counts match what transform() removes.

//! Sidebar relocation and cleanup.
//!
//! Both [`transform`] and [`preview`] go through a single planning step that
//! locates the two sections, validates them, and decides which subtrees the
//! cleanup pass removes. `transform` then applies the plan to the tree;
//! `preview` only reports it. Nothing is mutated until the plan has been
//! validated, so errors never leave a half-edited document.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{ElementRef, Html};

use crate::counts::RemovalCounts;
use crate::dom;
use crate::error::{EditError, Section};
use crate::rules::{aside_id, is_denied_aside, RemovalKind, DOCUMENT_RULES};

/// What the editor would do to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub counts: RemovalCounts,
    /// The sidebar already directly follows the content element once the
    /// planned removals are gone.
    pub sidebar_in_place: bool,
}

impl Preview {
    /// Returns true if transforming the document would change its tree.
    pub fn has_changes(&self) -> bool {
        !self.counts.is_empty() || !self.sidebar_in_place
    }
}

/// The result of editing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub html: String,
    pub counts: RemovalCounts,
    /// The sidebar changed position.
    pub moved: bool,
}

struct Plan {
    content: NodeId,
    sidebar: NodeId,
    removals: Vec<(NodeId, RemovalKind)>,
    counts: RemovalCounts,
    sidebar_in_place: bool,
}

fn locate(html: &Html, section: Section) -> Result<NodeId, EditError> {
    dom::find_by_id(html, section.id()).ok_or(EditError::MissingSection(section))
}

fn plan(html: &Html) -> Result<Plan, EditError> {
    let content = locate(html, Section::Content)?;
    let sidebar = locate(html, Section::Sidebar)?;

    if dom::is_ancestor(html, sidebar, content) {
        return Err(EditError::SidebarContainsContent);
    }

    let mut removed: HashSet<NodeId> = HashSet::new();
    let mut removals = Vec::new();
    let mut counts = RemovalCounts::default();
    let mut rule_used = [false; DOCUMENT_RULES.len()];

    // Every match is counted, including those nested in a subtree that is
    // already going away; only the outermost node of each subtree is detached.
    for el in dom::elements(html) {
        let hit = DOCUMENT_RULES
            .iter()
            .enumerate()
            .find(|(i, rule)| !(rule.first_only && rule_used[*i]) && rule.applies_to(el.value()));
        let Some((i, rule)) = hit else {
            continue;
        };
        rule_used[i] = true;
        counts.record(rule.kind);
        if !dom::is_within(*el, &removed) {
            removed.insert(el.id());
            removals.push((el.id(), rule.kind));
        }
    }

    for (section, id) in [(Section::Content, content), (Section::Sidebar, sidebar)] {
        if let Some(node) = html.tree.get(id) {
            if dom::is_within(node, &removed) {
                return Err(EditError::SectionRemoved(section));
            }
        }
    }

    if let Some(sidebar_node) = html.tree.get(sidebar) {
        let mut seen: HashSet<&str> = HashSet::new();
        for el in sidebar_node.descendants().skip(1).filter_map(ElementRef::wrap) {
            let Some(id) = aside_id(el.value()) else {
                continue;
            };
            if dom::is_within(*el, &removed) {
                continue;
            }
            let kind = if is_denied_aside(id) {
                RemovalKind::UnwantedAside
            } else if !seen.insert(id) {
                RemovalKind::DuplicateAside
            } else {
                continue;
            };
            removed.insert(el.id());
            removals.push((el.id(), kind));
            counts.record(kind);
        }
    }

    Ok(Plan {
        content,
        sidebar,
        removals,
        counts,
        sidebar_in_place: dom::is_next_sibling_skipping(html, content, sidebar, &removed),
    })
}

/// Compute what [`transform`] would remove, without changing anything.
pub fn preview(text: &str) -> Result<Preview, EditError> {
    let html = dom::parse(text);
    let plan = plan(&html)?;
    Ok(Preview {
        counts: plan.counts,
        sidebar_in_place: plan.sidebar_in_place,
    })
}

/// Move the sidebar after the content element and strip unwanted nodes,
/// returning the serialized document along with what was removed.
pub fn transform_with_counts(text: &str) -> Result<Edit, EditError> {
    let mut html = dom::parse(text);
    let plan = plan(&html)?;

    for (id, kind) in &plan.removals {
        tracing::debug!(?kind, "removing node");
        dom::detach(&mut html, *id);
    }

    let inserted = dom::insert_after(&mut html, plan.content, plan.sidebar);
    debug_assert!(inserted, "validated sidebar could not be placed after content");
    tracing::debug!(
        removed = plan.counts.total(),
        moved = !plan.sidebar_in_place,
        "document edited"
    );

    Ok(Edit {
        html: html.html(),
        counts: plan.counts,
        moved: !plan.sidebar_in_place,
    })
}

/// Move the sidebar after the content element and strip unwanted nodes.
pub fn transform(text: &str) -> Result<String, EditError> {
    transform_with_counts(text).map(|edit| edit.html)
}
