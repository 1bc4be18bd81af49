// ABOUTME: Removal rules for the cleanup pass: document-wide script/iframe/div rules and sidebar aside rules.
// ABOUTME: Each rule pairs a tag with a predicate over the element's attributes.

use std::fmt;

use scraper::node::Element;
use serde::Serialize;

use crate::dom::{class_has_prefix, has_tag, id_starts_with};

/// What a removed node was removed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalKind {
    Script,
    LikesIframe,
    SharingDiv,
    UnwantedAside,
    DuplicateAside,
}

/// A document-wide removal rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: RemovalKind,
    pub tag: &'static str,
    pub matches: fn(&Element) -> bool,
    /// Only the first matching element in the document is removed.
    pub first_only: bool,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("tag", &self.tag)
            .field("first_only", &self.first_only)
            .finish_non_exhaustive()
    }
}

impl Rule {
    pub fn applies_to(&self, el: &Element) -> bool {
        has_tag(el, self.tag) && (self.matches)(el)
    }
}

fn jetpack_script(el: &Element) -> bool {
    id_starts_with(el, "jetpack-")
}

fn sharing_script(el: &Element) -> bool {
    id_starts_with(el, "sharing-js")
}

fn comment_reply_script(el: &Element) -> bool {
    id_starts_with(el, "comment-reply")
}

fn speculation_rules_script(el: &Element) -> bool {
    el.attr("type") == Some("speculationrules")
}

fn likes_master_iframe(el: &Element) -> bool {
    el.id() == Some("likes-master")
}

fn sharedaddy_div(el: &Element) -> bool {
    class_has_prefix(el, "sharedaddy")
}

/// Rules applied to the whole document, in evaluation order. An element is
/// claimed by the first rule it matches.
pub const DOCUMENT_RULES: &[Rule] = &[
    Rule {
        kind: RemovalKind::Script,
        tag: "script",
        matches: jetpack_script,
        first_only: false,
    },
    Rule {
        kind: RemovalKind::Script,
        tag: "script",
        matches: sharing_script,
        first_only: false,
    },
    Rule {
        kind: RemovalKind::Script,
        tag: "script",
        matches: comment_reply_script,
        first_only: false,
    },
    Rule {
        kind: RemovalKind::Script,
        tag: "script",
        matches: speculation_rules_script,
        first_only: false,
    },
    Rule {
        kind: RemovalKind::LikesIframe,
        tag: "iframe",
        matches: likes_master_iframe,
        first_only: true,
    },
    Rule {
        kind: RemovalKind::SharingDiv,
        tag: "div",
        matches: sharedaddy_div,
        first_only: false,
    },
];

/// Side-panel container tag scanned inside the sidebar.
pub const ASIDE_TAG: &str = "aside";

/// Side-panel ids that are always removed.
pub const ASIDE_DENYLIST: &[&str] = &["search-2", "meta-2"];

pub fn is_denied_aside(id: &str) -> bool {
    ASIDE_DENYLIST.contains(&id)
}

/// Returns the side-panel id if `el` is an aside carrying one.
pub fn aside_id(el: &Element) -> Option<&str> {
    if has_tag(el, ASIDE_TAG) {
        el.id()
    } else {
        None
    }
}
