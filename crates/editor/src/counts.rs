// ABOUTME: RemovalCounts tallies the nodes removed (or to be removed) by the cleanup pass.
// ABOUTME: Counts add together so batch summaries can total them.

use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::rules::RemovalKind;

/// Number of removed nodes per removal category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemovalCounts {
    /// Denylisted asides inside the sidebar.
    pub unwanted_asides: usize,
    /// Asides inside the sidebar whose id was already seen.
    pub duplicate_asides: usize,
    pub scripts: usize,
    /// 0 or 1.
    pub iframes: usize,
    pub divs: usize,
}

impl RemovalCounts {
    pub fn record(&mut self, kind: RemovalKind) {
        match kind {
            RemovalKind::Script => self.scripts += 1,
            RemovalKind::LikesIframe => self.iframes += 1,
            RemovalKind::SharingDiv => self.divs += 1,
            RemovalKind::UnwantedAside => self.unwanted_asides += 1,
            RemovalKind::DuplicateAside => self.duplicate_asides += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.unwanted_asides + self.duplicate_asides + self.scripts + self.iframes + self.divs
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Add for RemovalCounts {
    type Output = RemovalCounts;

    fn add(mut self, rhs: RemovalCounts) -> RemovalCounts {
        self += rhs;
        self
    }
}

impl AddAssign for RemovalCounts {
    fn add_assign(&mut self, rhs: RemovalCounts) {
        self.unwanted_asides += rhs.unwanted_asides;
        self.duplicate_asides += rhs.duplicate_asides;
        self.scripts += rhs.scripts;
        self.iframes += rhs.iframes;
        self.divs += rhs.divs;
    }
}
