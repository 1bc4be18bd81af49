// ABOUTME: Error types for the sidebar editor: EditError for document preconditions, BatchError for file I/O.
// ABOUTME: Section names the two anchor elements and displays as their id.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// One of the two anchor elements the editor looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Content,
    Sidebar,
}

impl Section {
    /// The id attribute value identifying this section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Content => "content",
            Section::Sidebar => "sidebar",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Reasons a document cannot be edited.
///
/// All of these are detected before the tree is touched, so a failed edit
/// never leaves partial changes behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// No element carries the section's id.
    #[error("section with id '{0}' not found in HTML")]
    MissingSection(Section),

    /// The sidebar is an ancestor of the content element, so it cannot be
    /// placed after it.
    #[error("section with id 'sidebar' contains section with id 'content'")]
    SidebarContainsContent,

    /// The section lies inside a subtree removed by the cleanup pass.
    #[error("section with id '{0}' is inside an element that would be removed")]
    SectionRemoved(Section),
}

/// File-level failures while processing a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write backup {}: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to scan directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl BatchError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BatchError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BatchError::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn backup(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BatchError::Backup {
            path: path.into(),
            source,
        }
    }
}
