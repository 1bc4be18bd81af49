// ABOUTME: Main library entry point for the sidebar editor.
// ABOUTME: Re-exports the public API: transform, preview, Processor, ProcessorBuilder, Outcome, EditError.

//! Sidebar editor - relocates a page's `#sidebar` to follow its `#content`.
//!
//! The core edit parses an HTML document, strips a fixed set of unwanted
//! nodes (tracking scripts, the likes iframe, sharing divs, and denylisted or
//! duplicate side panels inside the sidebar), then moves the sidebar so it is
//! the next sibling of the content element.
//!
//! # Example
//!
//! ```
//! use sidebar_editor::transform;
//!
//! let out = transform(r#"<div id="sidebar">S</div><div id="content">C</div>"#).unwrap();
//! assert!(out.contains(r#"<div id="content">C</div><div id="sidebar">S</div>"#));
//! ```

pub mod batch;
pub mod counts;
pub mod dom;
pub mod editor;
pub mod error;
pub mod options;
pub mod rules;

pub use crate::batch::{
    find_html_files, is_html_file, FileReport, NoopReporter, Outcome, Processor, Reporter, Summary,
};
pub use crate::counts::RemovalCounts;
pub use crate::editor::{preview, transform, transform_with_counts, Edit, Preview};
pub use crate::error::{BatchError, EditError, Section};
pub use crate::options::{Mode, Options, ProcessorBuilder};
pub use crate::rules::RemovalKind;
