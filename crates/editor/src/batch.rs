// ABOUTME: Batch processing of HTML files: discovery, per-file read/edit/write, backups, and summaries.
// ABOUTME: Progress is reported through a caller-supplied Reporter instead of a global console.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::counts::RemovalCounts;
use crate::editor;
use crate::error::BatchError;
use crate::options::{Options, ProcessorBuilder};

const HTML_EXTENSION: &str = "html";

/// Returns true if the path has an `.html` extension (any case).
pub fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(HTML_EXTENSION))
}

/// Recursively collect files ending in `.html` under `dir`, sorted.
pub fn find_html_files(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path.extension().and_then(|e| e.to_str()) == Some(HTML_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Path of the backup copy for `path`: the suffix is appended to the full
/// file name, so `page.html` becomes `page.html.bak`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Dry-run: the file would be rewritten.
    WouldModify { counts: RemovalCounts },
    /// The file was rewritten.
    Modified {
        counts: RemovalCounts,
        backup: Option<PathBuf>,
    },
    /// Nothing to remove and the sidebar already follows the content.
    Unchanged,
    /// The document does not meet the editor's preconditions.
    Skipped { reason: String },
    /// Reading or writing failed.
    Failed { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::WouldModify { .. } | Outcome::Modified { .. } | Outcome::Unchanged
        )
    }

    pub fn counts(&self) -> Option<&RemovalCounts> {
        match self {
            Outcome::WouldModify { counts } | Outcome::Modified { counts, .. } => Some(counts),
            _ => None,
        }
    }
}

/// Outcome of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// All file reports from a batch run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub reports: Vec<FileReport>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn unchanged(&self) -> usize {
        self.count_where(|o| matches!(o, Outcome::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count_where(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count_where(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// Removal counts summed over every file that was (or would be) modified.
    pub fn total_counts(&self) -> RemovalCounts {
        self.reports
            .iter()
            .filter_map(|r| r.outcome.counts())
            .fold(RemovalCounts::default(), |acc, c| acc + *c)
    }

    fn count_where(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Receives progress events while a batch runs.
pub trait Reporter {
    fn batch_started(&mut self, _total: usize) {}
    fn file_started(&mut self, _path: &Path) {}
    fn file_finished(&mut self, _report: &FileReport) {}
}

/// A Reporter that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {}

/// Applies the document editor to files on disk.
#[derive(Debug, Clone)]
pub struct Processor {
    opts: Options,
}

impl Processor {
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Process a single file. Never panics or returns early: every failure is
    /// folded into the report.
    pub fn process_file(&self, path: &Path) -> FileReport {
        let outcome = match self.try_process(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "file failed");
                Outcome::Failed {
                    message: err.to_string(),
                }
            }
        };
        FileReport {
            path: path.to_path_buf(),
            outcome,
        }
    }

    /// Process files one after another. A failure in one file does not stop
    /// the rest.
    pub fn process_all<R>(&self, files: &[PathBuf], reporter: &mut R) -> Summary
    where
        R: Reporter + ?Sized,
    {
        reporter.batch_started(files.len());
        let mut summary = Summary::default();
        for path in files {
            reporter.file_started(path);
            let report = self.process_file(path);
            reporter.file_finished(&report);
            summary.reports.push(report);
        }
        summary
    }

    fn try_process(&self, path: &Path) -> Result<Outcome, BatchError> {
        let original = fs::read_to_string(path).map_err(|e| BatchError::read(path, e))?;

        let preview = match editor::preview(&original) {
            Ok(preview) => preview,
            Err(err) => {
                tracing::info!(path = %path.display(), reason = %err, "file skipped");
                return Ok(Outcome::Skipped {
                    reason: err.to_string(),
                });
            }
        };

        if !preview.has_changes() {
            tracing::debug!(path = %path.display(), "no changes needed");
            return Ok(Outcome::Unchanged);
        }

        if self.opts.mode.is_dry_run() {
            return Ok(Outcome::WouldModify {
                counts: preview.counts,
            });
        }

        let edit = match editor::transform_with_counts(&original) {
            Ok(edit) => edit,
            Err(err) => {
                return Ok(Outcome::Skipped {
                    reason: err.to_string(),
                })
            }
        };

        let backup = if self.opts.backup {
            let target = backup_path(path, &self.opts.backup_suffix);
            fs::write(&target, &original).map_err(|e| BatchError::backup(&target, e))?;
            Some(target)
        } else {
            None
        };

        fs::write(path, &edit.html).map_err(|e| BatchError::write(path, e))?;
        tracing::debug!(path = %path.display(), removed = edit.counts.total(), "file rewritten");

        Ok(Outcome::Modified {
            counts: edit.counts,
            backup,
        })
    }
}
