// ABOUTME: Configuration options for batch processing including Mode, Options, and ProcessorBuilder.
// ABOUTME: ProcessorBuilder provides a fluent API for constructing Processor instances.

use std::fmt;

use crate::batch::Processor;

/// Whether files are only previewed or actually rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    DryRun,
    Execute,
}

impl Mode {
    pub fn is_dry_run(self) -> bool {
        self == Mode::DryRun
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::DryRun => "DRY-RUN",
            Mode::Execute => "EXECUTE",
        };
        write!(f, "{}", s)
    }
}

/// Configuration options for a Processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub backup: bool,
    pub backup_suffix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::DryRun,
            backup: false,
            backup_suffix: ".bak".to_string(),
        }
    }
}

/// Builder for constructing Processor instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ProcessorBuilder {
    opts: Options,
}

impl ProcessorBuilder {
    /// Create a new ProcessorBuilder with default options (dry-run, no backup).
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite files instead of only previewing them.
    pub fn execute(mut self, execute: bool) -> Self {
        self.opts.mode = if execute { Mode::Execute } else { Mode::DryRun };
        self
    }

    /// Copy each original file aside before overwriting it.
    pub fn backup(mut self, backup: bool) -> Self {
        self.opts.backup = backup;
        self
    }

    /// Set the suffix appended to backup file names.
    pub fn backup_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.opts.backup_suffix = suffix.into();
        self
    }

    /// Build the Processor with the configured options.
    pub fn build(self) -> Processor {
        Processor::new(self.opts)
    }
}
