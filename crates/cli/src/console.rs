// ABOUTME: Console output for the move-sidebar binary: progress lines, result table, summary, and prompt.
// ABOUTME: Everything writes to a caller-supplied writer so it can be tested without a terminal.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use sidebar_editor::{FileReport, Outcome, RemovalCounts, Reporter, Summary};

/// Prints one progress line per file.
pub struct ConsoleReporter<W: Write> {
    out: W,
    total: usize,
    index: usize,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            total: 0,
            index: 0,
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn batch_started(&mut self, total: usize) {
        self.total = total;
        self.index = 0;
    }

    fn file_started(&mut self, path: &Path) {
        self.index += 1;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let _ = writeln!(self.out, "[{}/{}] Processing {}", self.index, self.total, name);
    }
}

fn removal_phrases(counts: &RemovalCounts, verb: &str) -> Vec<String> {
    let mut parts = Vec::new();
    if counts.unwanted_asides > 0 {
        parts.push(format!("{} {} unwanted asides", verb, counts.unwanted_asides));
    }
    if counts.duplicate_asides > 0 {
        parts.push(format!("{} {} duplicate aside IDs", verb, counts.duplicate_asides));
    }
    if counts.scripts > 0 {
        parts.push(format!("{} {} unwanted scripts", verb, counts.scripts));
    }
    if counts.iframes > 0 {
        parts.push(format!("{} {} likes iframe", verb, counts.iframes));
    }
    if counts.divs > 0 {
        parts.push(format!("{} {} sharedaddy divs", verb, counts.divs));
    }
    parts
}

/// Human-readable message for a file outcome.
pub fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::WouldModify { counts } => {
            let parts = removal_phrases(counts, "would remove");
            if parts.is_empty() {
                "Would modify file (dry-run)".to_string()
            } else {
                format!("Would modify file ({}) (dry-run)", parts.join(", "))
            }
        }
        Outcome::Modified { counts, backup } => {
            let mut msg = "Successfully modified".to_string();
            if backup.is_some() {
                msg.push_str(" (backup created)");
            }
            let parts = removal_phrases(counts, "removed");
            if !parts.is_empty() {
                msg.push_str(", ");
                msg.push_str(&parts.join(", "));
            }
            msg
        }
        Outcome::Unchanged => "No changes needed".to_string(),
        Outcome::Skipped { reason } => format!("Skip: {}", reason),
        Outcome::Failed { message } => format!("Error: {}", message),
    }
}

fn status_label(outcome: &Outcome) -> &'static str {
    if outcome.is_success() {
        "Success"
    } else {
        "Failed"
    }
}

/// Show a path relative to `base` when it lies underneath it.
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|b| path.strip_prefix(b).ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

/// Write the "Processing Results" table.
pub fn write_table<W: Write>(
    out: &mut W,
    reports: &[FileReport],
    base: Option<&Path>,
) -> io::Result<()> {
    let rows: Vec<[String; 3]> = reports
        .iter()
        .map(|r| {
            [
                display_path(&r.path, base),
                status_label(&r.outcome).to_string(),
                outcome_message(&r.outcome),
            ]
        })
        .collect();

    let headers = ["File", "Status", "Message"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let rule = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");

    writeln!(out, "Processing Results")?;
    writeln!(out, "+{}+", rule)?;
    write_row(out, &headers.map(String::from), &widths)?;
    writeln!(out, "+{}+", rule)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    writeln!(out, "+{}+", rule)?;
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 3], widths: &[usize; 3]) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!(" {:<width$} ", cell, width = *w))
        .collect();
    writeln!(out, "|{}|", padded.join("|"))
}

/// The closing line after the table.
pub fn summary_line(summary: &Summary) -> String {
    let total = summary.total();
    let succeeded = summary.succeeded();
    let failed = total - succeeded;
    if failed == 0 {
        format!("All {} files processed successfully!", total)
    } else {
        format!(
            "{}/{} files processed successfully, {} failed/skipped",
            succeeded, total, failed
        )
    }
}

/// Ask a yes/no question. End of input counts as "no".
pub fn confirm<R: BufRead, W: Write>(mut input: R, mut output: W, question: &str) -> io::Result<bool> {
    loop {
        write!(output, "{} [y/n]: ", question)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please enter y or n.")?,
        }
    }
}
