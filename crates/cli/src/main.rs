// ABOUTME: CLI binary that moves an HTML page's #sidebar section to follow its #content section.
// ABOUTME: Handles a single file or a directory tree, with dry-run by default, backups, and confirmation.

mod console;

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;
use sidebar_editor::{find_html_files, is_html_file, Mode, Processor, Summary};

use crate::console::{confirm, summary_line, write_table, ConsoleReporter};

/// Move HTML sidebar section to follow content section.
///
/// INPUT_PATH can be either a single .html file or a directory (with --directory).
/// By default runs in dry-run mode; use --execute to actually modify files.
#[derive(Parser, Debug)]
#[command(name = "move-sidebar")]
#[command(about = "Move HTML sidebar section to follow content section")]
struct Args {
    /// A .html file, or a directory when --directory is given
    input_path: PathBuf,

    /// Process all .html files in the given directory (recursively)
    #[arg(short = 'd', long = "directory")]
    directory: bool,

    /// Actually modify files (default is dry-run)
    #[arg(short = 'e', long = "execute")]
    execute: bool,

    /// Create a .bak copy of each original file before modifying it
    #[arg(short = 'b', long = "backup")]
    backup: bool,

    /// Ask for confirmation before processing multiple files (default)
    #[arg(long = "confirm", overrides_with = "no_confirm")]
    confirm: bool,

    /// Do not ask for confirmation
    #[arg(long = "no-confirm", overrides_with = "confirm")]
    no_confirm: bool,

    /// Print results as JSON instead of a table
    #[arg(long = "json")]
    json_output: bool,

    /// Log debug details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Resolve the files to process. An empty list means directory mode found
/// nothing.
fn collect_files(args: &Args) -> Result<Vec<PathBuf>> {
    let path = &args.input_path;
    if !path.exists() {
        bail!("{} does not exist", path.display());
    }
    if args.directory {
        if !path.is_dir() {
            bail!("{} is not a directory", path.display());
        }
        return find_html_files(path)
            .with_context(|| format!("failed to list .html files in {}", path.display()));
    }
    if !path.is_file() || !is_html_file(path) {
        bail!("{} is not an HTML file", path.display());
    }
    Ok(vec![path.clone()])
}

fn print_json(mode: Mode, summary: &Summary) -> Result<()> {
    let report = json!({
        "mode": mode.to_string(),
        "total": summary.total(),
        "succeeded": summary.succeeded(),
        "unchanged": summary.unchanged(),
        "skipped": summary.skipped(),
        "failed": summary.failed(),
        "removed": summary.total_counts(),
        "files": summary.reports,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_table(summary: &Summary) -> Result<()> {
    let cwd = env::current_dir().ok();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, &summary.reports, cwd.as_deref())?;
    writeln!(out, "{}", summary_line(summary))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let files = match collect_files(&args) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    if files.is_empty() {
        println!("No .html files found in {}", args.input_path.display());
        return ExitCode::SUCCESS;
    }

    let processor = Processor::builder()
        .execute(args.execute)
        .backup(args.backup)
        .build();
    let mode = processor.options().mode;

    if !args.json_output {
        if args.directory {
            println!("Found {} HTML files in {}", files.len(), args.input_path.display());
        }
        println!("Mode: {}", mode);
        if mode.is_dry_run() {
            println!("Running in dry-run mode. Use --execute to actually modify files.");
        }
    }

    let ask = args.confirm || !args.no_confirm;
    if files.len() > 1 && ask && !mode.is_dry_run() {
        let question = format!("Process {} files?", files.len());
        match confirm(io::stdin().lock(), io::stderr(), &question) {
            Ok(true) => {}
            Ok(false) => {
                println!("Operation cancelled.");
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                eprintln!("Error: failed to read confirmation: {}", e);
                return ExitCode::from(1);
            }
        }
    }

    let mut reporter = ConsoleReporter::new(io::stderr());
    let summary = processor.process_all(&files, &mut reporter);

    let printed = if args.json_output {
        print_json(mode, &summary)
    } else {
        print_table(&summary)
    };
    if let Err(e) = printed {
        eprintln!("Error: failed to write results: {:#}", e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
