//! CLI binary for obsidian2gfm.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConvertOptions` and prints results.

use anyhow::{bail, Context, Result};
use clap::Parser;
use obsidian2gfm::{
    convert_file_with_options, convert_folder_with_options, convert_with_options, ConvertOptions,
    FolderReport,
};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert one note to stdout
  obsidian2gfm note.md

  # Convert one note to a file
  obsidian2gfm note.md -o note.github.md

  # Convert a whole vault folder (non-.md files are skipped)
  obsidian2gfm vault_notes/ -o github_notes/

  # Machine-readable batch report
  obsidian2gfm vault_notes/ -o github_notes/ --json > report.json

  # Fail the build when any note fails
  obsidian2gfm vault_notes/ -o github_notes/ --strict

  # Read from stdin, write to stdout
  cat note.md | obsidian2gfm -

WHAT GETS REWRITTEN:
  line breaks   every prose line gets an explicit break (trailing spaces
                or a <br> before blank/math lines)
  math          $$…$$ becomes a ```math fence; $x$ becomes $`x`$
  images        ![300](path) becomes <img src="…" width="300">; local
                paths are flattened into the asset folder (--asset-dir)
  tabs          raw tabs are removed outside fenced code

  Fenced code content is never altered (tabs included); math content is
  never given line-break markup.

ENVIRONMENT VARIABLES:
  OBSIDIAN2GFM_OUTPUT     Default for --output
  OBSIDIAN2GFM_ASSET_DIR  Default for --asset-dir
  RUST_LOG                Overrides the log filter (tracing-subscriber)
"#;

/// Convert Obsidian-flavoured Markdown notes to GitHub-flavoured Markdown.
#[derive(Parser, Debug)]
#[command(
    name = "obsidian2gfm",
    version,
    about = "Convert Obsidian-flavoured Markdown notes to GitHub-flavoured Markdown",
    long_about = "Convert Obsidian-flavoured Markdown to GitHub-flavoured Markdown: forced \
line breaks, LaTeX math delimiters, sized image embeds, and stray tabs are rewritten; fenced \
code and math content are left untouched. Accepts a single note, a folder of notes, or '-' \
for stdin.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Note file, folder of notes, or '-' for stdin.
    input: PathBuf,

    /// Output file (for a note) or directory (for a folder).
    /// A single note prints to stdout when omitted.
    #[arg(short, long, env = "OBSIDIAN2GFM_OUTPUT")]
    output: Option<PathBuf>,

    /// Asset folder prefix for rewritten local image embeds.
    #[arg(long, env = "OBSIDIAN2GFM_ASSET_DIR", default_value = "Docs")]
    asset_dir: String,

    /// Print the batch report as JSON instead of per-file lines.
    #[arg(long)]
    json: bool,

    /// Exit non-zero if any note in a batch fails.
    #[arg(long)]
    strict: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let options = ConvertOptions {
        asset_dir: cli.asset_dir.clone(),
    };

    if cli.input.as_os_str() == "-" {
        return convert_stdin(&options);
    }

    if cli.input.is_dir() {
        convert_batch(&cli, &options)
    } else {
        convert_single(&cli, &options)
    }
}

/// stdin → stdout, no file plumbing at all.
fn convert_stdin(options: &ConvertOptions) -> Result<()> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    let converted = convert_with_options(&text, options);
    io::stdout()
        .write_all(converted.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

/// One note file, to `-o` or stdout.
fn convert_single(cli: &Cli, options: &ConvertOptions) -> Result<()> {
    if let Some(ref output) = cli.output {
        let report = convert_file_with_options(&cli.input, output, options)
            .with_context(|| format!("Failed to convert {}", cli.input.display()))?;
        if !cli.quiet {
            eprintln!(
                "{} {}  {}  →  {}",
                green("✔"),
                cli.input.display(),
                dim(&format!("{} bytes", report.bytes_out)),
                bold(&output.display().to_string()),
            );
        }
        return Ok(());
    }

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let converted = convert_with_options(&text, options);
    io::stdout()
        .write_all(converted.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

/// A folder of notes; per-file result lines plus a summary.
fn convert_batch(cli: &Cli, options: &ConvertOptions) -> Result<()> {
    let output_dir = cli
        .output
        .as_ref()
        .context("--output <DIR> is required when converting a folder")?;

    let report = convert_folder_with_options(&cli.input, output_dir, options)
        .with_context(|| format!("Failed to convert folder {}", cli.input.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialise report")?;
        println!("{json}");
    } else if !cli.quiet {
        print_batch_lines(&report);
    }

    if cli.strict && !report.is_clean() {
        bail!("{}/{} notes failed", report.failed.len(), report.attempted());
    }
    Ok(())
}

fn print_batch_lines(report: &FolderReport) {
    for file in &report.converted {
        eprintln!(
            "  {} {}  {}",
            green("✓"),
            file.input.display(),
            dim(&format!("{} bytes in {}ms", file.bytes_out, file.duration_ms)),
        );
    }
    for failure in &report.failed {
        eprintln!(
            "  {} {}  {}",
            red("✗"),
            failure.input.display(),
            red(&failure.error.replace('\n', " — ")),
        );
    }

    let tick = if report.failed.is_empty() {
        green("✔")
    } else {
        red("✘")
    };
    eprintln!(
        "{} {} converted  {} failed  {} skipped",
        tick,
        bold(&report.converted.len().to_string()),
        report.failed.len(),
        report.skipped,
    );
}
