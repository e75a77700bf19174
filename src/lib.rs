//! # obsidian2gfm
//!
//! Convert Obsidian-flavoured Markdown notes to GitHub-flavoured Markdown.
//!
//! ## Why this crate?
//!
//! Obsidian and GitHub disagree on four pieces of Markdown dialect: Obsidian
//! renders every newline as a visual break, uses raw `$…$` / `$$…$$` LaTeX
//! delimiters, abuses the image alt-text slot for a pixel width, and leaves
//! literal tabs in prose. Published as-is, such notes render as run-together
//! paragraphs with dollar signs everywhere. This crate rewrites all four
//! features — and nothing else — while leaving fenced code and math content
//! untouched.
//!
//! ## Pipeline Overview
//!
//! ```text
//! note
//!  │
//!  ├─ 1. Locate   math spans + fenced-code content (masking oracle)
//!  ├─ 2. Breaks   trailing-space / <br> line breaks outside blocks
//!  ├─ 3. Math     $$…$$ → ```math fence,  $…$ → $`…`$
//!  ├─ 4. Images   ![300](path) → <img src width>
//!  └─ 5. Tabs     strip \t outside code content
//! ```
//!
//! Each stage is a pure `&str → String` function; a document flows through
//! them in fixed order with no shared state, so batches are embarrassingly
//! parallel even though the crate itself never spawns a thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use obsidian2gfm::convert;
//!
//! let gfm = convert("The value $x$ is small");
//! assert!(gfm.contains("$`x`$"));
//! ```
//!
//! Batch a whole vault folder:
//!
//! ```rust,no_run
//! use obsidian2gfm::convert_folder;
//!
//! let report = convert_folder("vault_notes", "github_notes")?;
//! eprintln!("{} notes converted, {} skipped", report.converted.len(), report.skipped);
//! # Ok::<(), obsidian2gfm::ConvertError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `obsidian2gfm` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! obsidian2gfm = { version = "0.2", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;
pub mod report;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::ConvertOptions;
pub use convert::{
    convert, convert_file, convert_file_with_options, convert_folder,
    convert_folder_with_options, convert_with_options,
};
pub use error::ConvertError;
pub use report::{FileFailure, FileReport, FolderReport};
