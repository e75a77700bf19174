//! Conversion entry points.
//!
//! [`convert`] is the core API surface: a pure function from note text to
//! converted text, the composition of the four rewrite stages in fixed
//! order. [`convert_file`] and [`convert_folder`] are thin I/O plumbing
//! around it — whole-file reads and writes, no streaming, no shared state
//! across documents.
//!
//! Batch conversion isolates per-file failures: one unreadable note is
//! recorded in the [`FolderReport`] and the rest of the vault still
//! converts. Use [`FolderReport::into_result`] for all-or-nothing semantics.

use crate::config::ConvertOptions;
use crate::error::ConvertError;
use crate::pipeline::{images, linebreaks, math, tabs};
use crate::report::{FileFailure, FileReport, FolderReport};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert one note's text with default options.
///
/// Pure transformation; the composition of the rewrite stages in fixed
/// order. Running it twice is not a no-op — break markup and math fences
/// would be wrapped again — so convert each note exactly once.
pub fn convert(text: &str) -> String {
    convert_with_options(text, &ConvertOptions::default())
}

/// Convert one note's text.
///
/// Stage order is part of the contract: line breaks are decided against the
/// original delimiter layout, math rewriting must see the break-processed
/// text, and tab stripping consults code positions in the final geometry.
pub fn convert_with_options(text: &str, options: &ConvertOptions) -> String {
    let text = linebreaks::add_line_breaks(text);
    let text = math::rewrite_math(&text);
    let text = images::rewrite_images(&text, &options.asset_dir);
    tabs::strip_tabs(&text)
}

/// Convert a single note file with default options.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<FileReport, ConvertError> {
    convert_file_with_options(input, output, &ConvertOptions::default())
}

/// Convert a single note file.
///
/// Reads the whole input, converts, and writes the whole result through a
/// sibling temp file plus rename so a failed write never leaves a truncated
/// note behind. Emits one `info!` completion notice on success.
pub fn convert_file_with_options(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<FileReport, ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();
    let start = Instant::now();

    let text = read_note(input)?;
    let converted = convert_with_options(&text, options);
    write_note(output, &converted)?;

    info!("Converted: {} → {}", input.display(), output.display());

    Ok(FileReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        bytes_in: text.len(),
        bytes_out: converted.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Convert every `.md` note in a folder with default options.
pub fn convert_folder(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<FolderReport, ConvertError> {
    convert_folder_with_options(input_dir, output_dir, &ConvertOptions::default())
}

/// Convert every `.md` note in `input_dir` into `output_dir`.
///
/// The output directory is created if absent. Only regular files whose name
/// ends in `.md` are converted, each to the same filename in `output_dir`;
/// everything else is counted as skipped. Subdirectories are not recursed
/// into. Entries are processed in name order so reports and logs are
/// deterministic.
///
/// # Errors
/// Fatal errors are limited to the batch itself: `input_dir` missing or not
/// a directory, or `output_dir` not creatable. Per-note failures land in
/// [`FolderReport::failed`] and do not stop the batch.
pub fn convert_folder_with_options(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<FolderReport, ConvertError> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    if !input_dir.is_dir() {
        return Err(ConvertError::NotADirectory {
            path: input_dir.to_path_buf(),
        });
    }

    std::fs::create_dir_all(output_dir).map_err(|e| ConvertError::OutputWriteFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut entries: Vec<_> = std::fs::read_dir(input_dir)
        .map_err(|e| ConvertError::ListDirFailed {
            path: input_dir.to_path_buf(),
            source: e,
        })?
        .filter_map(Result::ok)
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    let mut report = FolderReport::default();

    for entry in entries {
        let path = entry.path();
        let is_md_file = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(".md"))
            && path.is_file();

        if !is_md_file {
            debug!("Skipping non-note entry: {}", path.display());
            report.skipped += 1;
            continue;
        }

        let destination = output_dir.join(entry.file_name());
        match convert_file_with_options(&path, &destination, options) {
            Ok(file_report) => report.converted.push(file_report),
            Err(e) => {
                warn!("Failed to convert {}: {}", path.display(), e);
                report.failed.push(FileFailure {
                    input: path,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        "Batch complete: {} converted, {} failed, {} skipped",
        report.converted.len(),
        report.failed.len(),
        report.skipped
    );

    Ok(report)
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Read a note as UTF-8, mapping errno and encoding failures to variants.
fn read_note(path: &Path) -> Result<String, ConvertError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConvertError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => ConvertError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ConvertError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    String::from_utf8(bytes).map_err(|e| ConvertError::NotUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Write a note atomically: temp file in the same directory, then rename.
fn write_note(path: &Path, contents: &str) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ConvertError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let tmp_path = path.with_extension("md.tmp");
    std::fs::write(&tmp_path, contents).map_err(|e| ConvertError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    std::fs::rename(&tmp_path, path).map_err(|e| ConvertError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_is_linebreaks_math_images_tabs() {
        // A line preceding math gets its break marker from the original
        // layout, then the math itself is fenced.
        let out = convert("intro\n$$x^2$$");
        assert!(out.starts_with("intro\n<br>\n"), "got: {out:?}");
        assert!(out.contains("```math\nx^2\n```"), "got: {out:?}");
    }

    #[test]
    fn convert_is_pure_and_repeatable() {
        let input = "alpha\nbeta";
        assert_eq!(convert(input), convert(input));
    }

    #[test]
    fn single_pass_is_not_idempotent() {
        // Documented property: a second pass re-wraps break markup.
        let once = convert("alpha\nbeta");
        let twice = convert(&once);
        assert_ne!(once, twice);
    }

    #[test]
    fn options_thread_through_to_image_stage() {
        let options = ConvertOptions {
            asset_dir: "Media".to_string(),
        };
        let out = convert_with_options("![50](a/b.png)", &options);
        assert!(out.contains("Media/b.png"), "got: {out:?}");
    }
}
