//! Error types for the obsidian2gfm library.
//!
//! One enum covers every fatal failure: [`ConvertError`] is returned from the
//! top-level `convert_file` / `convert_folder` functions when a conversion
//! cannot proceed at all. Malformed markup is deliberately *not* in this
//! taxonomy — unbalanced math or code delimiters fall through the best-effort
//! rewrite rules and always yield some output.
//!
//! Batch mode records per-file failures inside
//! [`crate::report::FolderReport`] instead of aborting, so callers can
//! inspect partial success rather than losing the whole vault to one bad
//! note. Callers that want all-or-nothing semantics convert the report with
//! [`crate::report::FolderReport::into_result`], which surfaces
//! [`ConvertError::PartialFailure`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the obsidian2gfm library.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("note not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// Reading the file failed for a reason other than the above.
    #[error("failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists and was read, but its bytes are not valid UTF-8.
    /// No fallback encoding is attempted.
    #[error("'{path}' is not valid UTF-8 (first invalid byte at offset {offset})\nRe-encode the note as UTF-8 and retry.")]
    NotUtf8 { path: PathBuf, offset: usize },

    /// Batch input path is not a directory.
    #[error("'{path}' is not a directory\nPass a single .md file, or a folder of notes.")]
    NotADirectory { path: PathBuf },

    /// Listing the batch input directory failed.
    #[error("failed to list '{path}': {source}")]
    ListDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write an output file or directory.
    #[error("failed to write output '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Batch errors ──────────────────────────────────────────────────────
    /// Some notes converted but at least one failed.
    ///
    /// Returned by [`crate::report::FolderReport::into_result`] when the
    /// caller wants to treat any per-file failure as fatal.
    #[error("{failed}/{total} notes failed during conversion")]
    PartialFailure { failed: usize, total: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_failure_display() {
        let e = ConvertError::PartialFailure {
            failed: 2,
            total: 10,
        };
        let msg = e.to_string();
        assert!(msg.contains("2/10"), "got: {msg}");
    }

    #[test]
    fn not_utf8_display_mentions_offset() {
        let e = ConvertError::NotUtf8 {
            path: PathBuf::from("notes/bad.md"),
            offset: 42,
        };
        let msg = e.to_string();
        assert!(msg.contains("offset 42"), "got: {msg}");
        assert!(msg.contains("bad.md"));
    }

    #[test]
    fn write_failed_preserves_source() {
        use std::error::Error as _;
        let e = ConvertError::OutputWriteFailed {
            path: PathBuf::from("out/a.md"),
            source: std::io::Error::other("disk full"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("out/a.md"));
    }
}
