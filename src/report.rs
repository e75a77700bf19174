//! Outcome types for file and folder conversions.
//!
//! A batch run never throws away partial success: each note either lands in
//! `converted` with its [`FileReport`] or in `failed` with the rendered
//! error, and the batch carries on. Callers that want the old all-or-nothing
//! behaviour opt back in through [`FolderReport::into_result`].

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bookkeeping for one successfully converted note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Source path as given to the converter.
    pub input: PathBuf,
    /// Destination path the converted note was written to.
    pub output: PathBuf,
    /// Size of the source note in bytes.
    pub bytes_in: usize,
    /// Size of the converted note in bytes.
    pub bytes_out: usize,
    /// Wall-clock time for read + convert + write, in milliseconds.
    pub duration_ms: u64,
}

/// One note that failed during a batch run.
///
/// The error is stored rendered rather than as [`ConvertError`] so the whole
/// report stays serialisable for `--json` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    /// Source path of the failed note.
    pub input: PathBuf,
    /// Human-readable failure reason.
    pub error: String,
}

/// Summary of one [`crate::convert_folder`] run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderReport {
    /// Notes converted and written, in directory-name order.
    pub converted: Vec<FileReport>,
    /// Notes that failed; the rest of the batch still ran.
    pub failed: Vec<FileFailure>,
    /// Directory entries ignored because they are not regular `.md` files.
    pub skipped: usize,
}

impl FolderReport {
    /// Number of notes the batch attempted (converted + failed).
    pub fn attempted(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// True when every attempted note converted.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Strict view of the batch: any per-file failure becomes
    /// [`ConvertError::PartialFailure`].
    pub fn into_result(self) -> Result<Self, ConvertError> {
        if self.failed.is_empty() {
            Ok(self)
        } else {
            Err(ConvertError::PartialFailure {
                failed: self.failed.len(),
                total: self.attempted(),
            })
        }
    }
}
