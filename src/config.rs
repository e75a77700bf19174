//! Configuration for a conversion run.
//!
//! The pipeline is deliberately knob-poor: every rewrite rule is fixed by the
//! dialect being converted, so [`ConvertOptions`] only carries what genuinely
//! varies between vaults. Defaults reproduce the stock behaviour, and the
//! struct derives serde so a CLI or build script can load it from JSON
//! without extra glue.

use serde::{Deserialize, Serialize};

/// Options shared by every `*_with_options` entry point.
///
/// # Example
/// ```rust
/// use obsidian2gfm::{convert_with_options, ConvertOptions};
///
/// let options = ConvertOptions {
///     asset_dir: "Assets".to_string(),
/// };
/// let out = convert_with_options("![120](./img/a%20b.png)", &options);
/// assert!(out.contains("Assets/a b.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Folder prefix substituted into rewritten local image embeds.
    /// Default: `"Docs"`.
    ///
    /// Vault-relative image paths are meaningless outside the originating
    /// vault, so local embeds are flattened to `<asset_dir>/<basename>` and a
    /// companion asset-migration step is expected to place the same-named
    /// files there.
    pub asset_dir: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            asset_dir: "Docs".to_string(),
        }
    }
}
