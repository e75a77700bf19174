//! Sized-image embeds → HTML `<img>` tags.
//!
//! Obsidian's `![300](path)` form abuses the alt-text slot for a pixel
//! width; GitHub renders that literally. Each match becomes an `<img>` tag
//! with an explicit `width` attribute.
//!
//! Remote URLs pass through unchanged. Local paths are percent-decoded
//! (`%20` → space), stripped to their final path component, and re-rooted
//! under the configured asset directory — vault-relative paths mean nothing
//! outside the vault, and a companion asset-migration step is expected to
//! place the same-named files under `<asset_dir>/`.

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;

/// `![<decimal width>](<path>)`; the path capture stays on one line.
static RE_SIZED_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(\d+)\]\((.*?)\)").unwrap());

/// Check if the embed target is an absolute URL rather than a vault path.
fn is_remote_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Rewrite sized-image embeds into `<img>` tags.
pub fn rewrite_images(content: &str, asset_dir: &str) -> String {
    RE_SIZED_IMAGE
        .replace_all(content, |caps: &regex::Captures<'_>| {
            let width = &caps[1];
            let path = &caps[2];

            if is_remote_url(path) {
                return format!("<img src=\"{path}\" width=\"{width}\">\n");
            }

            let decoded = percent_decode_str(path).decode_utf8_lossy();
            let basename = decoded.rsplit('/').next().unwrap_or("");
            format!("<img src=\"{asset_dir}/{basename}\" width=\"{width}\">\n")
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_path_is_decoded_flattened_and_rerooted() {
        let out = rewrite_images("![300](./assets/My%20Photo.png)", "Docs");
        assert_eq!(out, "<img src=\"Docs/My Photo.png\" width=\"300\">\n");
    }

    #[test]
    fn literal_space_in_path_survives() {
        let out = rewrite_images("![300](./assets/My Photo.png)", "Docs");
        assert_eq!(out, "<img src=\"Docs/My Photo.png\" width=\"300\">\n");
    }

    #[test]
    fn remote_url_passes_through() {
        let out = rewrite_images("![150](https://example.com/a.png)", "Docs");
        assert_eq!(out, "<img src=\"https://example.com/a.png\" width=\"150\">\n");
    }

    #[test]
    fn asset_dir_is_configurable() {
        let out = rewrite_images("![80](pics/logo.svg)", "Assets");
        assert_eq!(out, "<img src=\"Assets/logo.svg\" width=\"80\">\n");
    }

    #[test]
    fn ordinary_alt_text_is_not_an_embed() {
        // Width must be a decimal integer; named alt text is left alone.
        let content = "![diagram](pics/d.png)";
        assert_eq!(rewrite_images(content, "Docs"), content);
    }

    #[test]
    fn surrounding_prose_is_kept() {
        let out = rewrite_images("see ![40](a/b.png) here", "Docs");
        assert_eq!(out, "see <img src=\"Docs/b.png\" width=\"40\">\n here");
    }

    #[test]
    fn pathless_embed_flattens_to_asset_dir_root() {
        let out = rewrite_images("![10](x.png)", "Docs");
        assert_eq!(out, "<img src=\"Docs/x.png\" width=\"10\">\n");
    }
}
