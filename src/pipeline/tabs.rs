//! Strip raw tab characters outside code blocks.
//!
//! Obsidian inserts literal tabs for indentation that GitHub renders as
//! oversized gaps in prose. Tabs inside fenced code are part of the code's
//! formatting and must survive byte-for-byte, so the scan consults the code
//! ranges of the document *as it stands now* — this stage runs last, after
//! every length-changing rewrite.

use crate::pipeline::blocks;

/// Drop every tab that lies outside fenced-code content.
pub fn strip_tabs(content: &str) -> String {
    let code = blocks::code_spans(content);

    let mut out = String::with_capacity(content.len());
    for (offset, ch) in content.char_indices() {
        if ch == '\t' && !blocks::inside_any(offset, &code) {
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_outside_code_is_removed() {
        assert_eq!(strip_tabs("A\tB"), "AB");
    }

    #[test]
    fn tab_inside_code_is_preserved() {
        let content = "```\nfn f() {\n\treturn;\n}\n```";
        assert_eq!(strip_tabs(content), content);
    }

    #[test]
    fn mixed_document_only_loses_prose_tabs() {
        let content = "a\tb\n```\n\tindented\n```\nc\td";
        let out = strip_tabs(content);
        assert_eq!(out, "ab\n```\n\tindented\n```\ncd");
    }

    #[test]
    fn tab_on_fence_marker_line_is_removed() {
        // Fence lines are outside the protected inner content.
        let out = strip_tabs("```rust\t\nbody\n```");
        assert!(out.starts_with("```rust\n"), "got: {out:?}");
    }

    #[test]
    fn no_tabs_is_identity() {
        assert_eq!(strip_tabs("plain text\n"), "plain text\n");
    }
}
