//! Forced line breaks for prose lines.
//!
//! Obsidian renders every newline as a visual break; GitHub collapses single
//! newlines inside a paragraph. This stage makes the break explicit for each
//! prose line while leaving math and code content alone:
//!
//! - lines inside a math or code range pass through unchanged;
//! - blank lines, and lines immediately before a math expression, are
//!   followed by a `<br>` on its own line (a hard visual separator);
//! - every other line gets the GFM two-trailing-space break.
//!
//! Whether a line is protected is decided by the byte offset of its first
//! character against ranges computed once, against this stage's input. The
//! offset bookkeeping adds `len + 1` per line for the newline removed by the
//! split.

use crate::pipeline::blocks;

/// Insert explicit line-break markup outside protected blocks.
pub fn add_line_breaks(content: &str) -> String {
    let math = blocks::math_spans(content);
    let code = blocks::code_spans(content);

    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut offset = 0usize;

    for (i, line) in lines.iter().enumerate() {
        // The final line has no successor; an empty one keeps the decision
        // table uniform.
        let next = lines.get(i + 1).copied().unwrap_or("");
        let protected = blocks::inside_any(offset, &math) || blocks::inside_any(offset, &code);

        if protected {
            out.push((*line).to_string());
        } else if line.trim().is_empty()
            || next.trim().starts_with("$$")
            || next.trim().starts_with('$')
        {
            out.push(format!("{line}\n<br>\n"));
        } else {
            out.push(format!("{line}  "));
        }

        offset += line.len() + 1;
    }

    out.join("\n")
}
