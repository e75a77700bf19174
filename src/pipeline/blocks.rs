//! Protected-range detection: math spans and fenced code blocks.
//!
//! The prose-facing stages must not touch math or code content, but this
//! converter never builds an AST — "inside a block" is approximated by
//! scanning the raw text for delimiter pairs and recording byte ranges.
//! Unterminated delimiters simply produce no match; a lone `$` or an
//! unclosed fence is treated as ordinary prose.
//!
//! Two asymmetries are load-bearing:
//!
//! - Math ranges cover the *whole* expression, delimiters included.
//! - Code ranges cover only the *inner content* between the first newline
//!   after the opening fence and the closing fence. The fence-marker lines
//!   themselves are unprotected, so the line-break stage treats them as
//!   ordinary lines.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// A `$…$` or `$$…$$` expression, lazy, spanning newlines.
static RE_MATH_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\${1,2}.*?\${1,2}").unwrap());

/// A fenced code block; group 1 is the content between the fence lines.
static RE_CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?\n(.*?)```").unwrap());

/// Byte ranges of math expressions, opening and closing delimiters included.
pub fn math_spans(content: &str) -> Vec<Range<usize>> {
    RE_MATH_SPAN
        .find_iter(content)
        .map(|m| m.range())
        .collect()
}

/// Byte ranges of fenced-code inner content, fence markers excluded.
pub fn code_spans(content: &str) -> Vec<Range<usize>> {
    RE_CODE_FENCE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.range()))
        .collect()
}

/// Start-inclusive, end-exclusive membership test against a span list.
pub fn inside_any(offset: usize, spans: &[Range<usize>]) -> bool {
    spans.iter().any(|span| span.contains(&offset))
}
