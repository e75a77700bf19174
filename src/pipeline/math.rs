//! LaTeX dollar delimiters → GitHub-supported math syntax.
//!
//! Two passes, and the order matters: display math first, otherwise each
//! `$$` pair would be mis-tokenised as two adjacent inline delimiters.
//!
//! - `$$…$$` (content may span lines) becomes a ```` ```math ```` fence with
//!   the inner content trimmed.
//! - `$…$` becomes `` $`…`$ ``, GitHub's inline-math form.
//!
//! The inline pass is a manual scan rather than a regex: the `regex` crate
//! has no lookaround, and a dollar sign only delimits an inline span when it
//! is not adjacent to another dollar sign. The scan applies exactly that
//! adjacency rule on both ends, closing each span at the first qualifying
//! dollar. Unbalanced input is not an error; whatever pairs up is rewritten
//! and the rest passes through.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `$$…$$` display expression, lazy, spanning newlines.
static RE_DISPLAY_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").unwrap());

/// Rewrite display then inline math delimiters.
pub fn rewrite_math(content: &str) -> String {
    let content = rewrite_display_math(content);
    rewrite_inline_math(&content)
}

fn rewrite_display_math(content: &str) -> String {
    RE_DISPLAY_MATH
        .replace_all(content, |caps: &regex::Captures<'_>| {
            format!("\n```math\n{}\n```\n", caps[1].trim())
        })
        .to_string()
}

fn rewrite_inline_math(content: &str) -> String {
    let bytes = content.as_bytes();
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    while let Some(rel) = content[cursor..].find('$') {
        let open = cursor + rel;
        out.push_str(&content[cursor..open]);

        if is_lone_dollar(bytes, open) {
            if let Some(close) = find_closing_dollar(bytes, open + 1) {
                out.push_str("$`");
                out.push_str(&content[open + 1..close]);
                out.push_str("`$");
                cursor = close + 1;
                continue;
            }
        }

        out.push('$');
        cursor = open + 1;
    }

    out.push_str(&content[cursor..]);
    out
}

/// True when the byte at `index` is a `$` with no `$` on either side.
fn is_lone_dollar(bytes: &[u8], index: usize) -> bool {
    bytes[index] == b'$'
        && (index == 0 || bytes[index - 1] != b'$')
        && (index + 1 >= bytes.len() || bytes[index + 1] != b'$')
}

fn find_closing_dollar(bytes: &[u8], from: usize) -> Option<usize> {
    (from..bytes.len()).find(|&i| is_lone_dollar(bytes, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_math_becomes_fence() {
        assert_eq!(rewrite_math("$$x^2$$"), "\n```math\nx^2\n```\n");
    }

    #[test]
    fn display_math_inner_content_is_trimmed() {
        assert_eq!(
            rewrite_math("$$\n\\frac{a}{b}\n$$"),
            "\n```math\n\\frac{a}{b}\n```\n"
        );
    }

    #[test]
    fn inline_math_becomes_backticked() {
        assert_eq!(
            rewrite_math("The value $x$ is small"),
            "The value $`x`$ is small"
        );
    }

    #[test]
    fn two_inline_spans_on_one_line() {
        assert_eq!(rewrite_math("$a$ and $b$"), "$`a`$ and $`b`$");
    }

    #[test]
    fn display_runs_before_inline() {
        // Were the order reversed, `$$x$$` would decompose into inline spans.
        let out = rewrite_math("$$x$$ then $y$");
        assert!(out.contains("```math\nx\n```"), "got: {out:?}");
        assert!(out.contains("$`y`$"), "got: {out:?}");
    }

    #[test]
    fn lone_dollar_passes_through() {
        assert_eq!(rewrite_math("price is $5 only"), "price is $5 only");
    }

    #[test]
    fn inline_span_may_cross_newlines() {
        assert_eq!(rewrite_math("$a\n+ b$"), "$`a\n+ b`$");
    }

    #[test]
    fn adjacent_dollars_do_not_open_inline_spans() {
        // An unpaired `$$` survives both passes untouched.
        assert_eq!(rewrite_inline_math("a $$ b"), "a $$ b");
    }
}
