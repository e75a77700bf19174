//! Rewrite stages for Obsidian-to-GFM conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us tighten one rule
//! without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! note ──▶ linebreaks ──▶ math ──▶ images ──▶ tabs
//! (text)   (forced br)   ($ → fence)  (<img>)  (strip \t)
//! ```
//!
//! 1. [`blocks`]     — locate math spans and fenced-code content; not a
//!    rewrite itself, but the masking oracle the other stages consult
//! 2. [`linebreaks`] — force explicit visual line breaks in prose
//! 3. [`math`]       — LaTeX dollar delimiters → GitHub math fences
//! 4. [`images`]     — sized local embeds → HTML `<img>` tags
//! 5. [`tabs`]       — strip raw tabs everywhere except code content
//!
//! Every stage is a pure `&str → String` function with no shared state.
//! Because each rewrite changes string length, [`blocks`] ranges are
//! recomputed by every stage that needs them rather than carried across
//! stages — stale offsets would protect the wrong spans.

pub mod blocks;
pub mod images;
pub mod linebreaks;
pub mod math;
pub mod tabs;
