//! Highlighted excerpts for search results.
//!
//! # Design
//!
//! - A [`SearchPattern`] is compiled once and used twice: to find the first
//!   match in the full text, then to highlight every match inside the excerpt.
//! - The excerpt window is word-aligned: its start snaps back to a space a few
//!   chars before the match, its end snaps forward to the next space.
//! - Truncated ends are marked with `"... "` and `" ..."`.
//! - A pattern that does not occur is an error ([`ExcerptError::NoMatch`]),
//!   the caller picks the fallback.

mod error;
mod excerpt;
mod pattern;

pub use error::ExcerptError;
pub use excerpt::{ExcerptBuilder, LEADING_ELLIPSIS, TRAILING_ELLIPSIS, build_excerpt};
pub use pattern::SearchPattern;
pub use serpkit_core::types::{CaseMatching, ExcerptLength};
