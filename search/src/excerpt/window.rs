//! Word-aligned window selection.
//!
//! Positions are byte offsets into the text, always on char boundaries.
//! Distances are counted in chars.

use std::iter;

/// Byte range of the text an excerpt is cut from.
///
/// When `start > 0` it points at the space separating the window from the
/// preceding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn around(
        text: &str,
        match_start: usize,
        length: usize,
        lead_in: usize,
        end_backoff: usize,
    ) -> Self {
        let mut start = chars_before(text, match_start, lead_in)
            .and_then(|probe| last_space_at_or_before(text, probe))
            .unwrap_or(0);

        let end = match chars_after(text, start, length) {
            Some(end) => end,
            None => {
                if start > 0 {
                    start = chars_before(text, text.len(), length.saturating_add(end_backoff))
                        .and_then(|probe| last_space_at_or_before(text, probe))
                        .unwrap_or(0);
                }
                text.len()
            }
        };
        let end = first_space_at_or_after(text, end).unwrap_or(text.len());

        Self { start, end }
    }

    pub fn truncated_left(&self) -> bool {
        self.start > 0
    }

    pub fn truncated_right(&self, text: &str) -> bool {
        self.end < text.len()
    }

    /// The window's text, including the separating space at `start`.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// Offset `n` chars before `pos`, or `None` if the text is shorter than that.
fn chars_before(text: &str, pos: usize, n: usize) -> Option<usize> {
    iter::once(pos)
        .chain(text[..pos].char_indices().rev().map(|(i, _)| i))
        .nth(n)
}

/// Offset `n` chars after `pos`; the text end counts as a position.
fn chars_after(text: &str, pos: usize, n: usize) -> Option<usize> {
    text[pos..]
        .char_indices()
        .map(|(i, _)| pos + i)
        .chain(iter::once(text.len()))
        .nth(n)
}

fn last_space_at_or_before(text: &str, pos: usize) -> Option<usize> {
    let upto = (pos + 1).min(text.len());
    text.as_bytes()[..upto].iter().rposition(|&b| b == b' ')
}

fn first_space_at_or_after(text: &str, pos: usize) -> Option<usize> {
    text.as_bytes()[pos..]
        .iter()
        .position(|&b| b == b' ')
        .map(|i| pos + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "the quick brown fox jumps over the lazy dog";

    #[test]
    fn chars_before_counts_chars_not_bytes() {
        let text = "héllo";
        assert_eq!(chars_before(text, text.len(), 1), Some(5));
        assert_eq!(chars_before(text, text.len(), 4), Some(1));
        assert_eq!(chars_before(text, text.len(), 5), Some(0));
        assert_eq!(chars_before(text, text.len(), 6), None);
    }

    #[test]
    fn chars_after_reaches_text_end() {
        let text = "héllo";
        assert_eq!(chars_after(text, 0, 2), Some(3));
        assert_eq!(chars_after(text, 0, 5), Some(text.len()));
        assert_eq!(chars_after(text, 0, 6), None);
    }

    #[test]
    fn space_search_is_inclusive() {
        assert_eq!(last_space_at_or_before(FOX, 3), Some(3));
        assert_eq!(last_space_at_or_before(FOX, 2), None);
        assert_eq!(first_space_at_or_after(FOX, 15), Some(15));
        assert_eq!(first_space_at_or_after(FOX, 40), None);
    }

    #[test]
    fn window_snaps_to_spaces_around_match() {
        let window = Window::around(FOX, 16, 20, 10, 2);

        assert_eq!(window, Window { start: 3, end: 25 });
        assert_eq!(window.slice(FOX), " quick brown fox jumps");
    }

    #[test]
    fn window_clamped_at_end_moves_start_back() {
        let window = Window::around(FOX, 35, 30, 10, 2);

        assert_eq!(window, Window { start: 9, end: FOX.len() });
        assert!(!window.truncated_right(FOX));
    }

    #[test]
    fn window_clamped_at_end_falls_back_to_text_start() {
        // Initial start is the space at 25; the re-derived probe lies before the text.
        let window = Window::around(FOX, 35, 42, 10, 2);

        assert_eq!(window, Window { start: 0, end: FOX.len() });
        assert!(!window.truncated_left());
    }

    #[test]
    fn window_at_text_start_keeps_start() {
        let window = Window::around(FOX, 4, 10, 10, 2);

        assert_eq!(window, Window { start: 0, end: 15 });
        assert!(!window.truncated_left());
    }

    #[test]
    fn window_covers_short_text() {
        let window = Window::around("hello world", 6, 50, 10, 2);

        assert_eq!(window, Window { start: 0, end: 11 });
    }
}
