#![forbid(unsafe_code)]

//! Column clipping of styled blocks.
//!
//! Both functions work line by line and keep every line at exactly
//! `min(width, w)` visible cells, where `w` is the line's own width:
//! - a wide grapheme that would straddle the cut is replaced by spaces
//! - a line cut while a style is open is closed with a reset
//! - lines already narrow enough come back byte-for-byte

use peekcard_style::SGR_RESET;
use unicode_segmentation::UnicodeSegmentation;

use crate::ansi::{SgrState, Token, tokens};
use crate::width::{grapheme_width, visible_width};

/// Keep the leftmost `width` columns of every line.
///
/// Used for the right-hand peek, which shows the left edge of its card.
#[must_use]
pub fn clip_to_left_edge(block: &str, width: usize) -> String {
    map_lines(block, |line| keep_left(line, width))
}

/// Keep the rightmost `width` columns of every line.
///
/// Used for the left-hand peek, which shows the right edge of its card.
#[must_use]
pub fn clip_to_right_edge(block: &str, width: usize) -> String {
    map_lines(block, |line| keep_right(line, width))
}

fn map_lines(block: &str, mut f: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(block.len());
    for (i, line) in block.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&f(line));
    }
    out
}

fn keep_left(line: &str, width: usize) -> String {
    if visible_width(line) <= width {
        return line.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(line.len());
    let mut state = SgrState::default();
    let mut used = 0;

    'scan: for token in tokens(line) {
        match token {
            Token::Escape(seq) => {
                out.push_str(seq);
                state.observe(seq);
            }
            Token::Text(text) => {
                for grapheme in text.graphemes(true) {
                    let w = grapheme_width(grapheme);
                    if used + w > width {
                        break 'scan;
                    }
                    out.push_str(grapheme);
                    used += w;
                }
            }
        }
    }

    if state.is_open() {
        out.push_str(SGR_RESET);
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

fn keep_right(line: &str, width: usize) -> String {
    let total = visible_width(line);
    if total <= width {
        return line.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let skip = total - width;
    let mut out = String::with_capacity(line.len());
    let mut state = SgrState::default();
    let mut seen = 0;

    for token in tokens(line) {
        match token {
            Token::Escape(seq) => {
                out.push_str(seq);
                state.observe(seq);
            }
            Token::Text(text) => {
                for grapheme in text.graphemes(true) {
                    let w = grapheme_width(grapheme);
                    if seen >= skip {
                        out.push_str(grapheme);
                    } else if seen + w > skip {
                        out.extend(std::iter::repeat_n(' ', seen + w - skip));
                    }
                    seen += w;
                }
            }
        }
    }

    if state.is_open() {
        out.push_str(SGR_RESET);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::strip_ansi;

    #[test]
    fn left_edge_plain() {
        assert_eq!(clip_to_left_edge("abcdef", 3), "abc");
        assert_eq!(clip_to_left_edge("abc\ndefgh", 2), "ab\nde");
    }

    #[test]
    fn right_edge_plain() {
        assert_eq!(clip_to_right_edge("abcdef", 3), "def");
        assert_eq!(clip_to_right_edge("abc\ndefgh", 2), "bc\ngh");
    }

    #[test]
    fn narrow_lines_untouched() {
        let styled = "\x1b[31mab\x1b[0m";
        assert_eq!(clip_to_left_edge(styled, 5), styled);
        assert_eq!(clip_to_right_edge(styled, 2), styled);
    }

    #[test]
    fn zero_width_clips_everything() {
        assert_eq!(clip_to_left_edge("abc\nde", 0), "\n");
        assert_eq!(clip_to_right_edge("abc", 0), "");
    }

    #[test]
    fn left_edge_closes_open_style() {
        let out = clip_to_left_edge("\x1b[38;5;242mhello\x1b[0m", 3);
        assert_eq!(out, "\x1b[38;5;242mhel\x1b[0m");
    }

    #[test]
    fn right_edge_keeps_leading_style() {
        let out = clip_to_right_edge("\x1b[38;5;242mhello\x1b[0m", 2);
        assert_eq!(out, "\x1b[38;5;242mlo\x1b[0m");
    }

    #[test]
    fn right_edge_closes_style_left_open() {
        let out = clip_to_right_edge("ab\x1b[1mcd", 1);
        assert_eq!(out, "\x1b[1md\x1b[0m");
    }

    #[test]
    fn wide_char_straddling_left_cut_is_padded() {
        let out = clip_to_left_edge("a日本", 2);
        assert_eq!(out, "a ");
        assert_eq!(visible_width(&out), 2);
    }

    #[test]
    fn wide_char_straddling_right_cut_is_padded() {
        let out = clip_to_right_edge("日本a", 2);
        assert_eq!(out, " a");
        assert_eq!(visible_width(&out), 2);
    }

    #[test]
    fn border_rows_clip_cleanly() {
        let card = "╭────╮\n│ ab │\n╰────╯";
        assert_eq!(clip_to_left_edge(card, 3), "╭──\n│ a\n╰──");
        assert_eq!(clip_to_right_edge(card, 3), "──╮\nb │\n──╯");
    }

    #[test]
    fn text_survives_modulo_cut() {
        let out = clip_to_right_edge("\x1b[1mtitle\x1b[0m\n\x1b[2mbody\x1b[0m", 3);
        assert_eq!(strip_ansi(&out), "tle\nody");
    }
}
