#![forbid(unsafe_code)]

//! Visible width of styled text.
//!
//! Widths are measured in terminal cells per grapheme cluster, with escape
//! sequences contributing nothing.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ansi::{Token, tokens};

/// Cell width of one grapheme cluster.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    grapheme.width()
}

/// Cell width of a single line, ignoring escape sequences.
#[must_use]
pub fn visible_width(line: &str) -> usize {
    tokens(line)
        .map(|token| match token {
            Token::Text(text) => text.graphemes(true).map(grapheme_width).sum(),
            Token::Escape(_) => 0,
        })
        .sum()
}

/// Widest line of a multi-line block.
#[must_use]
pub fn block_width(block: &str) -> usize {
    block.split('\n').map(visible_width).max().unwrap_or(0)
}

/// Number of lines in a block. An empty string is one empty line.
#[must_use]
pub fn block_height(block: &str) -> usize {
    block.split('\n').count()
}

/// Append spaces to `line` until it is `width` cells wide.
///
/// Lines already at or past `width` are left alone.
pub fn pad_to_width(line: &mut String, width: usize) {
    let current = visible_width(line);
    if current < width {
        line.extend(std::iter::repeat_n(' ', width - current));
    }
}
