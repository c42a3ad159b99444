#![forbid(unsafe_code)]

//! Side-by-side composition of multi-line blocks.

use crate::width::{block_height, block_width, pad_to_width};

/// Place `blocks` next to each other, aligned at the top.
///
/// Each block is padded on the right to its own widest line, and blocks
/// shorter than the tallest one are filled with blank rows of their width.
#[must_use]
pub fn join_horizontal(blocks: &[&str]) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let widths: Vec<usize> = blocks.iter().map(|b| block_width(b)).collect();
    let height = blocks.iter().map(|b| block_height(b)).max().unwrap_or(0);
    let mut columns: Vec<std::str::Split<'_, char>> =
        blocks.iter().map(|b| b.split('\n')).collect();

    let mut out = String::new();
    for row in 0..height {
        if row > 0 {
            out.push('\n');
        }
        let mut line = String::new();
        for (column, &width) in columns.iter_mut().zip(&widths) {
            let mut cell = column.next().unwrap_or("").to_string();
            pad_to_width(&mut cell, width);
            line.push_str(&cell);
        }
        out.push_str(&line);
    }
    out
}
