#![forbid(unsafe_code)]

//! Measuring, clipping, and joining ANSI-styled text blocks.
//!
//! Everything here operates on plain `&str` values that may contain escape
//! sequences, the same strings a card delegate returns:
//! - [`visible_width`] / [`block_width`] - cell widths that skip escapes
//! - [`clip_to_left_edge`] / [`clip_to_right_edge`] - column clipping
//! - [`join_horizontal`] - top-aligned side-by-side composition
//!
//! # Example
//! ```
//! use peekcard_text::{clip_to_right_edge, join_horizontal, visible_width};
//!
//! let card = "╭────╮\n│ hi │\n╰────╯";
//! let peek = clip_to_right_edge(card, 2);
//! assert_eq!(peek, "─╮\n │\n─╯");
//!
//! let row = join_horizontal(&[&peek, " ", card]);
//! assert!(row.lines().all(|l| visible_width(l) == 9));
//! ```

pub mod ansi;
pub mod clip;
pub mod join;
pub mod width;

pub use ansi::{SgrState, Token, strip_ansi, tokens};
pub use clip::{clip_to_left_edge, clip_to_right_edge};
pub use join::join_horizontal;
pub use width::{block_height, block_width, grapheme_width, pad_to_width, visible_width};
