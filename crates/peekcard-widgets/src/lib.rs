#![forbid(unsafe_code)]

//! Widgets for peekcard.
//!
//! - [`block::Block`] - bordered, padded wrapper around pre-rendered text
//! - [`carousel::Carousel`] - the peeking single-row card carousel
//!
//! Widgets render to plain `String`s containing SGR escape sequences; the
//! host decides where the block goes and what surrounds it.

pub mod block;
pub mod carousel;

pub use block::{Block, Padding};
pub use carousel::{
    Carousel, CarouselAction, CarouselConfig, CarouselTheme, FnDelegate, ItemDelegate,
    ItemSelected,
};
