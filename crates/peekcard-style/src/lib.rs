#![forbid(unsafe_code)]

//! Styling for peekcard: colors and color profiles, text styles, SGR escape
//! generation, and border glyph sets.
//!
//! # Example
//! ```
//! use peekcard_style::{Color, ColorProfile, Style};
//!
//! let accent: Color = "#fb6820".parse().unwrap();
//! let painted = Style::new().fg(accent).bold().paint("Title", ColorProfile::Ansi256);
//! assert!(painted.starts_with("\x1b[1;38;5;"));
//! assert!(painted.ends_with("Title\x1b[0m"));
//! ```

pub mod border;
pub mod color;
pub mod sgr;
pub mod style;

pub use border::BorderChars;
pub use color::{Ansi16, Color, ColorParseError, ColorProfile, Rgb};
pub use sgr::SGR_RESET;
pub use style::{Style, StyleFlags};
