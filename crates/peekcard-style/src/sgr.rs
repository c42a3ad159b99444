#![forbid(unsafe_code)]

//! SGR (Select Graphic Rendition) sequence generation.
//!
//! Pure string builders, no state tracking. Every styled run the carousel
//! emits is a single `CSI n;n;... m` opener followed by the text and
//! [`SGR_RESET`].
//!
//! | Color | Foreground parameters |
//! |-------|-----------------------|
//! | ANSI 16 (0-7) | `30`–`37` |
//! | ANSI 16 (8-15) | `90`–`97` |
//! | 256 palette | `38;5;n` |
//! | True color | `38;2;r;g;b` |

use std::fmt::Write as _;

use crate::color::Color;
use crate::style::StyleFlags;

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &str = "\x1b[0m";

/// Ordered table of (flag, SGR enable code).
pub const FLAG_TABLE: [(StyleFlags, u8); 4] = [
    (StyleFlags::BOLD, 1),
    (StyleFlags::DIM, 2),
    (StyleFlags::ITALIC, 3),
    (StyleFlags::UNDERLINE, 4),
];

/// Append the foreground parameters for `color` (without `CSI` or `m`).
pub fn push_fg_params(out: &mut String, color: Color) {
    // Writing into a String cannot fail.
    let _ = match color {
        Color::Rgb(rgb) => write!(out, "38;2;{};{};{}", rgb.r, rgb.g, rgb.b),
        Color::Ansi256(index) => write!(out, "38;5;{index}"),
        Color::Ansi16(base) => {
            let idx = base.as_u8();
            let code = if idx < 8 { 30 + idx } else { 90 + idx - 8 };
            write!(out, "{code}")
        }
    };
}

/// Build the opening sequence for the given attributes and optional
/// (already downgraded) foreground color.
///
/// Returns an empty string when there is nothing to set.
#[must_use]
pub fn open_sequence(flags: StyleFlags, fg: Option<Color>) -> String {
    if flags.is_empty() && fg.is_none() {
        return String::new();
    }

    let mut out = String::from("\x1b[");
    let mut first = true;
    for (flag, code) in FLAG_TABLE {
        if flags.contains(flag) {
            if !first {
                out.push(';');
            }
            let _ = write!(out, "{code}");
            first = false;
        }
    }
    if let Some(color) = fg {
        if !first {
            out.push(';');
        }
        push_fg_params(&mut out, color);
    }
    out.push('m');
    out
}
