#![forbid(unsafe_code)]

//! Colors, terminal color profiles, and downgrade between them.
//!
//! Card borders are configured with whatever fidelity the caller likes
//! (`"#fb6820"`, `"28"`, `"bright-black"`); at render time each color is
//! reduced to what the active [`ColorProfile`] can show.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Terminal color depth used when emitting escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorProfile {
    /// No color output. Text attributes are still emitted.
    Mono,
    /// Standard 16 ANSI colors.
    Ansi16,
    /// Extended 256-color palette.
    Ansi256,
    /// Full 24-bit RGB color.
    #[default]
    TrueColor,
}

impl ColorProfile {
    /// Choose the best available profile from detection flags.
    ///
    /// `no_color` should reflect explicit user intent (e.g. NO_COLOR).
    #[must_use]
    pub const fn from_flags(true_color: bool, colors_256: bool, no_color: bool) -> Self {
        if no_color {
            Self::Mono
        } else if true_color {
            Self::TrueColor
        } else if colors_256 {
            Self::Ansi256
        } else {
            Self::Ansi16
        }
    }

    /// Detect the profile from `NO_COLOR`, `COLORTERM` and `TERM`.
    #[must_use]
    pub fn detect() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        let term = env::var("TERM").unwrap_or_default();
        let colorterm = env::var("COLORTERM").unwrap_or_default();
        Self::from_env_values(no_color, &term, &colorterm)
    }

    /// Pure half of [`detect`](Self::detect).
    ///
    /// A dumb or empty `TERM` gets [`Mono`](Self::Mono).
    #[must_use]
    pub fn from_env_values(no_color: bool, term: &str, colorterm: &str) -> Self {
        let is_dumb = term.is_empty() || term == "dumb";
        let true_color = colorterm.contains("truecolor") || colorterm.contains("24bit");
        let colors_256 = term.contains("256");
        Self::from_flags(true_color, colors_256, no_color || is_dumb)
    }
}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexDigit(hex.to_string()));
        }
        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHexDigit(hex.to_string()))
        };
        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, i) in out.iter_mut().zip(0..3) {
                    let v = channel(&digits[i..=i])?;
                    *slot = v * 17;
                }
                Ok(Self::new(out[0], out[1], out[2]))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            len => Err(ColorParseError::InvalidHexLength(len)),
        }
    }
}

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    /// Black (index 0).
    Black = 0,
    /// Red (index 1).
    Red = 1,
    /// Green (index 2).
    Green = 2,
    /// Yellow (index 3).
    Yellow = 3,
    /// Blue (index 4).
    Blue = 4,
    /// Magenta (index 5).
    Magenta = 5,
    /// Cyan (index 6).
    Cyan = 6,
    /// White (index 7).
    White = 7,
    /// Bright black (index 8).
    BrightBlack = 8,
    /// Bright red (index 9).
    BrightRed = 9,
    /// Bright green (index 10).
    BrightGreen = 10,
    /// Bright yellow (index 11).
    BrightYellow = 11,
    /// Bright blue (index 12).
    BrightBlue = 12,
    /// Bright magenta (index 13).
    BrightMagenta = 13,
    /// Bright cyan (index 14).
    BrightCyan = 14,
    /// Bright white (index 15).
    BrightWhite = 15,
}

const ANSI16_ALL: [Ansi16; 16] = [
    Ansi16::Black,
    Ansi16::Red,
    Ansi16::Green,
    Ansi16::Yellow,
    Ansi16::Blue,
    Ansi16::Magenta,
    Ansi16::Cyan,
    Ansi16::White,
    Ansi16::BrightBlack,
    Ansi16::BrightRed,
    Ansi16::BrightGreen,
    Ansi16::BrightYellow,
    Ansi16::BrightBlue,
    Ansi16::BrightMagenta,
    Ansi16::BrightCyan,
    Ansi16::BrightWhite,
];

const ANSI16_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright-black",
    "bright-red",
    "bright-green",
    "bright-yellow",
    "bright-blue",
    "bright-magenta",
    "bright-cyan",
    "bright-white",
];

impl Ansi16 {
    /// Return the raw ANSI index (0–15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a `u8` index, returning `None` if out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value < 16 {
            Some(ANSI16_ALL[value as usize])
        } else {
            None
        }
    }

    /// Look up a color by name: `"red"`, `"bright-blue"`, `"bright_blue"`,
    /// `"brightblue"`. Case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        ANSI16_NAMES
            .iter()
            .position(|n| n.replace('-', "") == normalized)
            .and_then(|idx| Self::from_u8(idx as u8))
    }

    /// The canonical kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        ANSI16_NAMES[self as usize]
    }
}

/// A color value at varying fidelity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// True-color RGB value.
    Rgb(Rgb),
    /// 256-color palette index.
    Ansi256(u8),
    /// Standard 16-color ANSI value.
    Ansi16(Ansi16),
}

impl Color {
    /// Create a true-color RGB value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Reduce this color to what `profile` can display.
    ///
    /// Returns `None` for [`ColorProfile::Mono`]: the color is dropped
    /// rather than approximated.
    #[must_use]
    pub fn downgrade(self, profile: ColorProfile) -> Option<Self> {
        match profile {
            ColorProfile::TrueColor => Some(self),
            ColorProfile::Ansi256 => Some(match self {
                Self::Rgb(rgb) => Self::Ansi256(rgb_to_256(rgb.r, rgb.g, rgb.b)),
                other => other,
            }),
            ColorProfile::Ansi16 => Some(match self {
                Self::Rgb(rgb) => Self::Ansi16(rgb_to_ansi16(rgb.r, rgb.g, rgb.b)),
                Self::Ansi256(idx) => Self::Ansi16(rgb_to_ansi16_from_ansi256(idx)),
                other => other,
            }),
            ColorProfile::Mono => None,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Ansi16> for Color {
    fn from(color: Ansi16) -> Self {
        Self::Ansi16(color)
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty color string")]
    Empty,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3 or 6 digits)")]
    InvalidHexLength(usize),

    /// Hex string contained a non-hex character.
    #[error("invalid hex color: {0}")]
    InvalidHexDigit(String),

    /// Decimal palette index above 255.
    #[error("palette index out of range: {0} (expected 0-255)")]
    IndexOutOfRange(String),

    /// Not a hex value, palette index, or ANSI color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#rgb`, `#rrggbb`, a decimal palette index (`"0"`–`"255"`,
    /// where 0–15 select the base ANSI colors), or an ANSI color name.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if input.starts_with('#') {
            return Rgb::from_hex(input).map(Self::Rgb);
        }
        if input.bytes().all(|b| b.is_ascii_digit()) {
            let index: u8 = input
                .parse()
                .map_err(|_| ColorParseError::IndexOutOfRange(input.to_string()))?;
            return Ok(match Ansi16::from_u8(index) {
                Some(base) => Self::Ansi16(base),
                None => Self::Ansi256(index),
            });
        }
        Ansi16::from_name(input)
            .map(Self::Ansi16)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }
}

const ANSI16_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // Black
    Rgb::new(205, 0, 0),     // Red
    Rgb::new(0, 205, 0),     // Green
    Rgb::new(205, 205, 0),   // Yellow
    Rgb::new(0, 0, 238),     // Blue
    Rgb::new(205, 0, 205),   // Magenta
    Rgb::new(0, 205, 205),   // Cyan
    Rgb::new(229, 229, 229), // White
    Rgb::new(127, 127, 127), // Bright Black
    Rgb::new(255, 0, 0),     // Bright Red
    Rgb::new(0, 255, 0),     // Bright Green
    Rgb::new(255, 255, 0),   // Bright Yellow
    Rgb::new(92, 92, 255),   // Bright Blue
    Rgb::new(255, 0, 255),   // Bright Magenta
    Rgb::new(0, 255, 255),   // Bright Cyan
    Rgb::new(255, 255, 255), // Bright White
];

/// Canonical RGB for an ANSI 16-color value.
#[must_use]
pub fn ansi16_to_rgb(color: Ansi16) -> Rgb {
    ANSI16_PALETTE[color.as_u8() as usize]
}

/// Nearest ANSI 256-color index for an RGB value.
#[must_use]
pub fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((r - 8) / 10).min(23);
    }

    16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
}

/// Map a channel to the nearest of the cube levels `[0, 95, 135, 175, 215, 255]`
/// using the midpoints between adjacent levels.
fn cube_index(v: u8) -> u8 {
    if v < 48 {
        0
    } else if v < 115 {
        1
    } else {
        (v - 35) / 40
    }
}

/// RGB for an ANSI 256-color index.
#[must_use]
pub fn ansi256_to_rgb(index: u8) -> Rgb {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    if index < 16 {
        return ANSI16_PALETTE[index as usize];
    }
    if index >= 232 {
        let gray = 8 + 10 * (index - 232);
        return Rgb::new(gray, gray, gray);
    }
    let idx = index - 16;
    Rgb::new(
        LEVELS[(idx / 36) as usize],
        LEVELS[((idx / 6) % 6) as usize],
        LEVELS[(idx % 6) as usize],
    )
}

/// Nearest ANSI 16-color value for an RGB value (BT.709-weighted distance).
#[must_use]
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> Ansi16 {
    let target = Rgb::new(r, g, b);
    ANSI16_ALL
        .iter()
        .copied()
        .min_by_key(|candidate| weighted_distance(target, ansi16_to_rgb(*candidate)))
        .unwrap_or(Ansi16::Black)
}

/// Nearest ANSI 16-color value for a 256-palette index.
#[must_use]
pub fn rgb_to_ansi16_from_ansi256(index: u8) -> Ansi16 {
    if let Some(base) = Ansi16::from_u8(index) {
        return base;
    }
    let rgb = ansi256_to_rgb(index);
    rgb_to_ansi16(rgb.r, rgb.g, rgb.b)
}

fn weighted_distance(a: Rgb, b: Rgb) -> u64 {
    let dr = i64::from(a.r) - i64::from(b.r);
    let dg = i64::from(a.g) - i64::from(b.g);
    let db = i64::from(a.b) - i64::from(b.b);
    (2126 * dr * dr + 7152 * dg * dg + 722 * db * db) as u64
}
