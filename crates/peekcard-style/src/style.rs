#![forbid(unsafe_code)]

//! Text styles and line-wise painting.

use bitflags::bitflags;

use crate::color::{Color, ColorProfile};
use crate::sgr::{SGR_RESET, open_sequence};

bitflags! {
    /// Text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD      = 0b0000_0001;
        /// Dim / faint.
        const DIM       = 0b0000_0010;
        /// Italic.
        const ITALIC    = 0b0000_0100;
        /// Underline.
        const UNDERLINE = 0b0000_1000;
    }
}

/// Foreground color plus attributes.
///
/// `Style` never carries a background: cards sit on whatever background the
/// host terminal has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color, if any.
    pub fg: Option<Color>,
    /// Text attributes.
    pub attrs: StyleFlags,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Add bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::BOLD);
        self
    }

    /// Add dim.
    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::DIM);
        self
    }

    /// Add italic.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::ITALIC);
        self
    }

    /// Add underline.
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::UNDERLINE);
        self
    }

    /// True when painting with this style is a no-op.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.attrs.is_empty()
    }

    /// Paint `text` line by line.
    ///
    /// Each non-empty line gets its own opener and trailing reset, so lines
    /// can later be cut independently without one row's color bleeding into
    /// the next. Empty lines stay empty.
    #[must_use]
    pub fn paint(&self, text: &str, profile: ColorProfile) -> String {
        let fg = self.fg.and_then(|c| c.downgrade(profile));
        let open = open_sequence(self.attrs, fg);
        if open.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + 16);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if line.is_empty() {
                continue;
            }
            out.push_str(&open);
            out.push_str(line);
            out.push_str(SGR_RESET);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_is_passthrough() {
        let style = Style::new();
        assert!(style.is_empty());
        assert_eq!(style.paint("a\nb", ColorProfile::TrueColor), "a\nb");
    }

    #[test]
    fn paints_each_line_separately() {
        let style = Style::new().fg(Color::Ansi256(240));
        assert_eq!(
            style.paint("ab\ncd", ColorProfile::TrueColor),
            "\x1b[38;5;240mab\x1b[0m\n\x1b[38;5;240mcd\x1b[0m"
        );
    }

    #[test]
    fn empty_lines_stay_bare() {
        let style = Style::new().bold();
        assert_eq!(style.paint("", ColorProfile::TrueColor), "");
        assert_eq!(
            style.paint("x\n\ny", ColorProfile::TrueColor),
            "\x1b[1mx\x1b[0m\n\n\x1b[1my\x1b[0m"
        );
    }

    #[test]
    fn mono_drops_color_but_keeps_attrs() {
        let colored = Style::new().fg(Color::rgb(1, 2, 3));
        assert_eq!(colored.paint("hi", ColorProfile::Mono), "hi");
        let bold = Style::new().fg(Color::rgb(1, 2, 3)).bold();
        assert_eq!(bold.paint("hi", ColorProfile::Mono), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn profile_downgrades_rgb() {
        let style = Style::new().fg(Color::rgb(255, 0, 0));
        assert_eq!(
            style.paint("r", ColorProfile::Ansi256),
            "\x1b[38;5;196mr\x1b[0m"
        );
    }

    #[test]
    fn builder_accumulates_flags() {
        let style = Style::new().bold().italic().underline().dim();
        assert!(style.attrs.contains(StyleFlags::BOLD | StyleFlags::ITALIC));
        assert!(style.attrs.contains(StyleFlags::UNDERLINE | StyleFlags::DIM));
        assert_eq!(style.attrs, StyleFlags::all());
        assert!(!Style::new().bold().attrs.contains(StyleFlags::DIM));
    }
}
