#![forbid(unsafe_code)]

//! Border glyph sets.

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Rounded corners. The carousel's card border.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Simple box-drawing characters (U+250x).
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// ASCII-only border for terminals without box-drawing glyphs.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    /// A horizontal edge `inner` columns wide between two corners.
    #[must_use]
    pub fn edge(&self, left: char, inner: usize, right: char) -> String {
        let mut out = String::with_capacity((inner + 2) * self.horizontal.len_utf8());
        out.push(left);
        out.extend(std::iter::repeat_n(self.horizontal, inner));
        out.push(right);
        out
    }

    /// Top edge for a box with `inner` columns between the side borders.
    #[must_use]
    pub fn top(&self, inner: usize) -> String {
        self.edge(self.top_left, inner, self.top_right)
    }

    /// Bottom edge for a box with `inner` columns between the side borders.
    #[must_use]
    pub fn bottom(&self, inner: usize) -> String {
        self.edge(self.bottom_left, inner, self.bottom_right)
    }
}

impl Default for BorderChars {
    fn default() -> Self {
        Self::ROUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_edges() {
        assert_eq!(BorderChars::ROUNDED.top(3), "╭───╮");
        assert_eq!(BorderChars::ROUNDED.bottom(0), "╰╯");
    }

    #[test]
    fn ascii_edges() {
        assert_eq!(BorderChars::ASCII.top(2), "+--+");
    }

    #[test]
    fn default_is_rounded() {
        assert_eq!(BorderChars::default(), BorderChars::ROUNDED);
    }
}
