#![forbid(unsafe_code)]

//! Bordered, padded text blocks.

use peekcard_style::{BorderChars, ColorProfile, Style};
use peekcard_text::{block_width, pad_to_width, visible_width};

/// Spacing between a block's border and its content, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Blank rows above and below the content.
    pub vertical: usize,
    /// Blank columns left and right of the content.
    pub horizontal: usize,
}

impl Padding {
    /// Same spacing on both axes.
    pub const fn uniform(n: usize) -> Self {
        Self {
            vertical: n,
            horizontal: n,
        }
    }

    /// Explicit vertical and horizontal spacing.
    pub const fn new(vertical: usize, horizontal: usize) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

/// A bordered region that wraps pre-rendered content.
///
/// `width` and `height` size the area inside the border, padding included.
/// Content narrower or shorter than that is filled with spaces; content that
/// overflows is kept whole and the block grows around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    border: BorderChars,
    border_style: Style,
    style: Style,
    width: Option<usize>,
    height: Option<usize>,
    padding: Padding,
}

impl Block {
    /// Create a block with a rounded border and no sizing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border character set.
    pub fn border(mut self, border: BorderChars) -> Self {
        self.border = border;
        self
    }

    /// Set the style applied to border characters.
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the style applied to each content line.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the inner width (border excluded, padding included).
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the inner height (border excluded, padding included).
    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the padding.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Outer width of the rendered block for `content`.
    pub fn outer_width(&self, content: &str) -> usize {
        self.inner_width(content) + 2
    }

    fn inner_width(&self, content: &str) -> usize {
        let natural = block_width(content) + 2 * self.padding.horizontal;
        self.width.map_or(natural, |w| w.max(natural))
    }

    /// Render `content` inside the border.
    pub fn render(&self, content: &str, profile: ColorProfile) -> String {
        let _span = peekcard_core::trace_span!(
            "block_render",
            width = self.width.unwrap_or(0),
            height = self.height.unwrap_or(0)
        )
        .entered();

        let inner = self.inner_width(content);
        let text_width = inner - 2 * self.padding.horizontal;
        let side = self.border_style.paint(&self.border.vertical.to_string(), profile);
        let blank = format!("{side}{}{side}", " ".repeat(inner));
        let margin = " ".repeat(self.padding.horizontal);

        let mut rows: Vec<String> = Vec::new();
        rows.extend(std::iter::repeat_n(blank.clone(), self.padding.vertical));
        for line in content.split('\n') {
            let mut cell = self.style.paint(line, profile);
            pad_to_width(&mut cell, text_width);
            rows.push(format!("{side}{margin}{cell}{margin}{side}"));
        }
        rows.extend(std::iter::repeat_n(blank.clone(), self.padding.vertical));
        if let Some(height) = self.height {
            if rows.len() < height {
                let fill = height - rows.len();
                rows.extend(std::iter::repeat_n(blank, fill));
            }
        }

        let mut out = self.border_style.paint(&self.border.top(inner), profile);
        for row in rows {
            out.push('\n');
            out.push_str(&row);
        }
        out.push('\n');
        out.push_str(&self.border_style.paint(&self.border.bottom(inner), profile));
        debug_assert!(out.split('\n').all(|l| visible_width(l) == inner + 2));
        out
    }
}
