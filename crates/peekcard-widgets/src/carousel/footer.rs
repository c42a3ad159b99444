#![forbid(unsafe_code)]

//! Footer hint row.

use super::config::CarouselTheme;

/// Hint for the select keys.
pub const SELECT_HINT: &str = "Enter/↓ Select";
/// Hint for the back key the host handles.
pub const BACK_HINT: &str = "Esc Back";
/// Separator between hints.
pub const HINT_SEPARATOR: &str = " • ";

/// Which directions the navigate hint advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavHint {
    /// At the first card: only right.
    Forward,
    /// At the last card: only left.
    Backward,
    /// Somewhere in between.
    Both,
}

impl NavHint {
    /// Hint for `cursor` in a sequence whose last index is `last_index`.
    ///
    /// The first-card rule wins, so a single card shows [`NavHint::Forward`].
    pub const fn for_position(cursor: usize, last_index: usize) -> Self {
        if cursor == 0 {
            Self::Forward
        } else if cursor == last_index {
            Self::Backward
        } else {
            Self::Both
        }
    }

    /// Display text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "→ Navigate",
            Self::Backward => "← Navigate",
            Self::Both => "←→ Navigate",
        }
    }
}

/// Navigate, select and back hints plus `extra` when non-empty, with one
/// column of padding on each side.
pub fn render_footer(cursor: usize, last_index: usize, extra: &str, theme: &CarouselTheme) -> String {
    let nav = NavHint::for_position(cursor, last_index);
    let mut parts = vec![
        theme.hint(nav.label()),
        theme.hint(SELECT_HINT),
        theme.hint(BACK_HINT),
    ];
    if !extra.is_empty() {
        parts.push(theme.hint(extra));
    }
    format!(" {} ", parts.join(&theme.hint(HINT_SEPARATOR)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use peekcard_style::ColorProfile;

    fn mono() -> CarouselTheme {
        CarouselTheme::resolve(None, None, None, ColorProfile::Mono)
    }

    #[test]
    fn nav_hint_by_position() {
        assert_eq!(NavHint::for_position(0, 4), NavHint::Forward);
        assert_eq!(NavHint::for_position(4, 4), NavHint::Backward);
        assert_eq!(NavHint::for_position(2, 4), NavHint::Both);
        assert_eq!(NavHint::for_position(0, 0), NavHint::Forward);
    }

    #[test]
    fn footer_text() {
        assert_eq!(
            render_footer(1, 2, "", &mono()),
            " ←→ Navigate • Enter/↓ Select • Esc Back "
        );
        assert_eq!(
            render_footer(0, 0, "a Bulk edit", &mono()),
            " → Navigate • Enter/↓ Select • Esc Back • a Bulk edit "
        );
        assert_eq!(
            render_footer(3, 3, "", &mono()),
            " ← Navigate • Enter/↓ Select • Esc Back "
        );
    }

    #[test]
    fn footer_segments_are_dimmed() {
        let theme = CarouselTheme::resolve(None, None, None, ColorProfile::Ansi256);
        let footer = render_footer(0, 1, "", &theme);
        assert!(footer.starts_with(" \x1b[38;5;240m→ Navigate\x1b[0m\x1b[38;5;240m • \x1b[0m"));
        assert!(footer.ends_with("\x1b[38;5;240mEsc Back\x1b[0m "));
    }
}
