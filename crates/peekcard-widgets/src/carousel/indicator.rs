#![forbid(unsafe_code)]

//! Header: title, marked count and the dot position row.

use peekcard_style::Style;

use super::config::CarouselTheme;

/// Glyph for the active position.
pub const ACTIVE_DOT: &str = "●";
/// Glyph for every other position.
pub const INACTIVE_DOT: &str = "○";

/// One dot per item, the active one filled, separated by single spaces.
///
/// `count == 0` yields an empty string.
pub fn render_dots(count: usize, active_index: usize, theme: &CarouselTheme) -> String {
    let active = Style::new().fg(theme.active).paint(ACTIVE_DOT, theme.profile);
    let inactive = Style::new().fg(theme.idle).paint(INACTIVE_DOT, theme.profile);

    let mut out = String::with_capacity(count * (inactive.len() + 1));
    for i in 0..count {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(if i == active_index { &active } else { &inactive });
    }
    out
}

/// Title line followed by the dot row and a blank line.
///
/// ```text
/// Pick a card  2/5 saved
/// ○ ● ○ ○ ○
///
/// ```
pub fn render_header(
    title: &str,
    marked: usize,
    total: usize,
    label: &str,
    dots: &str,
    theme: &CarouselTheme,
) -> String {
    let mut out = theme.title(title);
    out.push_str("  ");
    out.push_str(&theme.hint(&format!("{marked}/{total} {label}")));
    out.push('\n');
    out.push_str(dots);
    out.push_str("\n\n");
    out
}
