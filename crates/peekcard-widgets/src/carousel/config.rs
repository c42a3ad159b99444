#![forbid(unsafe_code)]

//! Carousel construction options and the resolved color theme.

use peekcard_style::{Color, ColorProfile, Style};

/// Border of the focused center card: warm orange `#fb6820`.
pub const DEFAULT_ACTIVE_COLOR: Color = Color::rgb(0xfb, 0x68, 0x20);
/// Border of marked inactive cards: palette index 28 (green).
pub const DEFAULT_MARKED_COLOR: Color = Color::Ansi256(28);
/// Border of unmarked inactive cards and hollow dots: palette index 240 (gray).
pub const DEFAULT_IDLE_COLOR: Color = Color::Ansi256(240);
/// Border of placeholder cards past either end of the sequence.
pub const GHOST_BORDER_COLOR: Color = Color::Ansi256(235);
/// Foreground of inactive card interiors.
pub const INACTIVE_CONTENT_COLOR: Color = Color::Ansi256(242);
/// Foreground of the header title.
pub const TITLE_COLOR: Color = Color::Ansi256(255);
/// Foreground of the count and footer hints.
pub const HINT_COLOR: Color = Color::Ansi256(240);
/// Word after the `marked/total` count in the header.
pub const DEFAULT_MARKED_LABEL: &str = "saved";

/// Options for [`Carousel::new`](super::Carousel::new).
///
/// ```
/// use peekcard_style::Color;
/// use peekcard_widgets::carousel::{CarouselConfig, FnDelegate};
///
/// let config = CarouselConfig::new(FnDelegate::new(
///     |s: &&str, _w| s.to_string(),
///     |_: &&str| false,
/// ))
/// .items(vec!["one", "two"])
/// .title("Pick one")
/// .marked_color("#00ff00".parse::<Color>().unwrap())
/// .extra_footer("a Bulk edit");
/// # let _ = config;
/// ```
#[derive(Debug, Clone)]
pub struct CarouselConfig<T, D> {
    pub(crate) items: Vec<T>,
    pub(crate) delegate: D,
    pub(crate) title: String,
    pub(crate) active_color: Option<Color>,
    pub(crate) marked_color: Option<Color>,
    pub(crate) default_color: Option<Color>,
    pub(crate) extra_footer: String,
    pub(crate) marked_label: String,
    pub(crate) color_profile: ColorProfile,
}

impl<T, D> CarouselConfig<T, D> {
    /// Start a config around the required delegate. No items, empty title.
    pub fn new(delegate: D) -> Self {
        Self {
            items: Vec::new(),
            delegate,
            title: String::new(),
            active_color: None,
            marked_color: None,
            default_color: None,
            extra_footer: String::new(),
            marked_label: DEFAULT_MARKED_LABEL.to_string(),
            color_profile: ColorProfile::TrueColor,
        }
    }

    /// Initial items.
    pub fn items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    /// Header title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Border color of the center card.
    pub fn active_color(mut self, color: Color) -> Self {
        self.active_color = Some(color);
        self
    }

    /// Border color of marked inactive cards.
    pub fn marked_color(mut self, color: Color) -> Self {
        self.marked_color = Some(color);
        self
    }

    /// Border color of unmarked inactive cards.
    pub fn default_color(mut self, color: Color) -> Self {
        self.default_color = Some(color);
        self
    }

    /// Caller-specific hint appended to the footer, e.g. `"a Bulk edit"`.
    pub fn extra_footer(mut self, text: impl Into<String>) -> Self {
        self.extra_footer = text.into();
        self
    }

    /// Word shown after the marked count (`"3/7 saved"`).
    pub fn marked_label(mut self, label: impl Into<String>) -> Self {
        self.marked_label = label.into();
        self
    }

    /// Color depth used when emitting escape sequences.
    pub fn color_profile(mut self, profile: ColorProfile) -> Self {
        self.color_profile = profile;
        self
    }
}

/// Colors the carousel paints with, defaults already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTheme {
    /// Center card border and filled dot.
    pub active: Color,
    /// Marked inactive card border.
    pub marked: Color,
    /// Unmarked inactive card border and hollow dots.
    pub idle: Color,
    /// Color depth for emitted sequences.
    pub profile: ColorProfile,
}

impl CarouselTheme {
    /// Resolve optional colors against the defaults.
    pub fn resolve(
        active: Option<Color>,
        marked: Option<Color>,
        idle: Option<Color>,
        profile: ColorProfile,
    ) -> Self {
        Self {
            active: active.unwrap_or(DEFAULT_ACTIVE_COLOR),
            marked: marked.unwrap_or(DEFAULT_MARKED_COLOR),
            idle: idle.unwrap_or(DEFAULT_IDLE_COLOR),
            profile,
        }
    }

    /// Paint `text` in the hint color.
    pub(crate) fn hint(&self, text: &str) -> String {
        Style::new().fg(HINT_COLOR).paint(text, self.profile)
    }

    /// Paint `text` as the header title.
    pub(crate) fn title(&self, text: &str) -> String {
        Style::new().fg(TITLE_COLOR).bold().paint(text, self.profile)
    }
}

impl Default for CarouselTheme {
    fn default() -> Self {
        Self::resolve(None, None, None, ColorProfile::TrueColor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peekcard_style::Ansi16;

    #[test]
    fn defaults_fill_missing_colors() {
        let theme = CarouselTheme::default();
        assert_eq!(theme.active, Color::rgb(251, 104, 32));
        assert_eq!(theme.marked, Color::Ansi256(28));
        assert_eq!(theme.idle, Color::Ansi256(240));
        assert_eq!(theme.profile, ColorProfile::TrueColor);
    }

    #[test]
    fn explicit_colors_win() {
        let theme = CarouselTheme::resolve(
            Some(Color::Ansi16(Ansi16::Cyan)),
            None,
            Some(Color::Ansi256(8)),
            ColorProfile::Ansi16,
        );
        assert_eq!(theme.active, Color::Ansi16(Ansi16::Cyan));
        assert_eq!(theme.marked, DEFAULT_MARKED_COLOR);
        assert_eq!(theme.idle, Color::Ansi256(8));
    }

    #[test]
    fn config_builder_records_options() {
        let config: CarouselConfig<u8, ()> = CarouselConfig::new(())
            .items(vec![1, 2, 3])
            .title("Deck")
            .active_color(Color::Ansi256(1))
            .extra_footer("x Export")
            .marked_label("done")
            .color_profile(ColorProfile::Mono);
        assert_eq!(config.items, vec![1, 2, 3]);
        assert_eq!(config.title, "Deck");
        assert_eq!(config.active_color, Some(Color::Ansi256(1)));
        assert_eq!(config.marked_color, None);
        assert_eq!(config.extra_footer, "x Export");
        assert_eq!(config.marked_label, "done");
        assert_eq!(config.color_profile, ColorProfile::Mono);
    }

    #[test]
    fn config_defaults() {
        let config: CarouselConfig<u8, ()> = CarouselConfig::new(());
        assert!(config.items.is_empty());
        assert!(config.title.is_empty());
        assert_eq!(config.marked_label, "saved");
        assert_eq!(config.color_profile, ColorProfile::TrueColor);
    }

    #[test]
    fn mono_theme_paints_attrs_only() {
        let theme = CarouselTheme::resolve(None, None, None, ColorProfile::Mono);
        assert_eq!(theme.hint("hi"), "hi");
        assert_eq!(theme.title("T"), "\x1b[1mT\x1b[0m");
    }
}
