#![forbid(unsafe_code)]

//! Card and ghost-card rendering.

use peekcard_style::{Color, ColorProfile, Style};

use super::config::{CarouselTheme, GHOST_BORDER_COLOR, INACTIVE_CONTENT_COLOR};
use super::delegate::ItemDelegate;
use crate::block::{Block, Padding};

/// How a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardRole {
    /// The focused center card.
    Active,
    /// An inactive card whose item is marked.
    Marked,
    /// Any other inactive card.
    Default,
}

impl CardRole {
    /// Role of a card; the active card ignores mark state.
    pub const fn for_item(active: bool, marked: bool) -> Self {
        match (active, marked) {
            (true, _) => Self::Active,
            (false, true) => Self::Marked,
            (false, false) => Self::Default,
        }
    }

    /// Border color for this role.
    pub const fn border_color(self, theme: &CarouselTheme) -> Color {
        match self {
            Self::Active => theme.active,
            Self::Marked => theme.marked,
            Self::Default => theme.idle,
        }
    }

    /// Style applied to the card interior.
    pub const fn content_style(self) -> Style {
        match self {
            Self::Active => Style::new(),
            Self::Marked | Self::Default => Style::new().fg(INACTIVE_CONTENT_COLOR),
        }
    }
}

/// Render `item` as a bordered card.
///
/// `width` and `height` are the card interior including its one-cell
/// padding, so the delegate is offered `width - 2` columns and the finished
/// card measures `(width + 2) x (height + 2)`.
pub fn render_card<T, D: ItemDelegate<T>>(
    delegate: &D,
    item: &T,
    width: usize,
    height: usize,
    role: CardRole,
    theme: &CarouselTheme,
) -> String {
    let content = delegate.render(item, width.saturating_sub(2));
    Block::new()
        .border_style(Style::new().fg(role.border_color(theme)))
        .style(role.content_style())
        .width(width)
        .height(height)
        .padding(Padding::uniform(1))
        .render(&content, theme.profile)
}

/// Blank placeholder with the same outer size as a card.
pub fn ghost_card(width: usize, height: usize, profile: ColorProfile) -> String {
    Block::new()
        .border_style(Style::new().fg(GHOST_BORDER_COLOR))
        .width(width)
        .height(height)
        .render("", profile)
}
