#![forbid(unsafe_code)]

//! Peeking single-row card carousel.
//!
//! One full card sits in the center. Its neighbors peek in from both sides,
//! clipped to their near edge, and blank ghost cards stand in past either end
//! of the sequence. Above the row is a title with a `marked/total` count and
//! a dot position indicator. Below it is a hint footer.
//!
//! The carousel is immediate-mode: the host feeds it one key at a time with
//! [`Carousel::update`] and asks for the whole block with [`Carousel::view`].
//! Exit and cancel keys are left to the host.
//!
//! # Usage
//!
//! ```
//! use peekcard_core::event::{KeyCode, KeyEvent};
//! use peekcard_widgets::carousel::{Carousel, CarouselConfig, FnDelegate};
//!
//! let delegate = FnDelegate::new(
//!     |title: &&str, _inner_width| title.to_string(),
//!     |title: &&str| title.ends_with('!'),
//! );
//! let mut carousel = Carousel::new(
//!     CarouselConfig::new(delegate)
//!         .items(vec!["alpha", "beta!", "gamma"])
//!         .title("Pick a card"),
//! );
//! carousel.set_size(100, 40);
//!
//! carousel.update(&KeyEvent::new(KeyCode::Right));
//! assert_eq!(carousel.cursor(), 1);
//!
//! let selected = carousel.update(&KeyEvent::new(KeyCode::Enter));
//! assert_eq!(selected.map(|s| s.index), Some(1));
//! assert!(carousel.view().contains("1/3 saved"));
//! ```
//!
//! # Submodules
//!
//! - [`layout`]: card and peek widths from the terminal width
//! - [`card`]: bordered cards and ghost placeholders
//! - [`indicator`]: header and dot row
//! - [`footer`]: navigation hints

pub mod card;
pub mod config;
pub mod delegate;
pub mod footer;
pub mod indicator;
pub mod layout;

pub use card::{CardRole, ghost_card, render_card};
pub use config::{CarouselConfig, CarouselTheme};
pub use delegate::{FnDelegate, ItemDelegate};
pub use footer::{NavHint, render_footer};
pub use indicator::{render_dots, render_header};
pub use layout::CardLayout;

use peekcard_core::event::{KeyCode, KeyEvent};
use peekcard_text::{clip_to_left_edge, clip_to_right_edge, join_horizontal};

// ---------------------------------------------------------------------------
// Actions and events
// ---------------------------------------------------------------------------

/// A carousel transition, decoupled from the key that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselAction {
    /// Move the cursor one card left.
    MoveLeft,
    /// Move the cursor one card right.
    MoveRight,
    /// Select the active card.
    Select,
}

impl CarouselAction {
    /// Classify a key.
    ///
    /// - `Left` / `h` move left
    /// - `Right` / `l` move right
    /// - `Enter` / `Down` / `j` / `Space` select
    ///
    /// Releases and keys held with Ctrl, Alt or Super map to nothing.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if !key.is_press() || key.has_chord_modifier() {
            return None;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Self::MoveLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::MoveRight),
            KeyCode::Enter | KeyCode::Down | KeyCode::Char('j' | ' ') => Some(Self::Select),
            _ => None,
        }
    }
}

/// Emitted when the active card is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSelected<T> {
    /// Position of the selected item.
    pub index: usize,
    /// The selected item.
    pub item: T,
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// Carousel state: items, cursor, presentation options and the last size
/// reported by the host.
///
/// Whenever `items` is non-empty, `cursor < items.len()`.
#[derive(Debug, Clone)]
pub struct Carousel<T, D> {
    items: Vec<T>,
    delegate: D,
    title: String,
    theme: CarouselTheme,
    extra_footer: String,
    marked_label: String,
    cursor: usize,
    width: u16,
    height: u16,
}

impl<T, D: ItemDelegate<T>> Carousel<T, D> {
    /// Build a carousel from `config`, filling in default colors.
    ///
    /// The cursor starts at 0 and the size at 0x0; call
    /// [`set_size`](Self::set_size) before the first [`view`](Self::view).
    pub fn new(config: CarouselConfig<T, D>) -> Self {
        let theme = CarouselTheme::resolve(
            config.active_color,
            config.marked_color,
            config.default_color,
            config.color_profile,
        );
        Self {
            items: config.items,
            delegate: config.delegate,
            title: config.title,
            theme,
            extra_footer: config.extra_footer,
            marked_label: config.marked_label,
            cursor: 0,
            width: 0,
            height: 0,
        }
    }

    /// Record the host's available size. Only the width affects layout.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Last size passed to [`set_size`](Self::set_size).
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Current items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the items, pulling the cursor back onto the last item if it
    /// would fall off the end.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if let Some(last) = self.items.len().checked_sub(1) {
            self.cursor = self.cursor.min(last);
        }
        peekcard_core::debug!(
            items = self.items.len(),
            cursor = self.cursor,
            "carousel items replaced"
        );
    }

    /// Position of the active card.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `index`, clamped to the last item.
    ///
    /// With no items the index is stored as given and clamped by the next
    /// [`set_items`](Self::set_items).
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = match self.items.len().checked_sub(1) {
            Some(last) => index.min(last),
            None => index,
        };
    }

    /// The active item, if any.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// The delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// The resolved color theme.
    pub fn theme(&self) -> &CarouselTheme {
        &self.theme
    }

    /// Number of items the delegate reports as marked.
    pub fn marked_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| self.delegate.is_marked(item))
            .count()
    }

    fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            peekcard_core::debug!(cursor = self.cursor, "carousel moved left");
        }
    }

    fn move_right(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            peekcard_core::debug!(cursor = self.cursor, "carousel moved right");
        }
    }

    fn card_for(&self, index: usize, layout: &CardLayout) -> String {
        let item = &self.items[index];
        let role = CardRole::for_item(index == self.cursor, self.delegate.is_marked(item));
        render_card(
            &self.delegate,
            item,
            layout.center_width,
            layout.card_height,
            role,
            &self.theme,
        )
    }

    /// Render the header, card row and footer as one block.
    ///
    /// Returns an empty string when there are no items.
    pub fn view(&self) -> String {
        let count = self.items.len();
        let Some(last) = count.checked_sub(1) else {
            return String::new();
        };
        let cursor = self.cursor.min(last);

        let _span = peekcard_core::debug_span!(
            "carousel_view",
            items = count,
            cursor = cursor,
            width = self.width
        )
        .entered();

        let layout = CardLayout::compute(self.width);
        let ghost = || ghost_card(layout.center_width, layout.card_height, self.theme.profile);

        let dots = render_dots(count, cursor, &self.theme);
        let header = render_header(
            &self.title,
            self.marked_count(),
            count,
            &self.marked_label,
            &dots,
            &self.theme,
        );

        let center = self.card_for(cursor, &layout);
        let left = match cursor.checked_sub(1) {
            Some(prev) => self.card_for(prev, &layout),
            None => ghost(),
        };
        let right = if cursor < last {
            self.card_for(cursor + 1, &layout)
        } else {
            ghost()
        };
        let left_peek = clip_to_right_edge(&left, layout.peek_width);
        let right_peek = clip_to_left_edge(&right, layout.peek_width);

        let gap = " ".repeat(layout::CARD_GAP);
        let row = join_horizontal(&[&left_peek, &gap, &center, &gap, &right_peek]);

        let footer = render_footer(cursor, last, &self.extra_footer, &self.theme);

        let mut out = header;
        out.push_str(&row);
        out.push_str("\n\n");
        out.push_str(&footer);
        out
    }
}

impl<T: Clone, D: ItemDelegate<T>> Carousel<T, D> {
    /// Apply one transition. Only [`CarouselAction::Select`] produces an
    /// event; with no items nothing happens.
    pub fn apply(&mut self, action: CarouselAction) -> Option<ItemSelected<T>> {
        if self.items.is_empty() {
            return None;
        }
        match action {
            CarouselAction::MoveLeft => {
                self.move_left();
                None
            }
            CarouselAction::MoveRight => {
                self.move_right();
                None
            }
            CarouselAction::Select => {
                let item = self.items.get(self.cursor)?.clone();
                peekcard_core::debug!(index = self.cursor, "carousel item selected");
                Some(ItemSelected {
                    index: self.cursor,
                    item,
                })
            }
        }
    }

    /// Handle one key. Unrecognized keys are ignored.
    pub fn update(&mut self, key: &KeyEvent) -> Option<ItemSelected<T>> {
        CarouselAction::from_key(key).and_then(|action| self.apply(action))
    }
}
