#![forbid(unsafe_code)]

//! Card geometry derived from the available width.
//!
//! ```text
//!  ──╮  ╭──────────────────╮  ╭──
//!    │  │                  │  │
//!  ──╯  ╰──────────────────╯  ╰──
//! peek gap   center card    gap peek
//! ```
//!
//! `center_width` and `card_height` size the card's padded interior; the
//! rendered card is two columns wider and two rows taller for its border.

/// Smallest number of visible columns shown for each side peek.
pub const MIN_PEEK_WIDTH: i32 = 8;
/// Blank columns between a peek and the center card.
pub const CARD_GAP: usize = 2;
/// Center card interior width bounds.
pub const MAX_CENTER_WIDTH: i32 = 44;
/// Lower bound for the center card interior width. Wins over the upper bound.
pub const MIN_CENTER_WIDTH: i32 = 24;
/// Lower bound for the card interior height.
pub const MIN_CARD_HEIGHT: i32 = 8;
/// Columns the host's outer container is assumed to consume.
pub const HOST_CHROME_WIDTH: i32 = 6;

/// Card sizes for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// Interior width of every card, padding included.
    pub center_width: usize,
    /// Visible columns of each side peek.
    pub peek_width: usize,
    /// Interior height of every card, padding included.
    pub card_height: usize,
}

impl CardLayout {
    /// Compute the layout for `available_width` terminal columns.
    ///
    /// Total for every input: tiny or zero widths clamp to the minimum card.
    #[must_use]
    pub fn compute(available_width: u16) -> Self {
        let gap = CARD_GAP as i32;
        let usable = i32::from(available_width) - HOST_CHROME_WIDTH;

        let center = (usable - 2 * (MIN_PEEK_WIDTH + gap))
            .min(MAX_CENTER_WIDTH)
            .max(MIN_CENTER_WIDTH);

        // `usable` can be negative; floor, then clamp.
        let peek = (usable - center - 2 * gap)
            .div_euclid(2)
            .min((center + 2) / 2)
            .max(MIN_PEEK_WIDTH);

        let height = ((center + 2) * 3 / 10).max(MIN_CARD_HEIGHT);

        let layout = Self {
            center_width: center as usize,
            peek_width: peek as usize,
            card_height: height as usize,
        };
        peekcard_core::trace!(
            available_width,
            center_width = layout.center_width,
            peek_width = layout.peek_width,
            card_height = layout.card_height,
            "carousel layout"
        );
        layout
    }

    /// Outer width of a rendered card, border included.
    #[must_use]
    pub const fn card_outer_width(&self) -> usize {
        self.center_width + 2
    }

    /// Columns available to the item delegate inside a card's padding.
    #[must_use]
    pub const fn inner_width(&self) -> usize {
        self.center_width.saturating_sub(2)
    }

    /// Total width of the card row: two peeks, two gaps and the center card.
    #[must_use]
    pub const fn row_width(&self) -> usize {
        2 * self.peek_width + 2 * CARD_GAP + self.card_outer_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wide_terminal_caps_center() {
        let layout = CardLayout::compute(200);
        assert_eq!(layout.center_width, 44);
        assert_eq!(layout.peek_width, 23);
        assert_eq!(layout.card_height, 13);
    }

    #[test]
    fn narrow_terminal_floors_everything() {
        for width in [0, 1, 10, 30] {
            let layout = CardLayout::compute(width);
            assert_eq!(layout.center_width, 24, "width {width}");
            assert_eq!(layout.peek_width, 8, "width {width}");
            assert_eq!(layout.card_height, 8, "width {width}");
        }
    }

    #[test]
    fn standard_terminal() {
        let layout = CardLayout::compute(80);
        assert_eq!(layout.center_width, 44);
        assert_eq!(layout.peek_width, 13);
        assert_eq!(layout.card_height, 13);
    }

    #[test]
    fn mid_width_grows_center_first() {
        // usable 54, center 54 - 20 = 34, peek (54 - 34 - 4) / 2 = 8
        let layout = CardLayout::compute(60);
        assert_eq!(layout.center_width, 34);
        assert_eq!(layout.peek_width, 8);
        assert_eq!(layout.card_height, 10);
    }

    #[test]
    fn peek_capped_at_half_card() {
        let layout = CardLayout::compute(u16::MAX);
        assert_eq!(layout.center_width, 44);
        assert_eq!(layout.peek_width, 23);
    }

    #[test]
    fn derived_widths() {
        let layout = CardLayout::compute(80);
        assert_eq!(layout.card_outer_width(), 46);
        assert_eq!(layout.inner_width(), 42);
        assert_eq!(layout.row_width(), 2 * 13 + 4 + 46);
    }

    proptest! {
        #[test]
        fn layout_bounds_hold(width in any::<u16>()) {
            let layout = CardLayout::compute(width);
            prop_assert!((24..=44).contains(&layout.center_width));
            prop_assert!(layout.peek_width >= 8);
            prop_assert!(layout.peek_width <= (layout.center_width + 2) / 2);
            prop_assert!(layout.card_height >= 8);
        }

        #[test]
        fn center_is_monotonic(width in 0u16..u16::MAX) {
            let a = CardLayout::compute(width);
            let b = CardLayout::compute(width + 1);
            prop_assert!(b.center_width >= a.center_width);
        }
    }
}
