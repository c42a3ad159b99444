#![forbid(unsafe_code)]

//! peekcard public facade crate.
//!
//! Re-exports the carousel, its configuration and the key and style types a
//! host needs, plus a prelude for day-to-day use.
//!
//! ```
//! use peekcard::prelude::*;
//!
//! struct Task {
//!     name: &'static str,
//!     done: bool,
//! }
//!
//! struct TaskCards;
//!
//! impl ItemDelegate<Task> for TaskCards {
//!     fn render(&self, task: &Task, inner_width: usize) -> String {
//!         task.name.chars().take(inner_width).collect()
//!     }
//!
//!     fn is_marked(&self, task: &Task) -> bool {
//!         task.done
//!     }
//! }
//!
//! let tasks = vec![
//!     Task { name: "Write docs", done: true },
//!     Task { name: "Ship it", done: false },
//! ];
//! let mut carousel = Carousel::new(
//!     CarouselConfig::new(TaskCards)
//!         .items(tasks)
//!         .title("Tasks")
//!         .marked_label("done")
//!         .color_profile(ColorProfile::Mono),
//! );
//! carousel.set_size(80, 24);
//!
//! let view = carousel.view();
//! assert!(view.starts_with("\x1b[1mTasks\x1b[0m  1/2 done"));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use peekcard_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};

// --- Style re-exports ------------------------------------------------------

pub use peekcard_style::{
    Ansi16, BorderChars, Color, ColorParseError, ColorProfile, Rgb, Style, StyleFlags,
};

// --- Widget re-exports -----------------------------------------------------

pub use peekcard_widgets::carousel::{
    CardLayout, CardRole, Carousel, CarouselAction, CarouselConfig, CarouselTheme, FnDelegate,
    ItemDelegate, ItemSelected,
};
pub use peekcard_widgets::{Block, Padding};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Carousel, CarouselAction, CarouselConfig, Color, ColorProfile, FnDelegate, ItemDelegate,
        ItemSelected, KeyCode, KeyEvent, Modifiers, Style,
    };

    pub use crate::{core, style, text, widgets};
}

pub use peekcard_core as core;
pub use peekcard_style as style;
pub use peekcard_text as text;
pub use peekcard_widgets as widgets;
