#![forbid(unsafe_code)]

//! The demo deck and its event handling.

use peekcard_core::event::{KeyCode, KeyEvent, Modifiers};
use peekcard_style::{ColorProfile, Style};
use peekcard_text::visible_width;
use peekcard_widgets::carousel::{Carousel, CarouselConfig, ItemDelegate};
use peekcard_widgets::{Block, Padding};

use crate::cli::Opts;

/// One card's worth of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: u16,
    pub saved: bool,
}

impl Book {
    fn new(title: &str, author: &str, year: u16) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            saved: false,
        }
    }
}

/// The bundled sample deck.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("The Rust Programming Language", "Klabnik & Nichols", 2018),
        Book::new("Programming Rust", "Blandy, Orendorff & Tindall", 2021),
        Book::new("Rust for Rustaceans", "Jon Gjengset", 2021),
        Book::new("Rust Atomics and Locks", "Mara Bos", 2023),
        Book::new("Zero To Production In Rust", "Luca Palmieri", 2022),
        Book::new("Hands-on Rust", "Herbert Wolverson", 2021),
    ]
}

/// Renders a book as title, author and year, each truncated to the card.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookCards {
    profile: ColorProfile,
}

impl ItemDelegate<Book> for BookCards {
    fn render(&self, book: &Book, inner_width: usize) -> String {
        let title = Style::new().bold().paint(&truncate(&book.title, inner_width), self.profile);
        let mark = if book.saved { "★ saved" } else { "" };
        [
            title,
            String::new(),
            truncate(&book.author, inner_width),
            truncate(&book.year.to_string(), inner_width),
            String::new(),
            truncate(mark, inner_width),
        ]
        .join("\n")
    }

    fn is_marked(&self, book: &Book) -> bool {
        book.saved
    }
}

fn truncate(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    let mut out = peekcard_text::clip_to_left_edge(text, width.saturating_sub(1));
    out.push('…');
    out
}

/// What the main loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Demo state: the carousel plus the host-side chrome around it.
pub struct App {
    carousel: Carousel<Book, BookCards>,
    profile: ColorProfile,
}

impl App {
    pub fn new(opts: &Opts) -> Self {
        let mut config = CarouselConfig::new(BookCards {
            profile: opts.profile,
        })
        .items(sample_books())
        .title(opts.title.clone())
        .extra_footer("q Quit")
        .color_profile(opts.profile);
        if let Some(accent) = opts.accent {
            config = config.active_color(accent);
        }
        let mut carousel = Carousel::new(config);
        carousel.set_cursor(opts.start);
        Self {
            carousel,
            profile: opts.profile,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.carousel.set_size(width, height);
    }

    /// Exit keys are handled here; everything else goes to the carousel.
    pub fn on_key(&mut self, key: KeyEvent) -> Flow {
        let quit = key.code == KeyCode::Escape
            || key.is_char('q')
            || (key.is_char('c') && key.modifiers.contains(Modifiers::CTRL));
        if quit && key.is_press() {
            return Flow::Quit;
        }

        if let Some(selected) = self.carousel.update(&key) {
            let mut books = self.carousel.items().to_vec();
            if let Some(book) = books.get_mut(selected.index) {
                book.saved = !selected.item.saved;
            }
            self.carousel.set_items(books);
        }
        Flow::Continue
    }

    /// The carousel wrapped in the one-column border and two-column padding
    /// its layout reserves.
    pub fn frame(&self) -> String {
        let body = self.carousel.view();
        Block::new()
            .border_style(Style::new().dim())
            .padding(Padding::new(1, 2))
            .render(&body, self.profile)
    }

    pub fn carousel(&self) -> &Carousel<Book, BookCards> {
        &self.carousel
    }
}
