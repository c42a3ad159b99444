#![forbid(unsafe_code)]

//! Key input model.
//!
//! The carousel only ever sees one key per update, so this module carries a
//! keyboard-only slice of the usual terminal event vocabulary. Hosts running
//! on crossterm convert with [`KeyEvent::from_crossterm`]; everything else
//! builds events directly.
//!
//! - `KeyEventKind` defaults to `Press` when the terminal does not report it
//! - `Modifiers` use bitflags for easy combination

use bitflags::bitflags;
#[cfg(not(target_arch = "wasm32"))]
use crossterm::event as cte;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with no modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Shorthand for a plain character key press.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Replace the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Replace the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// True for press and repeat events, false for releases.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }

    /// True when Ctrl, Alt or Super is held.
    ///
    /// Shift is not a chord modifier here: it is already folded into the
    /// character for printable keys.
    #[must_use]
    pub const fn has_chord_modifier(&self) -> bool {
        self.modifiers
            .intersects(Modifiers::CTRL.union(Modifiers::ALT).union(Modifiers::SUPER))
    }

    /// Convert a crossterm key event.
    ///
    /// Returns `None` for keys with no counterpart in [`KeyCode`].
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_crossterm(event: cte::KeyEvent) -> Option<Self> {
        Some(Self {
            code: map_key_code(event.code)?,
            modifiers: map_modifiers(event.modifiers),
            kind: map_key_kind(event.kind),
        })
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Shift+Tab (back-tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Function key (F1-F24).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is being held (repeat event).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_key_kind(kind: cte::KeyEventKind) -> KeyEventKind {
    match kind {
        cte::KeyEventKind::Press => KeyEventKind::Press,
        cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
        cte::KeyEventKind::Release => KeyEventKind::Release,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_key_code(code: cte::KeyCode) -> Option<KeyCode> {
    match code {
        cte::KeyCode::Char(c) => Some(KeyCode::Char(c)),
        cte::KeyCode::Enter => Some(KeyCode::Enter),
        cte::KeyCode::Esc => Some(KeyCode::Escape),
        cte::KeyCode::Backspace => Some(KeyCode::Backspace),
        cte::KeyCode::Tab => Some(KeyCode::Tab),
        cte::KeyCode::BackTab => Some(KeyCode::BackTab),
        cte::KeyCode::Delete => Some(KeyCode::Delete),
        cte::KeyCode::Home => Some(KeyCode::Home),
        cte::KeyCode::End => Some(KeyCode::End),
        cte::KeyCode::PageUp => Some(KeyCode::PageUp),
        cte::KeyCode::PageDown => Some(KeyCode::PageDown),
        cte::KeyCode::Up => Some(KeyCode::Up),
        cte::KeyCode::Down => Some(KeyCode::Down),
        cte::KeyCode::Left => Some(KeyCode::Left),
        cte::KeyCode::Right => Some(KeyCode::Right),
        cte::KeyCode::F(n) => Some(KeyCode::F(n)),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut mapped = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        mapped |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        mapped |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        mapped |= Modifiers::CTRL;
    }
    if modifiers.contains(cte::KeyModifiers::SUPER)
        || modifiers.contains(cte::KeyModifiers::HYPER)
        || modifiers.contains(cte::KeyModifiers::META)
    {
        mapped |= Modifiers::SUPER;
    }
    mapped
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crossterm::event as ct_event;

    #[test]
    fn char_shorthand_is_plain_press() {
        let event = KeyEvent::char('h');
        assert!(event.is_char('h'));
        assert!(!event.is_char('l'));
        assert_eq!(event.modifiers, Modifiers::NONE);
        assert_eq!(event.kind, KeyEventKind::Press);
    }

    #[test]
    fn release_is_not_a_press() {
        let event = KeyEvent::new(KeyCode::Left).with_kind(KeyEventKind::Release);
        assert!(!event.is_press());
        assert!(KeyEvent::new(KeyCode::Left).with_kind(KeyEventKind::Repeat).is_press());
    }

    #[test]
    fn shift_is_not_a_chord() {
        let shifted = KeyEvent::char('H').with_modifiers(Modifiers::SHIFT);
        assert!(!shifted.has_chord_modifier());
        let ctrl = KeyEvent::char('h').with_modifiers(Modifiers::CTRL);
        assert!(ctrl.has_chord_modifier());
        let alt_shift = KeyEvent::char('l').with_modifiers(Modifiers::ALT | Modifiers::SHIFT);
        assert!(alt_shift.has_chord_modifier());
    }

    #[test]
    fn crossterm_arrow_maps() {
        let ct = ct_event::KeyEvent::new(ct_event::KeyCode::Left, ct_event::KeyModifiers::NONE);
        let mapped = KeyEvent::from_crossterm(ct).expect("arrow keys map");
        assert_eq!(mapped.code, KeyCode::Left);
        assert_eq!(mapped.modifiers, Modifiers::NONE);
    }

    #[test]
    fn crossterm_escape_maps() {
        let ct = ct_event::KeyEvent::new(ct_event::KeyCode::Esc, ct_event::KeyModifiers::NONE);
        assert_eq!(
            KeyEvent::from_crossterm(ct).map(|e| e.code),
            Some(KeyCode::Escape)
        );
    }

    #[test]
    fn crossterm_modifiers_map() {
        let ct = ct_event::KeyEvent::new(
            ct_event::KeyCode::Char('j'),
            ct_event::KeyModifiers::CONTROL | ct_event::KeyModifiers::META,
        );
        let mapped = KeyEvent::from_crossterm(ct).expect("chars map");
        assert!(mapped.modifiers.contains(Modifiers::CTRL));
        assert!(mapped.modifiers.contains(Modifiers::SUPER));
        assert!(!mapped.modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn crossterm_unmapped_key_is_none() {
        let ct = ct_event::KeyEvent::new(ct_event::KeyCode::CapsLock, ct_event::KeyModifiers::NONE);
        assert_eq!(KeyEvent::from_crossterm(ct), None);
    }

    #[test]
    fn from_key_code() {
        let event: KeyEvent = KeyCode::Enter.into();
        assert_eq!(event, KeyEvent::new(KeyCode::Enter));
    }
}
