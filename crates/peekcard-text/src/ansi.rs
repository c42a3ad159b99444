#![forbid(unsafe_code)]

//! Escape-sequence aware tokenizing.
//!
//! Splits a string into runs of printable text and whole escape sequences so
//! that width measurement and clipping can skip the latter. Recognized forms:
//! - CSI: `ESC [` parameters, final byte `0x40..=0x7E`
//! - OSC / DCS / PM / APC: `ESC ]`, `ESC P`, `ESC ^`, `ESC _`, ended by BEL or `ESC \`
//! - Two-byte escapes: `ESC` + one byte
//!
//! Unterminated sequences swallow the rest of the input.

use std::borrow::Cow;

const ESC: u8 = 0x1b;

/// One piece of a styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Printable text containing no escape bytes.
    Text(&'a str),
    /// A complete escape sequence, including the leading `ESC`.
    Escape(&'a str),
}

/// Iterator over the [`Token`]s of a string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

/// Tokenize `s` into text runs and escape sequences.
#[must_use]
pub fn tokens(s: &str) -> Tokens<'_> {
    Tokens { src: s, pos: 0 }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        if bytes[start] == ESC {
            let end = skip_escape_sequence(bytes, start);
            self.pos = end;
            // ESC and every sequence terminator we stop on are ASCII, so
            // `end` always lands on a char boundary.
            return Some(Token::Escape(&self.src[start..end]));
        }

        let end = bytes[start..]
            .iter()
            .position(|&b| b == ESC)
            .map_or(bytes.len(), |off| start + off);
        self.pos = end;
        Some(Token::Text(&self.src[start..end]))
    }
}

/// Strip escape sequences, borrowing when there are none.
#[must_use]
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    for token in tokens(s) {
        if let Token::Text(text) = token {
            out.push_str(text);
        }
    }
    Cow::Owned(out)
}

/// Whether `seq` is an SGR sequence (`ESC [ ... m`).
#[must_use]
pub fn is_sgr(seq: &str) -> bool {
    seq.len() >= 3 && seq.starts_with("\x1b[") && seq.ends_with('m')
}

/// Whether `seq` is an SGR sequence that clears all attributes
/// (`ESC[m`, `ESC[0m`, `ESC[00m`, ...).
#[must_use]
pub fn is_sgr_reset(seq: &str) -> bool {
    is_sgr(seq) && seq[2..seq.len() - 1].bytes().all(|b| b == b'0')
}

/// Tracks whether SGR state is left open while scanning a line.
///
/// Any SGR other than a full reset counts as opening state; this errs on the
/// side of emitting a closing reset that might not have been needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SgrState {
    open: bool,
}

impl SgrState {
    /// Account for one escape sequence.
    pub fn observe(&mut self, seq: &str) {
        if is_sgr_reset(seq) {
            self.open = false;
        } else if is_sgr(seq) {
            self.open = true;
        }
    }

    /// True when text written now would still be styled.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

fn skip_escape_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        b if b.is_ascii() => next + 1,
        // ESC followed by a multi-byte char: only consume the ESC.
        _ => next,
    }
}

fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7e).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x3f).contains(&b) {
            // Invalid byte: end the sequence before it.
            return i;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_token() {
        let toks: Vec<_> = tokens("hello").collect();
        assert_eq!(toks, vec![Token::Text("hello")]);
    }

    #[test]
    fn splits_sgr_and_text() {
        let toks: Vec<_> = tokens("\x1b[31mred\x1b[0m!").collect();
        assert_eq!(
            toks,
            vec![
                Token::Escape("\x1b[31m"),
                Token::Text("red"),
                Token::Escape("\x1b[0m"),
                Token::Text("!"),
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(tokens("").count(), 0);
    }

    #[test]
    fn strip_borrows_when_clean() {
        assert!(matches!(strip_ansi("hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn strip_truecolor_and_256() {
        assert_eq!(strip_ansi("\x1b[38;2;255;0;0mred\x1b[0m"), "red");
        assert_eq!(strip_ansi("\x1b[38;5;196mred\x1b[0m"), "red");
    }

    #[test]
    fn strip_osc_hyperlink() {
        assert_eq!(
            strip_ansi("\x1b]8;;https://example.com\x07click\x1b]8;;\x1b\\"),
            "click"
        );
    }

    #[test]
    fn strip_two_byte_escape() {
        assert_eq!(strip_ansi("\x1b=mode"), "mode");
    }

    #[test]
    fn strip_unterminated_consumes_rest() {
        assert_eq!(strip_ansi("ok\x1b[31"), "ok");
        assert_eq!(strip_ansi("ok\x1b]8;;url"), "ok");
        assert_eq!(strip_ansi("ok\x1b"), "ok");
    }

    #[test]
    fn strip_keeps_wide_text() {
        assert_eq!(strip_ansi("\x1b[1m你好\x1b[0m"), "你好");
    }

    #[test]
    fn esc_before_multibyte_char_keeps_char() {
        assert_eq!(strip_ansi("\x1bé"), "é");
    }

    #[test]
    fn sgr_reset_forms() {
        assert!(is_sgr_reset("\x1b[0m"));
        assert!(is_sgr_reset("\x1b[m"));
        assert!(is_sgr_reset("\x1b[00m"));
        assert!(!is_sgr_reset("\x1b[1m"));
        assert!(!is_sgr_reset("\x1b[2J"));
    }

    #[test]
    fn sgr_state_tracks_open_style() {
        let mut state = SgrState::default();
        assert!(!state.is_open());
        state.observe("\x1b[38;5;240m");
        assert!(state.is_open());
        state.observe("\x1b[2K");
        assert!(state.is_open());
        state.observe("\x1b[0m");
        assert!(!state.is_open());
    }
}
