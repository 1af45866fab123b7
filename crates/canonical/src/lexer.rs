//! Character-class lexer over normalized text.
//!
//! Pieces are recognized in priority order: ASCII identifier/keyword runs,
//! decimal digit runs (any Unicode `Nd` digit), then a single structural
//! symbol. Characters outside those classes (quotes left over from
//! unterminated literals, `!`, `%`, `@`, non-ASCII letters, whitespace) are
//! skipped, so lexing never fails.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+").expect("valid digit run pattern"));

/// Single-character symbols kept as tokens.
pub const SYMBOLS: &[char] = &[
    '=', '+', '-', '*', '/', '<', '>', ':', '.', ',', '(', ')', '{', '}', '[', ']', ';',
];

/// Raw piece as it appears in the text, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Word(&'a str),
    Number(&'a str),
    Symbol(&'a str),
}

impl<'a> Piece<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Piece::Word(s) | Piece::Number(s) | Piece::Symbol(s) => s,
        }
    }
}

fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_symbol(b: u8) -> bool {
    b.is_ascii() && SYMBOLS.contains(&(b as char))
}

fn digit_run(text: &str, at: usize) -> Option<&str> {
    let b = text.as_bytes()[at];
    if !b.is_ascii_digit() && b.is_ascii() {
        return None;
    }
    DIGIT_RUN.find(&text[at..]).map(|m| m.as_str())
}

/// Splits `text` into pieces, left to right.
///
/// The cursor only ever rests on a char boundary: unrecognized characters
/// are skipped whole.
pub fn lex(text: &str) -> Vec<Piece<'_>> {
    let bytes = text.as_bytes();
    let mut pieces = Vec::with_capacity(bytes.len() / 3 + 1);
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if is_word_start(b) {
            let start = i;
            i += 1;
            while i < bytes.len() && is_word_continue(bytes[i]) {
                i += 1;
            }
            pieces.push(Piece::Word(&text[start..i]));
        } else if let Some(run) = digit_run(text, i) {
            pieces.push(Piece::Number(run));
            i += run.len();
        } else if is_symbol(b) {
            pieces.push(Piece::Symbol(&text[i..i + 1]));
            i += 1;
        } else {
            i += text[i..].chars().next().map_or(1, char::len_utf8);
        }
    }

    pieces
}
