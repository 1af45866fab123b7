use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Prefix that marks a reserved word.
///
/// Ordinary tokens are always lowercased, so an uppercase prefix can never
/// collide with an identifier spelled the same way.
pub const KEYWORD_PREFIX: &str = "KEYWORD_";

/// Text that replaces every string literal before lexing.
pub const STRING_SENTINEL: &str = "STRING_LITERAL";

/// A normalized token.
///
/// Equality and hashing use the normalized text only, which is what the
/// similarity metrics compare.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token {
    text: String,
}

impl Token {
    /// Tags a reserved word: `def` → `KEYWORD_DEF`.
    pub fn keyword(word: &str) -> Self {
        let mut text = String::with_capacity(KEYWORD_PREFIX.len() + word.len());
        text.push_str(KEYWORD_PREFIX);
        text.push_str(&word.to_uppercase());
        Self { text }
    }

    /// Identifier, number, symbol or literal sentinel, lowercased.
    pub fn ordinary(piece: &str) -> Self {
        Self {
            text: piece.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_keyword(&self) -> bool {
        self.text.starts_with(KEYWORD_PREFIX)
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered tokens for one file.
///
/// Order only matters for [`TokenSequence::flatten`]; the frequency and set
/// views used by cosine and Jaccard ignore it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Space-joined form fed to the edit-distance engine.
    pub fn flatten(&self) -> String {
        let capacity = self.tokens.iter().map(|t| t.as_str().len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for token in &self.tokens {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token.as_str());
        }
        out
    }

    pub fn into_inner(self) -> Vec<Token> {
        self.tokens
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl AsRef<[Token]> for TokenSequence {
    fn as_ref(&self) -> &[Token] {
        &self.tokens
    }
}
