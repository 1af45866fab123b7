use once_cell::sync::Lazy;
use tracing::debug;

use crate::language::{KeywordSet, Language, LanguageProfile};
use crate::lexer::{lex, Piece};
use crate::normalize::{mask_string_literals, strip_comments};
use crate::token::{Token, TokenSequence};
use crate::whitespace::collapse_whitespace;

static DEFAULT_TOKENIZER: Lazy<Tokenizer> = Lazy::new(Tokenizer::default);

/// Main entry point. Tokenizes `text` with the default language profiles.
///
/// Never fails: empty or whitespace-only input yields an empty sequence and
/// anything the lexer does not recognize is skipped.
pub fn tokenize(text: &str, language: Language) -> TokenSequence {
    DEFAULT_TOKENIZER.tokenize(text, language)
}

/// Tokenizer with its own per-language profile table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    profiles: [LanguageProfile; 7],
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            profiles: Language::ALL.map(LanguageProfile::for_language),
        }
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the profile used for `language`.
    pub fn with_profile(mut self, language: Language, profile: LanguageProfile) -> Self {
        self.profiles[slot(language)] = profile;
        self
    }

    /// Replaces only the reserved words used for `language`.
    pub fn with_keywords(mut self, language: Language, keywords: KeywordSet) -> Self {
        self.profiles[slot(language)].keywords = keywords;
        self
    }

    pub fn profile(&self, language: Language) -> &LanguageProfile {
        &self.profiles[slot(language)]
    }

    /// Comment stripping → string masking → whitespace collapse → lexing →
    /// keyword classification, in that order.
    pub fn tokenize(&self, text: &str, language: Language) -> TokenSequence {
        if text.trim().is_empty() {
            return TokenSequence::default();
        }

        let profile = self.profile(language);
        let stripped = strip_comments(text, profile.comments);
        let masked = mask_string_literals(&stripped);
        let collapsed = collapse_whitespace(&masked);

        let tokens: TokenSequence = lex(&collapsed)
            .into_iter()
            .map(|piece| classify(piece, &profile.keywords))
            .collect();

        debug!(
            language = %language,
            input_len = text.len(),
            token_count = tokens.len(),
            "tokenized"
        );
        tokens
    }
}

fn classify(piece: Piece<'_>, keywords: &KeywordSet) -> Token {
    let text = piece.text();
    if keywords.contains(text) {
        Token::keyword(text)
    } else {
        Token::ordinary(text)
    }
}

fn slot(language: Language) -> usize {
    match language {
        Language::Python => 0,
        Language::JavaScript => 1,
        Language::Java => 2,
        Language::Cpp => 3,
        Language::C => 4,
        Language::CSharp => 5,
        Language::Unknown => 6,
    }
}
