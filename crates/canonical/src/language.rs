//! Language tags and per-language tokenizer profiles.
//!
//! A [`LanguageProfile`] bundles the two pieces of language knowledge the
//! tokenizer needs: which comment syntax to strip and which reserved words to
//! tag as keywords. Profiles are plain values owned by a
//! [`Tokenizer`](crate::Tokenizer), so several of them can coexist and be
//! tested in isolation.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{CommentSyntax, Language, LanguageProfile};
//!
//! assert_eq!(Language::from_extension("PY"), Language::Python);
//! assert_eq!(Language::from_path("src/Main.java"), Language::Java);
//!
//! let profile = LanguageProfile::for_language(Language::Cpp);
//! assert_eq!(profile.comments, CommentSyntax::CStyle);
//! assert!(profile.keywords.contains("RETURN"));
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// General-purpose reserved-word vocabulary shipped by default.
const GENERAL_KEYWORDS: &[&str] = &[
    "def", "class", "if", "else", "elif", "for", "while", "try", "except", "finally", "with",
    "import", "from", "return", "yield", "break", "continue", "pass", "and", "or", "not", "in",
    "is", "lambda",
];

/// Source language tag attached to a file before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    Cpp,
    C,
    CSharp,
    /// Anything without a known comment syntax.
    #[default]
    Unknown,
}

impl Language {
    /// Every tag, in declaration order.
    pub const ALL: [Language; 7] = [
        Language::Python,
        Language::JavaScript,
        Language::Java,
        Language::Cpp,
        Language::C,
        Language::CSharp,
        Language::Unknown,
    ];

    /// Maps a file extension (without the dot, any case) to a language.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "py" => Language::Python,
            "js" => Language::JavaScript,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "c" => Language::C,
            "cs" => Language::CSharp,
            _ => Language::Unknown,
        }
    }

    /// Detects the language from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Language::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Lowercase tag used in logs, configs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::CSharp => "csharp",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a language tag does not name a known language.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown language tag `{0}`")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.name() == tag)
            .ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}

/// Comment syntax stripped before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentSyntax {
    /// `"""…"""` and `'''…'''` blocks, then `#` line comments.
    Hash,
    /// `/* … */` blocks, then `//` line comments.
    CStyle,
    /// No comment stripping.
    None,
}

/// Case-insensitive set of reserved words.
///
/// Words are stored lowercased; lookups lowercase the query first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<String>,
}

impl KeywordSet {
    /// The general-purpose vocabulary every default profile uses.
    pub fn general() -> Self {
        Self::new(GENERAL_KEYWORDS.iter().copied())
    }

    /// A set with no reserved words; every piece becomes an ordinary token.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order, for stable display and serialization.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Everything the tokenizer needs to know about one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    pub comments: CommentSyntax,
    pub keywords: KeywordSet,
}

impl LanguageProfile {
    pub fn new(comments: CommentSyntax, keywords: KeywordSet) -> Self {
        Self { comments, keywords }
    }

    /// Default profile for `language`.
    ///
    /// All defaults share [`KeywordSet::general`], so two files in different
    /// languages differ only in which comments get stripped.
    pub fn for_language(language: Language) -> Self {
        let comments = match language {
            Language::Python => CommentSyntax::Hash,
            Language::JavaScript
            | Language::Java
            | Language::Cpp
            | Language::C
            | Language::CSharp => CommentSyntax::CStyle,
            Language::Unknown => CommentSyntax::None,
        };
        Self::new(comments, KeywordSet::general())
    }

    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }
}
