//! codesim canonical source layer.
//!
//! Turns raw source text plus a language tag into a normalized token
//! sequence. Downstream stages (similarity metrics, pairwise comparison) rely
//! on this for stable, comparable input.
//!
//! ## What we do
//!
//! - Strip comments using the language's comment syntax
//! - Mask every string literal with one sentinel, whatever its content
//! - Collapse whitespace runs
//! - Lex identifier/keyword runs, digit runs and structural symbols
//! - Tag reserved words (`KEYWORD_DEF`) and lowercase everything else
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no mutable global state. Output depends only on
//! `(text, language, profile table)`, and tokenization never fails: the worst
//! case is an empty sequence.
//!
//! ```rust
//! use canonical::{tokenize, Language};
//!
//! let tokens = tokenize("def Foo(x):  # greet\n    return 'hi'", Language::Python);
//! assert_eq!(
//!     tokens.flatten(),
//!     "KEYWORD_DEF foo ( x ) : KEYWORD_RETURN string_literal"
//! );
//! ```

mod language;
mod lexer;
mod normalize;
mod pipeline;
mod token;
mod whitespace;

pub use crate::language::{CommentSyntax, KeywordSet, Language, LanguageProfile, ParseLanguageError};
pub use crate::lexer::SYMBOLS;
pub use crate::normalize::{mask_string_literals, strip_comments};
pub use crate::pipeline::{tokenize, Tokenizer};
pub use crate::token::{Token, TokenSequence, KEYWORD_PREFIX, STRING_SENTINEL};
pub use crate::whitespace::collapse_whitespace;
