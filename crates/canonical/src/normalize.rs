//! Text-level normalization passes that run before lexing.
//!
//! Each pass rewrites the whole text. The order is fixed: comments are
//! stripped first, then string literals are masked. A quote inside a comment
//! therefore never starts a literal, but a comment marker inside a string is
//! stripped as a comment. Reports depend on this exact token output, so the
//! order must not change without a format bump.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::language::CommentSyntax;
use crate::token::STRING_SENTINEL;

static TRIPLE_DOUBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""""[\s\S]*?""""#).expect("valid triple-double pattern"));
static TRIPLE_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'''[\s\S]*?'''").expect("valid triple-single pattern"));
static HASH_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#.*").expect("valid hash pattern"));

static C_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("valid block comment pattern"));
static C_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.*").expect("valid line comment pattern"));

static DOUBLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*""#).expect("valid double-quote pattern"));
static SINGLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'[^']*'").expect("valid single-quote pattern"));

/// Removes comments according to `syntax`.
///
/// Block comments are matched non-greedily; line comments run to the end of
/// the line but never consume the newline itself.
pub fn strip_comments(text: &str, syntax: CommentSyntax) -> Cow<'_, str> {
    match syntax {
        CommentSyntax::Hash => apply_passes(
            text,
            &[&*TRIPLE_DOUBLE, &*TRIPLE_SINGLE, &*HASH_LINE],
            "",
        ),
        CommentSyntax::CStyle => apply_passes(text, &[&*C_BLOCK, &*C_LINE], ""),
        CommentSyntax::None => Cow::Borrowed(text),
    }
}

/// Replaces every `"…"` and then every `'…'` with [`STRING_SENTINEL`].
///
/// Literals may span lines. Escaped quotes are not understood; an escaped
/// quote simply ends the literal.
pub fn mask_string_literals(text: &str) -> Cow<'_, str> {
    apply_passes(text, &[&*DOUBLE_QUOTED, &*SINGLE_QUOTED], STRING_SENTINEL)
}

fn apply_passes<'t>(text: &'t str, passes: &[&Regex], replacement: &str) -> Cow<'t, str> {
    let mut current = Cow::Borrowed(text);
    for pattern in passes {
        let rewritten = match pattern.replace_all(&current, NoExpand(replacement)) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(rewritten) => rewritten,
        };
        current = Cow::Owned(rewritten);
    }
    current
}
