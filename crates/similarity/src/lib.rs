//! # codesim similarity metrics
//!
//! Three independent similarity functions over normalized token streams:
//!
//! 1.  **Cosine** (Salton et al., 1975): angle between token frequency
//!     vectors. Sensitive to how often tokens occur, blind to order.
//! 2.  **Jaccard** (Jaccard, 1912): overlap of the token *sets*. Blind to
//!     both order and multiplicity.
//! 3.  **Levenshtein ratio** (Levenshtein, 1966; Wagner & Fischer, 1974):
//!     normalized edit distance between the flattened, space-joined token
//!     strings. Sensitive to order.
//!
//! ## Contract
//!
//! - Every function is total and pure: no I/O, no panics, no errors.
//! - Every score lies in `[0.0, 1.0]`.
//! - Every function is symmetric in its operands.
//! - Degenerate inputs resolve to a defined score: an empty side gives
//!   `0.0`, except that two empty strings have a Levenshtein ratio of `1.0`.
//!
//! ## Example Usage
//!
//! ```
//! use similarity::{cosine_similarity, edit_distance, jaccard_similarity, levenshtein_ratio};
//!
//! let a = ["KEYWORD_DEF", "foo", "(", ")"];
//! let b = ["KEYWORD_DEF", "bar", "(", ")"];
//!
//! assert_eq!(jaccard_similarity(&a, &b), 3.0 / 5.0);
//! assert!(cosine_similarity(&a, &b) > 0.7);
//! assert_eq!(edit_distance("kitten", "sitting"), 3);
//! assert_eq!(levenshtein_ratio("", ""), 1.0);
//! ```

mod cosine;
mod frequency;
mod jaccard;
mod levenshtein;

pub use crate::cosine::{cosine_from_models, cosine_similarity};
pub use crate::frequency::{to_frequency, FrequencyModel};
pub use crate::jaccard::jaccard_similarity;
pub use crate::levenshtein::{edit_distance, edit_distance_chars, levenshtein_ratio};
