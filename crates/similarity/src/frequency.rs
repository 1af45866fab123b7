//! Multiset view of a token sequence.

use std::hash::Hash;

use fxhash::FxHashMap;

/// Token → occurrence count.
///
/// Keys borrow from the token sequence the model was built from. The sum of
/// all counts equals the length of that sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyModel<'a> {
    counts: FxHashMap<&'a str, u64>,
    total: u64,
}

impl<'a> FrequencyModel<'a> {
    /// Builds the model in one pass over `tokens`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        let mut counts: FxHashMap<&'a str, u64> = FxHashMap::default();
        counts.reserve(tokens.len());
        for token in tokens {
            *counts.entry(token.as_ref()).or_insert(0) += 1;
        }
        Self {
            counts,
            total: tokens.len() as u64,
        }
    }

    /// Count for `token`, zero when absent.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens the model was built from.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    /// Sum of squared counts over the full vocabulary.
    pub fn squared_norm(&self) -> u64 {
        self.counts.values().map(|c| c * c).sum()
    }

    /// Euclidean norm of the count vector.
    pub fn norm(&self) -> f64 {
        (self.squared_norm() as f64).sqrt()
    }

    /// Sparse dot product over the shared vocabulary.
    ///
    /// Iterates the smaller model and looks each token up in the larger one.
    /// Integer arithmetic keeps the result independent of operand order.
    pub fn dot(&self, other: &FrequencyModel<'_>) -> u64 {
        let (small, large) = if self.len() <= other.len() {
            (&self.counts, &other.counts)
        } else {
            (&other.counts, &self.counts)
        };
        small
            .iter()
            .filter_map(|(token, a)| large.get(token).map(|b| a * b))
            .sum()
    }

    /// Number of distinct tokens present in both models.
    pub fn shared(&self, other: &FrequencyModel<'_>) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (&self.counts, &other.counts)
        } else {
            (&other.counts, &self.counts)
        };
        small
            .keys()
            .filter(|token| large.contains_key(*token))
            .count()
    }
}

/// Convenience wrapper returning an owned map, for callers that outlive the
/// token slice.
pub fn to_frequency<S, K>(tokens: &[S]) -> FxHashMap<K, u64>
where
    S: AsRef<str>,
    K: for<'s> From<&'s str> + Eq + Hash,
{
    let mut counts: FxHashMap<K, u64> = FxHashMap::default();
    for token in tokens {
        *counts.entry(K::from(token.as_ref())).or_insert(0) += 1;
    }
    counts
}
