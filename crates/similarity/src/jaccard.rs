//! Jaccard index over token sets.

use std::collections::HashSet;

use fxhash::FxBuildHasher;

/// `|A ∩ B| / |A ∪ B|` with duplicates collapsed.
///
/// Returns `0.0` when either side is empty.
pub fn jaccard_similarity<A, B>(tokens_a: &[A], tokens_b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    let set_a = token_set(tokens_a);
    let set_b = token_set(tokens_b);

    let (small, large) = if set_a.len() <= set_b.len() {
        (&set_a, &set_b)
    } else {
        (&set_b, &set_a)
    };
    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = set_a.len() + set_b.len() - intersection;

    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

fn token_set<S: AsRef<str>>(tokens: &[S]) -> HashSet<&str, FxBuildHasher> {
    let mut set = HashSet::with_capacity_and_hasher(tokens.len(), FxBuildHasher::default());
    set.extend(tokens.iter().map(|t| t.as_ref()));
    set
}
