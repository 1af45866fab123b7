//! Cosine similarity over token frequency vectors.
//!
//! ```text
//! cos(A, B) = Σ_{t ∈ A∩B} a_t·b_t / (‖A‖ · ‖B‖)
//! ```
//!
//! Norms run over each side's full vocabulary. Counts are non-negative, so
//! the result already lies in `[0, 1]`.

use crate::frequency::FrequencyModel;

/// Cosine similarity of two token sequences.
///
/// Returns `0.0` when either side is empty or the two share no token.
pub fn cosine_similarity<A, B>(tokens_a: &[A], tokens_b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    let model_a = FrequencyModel::from_tokens(tokens_a);
    let model_b = FrequencyModel::from_tokens(tokens_b);
    cosine_from_models(&model_a, &model_b)
}

/// Cosine similarity of two prebuilt frequency models.
pub fn cosine_from_models(a: &FrequencyModel<'_>, b: &FrequencyModel<'_>) -> f64 {
    let dot = a.dot(b);
    if dot == 0 {
        return 0.0;
    }
    // Self-comparison must come out at exactly 1.0.
    let denominator = (a.squared_norm() as f64 * b.squared_norm() as f64).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    (dot as f64 / denominator).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences_score_one() {
        let a = ["def", "foo"];
        assert_eq!(cosine_similarity(&a, &a), 1.0);
    }

    #[test]
    fn disjoint_sequences_score_zero() {
        assert_eq!(cosine_similarity(&["a", "b"], &["c", "d"]), 0.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(cosine_similarity(&empty, &["a"]), 0.0);
        assert_eq!(cosine_similarity(&["a"], &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn partial_overlap_uses_full_norms() {
        // a = {x:2, y:1}, b = {x:1, z:1}; dot = 2, |a| = √5, |b| = √2
        let score = cosine_similarity(&["x", "x", "y"], &["x", "z"]);
        let expected = 2.0 / (5f64.sqrt() * 2f64.sqrt());
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn operand_order_does_not_matter() {
        let a = ["if", "x", "x", "=", "1", "return"];
        let b = ["x", "=", "2", "return", "return"];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn token_multiplicity_is_scale_invariant() {
        let a = ["p", "q"];
        let b = ["p", "p", "q", "q"];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }
}
