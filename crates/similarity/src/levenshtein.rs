//! Levenshtein edit distance and its normalized ratio.
//!
//! The distance is computed with the Wagner–Fischer recurrence keeping only
//! two rows, each as wide as the shorter operand, so memory is
//! `O(min(|a|, |b|))`. Lengths are counted in Unicode scalar values.

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// Symmetric in its arguments and never larger than the longer length.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance_chars(&a, &b)
}

/// [`edit_distance`] over pre-split characters.
pub fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    // The shorter operand is the inner (row) dimension.
    let (outer, inner) = if a.len() < b.len() { (b, a) } else { (a, b) };

    if inner.is_empty() {
        return outer.len();
    }

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr: Vec<usize> = vec![0; inner.len() + 1];

    for (i, &co) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &ci) in inner.iter().enumerate() {
            let substitution = prev[j] + usize::from(co != ci);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}

/// `1 - distance / max(len)`, in `[0, 1]`.
///
/// Two empty strings are identical (`1.0`); exactly one empty string scores
/// `0.0`.
pub fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let distance = edit_distance_chars(&a, &b);
    let max_len = a.len().max(b.len());
    1.0 - distance as f64 / max_len as f64
}
