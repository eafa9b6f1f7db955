//! Counting occurrences of items under an explicit canonicalization policy.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts how often each distinct item occurs in `items`.
///
/// `canonical` maps every item to the key it is counted under, which makes
/// the equality policy explicit instead of relying on ambient locale state:
/// two items count as the same occurrence exactly when `canonical` maps them
/// to equal keys. The sequence is consumed once, left to right.
pub fn count_occurrences<I, K, F>(items: I, mut canonical: F) -> HashMap<K, u32>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(I::Item) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(canonical(item)).or_insert(0) += 1;
    }
    counts
}

/// Counts word occurrences case-insensitively.
///
/// Words are canonicalized by lowercase folding, so casing variants of the
/// same word collapse into a single entry keyed by the lowercase form.
pub fn count_word_occurrences<'a, I>(words: I) -> HashMap<String, u32>
where
    I: IntoIterator<Item = &'a str>,
{
    count_occurrences(words, str::to_lowercase)
}
