//! Splitting text into words on letter/non-letter boundaries.

/// Splits `text` into words, keeping only those longer than `min_length`
/// characters.
///
/// A word is a maximal run of Unicode letter characters; every non-letter
/// character acts as a delimiter. Runs of consecutive delimiters produce no
/// empty words. The iterator borrows `text`, so splitting the same text
/// again yields the same sequence.
pub fn split_words(text: &str, min_length: usize) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(move |word| !word.is_empty() && word.chars().count() > min_length)
}
