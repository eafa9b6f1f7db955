//! Count word frequencies in a text and report the top-N most frequent
//! words above a minimum length.
//!
//! The pipeline is three pure steps: [`split_words`] tokenizes the text on
//! letter/non-letter boundaries, [`count_word_occurrences`] counts tokens
//! case-insensitively, and [`write_word_counts`] ranks the counts and writes
//! `word count` lines to a [`LineSink`]. [`report_word_counts`] composes
//! them; [`report_word_counts_in_file`] reads the text from a file first.

pub mod count;
pub mod error;
pub mod report;
pub mod tokenize;

use std::fs;
use std::path::Path;

pub use count::{count_occurrences, count_word_occurrences};
pub use error::WordCountError;
pub use report::{LineSink, write_word_counts};
pub use tokenize::split_words;

/// Runs the whole pipeline over `text`: tokenize, count, rank, report.
///
/// Keeps only words longer than `min_word_length` characters and reports at
/// most `list_count` entries. Fails only if the sink fails; no recovery is
/// attempted.
pub fn report_word_counts(
    text: &str,
    sink: &mut impl LineSink,
    min_word_length: usize,
    list_count: usize,
) -> Result<(), WordCountError> {
    let words = split_words(text, min_word_length);
    let counts = count_word_occurrences(words);
    log::debug!("counted {} distinct words", counts.len());
    write_word_counts(&counts, sink, list_count)?;
    Ok(())
}

/// Reads the file at `path` as UTF-8 text and runs [`report_word_counts`]
/// over it. A failure to read the file aborts the whole operation before
/// anything is written to the sink.
pub fn report_word_counts_in_file(
    path: &Path,
    sink: &mut impl LineSink,
    min_word_length: usize,
    list_count: usize,
) -> Result<(), WordCountError> {
    let text = fs::read_to_string(path).map_err(|source| WordCountError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    report_word_counts(&text, sink, min_word_length, list_count)
}
