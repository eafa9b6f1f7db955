//! Error types for the word-count pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordCountError {
    /// The input text could not be obtained: the file is missing,
    /// unreadable, or not valid UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink failed while the report was being written.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}
