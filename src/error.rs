// Error taxonomy for the library side of the crate.
//
// Every failure that crosses a module boundary is a WordCloudError. The binary
// wraps these in anyhow with extra context; library code stays typed so the
// run loop can tell a bad source apart from a bad output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::session::{MAX_WORD_COUNT, MIN_WORD_COUNT};

#[derive(Error, Debug)]
pub enum WordCloudError {
    #[error("Could not open source {source_name}: {cause}")]
    SourceNotFound {
        source_name: String,
        cause: String,
    },

    #[error("Error reading from source {source_name}: {cause}")]
    SourceReadFailure {
        source_name: String,
        cause: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("The frequency table is empty")]
    EmptyTable,

    #[error("The frequency table must be sorted before it can be ranked")]
    TableNotSorted,

    #[error(
        "Word count {requested} is out of range (must be between {} and {})",
        MIN_WORD_COUNT,
        MAX_WORD_COUNT
    )]
    WordCountOutOfRange { requested: usize },

    #[error("Requested {requested} words but only {available} ranked words are available")]
    NotEnoughWords { requested: usize, available: usize },

    #[error("Invalid output name {0:?}: must be non-empty and contain no period or path separator")]
    InvalidOutputName(String),

    #[error("Stop-word list {} could not be loaded: {cause}", path.display())]
    StopWordsUnavailable { path: PathBuf, cause: io::Error },

    #[error("Failed to encode word-cloud image: {0}")]
    Render(#[from] image::ImageError),

    #[error("Failed to serialize layout: {0}")]
    Layout(#[from] serde_json::Error),

    #[error("Failed to write {}: {cause}", path.display())]
    Write { path: PathBuf, cause: io::Error },

    #[error("Output task did not complete: {0}")]
    Task(String),
}

impl WordCloudError {
    /// True for the errors that come from the input side of a cycle
    /// (the source could not be opened or read).
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            WordCloudError::SourceNotFound { .. } | WordCloudError::SourceReadFailure { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WordCloudError>;
