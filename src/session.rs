// Per-process session state for the run loop.
//
// Holds the display word count and the running flag. Passed explicitly into
// the menu and the pipeline instead of living in globals.

use crate::error::{Result, WordCloudError};

/// Smallest word count the cloud may display.
pub const MIN_WORD_COUNT: usize = 10;
/// Largest word count the cloud may display.
pub const MAX_WORD_COUNT: usize = 100;
/// Word count used until the user picks another.
pub const DEFAULT_WORD_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    word_count: usize,
    running: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            running: true,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Change the number of words drawn in the cloud.
    ///
    /// Values outside [MIN_WORD_COUNT, MAX_WORD_COUNT] are rejected and the
    /// current count is left untouched.
    pub fn set_word_count(&mut self, count: usize) -> Result<()> {
        validate_word_count(count)?;
        self.word_count = count;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// Check that a display count falls inside the accepted range.
pub fn validate_word_count(count: usize) -> Result<()> {
    if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&count) {
        return Err(WordCloudError::WordCountOutOfRange { requested: count });
    }
    Ok(())
}

/// Check an output base name before any file is written.
///
/// The name gets `output.txt` / `.png` appended, so it must not carry its
/// own extension or point into another directory.
pub fn validate_output_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('.') || name.contains('/') || name.contains('\\') {
        return Err(WordCloudError::InvalidOutputName(name.to_string()));
    }
    Ok(())
}
