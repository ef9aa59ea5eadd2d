// Stop-word set loaded from a line-delimited file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{Result, WordCloudError};

/// Default location of the stop-word list, relative to the working directory.
pub const DEFAULT_STOP_WORDS_PATH: &str = "./ignorewords.txt";

/// Normalized words excluded from frequency counting.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// An empty set; nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from in-memory words. Each entry is trimmed and lowercased;
    /// blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Load one word per line from `path`.
    ///
    /// A missing or unreadable file is an error: the run cannot proceed
    /// without knowing what to exclude.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|cause| WordCloudError::StopWordsUnavailable {
            path: path.to_path_buf(),
            cause,
        })?;

        let mut words = HashSet::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|cause| WordCloudError::StopWordsUnavailable {
                path: path.to_path_buf(),
                cause,
            })?;
            if let Some(word) = normalize(&line) {
                words.insert(word);
            }
        }

        info!(path = %path.display(), count = words.len(), "Loaded stop words");
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
