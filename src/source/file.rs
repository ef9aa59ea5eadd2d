// Local file ingestion.

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::error::{Result, WordCloudError};
use crate::frequency::traits::WordFrequencies;
use crate::text::stopwords::StopWordSet;
use crate::text::tokenizer::{self, ScanMode};

/// Scan the file at `path` into `table`. Returns the number of words recorded.
///
/// The file handle is owned by the scanner and closed when this returns,
/// whether scanning finished or failed part way.
pub fn ingest(
    path: &Path,
    mode: ScanMode,
    stop_words: &StopWordSet,
    table: &mut impl WordFrequencies,
) -> Result<usize> {
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| WordCloudError::SourceNotFound {
        source_name: source_name.clone(),
        cause: e.to_string(),
    })?;

    let recorded = tokenizer::tally(file, mode, stop_words, table, &source_name)?;
    info!(path = %source_name, words = recorded, distinct = table.len(), "Scanned file");
    Ok(recorded)
}
