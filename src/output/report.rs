// Plain-text frequency report: one "<word>\t=>\t<count>" line per ranked word.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{report_path, write_file};
use crate::error::Result;
use crate::frequency::table::FrequencyTable;
use crate::frequency::traits::WordFrequencies;

/// Format every ranked entry of `table`, highest count first.
pub fn format_report(table: &FrequencyTable) -> Result<String> {
    let ranked = table.ranked()?;
    let mut out = String::new();
    for (word, count) in ranked {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{word}\t=>\t{count}");
    }
    Ok(out)
}

/// Write the full report to `<dir>/<name>output.txt` and return its path.
pub fn write_report(table: &FrequencyTable, dir: &Path, name: &str) -> Result<PathBuf> {
    let body = format_report(table)?;
    let path = report_path(dir, name);
    write_file(&path, body.as_bytes())?;
    info!(path = %path.display(), entries = table.len(), "Wrote frequency report");
    Ok(path)
}
