// Output generation: the frequency report, the word-cloud image, and
// terminal display.

pub mod cloud;
pub mod report;
pub mod terminal;

use std::path::{Path, PathBuf};

use crate::error::{Result, WordCloudError};

/// `<dir>/<name>output.txt`
pub fn report_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}output.txt"))
}

/// `<dir>/<name>.png`
pub fn image_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.png"))
}

/// `<dir>/<name>.layout.json`
pub fn layout_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.layout.json"))
}

/// Write `bytes` to `path`, wrapping any failure with the path.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|cause| WordCloudError::Write {
        path: path.to_path_buf(),
        cause,
    })
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
