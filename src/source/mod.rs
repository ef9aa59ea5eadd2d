// Input sources: local files and streamed web pages.

pub mod file;
pub mod http;

use std::fmt;
use std::path::PathBuf;

use crate::text::tokenizer::ScanMode;

/// Where the text for one run cycle comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A local file, scanned in the given mode.
    File { path: PathBuf, mode: ScanMode },
    /// A web page, always scanned as HTML.
    Url(String),
}

impl Source {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Source::File {
            path: path.into(),
            mode: ScanMode::Plain,
        }
    }

    pub fn html_file(path: impl Into<PathBuf>) -> Self {
        Source::File {
            path: path.into(),
            mode: ScanMode::Html,
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Source::Url(url.into())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File { path, .. } => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}
