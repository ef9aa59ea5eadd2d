use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::cloud::layout::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::source::http::DEFAULT_USER_AGENT;
use crate::text::stopwords::DEFAULT_STOP_WORDS_PATH;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Largest accepted canvas edge, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16_384;
/// Largest accepted canvas area. At 4 bytes per pixel this is 256 MiB.
pub const MAX_CANVAS_PIXELS: u64 = 64 * 1024 * 1024;

/// Central configuration loaded from environment variables.
///
/// A .env file in the working directory is loaded at startup via dotenvy,
/// so any of these can also be set there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Line-delimited stop-word list, reloaded at the start of every run cycle
    pub stop_words_path: PathBuf,
    /// Directory the report, image and layout files are written into
    pub output_dir: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Upper bound on a whole page fetch, body included
    pub http_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_words_path: PathBuf::from(DEFAULT_STOP_WORDS_PATH),
            output_dir: PathBuf::from("."),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default. A variable that is set but cannot be parsed
    /// is an error rather than being silently ignored.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            stop_words_path: env::var("WORDCLOUD_STOP_WORDS")
                .map(PathBuf::from)
                .unwrap_or(defaults.stop_words_path),
            output_dir: env::var("WORDCLOUD_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            canvas_width: parse_var("WORDCLOUD_CANVAS_WIDTH", defaults.canvas_width)?,
            canvas_height: parse_var("WORDCLOUD_CANVAS_HEIGHT", defaults.canvas_height)?,
            http_timeout: Duration::from_secs(parse_var(
                "WORDCLOUD_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
            user_agent: env::var("WORDCLOUD_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }

    /// Check that the canvas can hold at least one row and is small enough
    /// to allocate.
    pub fn require_canvas(&self) -> Result<()> {
        if self.canvas_width <= 350 || self.canvas_height == 0 {
            anyhow::bail!(
                "Canvas {}x{} is too small. WORDCLOUD_CANVAS_WIDTH must exceed 350 \
                 and WORDCLOUD_CANVAS_HEIGHT must be positive.",
                self.canvas_width,
                self.canvas_height
            );
        }

        let pixels = u64::from(self.canvas_width) * u64::from(self.canvas_height);
        if self.canvas_width > MAX_CANVAS_SIDE
            || self.canvas_height > MAX_CANVAS_SIDE
            || pixels > MAX_CANVAS_PIXELS
        {
            anyhow::bail!(
                "Canvas {}x{} is too large. Each side must be at most {MAX_CANVAS_SIDE} \
                 and the area at most {MAX_CANVAS_PIXELS} pixels.",
                self.canvas_width,
                self.canvas_height
            );
        }
        Ok(())
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.stop_words_path, PathBuf::from("./ignorewords.txt"));
        assert_eq!((config.canvas_width, config.canvas_height), (1800, 1200));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.require_canvas().is_ok());
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("WORDCLOUD_TEST_PARSE_GARBAGE", "wide");
        let result: Result<u32> = parse_var("WORDCLOUD_TEST_PARSE_GARBAGE", 5);
        assert!(result.is_err());
        env::remove_var("WORDCLOUD_TEST_PARSE_GARBAGE");
    }

    #[test]
    fn test_parse_var_default_when_unset() {
        let value: u32 = parse_var("WORDCLOUD_TEST_PARSE_UNSET", 1800).unwrap();
        assert_eq!(value, 1800);
    }

    #[test]
    fn test_tiny_canvas_rejected() {
        let config = Config {
            canvas_width: 300,
            ..Config::default()
        };
        assert!(config.require_canvas().is_err());
    }

    #[test]
    fn test_huge_canvas_rejected() {
        let too_wide = Config {
            canvas_width: u32::MAX,
            ..Config::default()
        };
        assert!(too_wide.require_canvas().is_err());

        // Each side within bounds, area over the cap
        let too_big = Config {
            canvas_width: MAX_CANVAS_SIDE,
            canvas_height: MAX_CANVAS_SIDE,
            ..Config::default()
        };
        assert!(too_big.require_canvas().is_err());

        let largest = Config {
            canvas_width: MAX_CANVAS_SIDE,
            canvas_height: 4096,
            ..Config::default()
        };
        assert!(largest.require_canvas().is_ok());
    }
}
