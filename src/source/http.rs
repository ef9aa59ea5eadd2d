// Streaming HTML page ingestion over HTTP(S).
//
// The body is pulled chunk by chunk and pushed straight through the HTML
// scanner, so the page is never held in memory as a whole. A word split
// across two chunks is stitched together by the scanner's buffer.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;
use tracing::{debug, info, warn};

use crate::error::{Result, WordCloudError};
use crate::frequency::traits::WordFrequencies;
use crate::text::stopwords::StopWordSet;
use crate::text::tokenizer::{self, ScanMode, Scanner};

pub const DEFAULT_USER_AGENT: &str = concat!("wordcloud/", env!("CARGO_PKG_VERSION"));

/// HTTP client for fetching pages to scan.
pub struct PageFetcher {
    client: reqwest::Client,
    show_progress: bool,
}

impl PageFetcher {
    /// Build a fetcher. `timeout` bounds the whole request, body included,
    /// so a stalled server cannot hang the run loop.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| WordCloudError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            show_progress: false,
        })
    }

    /// Show a byte-count spinner on the terminal while streaming.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Stream the page at `url` through the HTML scanner into `table`.
    /// Returns the number of words recorded.
    pub async fn ingest(
        &self,
        url: &str,
        stop_words: &StopWordSet,
        table: &mut impl WordFrequencies,
    ) -> Result<usize> {
        let not_found = |cause: String| WordCloudError::SourceNotFound {
            source_name: url.to_string(),
            cause,
        };

        let parsed = Url::parse(url).map_err(|e| not_found(e.to_string()))?;
        let mut response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| not_found(e.to_string()))?;

        if !response.status().is_success() {
            return Err(not_found(format!("server returned {}", response.status())));
        }

        let pb = self.show_progress.then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner} {bytes} read")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb
        });

        let mut scanner = Scanner::new(ScanMode::Html);
        let mut recorded = 0;
        let mut bytes_read = 0u64;

        loop {
            let chunk = match response.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(e) => {
                    if let Some(pb) = &pb {
                        pb.finish_and_clear();
                    }
                    return Err(WordCloudError::SourceReadFailure {
                        source_name: url.to_string(),
                        cause: e.to_string(),
                    });
                }
            };

            bytes_read += chunk.len() as u64;
            recorded += tokenizer::tally_chunk(&mut scanner, &chunk, stop_words, table);
            debug!(bytes = chunk.len(), total = bytes_read, "Scanned chunk");

            if let Some(pb) = &pb {
                pb.set_position(bytes_read);
            }
        }

        if scanner.inside_tag() {
            warn!(url = url, "Page ended inside an unterminated tag, trailing input discarded");
        }
        recorded += tokenizer::tally_finish(&mut scanner, stop_words, table);

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        info!(
            url = url,
            bytes = bytes_read,
            words = recorded,
            distinct = table.len(),
            "Scanned page"
        );
        Ok(recorded)
    }
}
