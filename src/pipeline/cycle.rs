// One run cycle: source -> ranked table -> report + word cloud.
//
// Parsing runs to completion first. The sorted table is then frozen behind
// an Arc and handed to two blocking tasks, the report writer and the cloud
// renderer, which only read it. Both tasks are joined before the cycle
// returns, so the caller can never start clearing or refilling a table
// while an output is still being generated.
//
// A failure in one output does not stop the other: each carries its own
// Result in the summary.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::cloud::layout::CloudLayout;
use crate::config::Config;
use crate::error::{Result, WordCloudError};
use crate::frequency::table::FrequencyTable;
use crate::frequency::traits::WordFrequencies;
use crate::output::cloud::{self, CloudArtifacts};
use crate::output::report;
use crate::session::{validate_output_name, validate_word_count};
use crate::source::http::PageFetcher;
use crate::source::{file, Source};
use crate::text::stopwords::StopWordSet;

/// How many top entries a summary carries for display.
const SUMMARY_TOP: usize = 10;

/// Everything a single cycle needs to know.
#[derive(Debug, Clone)]
pub struct CycleRequest {
    pub source: Source,
    pub output_name: String,
    pub word_count: usize,
    pub dump_layout: bool,
}

/// What a completed cycle produced.
#[derive(Debug)]
pub struct CycleSummary {
    pub source: String,
    pub words_recorded: usize,
    pub distinct_words: usize,
    pub top: Vec<(String, u32)>,
    pub report: Result<PathBuf>,
    pub cloud: Result<CloudArtifacts>,
}

impl CycleSummary {
    /// True when both outputs were written.
    pub fn all_outputs_ok(&self) -> bool {
        self.report.is_ok() && self.cloud.is_ok()
    }
}

/// Run one full cycle for `request`.
///
/// Errors returned here abort the cycle before any output is attempted
/// (bad name, bad count, missing stop words, unreadable source, no words).
/// Output failures are reported inside the summary instead.
pub async fn run_cycle(
    config: &Config,
    request: &CycleRequest,
    show_progress: bool,
) -> Result<CycleSummary> {
    validate_output_name(&request.output_name)?;
    validate_word_count(request.word_count)?;

    // Reloaded every cycle so edits to the list apply to the next run
    let stop_words = StopWordSet::load(&config.stop_words_path)?;

    let mut table = FrequencyTable::new();

    let words_recorded =
        ingest(config, &request.source, &stop_words, &mut table, show_progress).await?;

    if table.is_empty() {
        warn!(source = %request.source, "Source produced no countable words");
        return Err(WordCloudError::EmptyTable);
    }
    table.sort()?;

    let top = table
        .entries()
        .iter()
        .take(SUMMARY_TOP)
        .cloned()
        .collect::<Vec<_>>();
    let distinct_words = table.len();

    info!(
        source = %request.source,
        words = words_recorded,
        distinct = distinct_words,
        "Ranked source"
    );

    let layout = CloudLayout::new(config.canvas_width, config.canvas_height);
    let (report, cloud) = generate_outputs(
        Arc::new(table),
        &config.output_dir,
        &request.output_name,
        request.word_count,
        layout,
        request.dump_layout,
    )
    .await;

    Ok(CycleSummary {
        source: request.source.to_string(),
        words_recorded,
        distinct_words,
        top,
        report,
        cloud,
    })
}

async fn ingest(
    config: &Config,
    source: &Source,
    stop_words: &StopWordSet,
    table: &mut FrequencyTable,
    show_progress: bool,
) -> Result<usize> {
    match source {
        Source::File { path, mode } => file::ingest(path, *mode, stop_words, table),
        Source::Url(url) => {
            let fetcher = PageFetcher::new(&config.user_agent, config.http_timeout)?
                .with_progress(show_progress);
            fetcher.ingest(url, stop_words, table).await
        }
    }
}

/// Write the report and the word cloud concurrently from one sorted table.
///
/// Returns once both tasks have finished, successfully or not.
pub async fn generate_outputs(
    table: Arc<FrequencyTable>,
    dir: &Path,
    name: &str,
    word_count: usize,
    layout: CloudLayout,
    dump_layout: bool,
) -> (Result<PathBuf>, Result<CloudArtifacts>) {
    let report_task = {
        let table = Arc::clone(&table);
        let dir = dir.to_path_buf();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || report::write_report(&table, &dir, &name))
    };

    let cloud_task = {
        let table = Arc::clone(&table);
        let dir = dir.to_path_buf();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            cloud::write_cloud(&table, word_count, &layout, &dir, &name, dump_layout)
        })
    };

    let (report, cloud) = tokio::join!(report_task, cloud_task);

    let report = report.unwrap_or_else(|e| Err(WordCloudError::Task(e.to_string())));
    let cloud = cloud.unwrap_or_else(|e| Err(WordCloudError::Task(e.to_string())));

    if let Err(e) = &report {
        warn!(error = %e, "Frequency report failed");
    }
    if let Err(e) = &cloud {
        warn!(error = %e, "Word cloud failed");
    }

    (report, cloud)
}
