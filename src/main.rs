use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use wordcloud::config::Config;
use wordcloud::output::terminal;
use wordcloud::pipeline::cycle::{run_cycle, CycleRequest};
use wordcloud::pipeline::menu::Menu;
use wordcloud::session::{self, Session, DEFAULT_WORD_COUNT};
use wordcloud::source::Source;

/// Word cloud generator.
///
/// Counts the words in a text file or web page, leaving out the words listed
/// in the stop-word file, and writes a ranked frequency report plus a PNG
/// word cloud of the most frequent ones.
#[derive(Parser)]
#[command(name = "wordcloud", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default when no subcommand is given)
    Menu,

    /// Generate a report and word cloud from a local file
    File {
        /// Path of the text file to scan
        path: PathBuf,

        /// Base name for the output files (no period or extension)
        #[arg(short, long)]
        output: String,

        /// Number of words drawn in the cloud (10-100)
        #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
        words: usize,

        /// Strip HTML tags while scanning
        #[arg(long)]
        html: bool,

        /// Also write the draw instructions as <output>.layout.json
        #[arg(long)]
        layout_json: bool,
    },

    /// Generate a report and word cloud from a web page
    Url {
        /// Address of the page to fetch (scanned as HTML)
        url: String,

        /// Base name for the output files (no period or extension)
        #[arg(short, long)]
        output: String,

        /// Number of words drawn in the cloud (10-100)
        #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
        words: usize,

        /// Also write the draw instructions as <output>.layout.json
        #[arg(long)]
        layout_json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordcloud=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    config.require_canvas()?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            info!(stop_words = %config.stop_words_path.display(), "Starting interactive menu");
            let stdin = io::stdin().lock();
            let mut menu = Menu::new(stdin, io::stdout(), config, Session::new()).with_progress(true);
            menu.run().await?;
        }

        Commands::File {
            path,
            output,
            words,
            html,
            layout_json,
        } => {
            let source = if html {
                Source::html_file(path)
            } else {
                Source::file(path)
            };
            run_once(&config, source, output, words, layout_json).await?;
        }

        Commands::Url {
            url,
            output,
            words,
            layout_json,
        } => {
            run_once(&config, Source::url(url), output, words, layout_json).await?;
        }
    }

    Ok(())
}

/// Run a single non-interactive cycle and report it on stdout.
async fn run_once(
    config: &Config,
    source: Source,
    output_name: String,
    word_count: usize,
    dump_layout: bool,
) -> Result<()> {
    session::validate_word_count(word_count)?;
    session::validate_output_name(&output_name)?;

    println!("Generating word cloud from {source}...");

    let request = CycleRequest {
        source,
        output_name,
        word_count,
        dump_layout,
    };
    let summary = run_cycle(config, &request, true)
        .await
        .with_context(|| format!("Run failed for {}", request.source))?;

    terminal::display_summary(&mut io::stdout(), &summary)?;

    if !summary.all_outputs_ok() {
        anyhow::bail!("One or more outputs failed, see above");
    }

    println!("\n{}", "Done.".bold());
    Ok(())
}
