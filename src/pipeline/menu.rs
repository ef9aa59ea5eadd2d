// Interactive menu loop.
//
// Prompts for a source and an output name, runs a cycle, and repeats until
// the user quits or input ends. A failed cycle is reported and the loop
// carries on; only I/O errors on the terminal itself end the loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::cycle::{run_cycle, CycleRequest};
use crate::config::Config;
use crate::output::terminal;
use crate::session::{Session, MAX_WORD_COUNT, MIN_WORD_COUNT};
use crate::source::Source;

/// The menu's view of the world: where it reads answers and writes prompts.
pub struct Menu<R, W> {
    input: R,
    out: W,
    config: Config,
    session: Session,
    show_progress: bool,
}

/// One parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    File,
    Url,
    WordCount,
    Quit,
}

impl Choice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Choice::File),
            "2" => Some(Choice::Url),
            "3" => Some(Choice::WordCount),
            "4" => Some(Choice::Quit),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, config: Config, session: Session) -> Self {
        Self {
            input,
            out,
            config,
            session,
            show_progress: false,
        }
    }

    /// Show a spinner while pages stream in. Off by default so tests and
    /// piped input stay quiet.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the user picks Quit or input is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        while self.session.is_running() {
            terminal::display_menu(&mut self.out, self.session.word_count())?;

            let Some(line) = self.read_line()? else {
                info!("Input closed, leaving menu");
                self.session.stop();
                break;
            };

            match Choice::parse(&line) {
                Some(Choice::File) => {
                    let Some(path) = self.prompt(
                        "Please enter the filename you wish to generate a word-cloud from.",
                    )?
                    else {
                        self.session.stop();
                        break;
                    };
                    self.run_source(Source::file(path)).await?;
                }
                Some(Choice::Url) => {
                    let Some(url) =
                        self.prompt("Please enter the URL you wish to generate a word-cloud from.")?
                    else {
                        self.session.stop();
                        break;
                    };
                    self.run_source(Source::url(url)).await?;
                }
                Some(Choice::WordCount) => self.set_word_count()?,
                Some(Choice::Quit) => {
                    writeln!(self.out, "Shutting down the application...")?;
                    self.session.stop();
                }
                None => {
                    writeln!(
                        self.out,
                        "Invalid selection. Please enter a number between 1 and 4."
                    )?;
                }
            }
        }
        Ok(())
    }

    async fn run_source(&mut self, source: Source) -> Result<()> {
        let Some(output_name) = self.prompt(
            "Please enter the name to give the output file \
             (do not include a period or the file extension).",
        )?
        else {
            return Ok(());
        };

        let request = CycleRequest {
            source,
            output_name,
            word_count: self.session.word_count(),
            dump_layout: false,
        };

        match run_cycle(&self.config, &request, self.show_progress).await {
            Ok(summary) => terminal::display_summary(&mut self.out, &summary)?,
            Err(e) => {
                warn!(source = %request.source, error = %e, "Run cycle aborted");
                terminal::display_error(&mut self.out, &e.to_string())?;
            }
        }
        Ok(())
    }

    fn set_word_count(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "The current maximum number of words displayed is: {}",
            self.session.word_count()
        )?;
        let Some(raw) = self.prompt(&format!(
            "Please enter the maximum number of words to be displayed \
             (must be between {MIN_WORD_COUNT} and {MAX_WORD_COUNT})."
        ))?
        else {
            return Ok(());
        };

        let outcome = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("{raw:?} is not a number"))
            .and_then(|count| {
                self.session
                    .set_word_count(count)
                    .map_err(|e| e.to_string())
            });

        match outcome {
            Ok(()) => writeln!(
                self.out,
                "The word count has been set to: {}",
                self.session.word_count()
            )?,
            Err(message) => terminal::display_error(&mut self.out, &message)?,
        }
        Ok(())
    }

    /// Print `question` and read a trimmed answer. None means input ended.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.out, "{question}")?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
