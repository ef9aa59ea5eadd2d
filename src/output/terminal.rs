// Colored terminal output for the menu and cycle summaries.
//
// Everything writes to a caller-supplied `Write` so the menu can be driven
// from tests as well as from stdout.

use std::io::{self, Write};

use colored::Colorize;

use crate::pipeline::cycle::CycleSummary;

/// Display the menu banner and the list of options.
pub fn display_menu(out: &mut impl Write, word_count: usize) -> io::Result<()> {
    let rule = "*".repeat(51);
    writeln!(out, "{}", rule.dimmed())?;
    writeln!(out, "{}", format!("*{:^49}*", "Word Cloud Generator").bold())?;
    writeln!(out, "{}", rule.dimmed())?;
    writeln!(out, "(1) Enter filename")?;
    writeln!(out, "(2) Enter URL")?;
    writeln!(
        out,
        "(3) Set maximum displayed word count. Current: {word_count}"
    )?;
    writeln!(out, "(4) Quit")?;
    writeln!(out, "\nPlease choose an option by entering [1-4]>")?;
    out.flush()
}

/// Display the outcome of a finished cycle: top words and both outputs.
pub fn display_summary(out: &mut impl Write, summary: &CycleSummary) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!("=== {} ===", super::truncate_chars(&summary.source, 60)).bold()
    )?;
    writeln!(
        out,
        "  {} words counted, {} distinct",
        summary.words_recorded, summary.distinct_words
    )?;

    if !summary.top.is_empty() {
        writeln!(out)?;
        writeln!(out, "  {:>4}  {:<24} {:>7}", "Rank".dimmed(), "Word".dimmed(), "Count".dimmed())?;
        for (i, (word, count)) in summary.top.iter().enumerate() {
            writeln!(
                out,
                "  {:>4}. {:<24} {:>7}",
                i + 1,
                super::truncate_chars(word, 21),
                count
            )?;
        }
        writeln!(out)?;
    }

    match &summary.report {
        Ok(path) => writeln!(out, "  {} Report: {}", "ok".green(), path.display())?,
        Err(e) => writeln!(out, "  {} Report failed: {}", "!!".red().bold(), e)?,
    }
    match &summary.cloud {
        Ok(artifacts) => {
            writeln!(
                out,
                "  {} Word cloud: {} ({} words)",
                "ok".green(),
                artifacts.image.display(),
                artifacts.words_drawn
            )?;
            if let Some(layout) = &artifacts.layout {
                writeln!(out, "     Layout: {}", layout.display())?;
            }
        }
        Err(e) => writeln!(out, "  {} Word cloud failed: {}", "!!".red().bold(), e)?,
    }
    Ok(())
}

/// Display an error that aborted a cycle or a menu action.
pub fn display_error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "Error:".red().bold(), message)
}
