//! Analyze command — word count, top words, and the last sentence with the top word.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use tracing::{debug, instrument};

use passage_stats_core::{Config, PassageReport, analyze_passage};

use super::{passage_path, read_passage_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Passage file (defaults to the configured `passage_file`).
    pub file: Option<Utf8PathBuf>,

    /// How many top words to list.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Run the full passage analysis and print every result, or fail without
/// printing any of them.
#[instrument(name = "cmd_analyze", skip_all)]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let file = passage_path(args.file, config);
    let top_n = args.top.unwrap_or(config.top_n);
    debug!(%file, top_n, "executing analyze command");

    let passage = read_passage_file(&file, max_input_bytes)?;
    let report = analyze_passage(passage.as_str(), top_n)
        .with_context(|| format!("failed to analyze {file}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &PassageReport) {
    let top_heading = format!("Top {} most used words in the file:", report.top_words.len());
    let sentence_heading = format!(
        "Last sentence containing the most used word ({}):",
        report.most_used_word
    );

    println!();
    println!(
        "{} {}",
        "Word count of the text file:".if_supports_color(Stdout, |t| t.bold()),
        report.word_count
    );
    println!();
    println!("{}", top_heading.if_supports_color(Stdout, |t| t.bold()));
    for (rank, entry) in report.top_words.iter().enumerate() {
        println!(
            "\t{}. {}: {}",
            rank + 1,
            entry.word.if_supports_color(Stdout, |t| t.cyan()),
            entry.count
        );
    }
    println!();
    println!("{}", sentence_heading.if_supports_color(Stdout, |t| t.bold()));
    println!("{}", report.last_sentence);
}
