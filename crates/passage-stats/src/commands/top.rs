//! Top command — words ranked by frequency.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use tracing::{debug, instrument};

use passage_stats_core::{Config, RankedWord, top_words, word_frequencies};

use super::{passage_path, read_passage_file};

/// Arguments for the `top` subcommand.
#[derive(Args, Debug, Default)]
pub struct TopArgs {
    /// Passage file (defaults to the configured `passage_file`).
    pub file: Option<Utf8PathBuf>,

    /// Only list the N most frequent words (fails if fewer exist).
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Print words ranked by frequency, most frequent first.
#[instrument(name = "cmd_top", skip_all)]
pub fn cmd_top(
    args: TopArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let file = passage_path(args.file, config);
    debug!(%file, limit = ?args.limit, "executing top command");

    let passage = read_passage_file(&file, max_input_bytes)?;
    let ranked = top_words(word_frequencies(passage.as_str()));

    let entries: &[RankedWord] = match args.limit {
        Some(n) => ranked
            .top(n)
            .with_context(|| format!("failed to rank words in {file}"))?,
        None => ranked.entries(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        let width = entries.len().to_string().len();
        for (rank, entry) in entries.iter().enumerate() {
            println!(
                "{:>width$}. {}: {}",
                rank + 1,
                entry.word.if_supports_color(Stdout, |t| t.cyan()),
                entry.count
            );
        }
    }

    Ok(())
}
