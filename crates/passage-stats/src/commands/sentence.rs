//! Sentence command — last sentence containing a word.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use passage_stats_core::{Config, last_sentence_containing, top_words, word_frequencies};

use super::{passage_path, read_passage_file};

/// Arguments for the `sentence` subcommand.
#[derive(Args, Debug, Default)]
pub struct SentenceArgs {
    /// Passage file (defaults to the configured `passage_file`).
    pub file: Option<Utf8PathBuf>,

    /// Word to look for (defaults to the most frequent word).
    #[arg(short, long)]
    pub word: Option<String>,
}

#[derive(Serialize)]
struct SentenceOutput<'a> {
    word: &'a str,
    sentence: &'a str,
}

/// Print the last sentence of a passage that contains a word.
#[instrument(name = "cmd_sentence", skip_all)]
pub fn cmd_sentence(
    args: SentenceArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let file = passage_path(args.file, config);
    debug!(%file, word = ?args.word, "executing sentence command");

    let passage = read_passage_file(&file, max_input_bytes)?;

    // Sentences are lowercased before matching, so the word must be too.
    let word = match args.word {
        Some(word) => word.to_lowercase(),
        None => match top_words(word_frequencies(passage.as_str())).most_frequent() {
            Some(entry) => entry.word.clone(),
            None => bail!("{file} contains no words"),
        },
    };

    let sentence = last_sentence_containing(passage.as_str(), &word)
        .with_context(|| format!("failed to search {file}"))?;

    if global_json {
        let output = SentenceOutput {
            word: &word,
            sentence,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{sentence}");
    }

    Ok(())
}
