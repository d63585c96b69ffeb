//! Count command — space-delimited word count.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use passage_stats_core::{Config, word_count};

use super::{passage_path, read_passage_file};

/// Arguments for the `count` subcommand.
#[derive(Args, Debug, Default)]
pub struct CountArgs {
    /// Passage file (defaults to the configured `passage_file`).
    pub file: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct CountOutput {
    file: Utf8PathBuf,
    word_count: usize,
}

/// Print the word count of a passage.
#[instrument(name = "cmd_count", skip_all)]
pub fn cmd_count(
    args: CountArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let file = passage_path(args.file, config);
    debug!(%file, "executing count command");

    let passage = read_passage_file(&file, max_input_bytes)?;
    let count = word_count(passage.as_str());

    if global_json {
        let output = CountOutput {
            file,
            word_count: count,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{count}");
    }

    Ok(())
}
