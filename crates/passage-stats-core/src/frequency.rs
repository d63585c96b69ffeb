//! Word counting and frequency tallying.
//!
//! [`word_count`] and [`word_frequencies`] are two independent passes over
//! the same text. The count sees raw space-delimited fragments (punctuation,
//! digits and all), while the frequency table only sees what survives
//! stripping everything but ASCII letters, hyphens, and spaces. The two
//! totals therefore diverge for digit-only tokens and similar fragments.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Everything that is not an ASCII letter, a hyphen, or a space.
static NON_WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\- ]").expect("valid regex"));

/// Occurrence count per normalized word. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Occurrences of `word`, or zero if it never appeared.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no words were tallied.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of normalized tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    fn record(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, usize);
    type IntoIter = std::collections::hash_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Count the space-delimited fragments of `text` that have visible content.
///
/// Only the literal space splits; a fragment holding a tab or newline is
/// still one fragment.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn word_count(text: &str) -> usize {
    text.split(' ').filter(|s| !s.trim().is_empty()).count()
}

/// Tally normalized words in `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn word_frequencies(text: &str) -> FrequencyTable {
    let stripped = NON_WORD_CHARS.replace_all(text, "").to_ascii_lowercase();

    let mut table = FrequencyTable::default();
    for word in stripped.split(' ').filter(|s| !s.trim().is_empty()) {
        table.record(word);
    }

    tracing::debug!(
        distinct = table.len(),
        total = table.total(),
        "word frequencies tallied"
    );
    table
}
