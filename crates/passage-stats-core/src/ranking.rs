//! Ranking words by frequency.

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::FrequencyTable;

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedWord {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Every entry of a [`FrequencyTable`], most frequent first.
///
/// Words with equal counts are ordered alphabetically so that the ranking is
/// reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedList {
    entries: Vec<RankedWord>,
}

impl RankedList {
    /// All ranked entries.
    pub fn entries(&self) -> &[RankedWord] {
        &self.entries
    }

    /// Number of ranked words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to rank.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The single most frequent word, if any.
    pub fn most_frequent(&self) -> Option<&RankedWord> {
        self.entries.first()
    }

    /// The first `n` entries.
    ///
    /// Fails instead of truncating when fewer than `n` words exist.
    pub fn top(&self, n: usize) -> AnalysisResult<&[RankedWord]> {
        self.entries
            .get(..n)
            .ok_or(AnalysisError::InsufficientWords {
                requested: n,
                available: self.entries.len(),
            })
    }
}

/// Order every entry of `freq` by count, descending.
#[tracing::instrument(skip_all, fields(distinct = freq.len()))]
pub fn top_words(freq: FrequencyTable) -> RankedList {
    let mut entries: Vec<RankedWord> = freq
        .into_iter()
        .map(|(word, count)| RankedWord { word, count })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    RankedList { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::word_frequencies;

    #[test]
    fn empty_table_ranks_to_empty_list() {
        let ranked = top_words(FrequencyTable::default());
        assert!(ranked.is_empty());
        assert!(ranked.most_frequent().is_none());
    }

    #[test]
    fn sorted_by_count_descending() {
        let ranked = top_words(word_frequencies(
            "a b b c c c d d d d the the the the the",
        ));
        let counts: Vec<usize> = ranked.entries().iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![5, 4, 3, 2, 1]);
        assert_eq!(ranked.most_frequent().unwrap().word, "the");
    }

    #[test]
    fn ties_are_alphabetical() {
        let ranked = top_words(word_frequencies("pear apple fig apple fig pear kiwi"));
        let words: Vec<&str> = ranked.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "fig", "pear", "kiwi"]);
    }

    #[test]
    fn conserves_every_entry() {
        let text = "one fish two fish red fish blue fish";
        let table = word_frequencies(text);
        let ranked = top_words(table.clone());

        assert_eq!(ranked.len(), table.len());
        for entry in ranked.entries() {
            assert_eq!(table.get(&entry.word), entry.count);
        }
        let total: usize = ranked.entries().iter().map(|e| e.count).sum();
        assert_eq!(total, table.total());
    }

    #[test]
    fn top_returns_prefix() {
        let ranked = top_words(word_frequencies("x x x y y z"));
        let top = ranked.top(2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].word, "x");
        assert_eq!(top[1].word, "y");
    }

    #[test]
    fn top_of_exact_length_succeeds() {
        let ranked = top_words(word_frequencies("x y z"));
        assert_eq!(ranked.top(3).unwrap().len(), 3);
    }

    #[test]
    fn top_beyond_length_fails() {
        let ranked = top_words(word_frequencies("only three words"));
        let err = ranked.top(10).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientWords {
                requested: 10,
                available: 3,
            }
        );
    }

    #[test]
    fn top_zero_is_empty() {
        let ranked = top_words(FrequencyTable::default());
        assert!(ranked.top(0).unwrap().is_empty());
    }

    #[test]
    fn ranking_is_reproducible() {
        let text = "b a c b a c d";
        assert_eq!(
            top_words(word_frequencies(text)),
            top_words(word_frequencies(text))
        );
    }
}
