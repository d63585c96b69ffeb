//! One full analysis run over a passage.

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::{word_count, word_frequencies};
use crate::ranking::{RankedWord, top_words};
use crate::sentence::last_sentence_containing;

/// Default number of top words reported.
pub const DEFAULT_TOP_N: usize = 10;

/// Combined result of counting, ranking, and sentence lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassageReport {
    /// Space-delimited word count of the raw passage.
    pub word_count: usize,
    /// The most frequent words, most frequent first.
    pub top_words: Vec<RankedWord>,
    /// The single most frequent word.
    pub most_used_word: String,
    /// Last sentence containing [`Self::most_used_word`].
    pub last_sentence: String,
}

/// Run the full analysis: word count, top `top_n` words, and the last
/// sentence containing the most frequent word.
///
/// Either every result is produced or the run fails; there is no partial
/// report.
///
/// # Errors
///
/// - [`AnalysisError::InsufficientWords`] when the passage has fewer than
///   `top_n` distinct words (or none at all).
/// - [`AnalysisError::SentenceNotFound`] when the top word, after
///   punctuation stripping, no longer appears in any sentence.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_passage(text: &str, top_n: usize) -> AnalysisResult<PassageReport> {
    let word_count = word_count(text);
    let ranked = top_words(word_frequencies(text));

    let top = ranked.top(top_n)?.to_vec();
    let most_used = ranked
        .most_frequent()
        .ok_or(AnalysisError::InsufficientWords {
            requested: top_n.max(1),
            available: 0,
        })?;

    let last_sentence = last_sentence_containing(text, &most_used.word)?;

    tracing::debug!(
        word_count,
        distinct = ranked.len(),
        most_used_word = %most_used.word,
        "passage analyzed"
    );

    Ok(PassageReport {
        word_count,
        top_words: top,
        most_used_word: most_used.word.clone(),
        last_sentence: last_sentence.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox. The fox jumps. The lazy fox sleeps.";

    #[test]
    fn analyzes_the_fox_passage() {
        let report = analyze_passage(FOX, 2).unwrap();
        assert_eq!(report.word_count, 11);
        // fox and the tie at 3; alphabetical order puts fox first
        assert_eq!(report.most_used_word, "fox");
        assert_eq!(report.top_words[0].count, 3);
        assert_eq!(report.top_words[1].word, "the");
        assert_eq!(report.last_sentence, " The lazy fox sleeps");
    }

    #[test]
    fn empty_passage_fails_on_top_words() {
        let err = analyze_passage("", DEFAULT_TOP_N).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientWords {
                requested: 10,
                available: 0,
            }
        );
    }

    #[test]
    fn empty_passage_with_zero_top_still_fails() {
        assert!(analyze_passage("", 0).is_err());
    }

    #[test]
    fn short_passage_fails_without_partial_report() {
        let err = analyze_passage("tiny text here.", DEFAULT_TOP_N).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientWords { available: 3, .. }
        ));
    }

    #[test]
    fn stripped_top_word_may_be_unfindable() {
        // "dont" is the top word but the passage only says "don't"
        let err = analyze_passage("don't don't stop.", 1).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::SentenceNotFound {
                word: "dont".to_string()
            }
        );
    }

    #[test]
    fn report_serializes_with_snake_case_fields() {
        let report = analyze_passage(FOX, 1).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["word_count"], 11);
        assert_eq!(json["most_used_word"], "fox");
        assert_eq!(json["top_words"][0]["word"], "fox");
        assert_eq!(json["top_words"][0]["count"], 3);
        assert_eq!(json["last_sentence"], " The lazy fox sleeps");
    }

    #[test]
    fn repeated_runs_are_identical() {
        assert_eq!(analyze_passage(FOX, 5), analyze_passage(FOX, 5));
    }
}
