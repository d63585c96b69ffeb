//! Locating the most recent sentence that mentions a word.
//!
//! Sentences are whatever lies between literal periods. There is no
//! abbreviation or decimal handling: "Dr. Smith" is two sentences.

use crate::error::{AnalysisError, AnalysisResult};

/// Split `text` into period-delimited sentences, in document order.
///
/// Trailing empty segments are dropped, so a passage that ends with a period
/// does not produce an empty final sentence. Interior empty segments (from
/// `..`) are kept. An empty passage has no sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences: Vec<&str> = text.split('.').collect();
    while sentences.last().is_some_and(|s| s.is_empty()) {
        sentences.pop();
    }
    sentences
}

/// Return the last sentence of `text` whose lowercased form contains `word`.
///
/// Matching is plain substring containment, so `"cat"` matches a sentence
/// mentioning "category". `word` is used as given; pass it lowercased. An
/// empty `word` matches the final sentence.
///
/// # Errors
///
/// [`AnalysisError::SentenceNotFound`] when no sentence matches.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn last_sentence_containing<'a>(text: &'a str, word: &str) -> AnalysisResult<&'a str> {
    split_sentences(text)
        .into_iter()
        .rev()
        .find(|sentence| sentence.to_lowercase().contains(word))
        .ok_or_else(|| AnalysisError::SentenceNotFound {
            word: word.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_most_recent_match() {
        let text = "A cat sat. A dog ran. The cat slept.";
        assert_eq!(last_sentence_containing(text, "cat").unwrap(), " The cat slept");
    }

    #[test]
    fn skips_later_sentences_without_the_word() {
        let text = "The cat sat. A dog ran. Birds sang.";
        assert_eq!(last_sentence_containing(text, "cat").unwrap(), "The cat sat");
    }

    #[test]
    fn matching_is_case_insensitive_on_the_sentence() {
        let text = "Foxes are quick. FOX hunting is banned.";
        assert_eq!(
            last_sentence_containing(text, "fox").unwrap(),
            " FOX hunting is banned"
        );
    }

    #[test]
    fn matching_is_substring_not_whole_word() {
        let text = "The cat sat. This is a category error.";
        assert_eq!(
            last_sentence_containing(text, "cat").unwrap(),
            " This is a category error"
        );
    }

    #[test]
    fn keeps_original_casing_and_punctuation() {
        let text = "Wait, the Fox! said \"hello\". Done.";
        assert_eq!(
            last_sentence_containing(text, "fox").unwrap(),
            "Wait, the Fox! said \"hello\""
        );
    }

    #[test]
    fn missing_word_is_an_error() {
        let err = last_sentence_containing("A cat sat. A dog ran.", "bird").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::SentenceNotFound {
                word: "bird".to_string()
            }
        );
    }

    #[test]
    fn empty_passage_has_no_match() {
        assert!(last_sentence_containing("", "anything").is_err());
        assert!(last_sentence_containing("", "").is_err());
    }

    #[test]
    fn empty_word_matches_final_sentence() {
        let text = "First. Second. Third.";
        assert_eq!(last_sentence_containing(text, "").unwrap(), " Third");
    }

    #[test]
    fn text_without_periods_is_one_sentence() {
        let text = "no periods here at all ";
        assert_eq!(last_sentence_containing(text, "here").unwrap(), text);
    }

    #[test]
    fn trailing_space_after_final_period_is_a_sentence() {
        // the loader leaves a trailing space after the last line
        let text = "The cat sat. ";
        assert_eq!(split_sentences(text), vec!["The cat sat", " "]);
        assert_eq!(last_sentence_containing(text, "cat").unwrap(), "The cat sat");
    }

    #[test]
    fn split_drops_only_trailing_empties() {
        assert_eq!(split_sentences("a..b..."), vec!["a", "", "b"]);
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("...").is_empty());
    }
}
