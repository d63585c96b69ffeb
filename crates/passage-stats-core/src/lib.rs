//! Core library for passage-stats.
//!
//! Descriptive statistics over a text passage: a word count, words ranked by
//! frequency, and the most recent sentence mentioning the top word.
//!
//! # Modules
//!
//! - [`passage`] - The input text and its line-joining loader
//! - [`frequency`] - Word count and frequency table
//! - [`ranking`] - Frequency ranking with bounds-checked top-N selection
//! - [`sentence`] - Last-sentence-containing lookup
//! - [`report`] - One full analysis run
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use passage_stats_core::analyze_passage;
//!
//! let report = analyze_passage(
//!     "The quick brown fox. The fox jumps. The lazy fox sleeps.",
//!     3,
//! )
//! .unwrap();
//!
//! assert_eq!(report.word_count, 11);
//! assert_eq!(report.most_used_word, "fox");
//! assert_eq!(report.last_sentence, " The lazy fox sleeps");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod frequency;
pub mod passage;
pub mod ranking;
pub mod report;
pub mod sentence;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use frequency::{FrequencyTable, word_count, word_frequencies};
pub use passage::Passage;
pub use ranking::{RankedList, RankedWord, top_words};
pub use report::{DEFAULT_TOP_N, PassageReport, analyze_passage};
pub use sentence::last_sentence_containing;
