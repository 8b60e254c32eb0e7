//! Metric Taxonomy
//!
//! The set of derived metrics the service computes, each with its
//! parameter variants, and the tagged result values they produce.

use serde::{Deserialize, Serialize};

use crate::analyzer;

// == Metric ==
/// One derived metric, including its parameter values.
///
/// Each parameterization is a distinct cache entry; `all_variants`
/// enumerates the full set so mutations can invalidate every entry a
/// document may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Whitespace-delimited token count
    WordCount,
    /// Character count, with or without whitespace characters
    CharacterCount { include_whitespace: bool },
    /// Sentence count with abbreviation-aware splitting
    SentenceCount,
    /// Blank-line-separated block count
    ParagraphCount,
    /// Longest token(s) by character length
    LongestWord { return_all: bool },
}

impl Metric {
    /// Computes this metric over the given content.
    pub fn compute(&self, content: &str) -> MetricResult {
        match *self {
            Metric::WordCount => MetricResult::WordCount(analyzer::count_words(content)),
            Metric::CharacterCount { include_whitespace } => {
                MetricResult::CharacterCount(analyzer::count_characters(
                    content,
                    include_whitespace,
                ))
            }
            Metric::SentenceCount => {
                MetricResult::SentenceCount(analyzer::count_sentences(content))
            }
            Metric::ParagraphCount => {
                MetricResult::ParagraphCount(analyzer::count_paragraphs(content))
            }
            Metric::LongestWord { return_all } => {
                let mut words = analyzer::find_longest_words(content, return_all);
                if return_all {
                    MetricResult::LongestWords(words)
                } else {
                    MetricResult::LongestWord(words.pop().unwrap_or_default())
                }
            }
        }
    }

    /// Stable cache-key segment identifying this metric and its parameters.
    pub fn key_segment(&self) -> &'static str {
        match *self {
            Metric::WordCount => "words",
            Metric::CharacterCount {
                include_whitespace: true,
            } => "chars:ws",
            Metric::CharacterCount {
                include_whitespace: false,
            } => "chars",
            Metric::SentenceCount => "sentences",
            Metric::ParagraphCount => "paragraphs",
            Metric::LongestWord { return_all: true } => "longest:all",
            Metric::LongestWord { return_all: false } => "longest",
        }
    }

    /// Every metric parameterization a document can have cached.
    pub fn all_variants() -> [Metric; 7] {
        [
            Metric::WordCount,
            Metric::CharacterCount {
                include_whitespace: true,
            },
            Metric::CharacterCount {
                include_whitespace: false,
            },
            Metric::SentenceCount,
            Metric::ParagraphCount,
            Metric::LongestWord { return_all: true },
            Metric::LongestWord { return_all: false },
        ]
    }
}

// == Metric Result ==
/// A computed metric value, tagged by metric kind.
///
/// Serialized to JSON for cache storage and API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum MetricResult {
    WordCount(usize),
    CharacterCount(usize),
    SentenceCount(usize),
    ParagraphCount(usize),
    LongestWord(String),
    LongestWords(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_compute_word_count() {
        assert_eq!(
            Metric::WordCount.compute("Hello world"),
            MetricResult::WordCount(2)
        );
    }

    #[test]
    fn test_compute_character_count_variants() {
        let metric_ws = Metric::CharacterCount {
            include_whitespace: true,
        };
        let metric_no_ws = Metric::CharacterCount {
            include_whitespace: false,
        };
        assert_eq!(metric_ws.compute("a b"), MetricResult::CharacterCount(3));
        assert_eq!(metric_no_ws.compute("a b"), MetricResult::CharacterCount(2));
    }

    #[test]
    fn test_compute_longest_word_first() {
        let metric = Metric::LongestWord { return_all: false };
        assert_eq!(
            metric.compute("apple banana cherry"),
            MetricResult::LongestWord("banana".to_string())
        );
    }

    #[test]
    fn test_compute_longest_word_empty_text() {
        let metric = Metric::LongestWord { return_all: false };
        assert_eq!(
            metric.compute("   "),
            MetricResult::LongestWord(String::new())
        );
    }

    #[test]
    fn test_compute_longest_words_all() {
        let metric = Metric::LongestWord { return_all: true };
        assert_eq!(
            metric.compute("apple banana cherry"),
            MetricResult::LongestWords(vec!["banana".to_string(), "cherry".to_string()])
        );
    }

    #[test]
    fn test_key_segments_are_distinct() {
        let segments: HashSet<&str> = Metric::all_variants()
            .iter()
            .map(|m| m.key_segment())
            .collect();
        assert_eq!(segments.len(), 7);
    }

    #[test]
    fn test_result_json_round_trip() {
        let result = MetricResult::LongestWords(vec!["banana".to_string()]);
        let json = serde_json::to_string(&result).unwrap();
        let back: MetricResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_result_json_tag_is_camel_case() {
        let json = serde_json::to_string(&MetricResult::WordCount(3)).unwrap();
        assert!(json.contains(r#""kind":"wordCount""#));
        assert!(json.contains(r#""value":3"#));
    }
}
