//! Candidate matching
//!
//! Filters the corpus by substring containment against record names and
//! keywords, in corpus order, capped at a configured maximum.

use crate::corpus::{Corpus, EmojiRecord};

/// Matching configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Maximum number of candidates returned by a filter pass.
    pub max_results: usize,
    /// Whether name/keyword comparison is case-sensitive.
    pub case_sensitive: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            case_sensitive: false,
        }
    }
}

/// Filter the corpus by `query`.
///
/// An empty query returns the first `max_results` records in corpus order.
/// A non-empty query scans the corpus in order and includes a record when its
/// name or any keyword contains the query as a substring, stopping as soon as
/// `max_results` matches have been collected. First-N-in-corpus-order, not
/// best-N.
pub fn filter<'c>(corpus: &'c Corpus, query: &str, config: &MatchConfig) -> Vec<&'c EmojiRecord> {
    if query.is_empty() {
        return corpus.records().iter().take(config.max_results).collect();
    }
    if config.max_results == 0 {
        return Vec::new();
    }

    let needle = normalize(query, config.case_sensitive);
    let mut results = Vec::new();
    for record in corpus.records() {
        if record_matches(record, &needle, config.case_sensitive) {
            results.push(record);
            if results.len() >= config.max_results {
                break;
            }
        }
    }
    results
}

fn normalize(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

fn record_matches(record: &EmojiRecord, needle: &str, case_sensitive: bool) -> bool {
    if normalize(&record.name, case_sensitive).contains(needle) {
        return true;
    }
    record
        .keywords
        .iter()
        .any(|keyword| normalize(keyword, case_sensitive).contains(needle))
}
