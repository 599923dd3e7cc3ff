//! Emoji corpus loading
//!
//! The corpus is the full ordered set of emoji records fetched once from the
//! data provider at startup and read-only afterwards.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors that can occur while loading the corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON parse error")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, CorpusError>;

/// A single emoji record: display name, the literal glyph to insert, and
/// alternate search terms.
///
/// The provider JSON carries the glyph under the `emoji` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    pub name: String,
    #[serde(rename = "emoji")]
    pub glyph: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl EmojiRecord {
    pub fn new(
        name: impl Into<String>,
        glyph: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// The ordered emoji corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<EmojiRecord>,
}

impl Corpus {
    /// Create a corpus from pre-built records.
    pub fn new(records: Vec<EmojiRecord>) -> Self {
        Self { records }
    }

    /// Create an empty corpus. Matching against it yields no candidates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a corpus from provider JSON: an array of
    /// `{name, emoji, keywords}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<EmojiRecord> = serde_json::from_str(json)?;
        debug!("corpus parsed: {} records", records.len());
        Ok(Self { records })
    }

    /// Parse a corpus from a provider JSON stream.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let records: Vec<EmojiRecord> = serde_json::from_reader(reader)?;
        debug!("corpus parsed: {} records", records.len());
        Ok(Self { records })
    }

    /// Load a corpus from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// All records in corpus order.
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_JSON: &str = r#"[
        {"name": "thumbsup", "emoji": "👍", "keywords": ["approve", "ok"]},
        {"name": "smile", "emoji": "😄", "keywords": ["happy", "joy"]},
        {"name": "fire", "emoji": "🔥", "keywords": ["hot", "lit"]}
    ]"#;

    #[test]
    fn test_parse_provider_json() {
        let corpus = Corpus::from_json_str(SAMPLE_JSON).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.records()[0].name, "thumbsup");
        assert_eq!(corpus.records()[0].glyph, "👍");
        assert_eq!(corpus.records()[1].keywords, vec!["happy", "joy"]);
    }

    #[test]
    fn test_keywords_default_to_empty() {
        let corpus =
            Corpus::from_json_str(r#"[{"name": "tada", "emoji": "🎉"}]"#).unwrap();
        assert!(corpus.records()[0].keywords.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = Corpus::from_json_str("not json").unwrap_err();
        assert!(matches!(err, CorpusError::Json(_)));
    }

    #[test]
    fn test_order_preserved() {
        let corpus = Corpus::from_json_str(SAMPLE_JSON).unwrap();
        let names: Vec<_> = corpus.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["thumbsup", "smile", "fire"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();
        let corpus = Corpus::load(file.path()).unwrap();
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = Corpus::load("/nonexistent/emojis.json").unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::empty();
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
    }
}
