use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("failed to read translation table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed translation table: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct TranslationRow {
    text_en: String,
    #[serde(default)]
    text_ja: String,
}

/// Exact source-text to translated-text table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TranslationMap {
    entries: HashMap<String, String>,
}

impl TranslationMap {
    /// Load a `text_en,text_ja` CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TranslationError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Read `text_en,text_ja` rows. Rows with an empty translation are
    /// skipped; a later row for the same source text replaces an earlier one.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TranslationError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut entries = HashMap::new();
        let mut skipped = 0usize;
        for row in rdr.deserialize::<TranslationRow>() {
            let row = row?;
            if row.text_ja.trim().is_empty() {
                skipped += 1;
                continue;
            }
            if let Some(previous) = entries.insert(row.text_en.clone(), row.text_ja)
                && entries.get(&row.text_en) != Some(&previous)
            {
                warn!("conflicting translations for {:?}; keeping the later row", row.text_en);
            }
        }
        info!(
            "loaded {} translations ({} rows without translation)",
            entries.len(),
            skipped
        );
        Ok(Self { entries })
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
