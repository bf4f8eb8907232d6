use std::collections::BTreeSet;
use std::io::Write;

use glossary_types::TermRecord;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::table::TranslationError;

/// Unique source texts a translator has to cover, sorted.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TranslationTexts {
    pub texts: Vec<String>,
}

/// Collect definition texts, examples and notes, de-duplicated and sorted.
pub fn extract_texts(terms: &[TermRecord]) -> TranslationTexts {
    let unique: BTreeSet<&str> = terms.iter().flat_map(|t| t.translatable_texts()).collect();
    info!("extracted {} unique texts from {} terms", unique.len(), terms.len());
    TranslationTexts {
        texts: unique.into_iter().map(str::to_string).collect(),
    }
}

/// Write a `text_en,text_ja` table with empty translations, ready to fill in.
pub fn write_template<W: Write>(writer: W, texts: &TranslationTexts) -> Result<(), TranslationError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["text_en", "text_ja"])?;
    for text in &texts.texts {
        wtr.write_record([text.as_str(), ""])?;
    }
    wtr.flush()?;
    Ok(())
}
