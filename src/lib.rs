//! Numbered glossary text to structured term records.
//!
//! Re-exports the workspace crates and adds [`convert`], which parses a
//! source file and validates the result in one call.

use std::path::Path;

use anyhow::Result;

pub use glossary_parse::{Glossary, LoadMode, ParseOptions, extract_terms};
pub use glossary_translate::{
    TranslationError, TranslationMap, TranslationTexts, extract_texts, translate_terms,
};
pub use glossary_types::{DefinitionEntry, TermRecord, TranslatedDefinition, TranslatedTermRecord};
pub use glossary_validate::{Diagnostic, LookupScope, ValidationReport, validate};

/// Parse a source file with default options and validate the records.
pub fn convert(path: impl AsRef<Path>) -> Result<(Vec<TermRecord>, ValidationReport)> {
    let terms = Glossary::load(path)?.into_terms();
    let report = validate(&terms);
    Ok((terms, report))
}
