use glossary_types::{TermRecord, TranslatedDefinition, TranslatedTermRecord};
use tracing::info;

use crate::table::TranslationMap;

/// Build a translated copy of one term. The source record is left untouched.
pub fn translate_term(term: &TermRecord, map: &TranslationMap) -> TranslatedTermRecord {
    let lookup = |text: &str| map.get(text).map(str::to_string);

    TranslatedTermRecord {
        number: term.number.clone(),
        name: term.name.clone(),
        aliases: term.aliases.clone(),
        definitions: term
            .definitions
            .iter()
            .map(|d| TranslatedDefinition {
                text: d.text.clone(),
                reference: d.reference.clone(),
                text_ja: lookup(&d.text),
            })
            .collect(),
        cross_references: term.cross_references.clone(),
        example: term.example.clone(),
        example_ja: term.example.as_deref().and_then(lookup),
        note: term.note.clone(),
        note_ja: term.note.as_deref().and_then(lookup),
    }
}

/// Translate every term, logging how many texts found a match.
pub fn translate_terms(terms: &[TermRecord], map: &TranslationMap) -> Vec<TranslatedTermRecord> {
    let translated: Vec<TranslatedTermRecord> =
        terms.iter().map(|t| translate_term(t, map)).collect();

    let total: usize = terms.iter().map(|t| t.translatable_texts().count()).sum();
    let matched: usize = translated
        .iter()
        .map(|t| {
            t.definitions.iter().filter(|d| d.text_ja.is_some()).count()
                + usize::from(t.example_ja.is_some())
                + usize::from(t.note_ja.is_some())
        })
        .sum();
    info!("translated {matched} of {total} texts across {} terms", terms.len());

    translated
}
