//! Translation glue for parsed glossaries.
//!
//! - [`extract_texts`] lists the unique source texts (definitions, examples,
//!   notes) a translator has to cover; [`write_template`] turns that list
//!   into a `text_en,text_ja` CSV to fill in.
//! - [`TranslationMap`] loads the filled-in table.
//! - [`translate_terms`] builds [`TranslatedTermRecord`]s next to the source
//!   records. Lookups are exact; a text without a match keeps its translated
//!   field absent. Source records are only borrowed, never modified.
//!
//! [`TranslatedTermRecord`]: glossary_types::TranslatedTermRecord

mod extract;
mod merge;
mod table;

pub use extract::{TranslationTexts, extract_texts, write_template};
pub use merge::{translate_term, translate_terms};
pub use table::{TranslationError, TranslationMap};
