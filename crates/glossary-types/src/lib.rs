//! Shared, serializable types that mirror a parsed terminology glossary.
//!
//! A glossary is an ordered list of [`TermRecord`]s. Each record keeps the
//! term's clause number (`"3.1"`), its display name, the alias lines that
//! preceded the first marker, the numbered [`DefinitionEntry`] list, the
//! `cf.` cross-references and the optional example and note blocks.
//!
//! Empty optional fields are skipped on serialization, so the JSON form only
//! carries what the source text actually contained. Translated output uses the
//! parallel [`TranslatedTermRecord`] shape with `*Ja` fields next to the
//! source text.
//!
//! ```rust
//! use glossary_types::{DefinitionEntry, TermRecord, split_parenthetical};
//!
//! let term = TermRecord {
//!     number: "3.1".into(),
//!     name: "full name (FN)".into(),
//!     definitions: vec![DefinitionEntry::new("A description")],
//!     ..TermRecord::default()
//! };
//! assert_eq!(split_parenthetical(&term.name), Some(("full name", "FN")));
//! ```

use serde::{Deserialize, Serialize};

/// One numbered definition of a term.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionEntry {
    /// Definition body without its enumerator or trailing `[...]` citation.
    pub text: String,
    /// Source citation taken from a trailing `[...]` group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl DefinitionEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference: None,
        }
    }

    pub fn with_reference(text: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference: Some(reference.into()),
        }
    }
}

/// Complete record for one glossary entry.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRecord {
    /// Clause number such as `"3.1"`; unique within a glossary.
    pub number: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub definitions: Vec<DefinitionEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cross_references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TermRecord {
    /// Every text a translator is expected to handle, in record order:
    /// definition texts, then the example, then the note.
    pub fn translatable_texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.definitions
            .iter()
            .map(|d| d.text.as_str())
            .chain(self.example.as_deref())
            .chain(self.note.as_deref())
    }
}

/// A definition paired with its translated text, when one was found.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedDefinition {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_ja: Option<String>,
}

/// [`TermRecord`] with Japanese text merged next to each translatable field.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedTermRecord {
    pub number: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub definitions: Vec<TranslatedDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cross_references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_ja: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_ja: Option<String>,
}

/// Split a name shaped `"<base> (<parenthetical>)"` into its two parts.
///
/// Returns `None` when the name does not end with a parenthetical group or
/// either part would be empty.
pub fn split_parenthetical(name: &str) -> Option<(&str, &str)> {
    let body = name.trim().strip_suffix(')')?;
    let open = body.rfind(" (")?;
    let base = body[..open].trim_end();
    let inner = body[open + 2..].trim();
    if base.is_empty() || inner.is_empty() {
        return None;
    }
    Some((base, inner))
}
