//! Cross-reference checks for a parsed glossary.
//!
//! Validation is report-only: it reads a term slice, never mutates it, and
//! returns a [`ValidationReport`] listing
//! - definitions repeated verbatim within a single term, and
//! - `cf.` targets that match no term name, parenthetical base name or alias.
//!
//! # How lookup works
//! A [`LookupSet`] is built fresh for each pass. It holds every term name, the
//! `<base>` of any name shaped `<base> (<ABBR>)`, and (with
//! [`LookupScope::NamesAndAliases`]) every alias. Matching is exact and
//! case-sensitive.
//!
//! # Example
//! ```
//! use glossary_types::{DefinitionEntry, TermRecord};
//! use glossary_validate::validate;
//!
//! let terms = vec![
//!     TermRecord {
//!         number: "3.1".into(),
//!         name: "full name (FN)".into(),
//!         definitions: vec![DefinitionEntry::new("Something")],
//!         ..TermRecord::default()
//!     },
//!     TermRecord {
//!         number: "3.2".into(),
//!         name: "other".into(),
//!         cross_references: vec!["full name".into(), "missing".into()],
//!         ..TermRecord::default()
//!     },
//! ];
//! let report = validate(&terms);
//! assert_eq!(report.unresolved_count(), 1);
//! assert_eq!(
//!     report.lines().collect::<Vec<_>>(),
//!     vec![
//!         "Word 3.2 has invalid confer reference: missing".to_string(),
//!         "Found 1 invalid confer references".to_string(),
//!     ]
//! );
//! ```

use std::collections::HashSet;
use std::fmt;

use glossary_types::{TermRecord, split_parenthetical};
use tracing::{debug, info};

/// Which targets a cross-reference may resolve to.
///
/// Earlier revisions of the checker matched names only; aliases were added
/// later. Both behaviours stay selectable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LookupScope {
    /// Names, parenthetical base names and aliases.
    #[default]
    NamesAndAliases,
    /// Names and parenthetical base names only.
    NamesOnly,
}

/// Resolvable cross-reference targets, borrowed from the term slice.
#[derive(Clone, Debug)]
pub struct LookupSet<'a> {
    names: HashSet<&'a str>,
    aliases: HashSet<&'a str>,
}

impl<'a> LookupSet<'a> {
    pub fn build(terms: &'a [TermRecord], scope: LookupScope) -> Self {
        let mut names = HashSet::with_capacity(terms.len());
        let mut aliases = HashSet::new();
        for term in terms {
            names.insert(term.name.as_str());
            if let Some((base, _)) = split_parenthetical(&term.name) {
                names.insert(base);
            }
            if scope == LookupScope::NamesAndAliases {
                aliases.extend(term.aliases.iter().map(String::as_str));
            }
        }
        debug!(
            "lookup set: {} names, {} aliases ({:?})",
            names.len(),
            aliases.len(),
            scope
        );
        Self { names, aliases }
    }

    pub fn contains(&self, target: &str) -> bool {
        self.names.contains(target) || self.aliases.contains(target)
    }

    pub fn len(&self) -> usize {
        self.names.union(&self.aliases).count()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.aliases.is_empty()
    }
}

/// One validation finding, tied to the owning term's number.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    DuplicateDefinition { number: String, text: String },
    UnresolvedReference { number: String, reference: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateDefinition { number, text } => {
                write!(f, "Word {number} has duplicate definition text: {text}")
            }
            Diagnostic::UnresolvedReference { number, reference } => {
                write!(f, "Word {number} has invalid confer reference: {reference}")
            }
        }
    }
}

/// Findings of one validation pass.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn unresolved_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnresolvedReference { .. }))
            .count()
    }

    pub fn duplicate_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::DuplicateDefinition { .. }))
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Found {} invalid confer references", self.unresolved_count())
    }

    /// Diagnostic lines followed by the summary line.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.diagnostics
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(self.summary()))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Validate with the full lookup scope.
pub fn validate(terms: &[TermRecord]) -> ValidationReport {
    validate_with_scope(terms, LookupScope::default())
}

pub fn validate_with_scope(terms: &[TermRecord], scope: LookupScope) -> ValidationReport {
    let lookup = LookupSet::build(terms, scope);
    let mut diagnostics = Vec::new();

    for term in terms {
        let mut seen = HashSet::with_capacity(term.definitions.len());
        for definition in &term.definitions {
            if !seen.insert(definition.text.as_str()) {
                diagnostics.push(Diagnostic::DuplicateDefinition {
                    number: term.number.clone(),
                    text: definition.text.clone(),
                });
            }
        }
    }

    for term in terms {
        for reference in &term.cross_references {
            if !lookup.contains(reference) {
                diagnostics.push(Diagnostic::UnresolvedReference {
                    number: term.number.clone(),
                    reference: reference.clone(),
                });
            }
        }
    }

    let report = ValidationReport { diagnostics };
    info!(
        "validated {} terms: {} duplicate definitions, {} unresolved references",
        terms.len(),
        report.duplicate_count(),
        report.unresolved_count()
    );
    report
}

#[cfg(test)]
mod tests {
    use glossary_types::DefinitionEntry;

    use super::*;

    fn term(number: &str, name: &str) -> TermRecord {
        TermRecord {
            number: number.into(),
            name: name.into(),
            definitions: vec![DefinitionEntry::new(format!("definition of {name}"))],
            ..TermRecord::default()
        }
    }

    #[test]
    fn resolves_parenthetical_base_names() {
        let mut referrer = term("3.2", "referrer");
        referrer.cross_references = vec!["full name".into(), "full name (FN)".into()];
        let terms = vec![term("3.1", "full name (FN)"), referrer];

        let report = validate(&terms);
        assert!(report.is_clean(), "{report}");
        assert_eq!(report.summary(), "Found 0 invalid confer references");
    }

    #[test]
    fn abbreviation_alone_does_not_resolve() {
        let mut referrer = term("3.2", "referrer");
        referrer.cross_references = vec!["FN".into()];
        let terms = vec![term("3.1", "full name (FN)"), referrer];

        assert_eq!(validate(&terms).unresolved_count(), 1);
    }

    #[test]
    fn alias_resolution_depends_on_scope() {
        let mut target = term("3.1", "target");
        target.aliases = vec!["other name".into()];
        let mut referrer = term("3.2", "referrer");
        referrer.cross_references = vec!["other name".into()];
        let terms = vec![target, referrer];

        assert!(validate_with_scope(&terms, LookupScope::NamesAndAliases).is_clean());

        let legacy = validate_with_scope(&terms, LookupScope::NamesOnly);
        assert_eq!(
            legacy.diagnostics,
            vec![Diagnostic::UnresolvedReference {
                number: "3.2".into(),
                reference: "other name".into(),
            }]
        );
    }

    #[test]
    fn flags_each_repeated_definition() {
        let mut repeated = term("3.1", "repeated");
        repeated.definitions = vec![
            DefinitionEntry::new("same"),
            DefinitionEntry::with_reference("same", "REF"),
            DefinitionEntry::new("Same"),
            DefinitionEntry::new("same"),
        ];
        let report = validate(&[repeated]);
        assert_eq!(report.duplicate_count(), 2);
        assert_eq!(
            report.diagnostics[0].to_string(),
            "Word 3.1 has duplicate definition text: same"
        );
        assert_eq!(report.unresolved_count(), 0);
    }

    #[test]
    fn same_text_in_different_terms_is_fine() {
        let mut a = term("3.1", "a");
        let mut b = term("3.2", "b");
        a.definitions = vec![DefinitionEntry::new("shared")];
        b.definitions = vec![DefinitionEntry::new("shared")];
        assert!(validate(&[a, b]).is_clean());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut referrer = term("3.2", "referrer");
        referrer.cross_references = vec!["Target".into()];
        let terms = vec![term("3.1", "target"), referrer];
        assert_eq!(validate(&terms).unresolved_count(), 1);
    }

    #[test]
    fn validation_is_repeatable() {
        let mut referrer = term("3.2", "referrer");
        referrer.cross_references = vec!["nowhere".into()];
        let terms = vec![term("3.1", "target"), referrer];
        let snapshot = terms.clone();

        let first = validate(&terms);
        let second = validate(&terms);
        assert_eq!(first, second);
        assert_eq!(terms, snapshot);
    }

    #[test]
    fn empty_input_reports_zero() {
        let report = validate(&[]);
        assert!(report.is_clean());
        assert_eq!(
            report.lines().collect::<Vec<_>>(),
            vec!["Found 0 invalid confer references".to_string()]
        );
    }

    #[test]
    fn lookup_set_counts_distinct_targets() {
        let mut target = term("3.1", "full name (FN)");
        target.aliases = vec!["full name".into(), "alt".into()];
        let terms = vec![target];
        let lookup = LookupSet::build(&terms, LookupScope::NamesAndAliases);
        assert_eq!(lookup.len(), 3);
        assert!(lookup.contains("alt"));
        assert!(!LookupSet::build(&terms, LookupScope::NamesOnly).contains("alt"));
    }
}
