use glossary_types::TermRecord;
use tracing::warn;

use crate::classify::{DEFINITION_START, LineClassifier, LineKind};
use crate::segment::TermBlock;
use crate::split::split_definitions;

/// Field that receives plain continuation lines.
///
/// Every block starts in `Aliases`; no transition leads back to it, so alias
/// lines are only recognized before the first marker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ActiveField {
    Aliases,
    Definition,
    Confer,
    Example,
    Note,
}

/// Per-term scratch state, dropped once the record is built.
#[derive(Debug, Default)]
struct Accumulator<'a> {
    aliases: Vec<&'a str>,
    definition: Option<String>,
    pending: Vec<&'a str>,
    cross_references: Vec<String>,
    example: Option<String>,
    note: Option<String>,
}

impl<'a> Accumulator<'a> {
    fn step(&mut self, active: ActiveField, line: &'a str, kind: LineKind<'a>) -> ActiveField {
        match kind {
            LineKind::Definition(text) => {
                self.flush_pending();
                append(&mut self.definition, text);
                ActiveField::Definition
            }
            LineKind::Confer(rest) => {
                self.cross_references.push(rest.to_string());
                ActiveField::Confer
            }
            LineKind::Example(rest) => {
                append(&mut self.example, rest);
                ActiveField::Example
            }
            LineKind::Note(rest) => {
                append(&mut self.note, rest);
                ActiveField::Note
            }
            LineKind::Header | LineKind::Plain(_) => {
                self.continue_field(active, line);
                active
            }
        }
    }

    fn continue_field(&mut self, active: ActiveField, line: &'a str) {
        match active {
            ActiveField::Aliases => self.aliases.push(line),
            ActiveField::Definition => self.pending.push(line),
            ActiveField::Confer => {
                if let Some(last) = self.cross_references.last_mut() {
                    last.push(' ');
                    last.push_str(line);
                }
            }
            ActiveField::Example => append(&mut self.example, line),
            ActiveField::Note => append(&mut self.note, line),
        }
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let joined = self.pending.join(" ");
        self.pending.clear();
        append(&mut self.definition, &joined);
    }

    fn finish(mut self, block: &TermBlock<'a>) -> TermRecord {
        self.flush_pending();
        let definitions = match self.definition.as_deref() {
            Some(raw) => {
                let parsed = split_definitions(raw);
                if parsed.is_empty() && !raw.starts_with(DEFINITION_START) {
                    warn!(
                        "term {} ({}): definition text does not start with {:?}; no definitions parsed",
                        block.number, block.name, DEFINITION_START
                    );
                }
                parsed
            }
            None => Vec::new(),
        };

        TermRecord {
            number: block.number.to_string(),
            name: block.name.to_string(),
            aliases: self.aliases.into_iter().map(str::to_string).collect(),
            definitions,
            cross_references: self.cross_references,
            example: self.example,
            note: self.note,
        }
    }
}

fn append(slot: &mut Option<String>, text: &str) {
    match slot {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(text);
        }
        None => *slot = Some(text.to_string()),
    }
}

/// Fold a block's content lines into a [`TermRecord`].
pub fn assemble(block: &TermBlock<'_>, classifier: &LineClassifier) -> TermRecord {
    let mut acc = Accumulator::default();
    let mut active = ActiveField::Aliases;
    for &line in &block.lines {
        active = acc.step(active, line, classifier.classify(line));
    }
    acc.finish(block)
}
