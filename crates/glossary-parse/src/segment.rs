use tracing::debug;

use crate::classify::LineClassifier;

/// Raw lines belonging to one glossary entry, borrowed from the source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TermBlock<'a> {
    pub number: &'a str,
    pub name: &'a str,
    pub lines: Vec<&'a str>,
}

/// Group the source into term blocks.
///
/// Lines are trimmed and blank lines dropped first. The line right after a
/// header is the term name, whatever it looks like. Lines before the first
/// header are ignored, and blocks without content lines are dropped.
pub fn segment<'a>(text: &'a str, classifier: &LineClassifier) -> Vec<TermBlock<'a>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let mut blocks = Vec::new();
    let mut current: Option<TermBlock<'a>> = None;
    while let Some(line) = lines.next() {
        if classifier.is_header(line) {
            if let Some(block) = current.take() {
                push_block(&mut blocks, block);
            }
            let Some(name) = lines.next() else {
                debug!("header {line} at end of input has no name");
                break;
            };
            current = Some(TermBlock {
                number: line,
                name,
                lines: Vec::new(),
            });
        } else if let Some(block) = current.as_mut() {
            block.lines.push(line);
        }
    }
    if let Some(block) = current {
        push_block(&mut blocks, block);
    }

    blocks
}

fn push_block<'a>(blocks: &mut Vec<TermBlock<'a>>, block: TermBlock<'a>) {
    if block.lines.is_empty() {
        debug!("dropping term {} ({}) without content", block.number, block.name);
        return;
    }
    blocks.push(block);
}
