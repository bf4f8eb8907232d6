/// Clause number of "Terms and definitions" in ISO-style standards.
pub const DEFAULT_SECTION: u32 = 3;

pub const DEFINITION_START: &str = "1. ";
pub const CONFER_PREFIX: &str = "cf. ";
pub const EXAMPLE_PREFIX: &str = "EXAMPLE: ";
pub const NOTE_PREFIX: &str = "Note 1 to entry: ";

/// Role of a single trimmed, non-empty source line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind<'a> {
    /// Term number such as `3.1`; opens a new block.
    Header,
    /// Starts with an `N. ` enumerator. Carries the whole line.
    Definition(&'a str),
    /// `cf. ` line, prefix stripped.
    Confer(&'a str),
    /// `EXAMPLE: ` line, prefix stripped.
    Example(&'a str),
    /// `Note 1 to entry: ` line, prefix stripped.
    Note(&'a str),
    /// Alias or continuation, depending on what the assembler has seen so far.
    Plain(&'a str),
}

/// Classifies lines for one glossary clause.
#[derive(Clone, Debug)]
pub struct LineClassifier {
    section: String,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION)
    }
}

impl LineClassifier {
    pub fn new(section: u32) -> Self {
        Self {
            section: section.to_string(),
        }
    }

    /// `true` for `<section>.<digits>` and nothing else.
    pub fn is_header(&self, line: &str) -> bool {
        line.strip_prefix(self.section.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if self.is_header(line) {
            LineKind::Header
        } else if starts_with_enumerator(line) {
            LineKind::Definition(line)
        } else if let Some(rest) = line.strip_prefix(CONFER_PREFIX) {
            LineKind::Confer(rest)
        } else if let Some(rest) = line.strip_prefix(EXAMPLE_PREFIX) {
            LineKind::Example(rest)
        } else if let Some(rest) = line.strip_prefix(NOTE_PREFIX) {
            LineKind::Note(rest)
        } else {
            LineKind::Plain(line)
        }
    }
}

/// Matches a leading `\d+\.\s`.
pub fn starts_with_enumerator(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    line[digits..]
        .strip_prefix('.')
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}
