//! Parse numbered glossary text into typed term records.
//!
//! The input is the plain-text rendering of a "Terms and definitions" clause:
//!
//! ```text
//! 3.1
//! term name
//! alias line
//! 1. First definition [REF1]
//!  2. Second definition
//! cf. other term
//! EXAMPLE: An example
//! Note 1 to entry: A note
//! ```
//!
//! Parsing runs in three steps over borrowed text:
//! - [`segment`] cuts the trimmed, non-blank lines into [`TermBlock`]s at every
//!   header line (`3.<n>`), taking the next line as the term name.
//! - [`assemble`] walks a block with a small field state machine driven by
//!   [`LineClassifier`], gathering aliases, definition text, `cf.` targets,
//!   the example and the note.
//! - [`split_definitions`] cuts the definition text at embedded `N. `
//!   enumerators and pulls trailing `[...]` citations into `reference`.
//!
//! Malformed input never fails: text without headers simply yields no terms.
//! Only reading the source can fail. The source can be memory-mapped or read
//! into an owned buffer, picked at runtime via [`LoadMode`].
//!
//! # Example
//! ```
//! use glossary_parse::Glossary;
//!
//! let glossary = Glossary::parse("3.1\ntest word\n1. This is a description");
//! assert_eq!(glossary.len(), 1);
//! assert_eq!(glossary.terms()[0].definitions[0].text, "This is a description");
//! ```

mod assemble;
mod classify;
mod segment;
mod split;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use glossary_types::TermRecord;
use memmap2::Mmap;
use tracing::{info, warn};

pub use assemble::assemble;
pub use classify::{
    CONFER_PREFIX, DEFAULT_SECTION, DEFINITION_START, EXAMPLE_PREFIX, LineClassifier, LineKind,
    NOTE_PREFIX, starts_with_enumerator,
};
pub use segment::{TermBlock, segment};
pub use split::split_definitions;

/// Strategy for loading the source text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map the file (zero-copy).
    #[default]
    Mmap,
    /// Read the file into an owned buffer.
    Owned,
}

impl FromStr for LoadMode {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "mmap" => Ok(LoadMode::Mmap),
            "owned" => Ok(LoadMode::Owned),
            other => anyhow::bail!("unknown load mode {other:?} (expected mmap or owned)"),
        }
    }
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// Glossary source text held in memory for the duration of a parse.
pub struct SourceText {
    path: PathBuf,
    buffer: Buffer,
}

impl SourceText {
    /// Load a source file, memory-mapping it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_mode(path, LoadMode::Mmap)
    }

    pub fn load_with_mode(path: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let buffer = load_file(&path, mode)?;
        Ok(Self { path, buffer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The source as UTF-8, without a leading byte order mark.
    pub fn as_str(&self) -> Result<&str> {
        let text = std::str::from_utf8(self.buffer.as_slice())
            .with_context(|| format!("{} is not valid UTF-8", self.path.display()))?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
    }
}

/// Knobs for the line classifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseOptions {
    /// Clause number that prefixes every term number (`3` for `3.1`).
    pub section: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION,
        }
    }
}

/// Ordered term records parsed from one glossary source.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Glossary {
    terms: Vec<TermRecord>,
}

impl Glossary {
    /// Parse glossary text using the default clause number.
    pub fn parse(text: &str) -> Self {
        Self::parse_with_options(text, ParseOptions::default())
    }

    pub fn parse_with_options(text: &str, options: ParseOptions) -> Self {
        let classifier = LineClassifier::new(options.section);
        let terms: Vec<TermRecord> = segment(text, &classifier)
            .iter()
            .map(|block| assemble(block, &classifier))
            .collect();

        let mut seen = HashSet::new();
        for term in &terms {
            if !seen.insert(term.number.as_str()) {
                warn!("term number {} appears more than once", term.number);
            }
        }

        info!("extracted {} terms", terms.len());
        Self { terms }
    }

    /// Read and parse a source file. Defaults to memory-mapping it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, LoadMode::Mmap, ParseOptions::default())
    }

    pub fn load_with(path: impl AsRef<Path>, mode: LoadMode, options: ParseOptions) -> Result<Self> {
        let source = SourceText::load_with_mode(path, mode)?;
        let text = source.as_str()?;
        Ok(Self::parse_with_options(text, options))
    }

    pub fn terms(&self) -> &[TermRecord] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<TermRecord> {
        self.terms
    }

    /// Look a term up by its number.
    pub fn get(&self, number: &str) -> Option<&TermRecord> {
        self.terms.iter().find(|t| t.number == number)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Shorthand for `Glossary::parse(text).into_terms()`.
pub fn extract_terms(text: &str) -> Vec<TermRecord> {
    Glossary::parse(text).into_terms()
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    match mode {
        LoadMode::Mmap => {
            let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            let len = file
                .metadata()
                .with_context(|| format!("stat {}", path.display()))?
                .len();
            if len == 0 {
                return Ok(Buffer::Owned(Vec::new()));
            }
            unsafe { Mmap::map(&file) }
                .map(Buffer::Mmap)
                .with_context(|| format!("mmap {}", path.display()))
        }
        LoadMode::Owned => {
            let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .with_context(|| format!("read {}", path.display()))?;
            Ok(Buffer::Owned(buf))
        }
    }
}
