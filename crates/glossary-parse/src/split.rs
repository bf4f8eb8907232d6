use std::sync::OnceLock;

use glossary_types::DefinitionEntry;
use regex::Regex;

use crate::classify::DEFINITION_START;

fn enumerator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+\.\s").expect("valid enumerator regex"))
}

fn leading_enumerator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.(?:\s+|$)").expect("valid leading enumerator regex"))
}

fn trailing_reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\[([^\[\]]*)\]$").expect("valid reference regex"))
}

/// Split an assembled definition block into numbered definitions.
///
/// The block must open with `"1. "`; otherwise nothing is parsed. Each later
/// `N. ` enumerator (ASCII digits) preceded by whitespace starts a new
/// definition, in source order. Only the last trailing `[...]` group becomes
/// the definition's reference; earlier groups stay in the text.
pub fn split_definitions(raw: &str) -> Vec<DefinitionEntry> {
    let raw = raw.trim();
    if !raw.starts_with(DEFINITION_START) {
        return Vec::new();
    }

    let mut starts = vec![0];
    starts.extend(
        enumerator_re()
            .find_iter(raw)
            .map(|m| m.start())
            .filter(|&start| start > 0 && preceded_by_whitespace(raw, start)),
    );
    starts.dedup();

    let mut definitions = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(raw.len());
        if let Some(entry) = parse_segment(&raw[start..end]) {
            definitions.push(entry);
        }
    }
    definitions
}

fn parse_segment(segment: &str) -> Option<DefinitionEntry> {
    let segment = segment.trim();
    let body = match leading_enumerator_re().find(segment) {
        Some(m) => &segment[m.end()..],
        None => segment,
    };
    let body = body.trim();

    let (text, reference) = match trailing_reference_re().captures(body) {
        Some(caps) => {
            let whole = caps.get(0)?;
            let inner = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            let reference = (!inner.is_empty()).then(|| inner.to_string());
            (body[..whole.start()].trim_end(), reference)
        }
        None => (body, None),
    };

    if text.is_empty() {
        return None;
    }
    Some(DefinitionEntry {
        text: text.to_string(),
        reference,
    })
}

fn preceded_by_whitespace(text: &str, idx: usize) -> bool {
    text[..idx].chars().next_back().is_some_and(char::is_whitespace)
}
