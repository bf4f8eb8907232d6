use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use glossary_parse::{Glossary, LoadMode, ParseOptions};
use glossary_translate::{TranslationMap, extract_texts, translate_terms, write_template};
use glossary_types::TermRecord;
use glossary_validate::{LookupScope, validate_with_scope};
use tracing::info;

use crate::config::{
    Cli, Commands, DEFAULT_RECORDS, DEFAULT_SOURCE, DEFAULT_TEXTS, DEFAULT_TRANSLATED,
    DEFAULT_TRANSLATIONS, RECORDS_VAR, SOURCE_VAR, TEXTS_VAR, TRANSLATED_VAR, TRANSLATIONS_VAR,
    lookup_scope, resolve_load_mode, resolve_parse_options, resolve_path,
};
use crate::output::{read_records, write_atomic, write_json};

/// Run one subcommand. Reports go to `out`; logs go through `tracing`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Parse {
            input,
            output,
            section,
            load_mode,
            validate,
            names_only,
        } => {
            let input = resolve_path(input, SOURCE_VAR, DEFAULT_SOURCE);
            let output = resolve_path(output, RECORDS_VAR, DEFAULT_RECORDS);
            let options = resolve_parse_options(section);
            let mode = resolve_load_mode(load_mode);
            let terms = parse(&input, &output, mode, options)?;
            if validate {
                report(&terms, lookup_scope(names_only), out)?;
            }
        }
        Commands::Validate { input, names_only } => {
            let input = resolve_path(input, RECORDS_VAR, DEFAULT_RECORDS);
            let terms = read_records(&input)?;
            report(&terms, lookup_scope(names_only), out)?;
        }
        Commands::Extract {
            input,
            output,
            template,
        } => {
            let input = resolve_path(input, RECORDS_VAR, DEFAULT_RECORDS);
            let output = resolve_path(output, TEXTS_VAR, DEFAULT_TEXTS);
            extract(&input, &output, template.as_deref())?;
        }
        Commands::Translate {
            input,
            translations,
            output,
        } => {
            let input = resolve_path(input, RECORDS_VAR, DEFAULT_RECORDS);
            let translations = resolve_path(translations, TRANSLATIONS_VAR, DEFAULT_TRANSLATIONS);
            let output = resolve_path(output, TRANSLATED_VAR, DEFAULT_TRANSLATED);
            translate(&input, &translations, &output)?;
        }
    }
    Ok(())
}

pub fn parse(
    input: &Path,
    output: &Path,
    mode: LoadMode,
    options: ParseOptions,
) -> Result<Vec<TermRecord>> {
    info!(
        "parsing {} (mode: {:?}, section {})",
        input.display(),
        mode,
        options.section
    );
    let glossary = Glossary::load_with(input, mode, options)
        .with_context(|| format!("loading glossary from {}", input.display()))?;
    write_json(output, glossary.terms())?;
    info!("wrote {} terms to {}", glossary.len(), output.display());
    Ok(glossary.into_terms())
}

pub fn report(terms: &[TermRecord], scope: LookupScope, out: &mut impl Write) -> Result<()> {
    let report = validate_with_scope(terms, scope);
    write!(out, "{report}").context("write validation report")?;
    Ok(())
}

pub fn extract(input: &Path, output: &Path, template: Option<&Path>) -> Result<()> {
    let terms = read_records(input)?;
    let texts = extract_texts(&terms);
    write_json(output, &texts)?;
    info!("wrote {} texts to {}", texts.texts.len(), output.display());

    if let Some(template) = template {
        let mut buf = Vec::new();
        write_template(&mut buf, &texts).context("render translation template")?;
        write_atomic(template, &buf)?;
        info!("wrote translation template to {}", template.display());
    }
    Ok(())
}

pub fn translate(input: &Path, translations: &Path, output: &Path) -> Result<()> {
    let terms = read_records(input)?;
    let map = TranslationMap::load(translations)
        .with_context(|| format!("loading translations from {}", translations.display()))?;
    let translated = translate_terms(&terms, &map);
    write_json(output, &translated)?;
    info!("wrote {} translated terms to {}", translated.len(), output.display());
    Ok(())
}
