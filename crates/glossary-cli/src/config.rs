use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glossary_parse::{DEFAULT_SECTION, LoadMode, ParseOptions};
use glossary_validate::LookupScope;
use tracing::warn;

pub const DEFAULT_SOURCE: &str = "data/source.txt";
pub const DEFAULT_RECORDS: &str = "data/output.json";
pub const DEFAULT_TEXTS: &str = "data/output-extract-text.json";
pub const DEFAULT_TRANSLATIONS: &str = "data/translations.csv";
pub const DEFAULT_TRANSLATED: &str = "data/output-translated.json";

pub const SOURCE_VAR: &str = "GLOSSARY_SOURCE";
pub const RECORDS_VAR: &str = "GLOSSARY_RECORDS";
pub const TEXTS_VAR: &str = "GLOSSARY_TEXTS";
pub const TRANSLATIONS_VAR: &str = "GLOSSARY_TRANSLATIONS";
pub const TRANSLATED_VAR: &str = "GLOSSARY_TRANSLATED";
pub const SECTION_VAR: &str = "GLOSSARY_SECTION";
pub const LOAD_MODE_VAR: &str = "GLOSSARY_LOAD_MODE";

#[derive(Debug, Parser)]
#[command(name = "glossary")]
#[command(about = "Convert numbered glossary text into JSON records and check cross-references")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse glossary text into JSON term records.
    Parse {
        /// Glossary text [env: GLOSSARY_SOURCE, default: data/source.txt]
        #[arg(long)]
        input: Option<PathBuf>,
        /// Records JSON [env: GLOSSARY_RECORDS, default: data/output.json]
        #[arg(long)]
        output: Option<PathBuf>,
        /// Clause number prefixing term numbers [env: GLOSSARY_SECTION, default: 3]
        #[arg(long)]
        section: Option<u32>,
        /// mmap or owned [env: GLOSSARY_LOAD_MODE, default: mmap]
        #[arg(long)]
        load_mode: Option<LoadMode>,
        /// Print the cross-reference report after parsing.
        #[arg(long)]
        validate: bool,
        /// Resolve cross-references against names only, ignoring aliases.
        #[arg(long)]
        names_only: bool,
    },
    /// Report duplicate definitions and unresolved cross-references.
    Validate {
        /// Records JSON [env: GLOSSARY_RECORDS, default: data/output.json]
        #[arg(long)]
        input: Option<PathBuf>,
        /// Resolve cross-references against names only, ignoring aliases.
        #[arg(long)]
        names_only: bool,
    },
    /// List the unique texts that need translating.
    Extract {
        /// Records JSON [env: GLOSSARY_RECORDS, default: data/output.json]
        #[arg(long)]
        input: Option<PathBuf>,
        /// Texts JSON [env: GLOSSARY_TEXTS, default: data/output-extract-text.json]
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also write an empty `text_en,text_ja` CSV to fill in.
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Merge a translation table into the records.
    Translate {
        /// Records JSON [env: GLOSSARY_RECORDS, default: data/output.json]
        #[arg(long)]
        input: Option<PathBuf>,
        /// `text_en,text_ja` CSV [env: GLOSSARY_TRANSLATIONS, default: data/translations.csv]
        #[arg(long)]
        translations: Option<PathBuf>,
        /// Translated records JSON [env: GLOSSARY_TRANSLATED, default: data/output-translated.json]
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Flag, then environment variable, then built-in default.
pub fn resolve_path(flag: Option<PathBuf>, var: &str, default: &str) -> PathBuf {
    flag.or_else(|| env::var(var).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}

pub fn resolve_parse_options(section: Option<u32>) -> ParseOptions {
    let section = section
        .or_else(|| {
            let raw = env::var(SECTION_VAR).ok()?;
            let parsed = raw.parse::<u32>().ok();
            if parsed.is_none() {
                warn!("ignoring {SECTION_VAR}={raw:?}: not a clause number");
            }
            parsed
        })
        .unwrap_or(DEFAULT_SECTION);
    ParseOptions { section }
}

pub fn resolve_load_mode(flag: Option<LoadMode>) -> LoadMode {
    flag.or_else(|| {
        let raw = env::var(LOAD_MODE_VAR).ok()?;
        match raw.parse::<LoadMode>() {
            Ok(mode) => Some(mode),
            Err(err) => {
                warn!("ignoring {LOAD_MODE_VAR}: {err}");
                None
            }
        }
    })
    .unwrap_or_default()
}

pub fn lookup_scope(names_only: bool) -> LookupScope {
    if names_only {
        LookupScope::NamesOnly
    } else {
        LookupScope::NamesAndAliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET_VAR: &str = "GLOSSARY_CLI_TEST_NEVER_SET";

    #[test]
    fn flag_beats_default() {
        assert_eq!(
            resolve_path(Some(PathBuf::from("in.txt")), UNSET_VAR, DEFAULT_SOURCE),
            PathBuf::from("in.txt")
        );
        assert_eq!(
            resolve_path(None, UNSET_VAR, DEFAULT_SOURCE),
            PathBuf::from(DEFAULT_SOURCE)
        );
    }

    #[test]
    fn explicit_section_and_mode_win() {
        assert_eq!(resolve_parse_options(Some(2)).section, 2);
        assert_eq!(resolve_load_mode(Some(LoadMode::Owned)), LoadMode::Owned);
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from([
            "glossary",
            "parse",
            "--input",
            "src.txt",
            "--load-mode",
            "owned",
            "--section",
            "4",
            "--validate",
        ])
        .expect("parse args");
        match cli.command {
            Commands::Parse {
                input,
                load_mode,
                section,
                validate,
                names_only,
                ..
            } => {
                assert_eq!(input, Some(PathBuf::from("src.txt")));
                assert_eq!(load_mode, Some(LoadMode::Owned));
                assert_eq!(section, Some(4));
                assert!(validate);
                assert!(!names_only);
            }
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Cli::try_parse_from(["glossary", "parse", "--load-mode", "disk"]).is_err());
    }

    #[test]
    fn switches_default_off() {
        let cli = Cli::try_parse_from(["glossary", "validate"]).expect("parse args");
        assert!(matches!(cli.command, Commands::Validate { names_only: false, .. }));

        let cli = Cli::try_parse_from(["glossary", "validate", "--names-only"]).expect("parse args");
        assert!(matches!(cli.command, Commands::Validate { names_only: true, .. }));
        assert!(Cli::try_parse_from(["glossary", "validate", "--names-only=maybe"]).is_err());
    }

    #[test]
    fn names_only_selects_legacy_scope() {
        assert_eq!(lookup_scope(true), LookupScope::NamesOnly);
        assert_eq!(lookup_scope(false), LookupScope::NamesAndAliases);
    }
}
