use std::fs;
use std::path::Path;

use clap::Parser;
use glossary_cli::{Cli, run};

const SOURCE: &str = "\
3.1
full name (FN)
short form
1. Definition with reference [REF1]
 2. Another definition [REF2]
EXAMPLE: Example text

3.2
test word
1. This is a test
cf. full name
cf. short form
cf. nowhere
Note 1 to entry: Note text
";

fn run_args(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).expect("parse args");
    let mut out = Vec::new();
    run(cli, &mut out).expect("run command");
    String::from_utf8(out).expect("utf8 output")
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

#[test]
fn parse_writes_records_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.txt");
    let records = dir.path().join("out").join("records.json");
    fs::write(&source, SOURCE).unwrap();

    let report = run_args(&[
        "glossary",
        "parse",
        "--input",
        arg(&source),
        "--output",
        arg(&records),
        "--validate",
    ]);
    assert_eq!(
        report,
        "Word 3.2 has invalid confer reference: nowhere\nFound 1 invalid confer references\n"
    );

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&records).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["aliases"], serde_json::json!(["short form"]));
    assert_eq!(
        json[0]["definitions"],
        serde_json::json!([
            { "text": "Definition with reference", "reference": "REF1" },
            { "text": "Another definition", "reference": "REF2" },
        ])
    );
    assert!(json[1].get("aliases").is_none());
}

#[test]
fn validate_names_only_reads_records() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.txt");
    let records = dir.path().join("records.json");
    fs::write(&source, SOURCE).unwrap();
    run_args(&[
        "glossary",
        "parse",
        "--input",
        arg(&source),
        "--output",
        arg(&records),
        "--load-mode",
        "owned",
    ]);

    let report = run_args(&[
        "glossary",
        "validate",
        "--input",
        arg(&records),
        "--names-only",
    ]);
    assert_eq!(
        report.lines().collect::<Vec<_>>(),
        vec![
            "Word 3.2 has invalid confer reference: short form",
            "Word 3.2 has invalid confer reference: nowhere",
            "Found 2 invalid confer references",
        ]
    );
}

#[test]
fn extract_and_translate_round() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.txt");
    let records = dir.path().join("records.json");
    let texts = dir.path().join("texts.json");
    let template = dir.path().join("template.csv");
    let table = dir.path().join("translations.csv");
    let translated = dir.path().join("translated.json");
    fs::write(&source, SOURCE).unwrap();

    run_args(&[
        "glossary",
        "parse",
        "--input",
        arg(&source),
        "--output",
        arg(&records),
    ]);
    run_args(&[
        "glossary",
        "extract",
        "--input",
        arg(&records),
        "--output",
        arg(&texts),
        "--template",
        arg(&template),
    ]);

    let extracted: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&texts).unwrap()).unwrap();
    assert_eq!(
        extracted,
        serde_json::json!({
            "texts": [
                "Another definition",
                "Definition with reference",
                "Example text",
                "Note text",
                "This is a test",
            ]
        })
    );
    assert!(
        fs::read_to_string(&template)
            .unwrap()
            .starts_with("text_en,text_ja\nAnother definition,\n")
    );

    fs::write(
        &table,
        "text_en,text_ja\nThis is a test,これはテストです\nExample text,例文です\n",
    )
    .unwrap();
    run_args(&[
        "glossary",
        "translate",
        "--input",
        arg(&records),
        "--translations",
        arg(&table),
        "--output",
        arg(&translated),
    ]);

    let merged: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&translated).unwrap()).unwrap();
    assert_eq!(merged[0]["exampleJa"], "例文です");
    assert!(merged[0]["definitions"][0].get("textJa").is_none());
    assert_eq!(merged[1]["definitions"][0]["textJa"], "これはテストです");
    assert!(merged[1].get("noteJa").is_none());
    assert_eq!(merged[1]["note"], "Note text");
}

#[test]
fn unreadable_source_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let records = dir.path().join("records.json");
    let cli = Cli::try_parse_from([
        "glossary",
        "parse",
        "--input",
        arg(&missing),
        "--output",
        arg(&records),
    ])
    .unwrap();
    let mut out = Vec::new();
    let err = run(cli, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("missing.txt"));
    assert!(!records.exists());
}
