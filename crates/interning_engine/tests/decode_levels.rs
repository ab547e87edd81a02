use std::fs;

use interning_core::Internship;
use interning_engine::{decode_internships, LevelsTable};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_fields_decode_as_empty() {
    let internships = decode_internships(br#"[{"company": "Acme"}]"#).unwrap();
    assert_eq!(
        internships,
        vec![Internship {
            company: "Acme".to_string(),
            ..Internship::default()
        }]
    );
}

#[test]
fn unknown_fields_are_ignored_and_bom_is_stripped() {
    let body = "\u{FEFF}[{\"company\": \"Acme\", \"description\": \"SWE\", \"link\": \"http://a\", \"locations\": [\"NY\", \"Remote\"], \"season\": \"Summer\"}]";
    let internships = decode_internships(body.as_bytes()).unwrap();
    assert_eq!(internships[0].locations, vec!["NY", "Remote"]);
    assert_eq!(internships[0].link, "http://a");
}

#[test]
fn non_array_body_is_an_error() {
    assert!(decode_internships(b"{\"company\": \"Acme\"}").is_err());
}

#[test]
fn levels_table_looks_up_by_exact_name() {
    let table = LevelsTable::from_json(
        r#"{"Acme": "https://www.levels.fyi/companies/acme", "Blank": ""}"#,
    )
    .unwrap();

    assert_eq!(
        table.link("Acme"),
        Some("https://www.levels.fyi/companies/acme")
    );
    assert_eq!(table.link("acme"), None);
    assert_eq!(table.link("Blank"), None);
    assert_eq!(table.len(), 2);
}

#[test]
fn levels_table_loads_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("levels.json");
    fs::write(&path, r#"{"Globex": "https://example.com/globex"}"#).unwrap();

    let table = LevelsTable::load(&path).unwrap();
    assert_eq!(table.link("Globex"), Some("https://example.com/globex"));
    assert!(LevelsTable::load(&temp.path().join("missing.json")).is_err());
}
