use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn config(dir: &Path) -> FixtureConfig {
    FixtureConfig {
        dir: dir.to_path_buf(),
        filter: None,
        verbose: false,
        fail_fast: true,
    }
}

#[test]
fn canonical_json_sorts_keys() {
    let value: Value = serde_json::from_str(r#"{"type":"name","value":"a","index":0}"#).unwrap();
    assert_eq!(canonical_json(&value), r#"{"index":0,"type":"name","value":"a"}"#);
}

#[test]
fn lex_to_json_renders_tokens_and_errors() {
    assert_eq!(
        lex_to_json("a:").unwrap(),
        json!([{ "index": 0, "type": "name", "value": "a" }, { "index": 1, "type": ":" }])
    );
    assert_eq!(
        lex_to_json("?").unwrap(),
        json!({ "index": 0, "message": "Unrecognized source character" })
    );
}

#[test]
fn matching_fixture_passes_regardless_of_key_order() {
    let dir = tempdir().unwrap();
    write(dir.path(), "01-name.gql", "abc");
    write(dir.path(), "01-name.json", r#"[{"value":"abc","type":"name","index":0}]"#);
    let fixture = Fixture::new(dir.path(), "01-name.gql");
    assert_eq!(run_fixture(&fixture).unwrap(), FixtureOutcome::Passed);
}

#[test]
fn mismatch_reports_both_values() {
    let dir = tempdir().unwrap();
    write(dir.path(), "01-num.gql", "12");
    write(dir.path(), "01-num.json", r#"[{"index":0,"type":"int","value":13}]"#);
    let fixture = Fixture::new(dir.path(), "01-num.gql");
    assert_eq!(
        run_fixture(&fixture).unwrap(),
        FixtureOutcome::Failed {
            expected: json!([{ "index": 0, "type": "int", "value": 13 }]),
            actual: json!([{ "index": 0, "type": "int", "value": 12 }]),
        }
    );
}

#[test]
fn missing_json_is_skipped() {
    let dir = tempdir().unwrap();
    write(dir.path(), "01-alone.gql", "x");
    let fixture = Fixture::new(dir.path(), "01-alone.gql");
    assert_eq!(run_fixture(&fixture).unwrap(), FixtureOutcome::MissingExpected);
}

#[test]
fn malformed_expected_is_an_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "01-bad.gql", "x");
    write(dir.path(), "01-bad.json", "[{");
    let fixture = Fixture::new(dir.path(), "01-bad.gql");
    assert!(matches!(
        run_fixture(&fixture),
        Err(FixtureError::InvalidExpected { .. })
    ));
}

#[test]
fn run_all_stops_at_first_failure() {
    let dir = tempdir().unwrap();
    write(dir.path(), "01-ok.gql", "");
    write(dir.path(), "01-ok.json", "[]");
    write(dir.path(), "02-bad.gql", "x");
    write(dir.path(), "02-bad.json", "[]");
    write(dir.path(), "03-ok.gql", "");
    write(dir.path(), "03-ok.json", "[]");

    let summary = run_all(&config(dir.path())).unwrap();
    assert_eq!((summary.passed, summary.failed, summary.skipped), (1, 1, 0));
    assert_eq!(summary.results.last().unwrap().fixture.name, "02-bad.gql");

    let mut keep_going = config(dir.path());
    keep_going.fail_fast = false;
    let summary = run_all(&keep_going).unwrap();
    assert_eq!((summary.passed, summary.failed, summary.skipped), (2, 1, 0));
}

#[test]
fn run_all_applies_filter_and_skips_unpaired() {
    let dir = tempdir().unwrap();
    write(dir.path(), "01-keep.gql", "");
    write(dir.path(), "01-keep.json", "[]");
    write(dir.path(), "02-keep-unpaired.gql", "");
    write(dir.path(), "03-drop.gql", "x");
    write(dir.path(), "03-drop.json", "[]");

    let mut filtered = config(dir.path());
    filtered.filter = Some("keep".to_owned());
    let summary = run_all(&filtered).unwrap();
    assert_eq!((summary.passed, summary.failed, summary.skipped), (1, 0, 1));
    assert!(!summary.has_failures());
}
