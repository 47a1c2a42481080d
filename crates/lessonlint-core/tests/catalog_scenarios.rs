//! Integration tests: load catalogs from disk and validate them end to end.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use lessonlint_core::{load_catalog, validate_catalog, CatalogError};
use proptest::prelude::*;
use serde_json::{json, Value};

fn write_catalog(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn lesson(id: &str, grade: &str, strand: &str, variant: &str) -> Value {
    json!({
        "id": id,
        "grade": grade,
        "strandID": strand,
        "variant": variant,
        "difficulty": "emerging",
        "objectives": ["identify place value"],
        "hints": ["use base-ten blocks"],
        "scaffolds": ["worked example"],
        "masteryRule": { "scoreThreshold": 0.8, "minimumItems": 3 },
        "items": [
            { "hints": ["look at the tens digit"], "scaffolds": ["place value chart"] }
        ]
    })
}

#[test]
fn fully_populated_strand_passes() {
    let dir = tempfile::tempdir().unwrap();
    let body = json!({
        "lessons": [
            lesson("g3-s1-p", "3", "S1", "practice"),
            lesson("g3-s1-c", "3", "S1", "challenge"),
            lesson("g3-s1-r", "3", "S1", "remediation"),
        ]
    });
    let path = write_catalog(dir.path(), "curriculum.json", &body.to_string());

    let catalog = load_catalog(&path).unwrap();
    assert!(validate_catalog(&catalog).is_empty());
    assert_eq!(catalog.lesson_count(), 3);
    assert_eq!(catalog.grades().into_iter().collect::<Vec<_>>(), ["3"]);
}

#[test]
fn quiz_variant_is_named_once_and_breaks_coverage() {
    let dir = tempfile::tempdir().unwrap();
    let body = json!({
        "lessons": [
            lesson("g3-s1-p", "3", "S1", "practice"),
            lesson("g3-s1-c", "3", "S1", "challenge"),
            lesson("g3-s1-r", "3", "S1", "remediation"),
            lesson("g3-s1-q", "3", "S1", "quiz"),
        ]
    });
    let path = write_catalog(dir.path(), "curriculum.json", &body.to_string());

    let violations = validate_catalog(&load_catalog(&path).unwrap());
    let naming_quiz: Vec<&str> = violations.iter().filter(|m| m.contains("quiz")).collect();
    assert_eq!(naming_quiz.len(), 1);
    assert!(naming_quiz[0].contains("[challenge, practice, remediation]"));
    assert_eq!(
        violations.into_inner(),
        [
            "g3-s1-q: variant 'quiz' is not one of [challenge, practice, remediation]",
            "3/S1 missing lesson variants: ",
        ]
    );
}

#[test]
fn missing_remediation_names_the_gap() {
    let dir = tempfile::tempdir().unwrap();
    let body = json!({
        "lessons": [
            lesson("g3-s1-p", "3", "S1", "practice"),
            lesson("g3-s1-c", "3", "S1", "challenge"),
        ]
    });
    let path = write_catalog(dir.path(), "curriculum.json", &body.to_string());

    let violations = validate_catalog(&load_catalog(&path).unwrap()).into_inner();
    assert_eq!(violations, ["3/S1 missing lesson variants: remediation"]);
}

#[test]
fn numeric_identifiers_load_and_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        dir.path(),
        "curriculum.json",
        r#"{"lessons": [{"id": 7, "grade": 3, "strandID": "S1"}]}"#,
    );

    let catalog = load_catalog(&path).unwrap();
    let violations = validate_catalog(&catalog);
    assert!(violations.iter().all(|m| m.starts_with("7: ") || m.starts_with("3/S1 ")));
    assert!(violations
        .iter()
        .any(|m| m == "3/S1 missing lesson variants: challenge, practice, remediation"));
}

#[test]
fn malformed_file_is_fatal_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "curriculum.json", "lessons = [1, 2");

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidJson { .. }), "got: {err}");
    let message = err.to_string();
    assert!(message.contains(&path.display().to_string()));
    assert!(message.contains("line 1"), "missing parser diagnostic: {message}");
}

#[test]
fn missing_file_is_fatal_and_distinct_from_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowhere.json");

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }), "got: {err}");
    let message = err.to_string();
    assert!(message.contains(&path.display().to_string()));
    assert!(!message.contains("not valid JSON"));
}

#[test]
fn validating_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let body = json!({
        "lessons": [
            { "id": "broken", "grade": "5", "strandID": "S4", "variant": "drill" },
            lesson("ok", "4", "S2", "practice"),
        ]
    });
    let path = write_catalog(dir.path(), "curriculum.json", &body.to_string());

    let first = validate_catalog(&load_catalog(&path).unwrap());
    let second = validate_catalog(&load_catalog(&path).unwrap());
    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

fn variant_tag() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("practice"),
        Just("challenge"),
        Just("remediation"),
        Just("quiz"),
    ]
}

fn strand_lessons() -> impl Strategy<Value = Vec<(&'static str, &'static str, &'static str)>> {
    prop::collection::vec(
        (
            prop_oneof![Just("3"), Just("4")],
            prop_oneof![Just("S1"), Just("S2")],
            variant_tag(),
        ),
        0..12,
    )
}

fn build(lessons: &[(&str, &str, &str)]) -> lessonlint_core::Catalog {
    let lessons: Vec<Value> = lessons
        .iter()
        .enumerate()
        .map(|(i, (grade, strand, variant))| lesson(&format!("L{i}"), grade, strand, variant))
        .collect();
    serde_json::from_value(json!({ "lessons": lessons })).unwrap()
}

proptest! {
    /// Validation is deterministic for any catalog.
    #[test]
    fn validation_is_deterministic(layout in strand_lessons()) {
        let catalog = build(&layout);
        prop_assert_eq!(validate_catalog(&catalog), validate_catalog(&catalog));
    }

    /// A group is flagged exactly when its variant tags differ from the
    /// required set, and the message lists exactly the absent required ones.
    #[test]
    fn coverage_reports_exactly_the_missing_variants(layout in strand_lessons()) {
        let catalog = build(&layout);
        let violations = validate_catalog(&catalog);
        let required = ["challenge", "practice", "remediation"];

        for grade in ["3", "4"] {
            for strand in ["S1", "S2"] {
                let present: BTreeSet<&str> = layout
                    .iter()
                    .filter(|(g, s, _)| *g == grade && *s == strand)
                    .map(|(_, _, v)| *v)
                    .collect();
                let prefix = format!("{grade}/{strand} missing lesson variants: ");
                let reported: Vec<&str> = violations
                    .iter()
                    .filter(|m| m.starts_with(&prefix))
                    .collect();

                if present.is_empty() || present == BTreeSet::from(required) {
                    prop_assert!(reported.is_empty(), "unexpected: {:?}", reported);
                    continue;
                }
                let missing: Vec<&str> = required
                    .into_iter()
                    .filter(|v| !present.contains(v))
                    .collect();
                prop_assert_eq!(reported.len(), 1);
                prop_assert_eq!(reported[0].to_string(), format!("{prefix}{}", missing.join(", ")));
            }
        }
    }

    /// Only unknown variant tags produce a per-lesson variant violation.
    #[test]
    fn only_unknown_variants_are_flagged(layout in strand_lessons()) {
        let catalog = build(&layout);
        let flagged = validate_catalog(&catalog)
            .iter()
            .filter(|m| m.contains(": variant '"))
            .count();
        let unknown = layout.iter().filter(|(_, _, v)| *v == "quiz").count();
        prop_assert_eq!(flagged, unknown);
    }
}
