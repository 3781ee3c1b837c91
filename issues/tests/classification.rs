use issues::{
    analyze_path, classify_records, ClassifierConfig, DecodeErrorPolicy, IssueTally, Record,
};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_export(dir: &Path, rows: &[(&str, &str, String)]) -> PathBuf {
    let path = dir.join("export_Activities.csv");
    let mut writer = csv::Writer::from_path(&path).unwrap();
    writer.write_record(["activityId", "type", "data"]).unwrap();
    for (id, kind, data) in rows {
        writer.write_record([*id, *kind, data.as_str()]).unwrap();
    }
    writer.flush().unwrap();
    path
}

fn inspection(id: &str, data: Value) -> Record {
    Record::new("INSPECTION", id, data.to_string())
}

fn assert_reconciled(tally: &IssueTally) {
    assert_eq!(
        tally.total_inspections,
        tally.decode_failures + tally.no_identified_issues + tally.fixed + tally.unfixed + tally.other
    );
    let category_sum: u64 = tally.unfixed_categories().iter().map(|c| c.count).sum();
    assert_eq!(category_sum, tally.unfixed);
}

#[test]
fn test_five_record_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_export(
        temp_dir.path(),
        &[
            ("1", "INSPECTION", json!({"identifiedIssues": false}).to_string()),
            ("2", "INSPECTION", json!({"identifiedIssues": false, "fixedIssues": true}).to_string()),
            ("3", "INSPECTION", json!({"identifiedIssues": true, "fixedIssues": true}).to_string()),
            (
                "4",
                "INSPECTION",
                json!({"identifiedIssues": true, "fixedIssues": "false", "list": [{"name": "Electrical"}]}).to_string(),
            ),
            ("5", "INSPECTION", json!({"identifiedIssues": true, "fixedIssues": "Replaced fuse"}).to_string()),
        ],
    );

    let (tally, stats) = analyze_path(&path, ClassifierConfig::default()).unwrap();

    assert_eq!(stats.rows_read, 5);
    assert_eq!(tally.total_inspections, 5);
    assert_eq!(tally.no_identified_issues, 2);
    assert_eq!(tally.fixed, 1);
    assert_eq!(tally.unfixed, 1);
    assert_eq!(tally.unfixed_in_category("Electrical"), 1);
    assert_eq!(tally.other, 1);

    let fuse = tally.other_value("Replaced fuse").unwrap();
    assert_eq!(fuse.count, 1);
    assert_eq!(fuse.examples.len(), 1);
    assert_eq!(fuse.examples[0].activity_id, "5");
    assert_reconciled(&tally);
}

#[test]
fn test_malformed_json_only_counts_as_inspection() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_export(
        temp_dir.path(),
        &[
            ("1", "INSPECTION", json!({"identifiedIssues": true, "fixedIssues": true}).to_string()),
            ("2", "INSPECTION", "{\"identifiedIssues\": tru".to_string()),
            ("3", "INSPECTION", json!({"identifiedIssues": true, "fixedIssues": false}).to_string()),
        ],
    );

    let (tally, _) = analyze_path(&path, ClassifierConfig::default()).unwrap();

    assert_eq!(tally.total_inspections, 3);
    assert_eq!(tally.decode_failures, 1);
    assert_eq!(tally.fixed, 1);
    assert_eq!(tally.unfixed, 1);
    assert_eq!(tally.other, 0);
    assert_eq!(tally.no_identified_issues, 0);
    assert_eq!(tally.skipped_records()[0].activity_id, "2");
    assert_reconciled(&tally);
}

#[test]
fn test_malformed_json_silent_policy_keeps_no_details() {
    let records = vec![Record::new("INSPECTION", "9", "")];
    let config = ClassifierConfig::default().with_decode_error_policy(DecodeErrorPolicy::SkipSilent);

    let tally = classify_records(&records, config);
    assert_eq!(tally.decode_failures, 1);
    assert!(tally.skipped_records().is_empty());
}

#[test]
fn test_long_other_value_truncated_to_exactly_100_chars() {
    let long = format!("{}{}", "a".repeat(100), "b".repeat(40));
    let records = vec![
        inspection("1", json!({"identifiedIssues": true, "fixedIssues": long})),
        inspection("2", json!({"identifiedIssues": true, "fixedIssues": format!("{}{}", "a".repeat(100), "c")})),
    ];

    let tally = classify_records(&records, ClassifierConfig::default());

    let key = "a".repeat(100);
    let entry = tally.other_value(&key).unwrap();
    // Both values share the same first 100 characters
    assert_eq!(entry.count, 2);
    assert_eq!(entry.value.chars().count(), 100);
    for example in &entry.examples {
        assert_eq!(example.value, key);
    }
}

#[test]
fn test_examples_never_exceed_three() {
    let records: Vec<Record> = (0..10)
        .map(|i| inspection(&i.to_string(), json!({"identifiedIssues": true, "fixedIssues": "Reset breaker"})))
        .collect();

    let tally = classify_records(&records, ClassifierConfig::default());
    let entry = tally.other_value("Reset breaker").unwrap();

    assert_eq!(entry.count, 10);
    assert_eq!(entry.examples.len(), 3);
    let ids: Vec<&str> = entry.examples.iter().map(|e| e.activity_id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
}

#[test]
fn test_boolean_like_forms() {
    let records = vec![
        inspection("1", json!({"identifiedIssues": true, "fixedIssues": true})),
        inspection("2", json!({"identifiedIssues": true, "fixedIssues": "true"})),
        inspection("3", json!({"identifiedIssues": true, "fixedIssues": false})),
        inspection("4", json!({"identifiedIssues": true, "fixedIssues": "false"})),
        inspection("5", json!({"identifiedIssues": true})),
        inspection("6", json!({"identifiedIssues": true, "fixedIssues": null})),
        inspection("7", json!({"identifiedIssues": true, "fixedIssues": {"parts": ["fuse"]}})),
    ];

    let tally = classify_records(&records, ClassifierConfig::default());

    assert_eq!(tally.fixed, 2);
    assert_eq!(tally.unfixed, 2);
    assert_eq!(tally.other, 3);
    assert_eq!(tally.other_value("null").unwrap().count, 2);
    assert_eq!(tally.other_value(r#"{"parts":["fuse"]}"#).unwrap().count, 1);
    assert_reconciled(&tally);
}

#[test]
fn test_other_record_types_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_export(
        temp_dir.path(),
        &[
            ("1", "MAINTENANCE", json!({"identifiedIssues": true, "fixedIssues": false}).to_string()),
            ("2", "VISIT", "not even json".to_string()),
        ],
    );

    let (tally, stats) = analyze_path(&path, ClassifierConfig::default()).unwrap();

    assert_eq!(stats.rows_read, 2);
    assert!(tally.is_empty());
    assert_eq!(tally.decode_failures, 0);
    assert!(tally.unfixed_categories().is_empty());
}

#[test]
fn test_unfixed_categories_sum_to_unfixed_total() {
    let records = vec![
        inspection("1", json!({"identifiedIssues": true, "fixedIssues": false, "list": [{"name": "Electrical"}]})),
        inspection("2", json!({"identifiedIssues": true, "fixedIssues": "false", "list": [{"name": "Plumbing"}, {"name": "Electrical"}]})),
        inspection("3", json!({"identifiedIssues": true, "fixedIssues": false, "list": [{"name": "Electrical"}]})),
        inspection("4", json!({"identifiedIssues": true, "fixedIssues": false, "list": [{"label": "Roof"}]})),
    ];

    let tally = classify_records(&records, ClassifierConfig::default());
    let order: Vec<(&str, u64)> = tally
        .unfixed_categories()
        .iter()
        .map(|c| (c.category.as_str(), c.count))
        .collect();

    assert_eq!(order, vec![("Electrical", 2), ("Plumbing", 1), ("Unknown", 1)]);
    assert_reconciled(&tally);
}
