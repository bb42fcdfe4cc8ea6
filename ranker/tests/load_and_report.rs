use docrank::{build_report, demo, load_path, write_json, write_text, ReportOptions};
use docrank_core::analyze;
use docrank_core::tokenizer::{prepare_corpus, NormalizeOptions};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_directory_in_file_name_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.jsonl"), "{\"id\": \"x\", \"body\": \"dog sat\"}\n\n\"cat dog sat\"\n").unwrap();
    fs::write(dir.path().join("a.json"), r#"["cat sat", {"text": "lonely"}]"#).unwrap();
    fs::create_dir(dir.path().join("c")).unwrap();
    fs::write(dir.path().join("c").join("note.txt"), "Plain text file.").unwrap();

    let docs = load_path(dir.path()).unwrap();
    let texts: Vec<&str> = docs.iter().map(|d| d.text.as_str()).collect();
    assert_eq!(texts, vec!["cat sat", "lonely", "dog sat", "cat dog sat", "Plain text file."]);
    assert!(docs[0].id.ends_with("a.json#0"));
    assert_eq!(docs[2].id, "x");
    assert!(docs[3].id.ends_with("b.jsonl:3"));
    assert!(docs[4].id.ends_with("note.txt"));
}

#[test]
fn single_json_object_is_one_document() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("one.json");
    fs::write(&file, r#"{"id": "only", "body": "just this"}"#).unwrap();
    let docs = load_path(&file).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "only");
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_path(&dir.path().join("nope")).is_err());
}

#[test]
fn malformed_jsonl_reports_the_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bad.jsonl");
    fs::write(&file, "\"ok\"\n{not json}\n").unwrap();
    let err = load_path(&file).unwrap_err();
    assert!(format!("{err:#}").contains("bad.jsonl"));
}

#[test]
fn text_report_lists_documents_by_score() {
    let sources = vec![
        docrank::SourceDoc { id: "0".into(), text: "cat sat".into() },
        docrank::SourceDoc { id: "1".into(), text: "dog sat".into() },
        docrank::SourceDoc { id: "2".into(), text: "cat dog sat".into() },
    ];
    let corpus = prepare_corpus(sources.iter().map(|s| s.text.as_str()), &NormalizeOptions::default());
    let analysis = analyze(&corpus).unwrap();

    let report = build_report(&analysis, &sources, &ReportOptions { limit: Some(2), show_terms: Some(1) });
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].id, "2");
    assert_eq!(report[1].id, "0");

    let mut out = Vec::new();
    write_text(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("Document Score: 0.27"));
    assert!(lines[0].ends_with(r#"Document: ["cat", "dog", "sat"]"#));
    assert!(lines[1].starts_with("    cat: 0.13"));
    assert!(lines[2].ends_with(r#"Document: ["cat", "sat"]"#));
}

#[test]
fn json_report_round_trips_through_serde() {
    let sources = demo::documents();
    let corpus = prepare_corpus(sources.iter().map(|s| s.text.as_str()), &NormalizeOptions::default());
    let analysis = analyze(&corpus).unwrap();
    let report = build_report(&analysis, &sources, &ReportOptions::default());

    let mut out = Vec::new();
    write_json(&mut out, &report).unwrap();
    let json: Value = serde_json::from_slice(&out).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 6);
    assert_eq!(arr[0]["rank"], 1);
    assert!(arr[0].get("top_terms").is_none());
    let scores: Vec<f64> = arr.iter().map(|e| e["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}
