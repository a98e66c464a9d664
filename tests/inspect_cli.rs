//! Inspect integration tests — payload files, config files, rendered summaries.

use minerva_response::inspect::{load_path, Summary};
use minerva_response::types::InspectConfig;
use minerva_response::{Config, Error};
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper: write `contents` to a temp file that lives as long as the handle.
fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_summarize_model_response() {
    let payload = json!({
        "packet-id": "p-1",
        "uid": "http://orcid.org/0000-0002-1706-4196",
        "intention": "action",
        "signal": "merge",
        "message-type": "success",
        "message": "success: 3",
        "is-reasoned": true,
        "provided-by": ["http://geneontology.org"],
        "data": {
            "id": "gomodel:5b91dbd100000456",
            "individuals": [{"id": "ind-1"}, {"id": "ind-2"}],
            "facts": [{"subject": "ind-1", "property": "RO:0002333", "object": "ind-2"}],
            "modified-p": true,
            "undo": ["u-1"],
            "meta": {
                "models-meta": {
                    "gomodel:5b91dbd100000456": {"modified-p": true, "title": "kinase"}
                }
            }
        }
    });
    let file = temp_file(&payload.to_string());

    let envelope = load_path(file.path()).unwrap();
    let summary = Summary::from_envelope(&envelope, &InspectConfig::default());

    assert!(summary.okay);
    assert!(summary.reasoned);
    assert!(summary.modified);
    assert!(summary.has_undo);
    assert!(!summary.has_redo);
    assert_eq!(summary.counts.individuals, 2);
    assert_eq!(summary.counts.facts, 1);
    assert_eq!(
        summary.groups,
        Some(vec!["http://geneontology.org".to_string()])
    );
    assert!(summary.models_meta.modified_p("gomodel:5b91dbd100000456"));
}

#[test]
fn test_load_rejects_scalar_payload() {
    let file = temp_file("\"just a string\"");
    let err = load_path(file.path()).unwrap_err();
    assert!(matches!(err, Error::Construction { found: "string" }));
}

#[test]
fn test_load_reports_missing_file_and_bad_json() {
    let err = load_path(std::path::Path::new("/nonexistent/response.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    let file = temp_file("{\"message-type\": ");
    let err = load_path(file.path()).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_config_file_drives_rendering() {
    let config_file = temp_file(r#"{"inspect": {"pretty": false, "include_raw": true}}"#);
    let config = Config::from_json_file(config_file.path()).unwrap();
    assert_eq!(config.observability.log_level, "info");

    let payload = temp_file(r#"{"message-type": "error", "message": "Exception!"}"#);
    let envelope = load_path(payload.path()).unwrap();
    let text = Summary::from_envelope(&envelope, &config.inspect)
        .render(&config.inspect)
        .unwrap();

    assert_eq!(text.lines().count(), 1);
    let rendered: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(rendered["okay"], json!(true));
    assert_eq!(rendered["message_type"], json!("error"));
    assert_eq!(rendered["raw"]["message"], json!("Exception!"));
}

#[test]
fn test_config_file_with_bad_level_is_rejected() {
    let config_file = temp_file(r#"{"observability": {"log_level": "chatty"}}"#);
    let err = Config::from_json_file(config_file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
