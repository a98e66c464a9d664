//! Path navigation with defaults.
//!
//! Every accessor on [`super::ResponseEnvelope`] resolves through these helpers
//! so the absence policy lives in one place: a missing key, a `null` value, or
//! a non-object intermediate all count as "absent".

use serde_json::{Map, Value};

/// Walk `path` from `root`. Returns `None` if any step is absent or `null`.
pub(crate) fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// First present value among several candidate paths (historic key spellings).
pub(crate) fn lookup_any<'a>(root: &'a Value, paths: &[&[&str]]) -> Option<&'a Value> {
    paths.iter().find_map(|path| lookup(root, path))
}

/// String at `path`; non-string values are treated as absent.
pub(crate) fn str_at<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(root, path).and_then(Value::as_str)
}

/// Flag that is only set by an explicit `true`.
pub(crate) fn flag_at(root: &Value, paths: &[&[&str]]) -> bool {
    matches!(lookup_any(root, paths), Some(Value::Bool(true)))
}

/// Flag that is only cleared by an explicit `false`.
pub(crate) fn optimistic_flag_at(root: &Value, paths: &[&[&str]]) -> bool {
    !matches!(lookup_any(root, paths), Some(Value::Bool(false)))
}

/// Array at `path`, or an empty slice.
pub(crate) fn array_at<'a>(root: &'a Value, path: &[&str]) -> &'a [Value] {
    lookup(root, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Object at `path`, if it is one.
pub(crate) fn object_at<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Map<String, Value>> {
    lookup(root, path).and_then(Value::as_object)
}

/// Render a JSON value as text: strings verbatim, everything else as JSON.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Short name of a JSON value's kind, for diagnostics.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested() {
        let v = json!({"data": {"meta": {"relations": [1, 2]}}});
        assert_eq!(lookup(&v, &["data", "meta", "relations"]), Some(&json!([1, 2])));
        assert_eq!(lookup(&v, &["data", "missing"]), None);
        assert_eq!(lookup(&v, &[]), Some(&v));
    }

    #[test]
    fn test_null_and_scalar_intermediates_are_absent() {
        let v = json!({"data": null, "message": "x"});
        assert_eq!(lookup(&v, &["data"]), None);
        assert_eq!(lookup(&v, &["data", "id"]), None);
        assert_eq!(lookup(&v, &["message", "id"]), None);
    }

    #[test]
    fn test_flags() {
        let v = json!({"a": true, "b": false, "c": "true"});
        assert!(flag_at(&v, &[&["a"]]));
        assert!(!flag_at(&v, &[&["b"]]));
        assert!(!flag_at(&v, &[&["c"]]));
        assert!(!flag_at(&v, &[&["missing"]]));

        assert!(optimistic_flag_at(&v, &[&["a"]]));
        assert!(!optimistic_flag_at(&v, &[&["b"]]));
        assert!(optimistic_flag_at(&v, &[&["c"]]));
        assert!(optimistic_flag_at(&v, &[&["missing"]]));
    }

    #[test]
    fn test_lookup_any_takes_first_present() {
        let v = json!({"modified-p": null, "modified": true});
        assert_eq!(
            lookup_any(&v, &[&["modified-p"], &["modified"]]),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_array_at_defaults_to_empty() {
        let v = json!({"facts": {"not": "an array"}});
        assert!(array_at(&v, &["facts"]).is_empty());
        assert!(array_at(&v, &["nothing"]).is_empty());
    }

    #[test]
    fn test_text_of() {
        assert_eq!(text_of(&json!("plain")), "plain");
        assert_eq!(text_of(&json!({"k": 1})), r#"{"k":1}"#);
    }
}
