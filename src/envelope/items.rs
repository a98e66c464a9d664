//! Typed items normalized out of the untyped `data` section.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::path::{flag_at, str_at, text_of};

/// One relation offered by the service in `data.meta.relations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relation {
    pub id: String,
    pub label: String,
    pub relevant: bool,
}

impl Relation {
    /// Normalize one relation item. Missing fields become `""` / `false`.
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: str_at(value, &["id"]).unwrap_or_default().to_string(),
            label: str_at(value, &["label"]).unwrap_or_default().to_string(),
            relevant: flag_at(value, &[&["relevant"]]),
        }
    }
}

/// A single shape-constraint failure of a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShexViolation {
    pub node: String,
    pub explanations: Vec<String>,
}

impl ShexViolation {
    /// Normalize one violation item.
    ///
    /// `node` falls back to the JSON text of a non-string node and to `""` when
    /// absent. Explanations keep source order; non-string explanations are
    /// rendered as JSON text and a lone string becomes a one-element list.
    pub fn from_value(value: &Value) -> Self {
        let node = match value.get("node") {
            None | Some(Value::Null) => String::new(),
            Some(node) => text_of(node),
        };
        let explanations = match value.get("explanations") {
            Some(Value::Array(items)) => items.iter().map(text_of).collect(),
            Some(Value::String(s)) => vec![s.clone()],
            None | Some(Value::Null) => Vec::new(),
            Some(other) => vec![text_of(other)],
        };
        Self { node, explanations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relation_from_full_item() {
        let r = Relation::from_value(&json!({
            "id": "BFO:0000050",
            "label": "part of",
            "relevant": true
        }));
        assert_eq!(r.id, "BFO:0000050");
        assert_eq!(r.label, "part of");
        assert!(r.relevant);
    }

    #[test]
    fn test_relation_from_sparse_item() {
        let r = Relation::from_value(&json!({"id": "RO:0002333"}));
        assert_eq!(r.id, "RO:0002333");
        assert_eq!(r.label, "");
        assert!(!r.relevant);

        let r = Relation::from_value(&json!("not an object"));
        assert_eq!(r.id, "");
    }

    #[test]
    fn test_violation_normalization() {
        let v = ShexViolation::from_value(&json!({
            "node": "gomodel:123/ind-1",
            "explanations": ["missing enabled_by", {"constraint": "x"}]
        }));
        assert_eq!(v.node, "gomodel:123/ind-1");
        assert_eq!(
            v.explanations,
            vec!["missing enabled_by".to_string(), r#"{"constraint":"x"}"#.to_string()]
        );
    }

    #[test]
    fn test_violation_without_fields() {
        let v = ShexViolation::from_value(&json!({}));
        assert_eq!(v.node, "");
        assert!(v.explanations.is_empty());

        let v = ShexViolation::from_value(&json!({"node": 7, "explanations": "only one"}));
        assert_eq!(v.node, "7");
        assert_eq!(v.explanations, vec!["only one".to_string()]);
    }
}
