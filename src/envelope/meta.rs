//! Per-model metadata views.
//!
//! [`ModelsMeta`] borrows straight into the envelope payload. [`ModelsMetaReadOnly`]
//! is an owned deep copy built fresh on every call; nothing done to it is
//! visible through the envelope, and nothing done to the envelope's source can
//! reach it.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::path::{flag_at, lookup};

const MODIFIED_PATHS: &[&[&str]] = &[&["modified-p"], &["modified"]];

/// Borrowed view of one model's metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMeta<'a> {
    id: &'a str,
    value: &'a Value,
}

impl<'a> ModelMeta<'a> {
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// The opaque metadata object as sent by the service.
    pub fn raw(&self) -> &'a Value {
        self.value
    }

    /// A single metadata field, if present and non-null.
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        lookup(self.value, &[key])
    }

    /// Whether the model has unsaved changes.
    pub fn modified_p(&self) -> bool {
        flag_at(self.value, MODIFIED_PATHS)
    }

    /// Deep copy of this entry, detached from the envelope.
    pub fn to_owned_value(&self) -> Value {
        self.value.clone()
    }
}

/// Live, borrowed mapping of model id to metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelsMeta<'a> {
    entries: Option<&'a Map<String, Value>>,
}

impl<'a> ModelsMeta<'a> {
    pub(crate) fn new(entries: Option<&'a Map<String, Value>>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.is_some_and(|m| m.contains_key(id))
    }

    pub fn get(&self, id: &str) -> Option<ModelMeta<'a>> {
        let (id, value) = self.entries?.get_key_value(id)?;
        Some(ModelMeta { id, value })
    }

    /// Model ids in mapping order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .into_iter()
            .flat_map(|m| m.keys().map(String::as_str))
    }

    pub fn iter(&self) -> impl Iterator<Item = ModelMeta<'a>> + 'a {
        self.entries
            .into_iter()
            .flat_map(|m| m.iter().map(|(id, value)| ModelMeta { id, value }))
    }

    /// Build an independent owned snapshot of every entry.
    pub fn to_read_only(&self) -> ModelsMetaReadOnly {
        let entries = self
            .iter()
            .map(|meta| (meta.id.to_string(), meta.to_owned_value()))
            .collect();
        ModelsMetaReadOnly { entries }
    }
}

/// Owned, detached copy of the per-model metadata mapping.
///
/// Holders may modify their copy freely; it shares no storage with the
/// envelope or with any other snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModelsMetaReadOnly {
    entries: BTreeMap<String, Value>,
}

impl ModelsMetaReadOnly {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Value> {
        self.entries.get_mut(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, meta: Value) -> Option<Value> {
        self.entries.insert(id.into(), meta)
    }

    pub fn remove(&mut self, id: &str) -> Option<Value> {
        self.entries.remove(id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Modified flag of one snapshot entry; `false` when absent.
    pub fn modified_p(&self, id: &str) -> bool {
        self.entries
            .get(id)
            .is_some_and(|meta| flag_at(meta, MODIFIED_PATHS))
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "gomodel:1": {"modified-p": true, "title": "one"},
            "gomodel:2": {"modified": false, "title": "two"}
        })
    }

    #[test]
    fn test_live_view_reads_entries() {
        let raw = sample();
        let view = ModelsMeta::new(raw.as_object());
        assert_eq!(view.len(), 2);
        assert!(view.contains("gomodel:1"));

        let one = view.get("gomodel:1").unwrap();
        assert_eq!(one.id(), "gomodel:1");
        assert!(one.modified_p());
        assert_eq!(one.field("title"), Some(&json!("one")));
        assert!(!view.get("gomodel:2").unwrap().modified_p());
        assert!(view.get("gomodel:3").is_none());
    }

    #[test]
    fn test_absent_section_is_empty() {
        let view = ModelsMeta::new(None);
        assert!(view.is_empty());
        assert_eq!(view.keys().count(), 0);
        assert!(view.to_read_only().is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let raw = sample();
        let view = ModelsMeta::new(raw.as_object());
        let mut snapshot = view.to_read_only();

        snapshot.get_mut("gomodel:1").unwrap()["title"] = json!("changed");
        snapshot.remove("gomodel:2");

        assert_eq!(view.get("gomodel:1").unwrap().field("title"), Some(&json!("one")));
        assert!(view.contains("gomodel:2"));
        assert_eq!(view.to_read_only().len(), 2);
    }

    #[test]
    fn test_snapshot_modified_p() {
        let raw = sample();
        let snapshot = ModelsMeta::new(raw.as_object()).to_read_only();
        assert!(snapshot.modified_p("gomodel:1"));
        assert!(!snapshot.modified_p("gomodel:2"));
        assert!(!snapshot.modified_p("missing"));
    }
}
