//! ResponseEnvelope - read-only accessors over one service response.
//!
//! The model-editing service answers every request with a loosely shaped JSON
//! object whose fields vary by operation kind and by server version. The
//! envelope keeps that payload untouched and exposes a stable, typed surface
//! over it:
//!
//! - **Header**: message type, message, commentary, packet/user ids, intention, signal
//! - **Model state**: model id, consistency, modified, undo/redo availability
//! - **Validation**: overall / OWL / ShEx conformance and ShEx violations
//! - **Collections**: facts, properties, individuals, relations, evidence
//! - **Per-model metadata**: a live borrowed view and a detached owned snapshot
//!
//! Accessors are total. A missing key, a `null`, or a value of the wrong JSON
//! kind resolves to the documented default; only construction can fail.
//!
//! `okay()` answers "is this a readable envelope", not "did the operation
//! succeed": a server-side `message-type: "error"` still reports `okay()`.
//! Inspect [`ResponseEnvelope::message_type`] for operation-level outcome.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::types::{Error, Result};

pub mod enums;
pub mod import;
pub mod items;
pub mod meta;
mod path;

pub use enums::*;
pub use items::{Relation, ShexViolation};
pub use meta::{ModelMeta, ModelsMeta, ModelsMetaReadOnly};

use path::{
    array_at, flag_at, kind_name, lookup, lookup_any, object_at, optimistic_flag_at, str_at,
};

// =============================================================================
// Wire paths
// =============================================================================

const DATA: &str = "data";
const VALIDATION: &[&str] = &[DATA, "validation-results"];

/// Immutable, shareable wrapper around one decoded service response.
///
/// Cloning is cheap: clones share the same payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponseEnvelope {
    raw: Arc<Value>,
}

impl ResponseEnvelope {
    /// Wrap an already-decoded payload.
    ///
    /// Accepts any JSON object or array. Fails with [`Error::Construction`]
    /// when the payload is `null`, a boolean, a number or a string.
    pub fn new(raw: impl Into<Arc<Value>>) -> Result<Self> {
        let raw = raw.into();
        match raw.as_ref() {
            Value::Object(_) | Value::Array(_) => {}
            other => return Err(Error::construction(kind_name(other))),
        }
        tracing::trace!(shape = kind_name(&raw), "response envelope constructed");
        Ok(Self { raw })
    }

    /// The payload exactly as supplied.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Shared handle to the payload.
    pub fn raw_arc(&self) -> Arc<Value> {
        Arc::clone(&self.raw)
    }

    /// Navigation root: the payload object, or the sole object of a
    /// one-element array. Any other array has no named fields.
    fn root(&self) -> &Value {
        match self.raw.as_ref() {
            Value::Array(items) if items.len() == 1 && items[0].is_object() => &items[0],
            other => other,
        }
    }

    fn data_at(&self, path: &[&str]) -> Option<&Value> {
        let data = lookup(self.root(), &[DATA])?;
        lookup(data, path)
    }

    fn data_array(&self, path: &[&str]) -> &[Value] {
        match lookup(self.root(), &[DATA]) {
            Some(data) => array_at(data, path),
            None => &[],
        }
    }

    // =========================================================================
    // Header
    // =========================================================================

    /// Whether the payload is readable as an envelope at all.
    ///
    /// Independent of the operation outcome: `message-type: "error"` still
    /// yields `true`.
    pub fn okay(&self) -> bool {
        self.root().is_object()
    }

    /// Raw `message-type` ("success", "error", ...).
    pub fn message_type(&self) -> Option<&str> {
        str_at(self.root(), &["message-type"])
    }

    /// Classified `message-type`.
    pub fn message_kind(&self) -> Option<MessageType> {
        self.message_type().map(MessageType::from_wire)
    }

    pub fn message(&self) -> Option<&str> {
        str_at(self.root(), &["message"])
    }

    pub fn commentary(&self) -> Option<&str> {
        str_at(self.root(), &["commentary"])
    }

    pub fn packet_id(&self) -> Option<&str> {
        str_at(self.root(), &["packet-id"])
    }

    pub fn user_id(&self) -> Option<&str> {
        str_at(self.root(), &["uid"])
    }

    pub fn intention(&self) -> Option<&str> {
        str_at(self.root(), &["intention"])
    }

    pub fn intention_kind(&self) -> Option<Intention> {
        self.intention().map(Intention::from_wire)
    }

    pub fn signal(&self) -> Option<&str> {
        str_at(self.root(), &["signal"])
    }

    pub fn signal_kind(&self) -> Option<Signal> {
        self.signal().map(Signal::from_wire)
    }

    /// Whether the reasoner ran for this response.
    pub fn reasoner_p(&self) -> bool {
        flag_at(self.root(), &[&["is-reasoned"]])
    }

    /// Groups the request was made on behalf of. `provided-by` is the older
    /// spelling of the same field.
    pub fn groups(&self) -> Option<Vec<&str>> {
        self.group_list()
    }

    /// Alias of [`ResponseEnvelope::groups`].
    pub fn provided_by(&self) -> Option<Vec<&str>> {
        self.group_list()
    }

    fn group_list(&self) -> Option<Vec<&str>> {
        match lookup_any(self.root(), &[&["provided-by"], &["groups"]])? {
            Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
            Value::String(s) => Some(vec![s.as_str()]),
            _ => None,
        }
    }

    // =========================================================================
    // Model state
    // =========================================================================

    /// The untyped `data` section.
    pub fn data(&self) -> Option<&Value> {
        lookup(self.root(), &[DATA])
    }

    pub fn model_id(&self) -> Option<&str> {
        self.data_at(&["id"]).and_then(Value::as_str)
    }

    pub fn inconsistent_p(&self) -> bool {
        flag_at(self.root(), &[&[DATA, "inconsistent-p"], &[DATA, "inconsistent"]])
    }

    pub fn modified_p(&self) -> bool {
        flag_at(self.root(), &[&[DATA, "modified-p"], &[DATA, "modified"]])
    }

    /// Whether the service holds undo history for this model.
    pub fn has_undo_p(&self) -> bool {
        available(self.data_at(&["undo"]))
    }

    /// Whether the service holds redo history for this model.
    pub fn has_redo_p(&self) -> bool {
        available(self.data_at(&["redo"]))
    }

    /// Undo history entries, when sent as a list.
    pub fn undo_list(&self) -> &[Value] {
        self.data_array(&["undo"])
    }

    /// Redo history entries, when sent as a list.
    pub fn redo_list(&self) -> &[Value] {
        self.data_array(&["redo"])
    }

    /// Serialized model text from an export request.
    pub fn export_model(&self) -> Option<&str> {
        self.data_at(&["export-model"]).and_then(Value::as_str)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Overall conformance. Only an explicit `false` makes a model invalid.
    pub fn valid_p(&self) -> bool {
        optimistic_flag_at(self.root(), &[&[DATA, "validation-results", "is-conformant"]])
    }

    pub fn valid_owl_p(&self) -> bool {
        optimistic_flag_at(
            self.root(),
            &[&[DATA, "validation-results", "owl-validation", "is-conformant"]],
        )
    }

    pub fn valid_shex_p(&self) -> bool {
        optimistic_flag_at(
            self.root(),
            &[&[DATA, "validation-results", "shex-validation", "is-conformant"]],
        )
    }

    /// ShEx violations in source order, without de-duplication.
    pub fn shex_violations(&self) -> Vec<ShexViolation> {
        let Some(report) = lookup(self.root(), VALIDATION) else {
            return Vec::new();
        };
        array_at(report, &["shex-validation", "violations"])
            .iter()
            .map(ShexViolation::from_value)
            .collect()
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn facts(&self) -> &[Value] {
        self.data_array(&["facts"])
    }

    pub fn properties(&self) -> &[Value] {
        self.data_array(&["properties"])
    }

    pub fn individuals(&self) -> &[Value] {
        self.data_array(&["individuals"])
    }

    /// Individuals as inferred by the reasoner.
    pub fn inferred_individuals(&self) -> &[Value] {
        self.data_array(&["individuals-i"])
    }

    /// Model-level annotations.
    pub fn annotations(&self) -> &[Value] {
        self.data_array(&["annotations"])
    }

    /// Relations from `data.meta.relations`, in source order.
    pub fn relations(&self) -> Vec<Relation> {
        self.data_array(&["meta", "relations"])
            .iter()
            .map(Relation::from_value)
            .collect()
    }

    /// Evidence items from `data.meta.evidence`.
    pub fn evidence(&self) -> &[Value] {
        self.data_array(&["meta", "evidence"])
    }

    // =========================================================================
    // Per-model metadata
    // =========================================================================

    /// Live view of `data.meta.models-meta`, borrowed from the payload.
    pub fn models_meta(&self) -> ModelsMeta<'_> {
        ModelsMeta::new(object_at(self.root(), &[DATA, "meta", "models-meta"]))
    }

    /// Detached deep copy of [`ResponseEnvelope::models_meta`], rebuilt on every call.
    pub fn models_meta_read_only(&self) -> ModelsMetaReadOnly {
        self.models_meta().to_read_only()
    }

    /// Metadata for one model id.
    pub fn model_meta(&self, id: &str) -> Option<ModelMeta<'_>> {
        self.models_meta().get(id)
    }
}

impl TryFrom<Value> for ResponseEnvelope {
    type Error = Error;

    fn try_from(raw: Value) -> Result<Self> {
        Self::new(raw)
    }
}

/// Undo/redo availability: `true`, or a non-empty history list.
fn available(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Array(items)) => !items.is_empty(),
        _ => false,
    }
}
