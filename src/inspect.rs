//! Envelope summaries for the `minerva-inspect` binary.
//!
//! A [`Summary`] flattens every accessor of a [`ResponseEnvelope`] into one
//! serializable record so a response can be eyeballed from the command line.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::envelope::{import, MessageType, ModelsMetaReadOnly, Relation, ShexViolation};
use crate::types::{InspectConfig, ModelId, PacketId, Result, UserId};
use crate::ResponseEnvelope;

/// Collection sizes of the `data` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub facts: usize,
    pub properties: usize,
    pub individuals: usize,
    pub inferred_individuals: usize,
    pub annotations: usize,
    pub evidence: usize,
}

/// Flattened view of one envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub okay: bool,
    pub message_type: Option<String>,
    pub message_kind: Option<MessageType>,
    pub message: Option<String>,
    pub commentary: Option<String>,
    pub packet_id: Option<PacketId>,
    pub user_id: Option<UserId>,
    pub intention: Option<String>,
    pub signal: Option<String>,
    pub reasoned: bool,
    pub groups: Option<Vec<String>>,
    pub model_id: Option<ModelId>,
    pub inconsistent: bool,
    pub modified: bool,
    pub has_undo: bool,
    pub has_redo: bool,
    pub valid: bool,
    pub valid_owl: bool,
    pub valid_shex: bool,
    pub shex_violations: Vec<ShexViolation>,
    pub relations: Vec<Relation>,
    pub counts: Counts,
    pub models_meta: ModelsMetaReadOnly,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl Summary {
    pub fn from_envelope(env: &ResponseEnvelope, config: &InspectConfig) -> Self {
        let owned = |s: Option<&str>| s.map(str::to_string);
        Self {
            okay: env.okay(),
            message_type: owned(env.message_type()),
            message_kind: env.message_kind(),
            message: owned(env.message()),
            commentary: owned(env.commentary()),
            packet_id: typed_id(env.packet_id(), PacketId::from_string),
            user_id: typed_id(env.user_id(), UserId::from_string),
            intention: owned(env.intention()),
            signal: owned(env.signal()),
            reasoned: env.reasoner_p(),
            groups: env
                .groups()
                .map(|groups| groups.into_iter().map(str::to_string).collect()),
            model_id: typed_id(env.model_id(), ModelId::from_string),
            inconsistent: env.inconsistent_p(),
            modified: env.modified_p(),
            has_undo: env.has_undo_p(),
            has_redo: env.has_redo_p(),
            valid: env.valid_p(),
            valid_owl: env.valid_owl_p(),
            valid_shex: env.valid_shex_p(),
            shex_violations: env.shex_violations(),
            relations: env.relations(),
            counts: Counts {
                facts: env.facts().len(),
                properties: env.properties().len(),
                individuals: env.individuals().len(),
                inferred_individuals: env.inferred_individuals().len(),
                annotations: env.annotations().len(),
                evidence: env.evidence().len(),
            },
            models_meta: env.models_meta_read_only(),
            raw: config.include_raw.then(|| env.raw().clone()),
        }
    }

    /// Render as JSON text.
    pub fn render(&self, config: &InspectConfig) -> Result<String> {
        let text = if config.pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }
}

/// Empty ids are treated as absent.
fn typed_id<T>(
    value: Option<&str>,
    build: fn(String) -> std::result::Result<T, &'static str>,
) -> Option<T> {
    value.and_then(|s| build(s.to_string()).ok())
}

/// Load an envelope from a file, or from stdin when `path` is `-`.
pub fn load_path(path: &Path) -> Result<ResponseEnvelope> {
    if path == Path::new("-") {
        let stdin = std::io::stdin();
        return import::from_reader(stdin.lock());
    }
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read response payload");
    import::from_json(&bytes)
}
