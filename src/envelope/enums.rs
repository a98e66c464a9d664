//! Classifiers over the free-form wire strings of an envelope.
//!
//! The service sends these as open strings; unrecognized values map to
//! `Unknown` rather than failing.

use serde::{Deserialize, Serialize};

/// Outcome the operation reported (`message-type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Success,
    Error,
    Unknown,
}

impl MessageType {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "success" => MessageType::Success,
            "error" => MessageType::Error,
            _ => MessageType::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Success => "success",
            MessageType::Error => "error",
            MessageType::Unknown => "unknown",
        }
    }
}

/// Purpose the caller declared for the originating request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intention {
    Information,
    Query,
    Action,
    Unknown,
}

impl Intention {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "information" => Intention::Information,
            "query" => Intention::Query,
            "action" => Intention::Action,
            _ => Intention::Unknown,
        }
    }

    /// Whether the request asked to change a model.
    pub fn is_action(self) -> bool {
        matches!(self, Intention::Action)
    }
}

/// Follow-up the server asks clients to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Rebuild,
    Merge,
    Meta,
    Unknown,
}

impl Signal {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "rebuild" => Signal::Rebuild,
            "merge" => Signal::Merge,
            "meta" => Signal::Meta,
            _ => Signal::Unknown,
        }
    }

    /// Whether clients must redraw the whole model.
    pub fn requires_rebuild(self) -> bool {
        matches!(self, Signal::Rebuild)
    }
}
