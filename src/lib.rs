//! # Minerva Response - read-only accessors over model-editing service replies
//!
//! Wraps one decoded JSON response from the Minerva model-editing service and
//! exposes a stable, typed API over fields whose presence and nesting vary by
//! response kind (error, success, query meta, model mutation, validation
//! report, bulk dump).
//!
//! ## Flow
//!
//! ```text
//!   response body ──decode──▶ serde_json::Value ──▶ ResponseEnvelope
//!                                                     ├── header accessors
//!                                                     ├── model state / validation
//!                                                     ├── collections (always slices)
//!                                                     └── models_meta / models_meta_read_only
//! ```
//!
//! The envelope never mutates or re-validates the payload. Absence is never an
//! error; only a payload that is not an object or array fails construction.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod envelope;
pub mod inspect;
pub mod types;

// Internal utilities
pub mod observability;

pub use envelope::ResponseEnvelope;
pub use types::{Config, Error, Result};
