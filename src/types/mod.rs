//! Core types for the response layer.
//!
//! - **IDs**: Strongly-typed identifiers (ModelId, PacketId, UserId)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Observability and inspection configuration

mod config;
mod errors;
mod ids;

pub use config::{Config, InspectConfig, ObservabilityConfig, ENV_LOG_FORMAT, ENV_LOG_LEVEL};
pub use errors::{Error, Result};
pub use ids::{ModelId, PacketId, UserId};
