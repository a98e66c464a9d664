//! Envelope import from JSON text.
//!
//! Decoding is the caller's concern in the general case; these helpers cover
//! the common path of building an envelope straight from a response body.

use std::str::FromStr;

use super::ResponseEnvelope;
use crate::types::{Error, Result};

/// Decode a response body and wrap it.
///
/// Fails with [`Error::Serialization`] when the bytes are not JSON and with
/// [`Error::Construction`] when the JSON is not an object or array.
pub fn from_json(bytes: &[u8]) -> Result<ResponseEnvelope> {
    let raw: serde_json::Value = serde_json::from_slice(bytes)?;
    ResponseEnvelope::new(raw)
}

/// Read a response body from any reader and wrap it.
pub fn from_reader<R: std::io::Read>(reader: R) -> Result<ResponseEnvelope> {
    let raw: serde_json::Value = serde_json::from_reader(reader)?;
    ResponseEnvelope::new(raw)
}

impl FromStr for ResponseEnvelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        from_json(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_object() {
        let env = from_json(br#"{"message-type":"success","message":"success: 0"}"#).unwrap();
        assert_eq!(env.message(), Some("success: 0"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = from_json(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_str_rejects_scalar_json() {
        let err = "null".parse::<ResponseEnvelope>().unwrap_err();
        assert!(err.is_construction());
    }

    #[test]
    fn test_from_reader() {
        let env = from_reader(&b"[{\"uid\":\"foo\"}]"[..]).unwrap();
        assert_eq!(env.user_id(), Some("foo"));
    }
}
