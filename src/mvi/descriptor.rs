//! Untyped event descriptors.
//!
//! Outer layers that only speak strings and JSON submit an
//! [`EventDescriptor`]. It is decoded into the reducer's closed event type
//! before it can reach the transition function.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// An event as a `kind` tag plus an optional payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// Errors produced when a descriptor does not match any known event.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Unrecognized event '{kind}': {source}")]
    Unrecognized {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

impl EventDescriptor {
    /// Descriptor without a payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Descriptor carrying a payload.
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    /// Decode into a typed event.
    ///
    /// The target type must deserialize from the adjacently tagged form
    /// `{"kind": ..., "payload": ...}`.
    pub fn decode<E: DeserializeOwned>(&self) -> Result<E, DescriptorError> {
        let mut object = Map::new();
        object.insert("kind".to_string(), Value::String(self.kind.clone()));
        if let Some(payload) = &self.payload {
            object.insert("payload".to_string(), payload.clone());
        }

        serde_json::from_value(Value::Object(object)).map_err(|source| {
            DescriptorError::Unrecognized {
                kind: self.kind.clone(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
    enum Sample {
        Ping,
        Echo(String),
    }

    #[test]
    fn decodes_unit_kind() {
        let event: Sample = EventDescriptor::new("PING").decode().unwrap();
        assert_eq!(event, Sample::Ping);
    }

    #[test]
    fn decodes_payload_kind() {
        let event: Sample = EventDescriptor::with_payload("ECHO", Value::from("hi"))
            .decode()
            .unwrap();
        assert_eq!(event, Sample::Echo("hi".to_string()));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = EventDescriptor::new("VIDEO_LOADING")
            .decode::<Sample>()
            .unwrap_err();
        match err {
            DescriptorError::Unrecognized { kind, .. } => assert_eq!(kind, "VIDEO_LOADING"),
        }
    }

    #[test]
    fn missing_payload_is_rejected() {
        assert!(EventDescriptor::new("ECHO").decode::<Sample>().is_err());
    }
}
