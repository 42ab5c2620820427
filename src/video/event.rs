//! Events accepted by the video cell.

use serde::{Deserialize, Serialize};

use crate::mvi::Event;
use crate::pipeline::IntentError;

use super::state::Video;
use super::INTENT_FAILED_MESSAGE;

/// Events that can be submitted to the video cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoEvent {
    /// A fetch went out.
    LoadingStarted,

    /// The fetch returned a record.
    LoadSucceeded(Video),

    /// The fetch failed.
    LoadFailed {
        /// Message for the view.
        message: String,
    },
}

impl Event for VideoEvent {
    fn kind(&self) -> &'static str {
        match self {
            Self::LoadingStarted => "LOADING_STARTED",
            Self::LoadSucceeded(_) => "LOAD_SUCCEEDED",
            Self::LoadFailed { .. } => "LOAD_FAILED",
        }
    }
}

impl From<IntentError> for VideoEvent {
    fn from(_: IntentError) -> Self {
        Self::LoadFailed {
            message: INTENT_FAILED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvi::EventDescriptor;
    use serde_json::json;

    #[test]
    fn kind_matches_wire_tag() {
        let event = VideoEvent::LoadFailed {
            message: "x".into(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["kind"], event.kind());
    }

    #[test]
    fn decodes_from_descriptor() {
        let event: VideoEvent = EventDescriptor::with_payload(
            "LOAD_SUCCEEDED",
            json!({"title": "California Beach", "src": "./videos/California-Beach.mp4"}),
        )
        .decode()
        .unwrap();
        assert_eq!(
            event,
            VideoEvent::LoadSucceeded(Video::new(
                "California Beach",
                "./videos/California-Beach.mp4"
            ))
        );
    }

    #[test]
    fn intent_failure_maps_to_generic_load_failed() {
        let event = VideoEvent::from(IntentError::Failed("boom".into()));
        assert_eq!(
            event,
            VideoEvent::LoadFailed {
                message: INTENT_FAILED_MESSAGE.to_string()
            }
        );
    }
}
