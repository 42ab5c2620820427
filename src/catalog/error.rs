use thiserror::Error;

use crate::video::NOT_FOUND_MESSAGE;

/// Errors returned by a [`VideoSource`](super::VideoSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No record for this identifier.
    #[error("Video '{id}' not found")]
    NotFound { id: String },
}

impl FetchError {
    /// Message for the view.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotFound { .. } => NOT_FOUND_MESSAGE,
        }
    }
}
