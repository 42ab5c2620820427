use std::any::Any;

use thiserror::Error;

/// Failures raised by an intent. The dispatcher turns each into a single
/// failure event instead of letting it reach the caller.
#[derive(Debug, Error)]
pub enum IntentError {
    #[error("Intent failed: {0}")]
    Failed(String),

    #[error("Intent panicked: {0}")]
    Panicked(String),
}

impl IntentError {
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        IntentError::Panicked(message)
    }
}
