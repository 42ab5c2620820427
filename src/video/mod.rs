//! The video state cell: record, state, events and transition function.

mod event;
mod reducer;
mod state;

pub use event::VideoEvent;
pub use reducer::VideoReducer;
pub use state::{Phase, Video, VideoState};

/// Message surfaced when the backend has no record for an identifier.
pub const NOT_FOUND_MESSAGE: &str = "Could not locate the video.";

/// Message surfaced when an intent fails before it could finish a load.
pub const INTENT_FAILED_MESSAGE: &str = "Something went wrong while loading the video.";
