//! The video loading workflow and the player that composes it.

mod load_video;
mod player;

pub use load_video::{LoadVideo, VIDEO_CHANNEL};
pub use player::VideoPlayer;

use crate::catalog::VideoSource;
use crate::pipeline::{Dispatcher, IntentContext, Submission};
use crate::video::{VideoEvent, VideoReducer};

/// Pipeline in front of the video cell, with the backend as capability.
pub type VideoDispatcher = Dispatcher<VideoReducer, dyn VideoSource>;

/// Context handed to video intents.
pub type VideoContext = IntentContext<VideoReducer, dyn VideoSource>;

/// Anything the video pipeline accepts.
pub type VideoSubmission = Submission<VideoReducer, dyn VideoSource>;

impl From<VideoEvent> for VideoSubmission {
    fn from(event: VideoEvent) -> Self {
        Submission::Event(event)
    }
}

impl From<LoadVideo> for VideoSubmission {
    fn from(intent: LoadVideo) -> Self {
        Submission::intent(intent)
    }
}
