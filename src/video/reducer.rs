//! Transition function for the video cell.

use crate::mvi::Reducer;

use super::event::VideoEvent;
use super::state::VideoState;

/// Reducer for video state transitions.
pub struct VideoReducer;

impl Reducer for VideoReducer {
    type State = VideoState;
    type Event = VideoEvent;

    fn reduce(state: &Self::State, event: Self::Event) -> Self::State {
        match event {
            // The previous video stays visible while the next one loads.
            VideoEvent::LoadingStarted => VideoState {
                video: state.video.clone(),
                is_loading: true,
                error_message: None,
            },

            VideoEvent::LoadSucceeded(video) => VideoState {
                video: Some(video),
                is_loading: false,
                error_message: None,
            },

            VideoEvent::LoadFailed { message } => VideoState {
                video: None,
                is_loading: false,
                error_message: Some(message),
            },
        }
    }
}
