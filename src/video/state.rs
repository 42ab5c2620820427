//! State for the video cell.

use serde::{Deserialize, Serialize};

use crate::mvi::Model;

/// A playable video record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    /// Location of the media file. Older data names this field `src`.
    #[serde(alias = "src")]
    pub source: String,
}

impl Video {
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
        }
    }
}

/// Snapshot of the video cell.
///
/// `is_loading` and `error_message` are never set together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoState {
    pub video: Option<Video>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Model for VideoState {}

/// Where the loading workflow stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing on screen and nothing in progress. A preloaded video reports
    /// `Loaded` instead.
    Idle,
    Loading,
    Loaded,
    Errored,
}

impl VideoState {
    /// Idle state with a video already on screen.
    pub fn with_video(video: Video) -> Self {
        Self {
            video: Some(video),
            is_loading: false,
            error_message: None,
        }
    }

    /// Derive the workflow phase.
    ///
    /// A state that holds a video but never went through a load counts as
    /// `Loaded`; the preloaded idle state is indistinguishable from it.
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error_message.is_some() {
            Phase::Errored
        } else if self.video.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    /// Video the view should show. Suppressed while an error is displayed.
    pub fn visible_video(&self) -> Option<&Video> {
        match self.error_message {
            Some(_) => None,
            None => self.video.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(VideoState::default().phase(), Phase::Idle);
    }

    #[test]
    fn phase_follows_flags() {
        let video = Video::new("Clip", "./clip.mp4");
        assert_eq!(VideoState::with_video(video.clone()).phase(), Phase::Loaded);

        let loading = VideoState {
            video: Some(video),
            is_loading: true,
            error_message: None,
        };
        assert_eq!(loading.phase(), Phase::Loading);

        let errored = VideoState {
            video: None,
            is_loading: false,
            error_message: Some("nope".into()),
        };
        assert_eq!(errored.phase(), Phase::Errored);
        assert!(errored.visible_video().is_none());
    }

    #[test]
    fn video_accepts_legacy_src_key() {
        let video: Video =
            serde_json::from_str(r#"{"title": "Clip", "src": "./clip.mp4"}"#).unwrap();
        assert_eq!(video.source, "./clip.mp4");
    }
}
