//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use reelstate::catalog::{Catalog, VideoSource};
use reelstate::config::Config;
use reelstate::pipeline::OrderingPolicy;
use reelstate::store::Subscription;
use reelstate::video::{Video, VideoState};
use reelstate::workflow::VideoPlayer;
use std::sync::Arc;
use std::time::Duration;

pub fn coffee() -> Video {
    Video::new("Coffee in the Morning", "./videos/Coffee-in-the-Morning.mp4")
}

pub fn beach() -> Video {
    Video::new("California Beach", "./videos/California-Beach.mp4")
}

/// Player over the reference catalog, preloaded with "/video/0".
pub fn reference_player() -> VideoPlayer {
    VideoPlayer::new(&Config::default(), tokio::runtime::Handle::current())
}

/// Player whose "/video/0" answers after `slow` and "/video/1" after `fast`.
pub fn skewed_player(slow: Duration, fast: Duration, ordering: OrderingPolicy) -> VideoPlayer {
    let mut catalog = Catalog::new(fast);
    catalog.insert_with_latency("/video/0", coffee(), slow);
    catalog.insert_with_latency("/video/1", beach(), fast);
    VideoPlayer::with_source(
        VideoState::with_video(coffee()),
        Arc::new(catalog),
        ordering,
        tokio::runtime::Handle::current(),
    )
}

/// Every state a subscriber observed, in order.
pub struct Recorder {
    pub states: Arc<Mutex<Vec<VideoState>>>,
    pub subscription: Subscription,
}

impl Recorder {
    pub fn attach(player: &VideoPlayer) -> Self {
        let states = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&states);
        let reader = player.downgrade();
        let subscription = player.subscribe(move || {
            if let Some(state) = reader.get_state() {
                sink.lock().push((*state).clone());
            }
        });
        Self {
            states,
            subscription,
        }
    }

    pub fn snapshot(&self) -> Vec<VideoState> {
        self.states.lock().clone()
    }

    /// Observed states that ended a load.
    pub fn terminal(&self) -> Vec<VideoState> {
        self.snapshot().into_iter().filter(|s| !s.is_loading).collect()
    }
}

pub fn loading_with(video: Option<Video>) -> VideoState {
    VideoState {
        video,
        is_loading: true,
        error_message: None,
    }
}

pub fn errored(message: &str) -> VideoState {
    VideoState {
        video: None,
        is_loading: false,
        error_message: Some(message.to_string()),
    }
}
