//! Composition root handed to the view layer.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::catalog::{Catalog, VideoSource};
use crate::config::Config;
use crate::mvi::EventDescriptor;
use crate::pipeline::OrderingPolicy;
use crate::store::{Store, Subscription, WeakStore};
use crate::video::{VideoReducer, VideoState};

use super::load_video::LoadVideo;
use super::{VideoDispatcher, VideoSubmission};

/// Store, pipeline and backend wired together.
///
/// The view reads [`state`](Self::state), listens through
/// [`subscribe`](Self::subscribe) and asks for videos with
/// [`load`](Self::load).
#[derive(Clone)]
pub struct VideoPlayer {
    dispatcher: VideoDispatcher,
}

impl VideoPlayer {
    /// Build a player over the catalog described by `config`.
    ///
    /// The preloaded video is `player.initial_video` when set, otherwise the
    /// first configured video.
    pub fn new(config: &Config, runtime: Handle) -> Self {
        let catalog = Catalog::from_config(config);
        let initial = config
            .player
            .initial_video
            .as_deref()
            .or_else(|| config.videos.first().map(|entry| entry.id.as_str()))
            .and_then(|id| catalog.get(id))
            .cloned()
            .map(VideoState::with_video)
            .unwrap_or_default();

        Self::with_source(initial, Arc::new(catalog), config.player.ordering, runtime)
    }

    /// Build a player over any backend.
    pub fn with_source(
        initial: VideoState,
        source: Arc<dyn VideoSource>,
        ordering: OrderingPolicy,
        runtime: Handle,
    ) -> Self {
        let store = Store::new(initial);
        let dispatcher = VideoDispatcher::new(store, source, runtime).with_policy(ordering);
        Self { dispatcher }
    }

    /// Start loading the video with `id`. Returns once the loading state
    /// has been applied; the result arrives later.
    pub fn load(&self, id: &str) {
        self.dispatcher.dispatch(LoadVideo::new(id));
    }

    pub fn dispatch(&self, submission: impl Into<VideoSubmission>) {
        self.dispatcher.dispatch(submission);
    }

    pub fn submit_descriptor(&self, descriptor: &EventDescriptor) {
        self.dispatcher.store().submit_descriptor(descriptor);
    }

    pub fn state(&self) -> Arc<VideoState> {
        self.dispatcher.store().get_state()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.dispatcher.store().subscribe(callback)
    }

    /// Handle for subscribers that need to read state without owning the
    /// player.
    pub fn downgrade(&self) -> WeakStore<VideoReducer> {
        self.dispatcher.store().downgrade()
    }

    pub fn store(&self) -> &Store<VideoReducer> {
        self.dispatcher.store()
    }

    pub fn pending(&self) -> usize {
        self.dispatcher.pending()
    }

    /// Wait until every load in flight has delivered (or dropped) its result.
    pub async fn settled(&self) {
        self.dispatcher.settled().await;
    }
}
