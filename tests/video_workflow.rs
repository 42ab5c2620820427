//! End-to-end loads through the player: store, pipeline, workflow and catalog.

mod common;

use common::*;
use reelstate::catalog::{Catalog, VideoSource, DEFAULT_LATENCY};
use reelstate::pipeline::OrderingPolicy;
use reelstate::video::{Phase, VideoState, NOT_FOUND_MESSAGE};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn initial_state_shows_preloaded_video_as_loaded() {
    let player = reference_player();
    let state = player.state();
    assert_eq!(*state, VideoState::with_video(coffee()));
    assert!(!state.is_loading);
    assert_eq!(state.phase(), Phase::Loaded);
    assert_eq!(state.visible_video(), Some(&coffee()));
    assert_eq!(player.pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn load_existing_video() {
    let player = reference_player();
    let recorder = Recorder::attach(&player);
    let start = tokio::time::Instant::now();

    player.load("/video/1");

    // Loading is applied before load() returns; the old video stays visible.
    assert_eq!(*player.state(), loading_with(Some(coffee())));
    assert_eq!(player.pending(), 1);

    player.settled().await;

    assert!(start.elapsed() >= DEFAULT_LATENCY);
    let state = player.state();
    assert_eq!(state.video, Some(beach()));
    assert!(state.error_message.is_none());
    assert_eq!(state.phase(), Phase::Loaded);
    assert_eq!(
        recorder.snapshot(),
        vec![loading_with(Some(coffee())), VideoState::with_video(beach())]
    );
}

#[tokio::test(start_paused = true)]
async fn load_missing_video() {
    let player = reference_player();
    let recorder = Recorder::attach(&player);

    player.load("/video/zonk");
    assert!(player.state().is_loading);

    player.settled().await;

    let state = player.state();
    assert!(state.video.is_none());
    assert_eq!(state.error_message.as_deref(), Some(NOT_FOUND_MESSAGE));
    assert_eq!(state.phase(), Phase::Errored);
    assert_eq!(
        recorder.snapshot(),
        vec![loading_with(Some(coffee())), errored(NOT_FOUND_MESSAGE)]
    );
}

#[tokio::test(start_paused = true)]
async fn errored_state_recovers_on_next_load() {
    let player = reference_player();
    player.load("/video/zonk");
    player.settled().await;
    assert_eq!(player.state().phase(), Phase::Errored);

    player.load("/video/0");
    // Loading clears the error right away, with no video to keep.
    assert_eq!(*player.state(), loading_with(None));

    player.settled().await;
    assert_eq!(*player.state(), VideoState::with_video(coffee()));
}

#[tokio::test(start_paused = true)]
async fn loaded_state_is_reenterable() {
    let player = reference_player();
    for id in ["/video/1", "/video/0", "/video/1"] {
        player.load(id);
        assert_eq!(player.state().phase(), Phase::Loading);
        player.settled().await;
        assert_eq!(player.state().phase(), Phase::Loaded);
    }
    assert_eq!(player.state().video, Some(beach()));
}

#[tokio::test(start_paused = true)]
async fn back_to_back_loads_latest_wins() {
    let player = reference_player();
    let recorder = Recorder::attach(&player);

    player.load("/video/0");
    player.load("/video/1");
    player.settled().await;

    assert_eq!(*player.state(), VideoState::with_video(beach()));
    assert_eq!(recorder.terminal(), vec![VideoState::with_video(beach())]);
}

#[tokio::test(start_paused = true)]
async fn stale_slow_response_is_discarded() {
    let player = skewed_player(
        Duration::from_millis(3000),
        Duration::from_millis(1000),
        OrderingPolicy::LatestWins,
    );
    let recorder = Recorder::attach(&player);

    player.load("/video/0");
    player.load("/video/1");
    player.settled().await;

    // "/video/0" resolves last but was superseded, so it never lands.
    assert_eq!(*player.state(), VideoState::with_video(beach()));
    assert_eq!(
        recorder.snapshot(),
        vec![
            loading_with(Some(coffee())),
            loading_with(Some(coffee())),
            VideoState::with_video(beach()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn unordered_policy_lets_stale_response_overwrite() {
    let player = skewed_player(
        Duration::from_millis(3000),
        Duration::from_millis(1000),
        OrderingPolicy::Unordered,
    );
    let recorder = Recorder::attach(&player);

    player.load("/video/0");
    player.load("/video/1");
    player.settled().await;

    assert_eq!(
        recorder.terminal(),
        vec![VideoState::with_video(beach()), VideoState::with_video(coffee())]
    );
    assert_eq!(*player.state(), VideoState::with_video(coffee()));
}

#[tokio::test(start_paused = true)]
async fn loading_always_observed_before_terminal() {
    let player = reference_player();
    let recorder = Recorder::attach(&player);

    player.load("/video/1");
    player.settled().await;
    player.load("/video/zonk");
    player.settled().await;

    let phases: Vec<Phase> = recorder.snapshot().iter().map(VideoState::phase).collect();
    assert_eq!(
        phases,
        vec![Phase::Loading, Phase::Loaded, Phase::Loading, Phase::Errored]
    );
}

#[tokio::test(start_paused = true)]
async fn dropping_player_releases_backend_despite_reading_subscriber() {
    let mut catalog = Catalog::new(Duration::from_millis(10));
    catalog.insert("/video/1", beach());
    let catalog = Arc::new(catalog);

    let player = reelstate::workflow::VideoPlayer::with_source(
        VideoState::default(),
        Arc::clone(&catalog) as Arc<dyn VideoSource>,
        OrderingPolicy::LatestWins,
        tokio::runtime::Handle::current(),
    );
    let recorder = Recorder::attach(&player);
    player.load("/video/1");
    player.settled().await;
    assert_eq!(recorder.terminal(), vec![VideoState::with_video(beach())]);

    drop(player);
    assert_eq!(Arc::strong_count(&catalog), 1);
    assert!(!recorder.subscription.unsubscribe());
}
