use crate::catalog::VideoSource;
use crate::pipeline::{Intent, IntentContext, IntentError};
use crate::video::{VideoEvent, VideoReducer};

/// Ordering channel shared by every video load.
pub const VIDEO_CHANNEL: &str = "video";

/// Fetch a video and drive the loading state machine.
///
/// ```text
/// Idle | Loaded | Errored ──load──→ Loading ──ok──→ Loaded
///                                      └──not found──→ Errored
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadVideo {
    id: String,
}

impl LoadVideo {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Intent<VideoReducer, dyn VideoSource> for LoadVideo {
    fn invoke(
        self: Box<Self>,
        ctx: IntentContext<VideoReducer, dyn VideoSource>,
    ) -> Result<(), IntentError> {
        ctx.submit(VideoEvent::LoadingStarted);

        let source = ctx.capability();
        let continuation = ctx.clone();
        let id = self.id;
        ctx.spawn(async move {
            let result = source.fetch(&id).await;

            if !continuation.is_current() {
                tracing::debug!(id = %id, ticket = ?continuation.ticket(), "dropping stale response");
                return Ok(());
            }

            let event = match result {
                Ok(video) => VideoEvent::LoadSucceeded(video),
                Err(err) => {
                    tracing::info!(id = %id, error = %err, "video lookup failed");
                    VideoEvent::LoadFailed {
                        message: err.user_message().to_string(),
                    }
                }
            };
            continuation.submit(event);
            Ok(())
        });

        Ok(())
    }

    fn name(&self) -> &'static str {
        "load_video"
    }

    fn channel(&self) -> Option<&'static str> {
        Some(VIDEO_CHANNEL)
    }
}
