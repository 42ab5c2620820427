//! In-memory catalog with artificial latency.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::Config;
use crate::video::Video;

use super::error::FetchError;
use super::VideoSource;

/// Latency applied to every lookup unless overridden.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
struct Entry {
    video: Video,
    latency: Option<Duration>,
}

/// Keyed lookup table that answers after a delay.
///
/// Misses wait the default latency too, so a caller cannot tell success
/// from failure by timing.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, Entry>,
    latency: Duration,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl Catalog {
    /// Empty catalog answering after `latency`.
    pub fn new(latency: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            latency,
        }
    }

    /// The two-record reference dataset.
    pub fn reference() -> Self {
        Self::from_config(&Config::default())
    }

    /// Catalog built from the `[catalog]` and `[[videos]]` sections.
    pub fn from_config(config: &Config) -> Self {
        let mut catalog = Self::new(Duration::from_millis(config.catalog.latency_ms));
        for entry in &config.videos {
            let video = Video::new(&entry.title, &entry.source);
            match entry.latency_ms {
                Some(ms) => {
                    catalog.insert_with_latency(&entry.id, video, Duration::from_millis(ms))
                }
                None => catalog.insert(&entry.id, video),
            }
        }
        catalog
    }

    pub fn insert(&mut self, id: impl Into<String>, video: Video) {
        self.entries.insert(
            id.into(),
            Entry {
                video,
                latency: None,
            },
        );
    }

    /// Insert a record that answers after its own latency.
    pub fn insert_with_latency(&mut self, id: impl Into<String>, video: Video, latency: Duration) {
        self.entries.insert(
            id.into(),
            Entry {
                video,
                latency: Some(latency),
            },
        );
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Known identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn get(&self, id: &str) -> Option<&Video> {
        self.entries.get(id).map(|entry| &entry.video)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl VideoSource for Catalog {
    async fn fetch(&self, id: &str) -> Result<Video, FetchError> {
        let entry = self.entries.get(id);
        let delay = entry.and_then(|e| e.latency).unwrap_or(self.latency);
        tokio::time::sleep(delay).await;

        match entry {
            Some(entry) => {
                tracing::debug!(id, title = %entry.video.title, "catalog hit");
                Ok(entry.video.clone())
            }
            None => {
                tracing::debug!(id, "catalog miss");
                Err(FetchError::NotFound { id: id.to_string() })
            }
        }
    }
}
