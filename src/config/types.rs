use serde::{Deserialize, Serialize};

use crate::pipeline::OrderingPolicy;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default = "default_videos")]
    pub videos: Vec<VideoEntry>,
}

/// Settings for the player's state cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Video shown before any load (default: "/video/0").
    #[serde(default)]
    pub initial_video: Option<String>,
    /// What happens when loads overlap (default: latest_wins).
    #[serde(default)]
    pub ordering: OrderingPolicy,
}

/// Settings for the simulated backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Artificial latency per lookup in milliseconds (default: 2000).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

/// One record served by the simulated backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    /// Lookup key (e.g., "/video/1").
    pub id: String,
    pub title: String,
    #[serde(alias = "src")]
    pub source: String,
    /// Overrides `catalog.latency_ms` for this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl VideoEntry {
    pub fn new(id: &str, title: &str, source: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            source: source.to_string(),
            latency_ms: None,
        }
    }
}

fn default_latency_ms() -> u64 {
    2000
}

fn default_videos() -> Vec<VideoEntry> {
    vec![
        VideoEntry::new(
            "/video/0",
            "Coffee in the Morning",
            "./videos/Coffee-in-the-Morning.mp4",
        ),
        VideoEntry::new(
            "/video/1",
            "California Beach",
            "./videos/California-Beach.mp4",
        ),
    ]
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_video: None,
            ordering: OrderingPolicy::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            catalog: CatalogConfig::default(),
            videos: default_videos(),
        }
    }
}
