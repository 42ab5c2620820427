//! Simulated video backend.
//!
//! The workflow only sees the [`VideoSource`] capability; [`Catalog`] is the
//! in-memory table standing in for a real server.

mod error;
mod memory;

pub use error::FetchError;
pub use memory::{Catalog, DEFAULT_LATENCY};

use async_trait::async_trait;

use crate::video::Video;

/// Asynchronous lookup of a video record by identifier.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn fetch(&self, id: &str) -> Result<Video, FetchError>;
}
