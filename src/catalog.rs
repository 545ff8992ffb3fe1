use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Character, EpisodePage};

/// Read-only access to the remote episode/character catalog.
///
/// No caching, no retries; each call hits the network fresh. The app holds
/// this behind `Arc<dyn Catalog>` so the pagination and resolution logic
/// can run against in-memory fakes in tests.
#[async_trait]
pub trait Catalog: Send + Sync + std::fmt::Debug {
    /// Fetch one page of the episode listing (1-based).
    async fn episode_page(&self, page: u32) -> Result<EpisodePage>;

    /// Look up a single character by id.
    async fn character(&self, id: u64) -> Result<Character>;
}
