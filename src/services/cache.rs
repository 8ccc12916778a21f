use crate::models::VenueRecord;
use crate::services::store::{StoreError, VenueStore};
use std::sync::Arc;
use std::time::Duration;

/// In-process cache of the venue snapshot
///
/// The whole venue table is small, so it is cached as one entry and
/// refetched from the store once the TTL lapses. Concurrent misses share
/// a single store request.
pub struct VenueCache {
    entries: moka::future::Cache<String, Arc<Vec<VenueRecord>>>,
    ttl_secs: u64,
}

impl VenueCache {
    /// Create a new venue cache
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries, ttl_secs }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Get all venues, loading them from `store` on a miss
    pub async fn all_venues(
        &self,
        store: &VenueStore,
    ) -> Result<Arc<Vec<VenueRecord>>, Arc<StoreError>> {
        self.entries
            .try_get_with(CacheKey::all_venues(), async {
                tracing::debug!("Venue cache miss, loading from store");
                store.list_venues().await.map(Arc::new)
            })
            .await
    }

    /// Seed the snapshot directly
    pub async fn put_venues(&self, venues: Vec<VenueRecord>) {
        self.entries
            .insert(CacheKey::all_venues(), Arc::new(venues))
            .await;
    }

    /// Drop the cached snapshot so the next read hits the store
    pub async fn invalidate(&self) {
        self.entries.invalidate(&CacheKey::all_venues()).await;
        tracing::debug!("Invalidated venue cache");
    }

    /// Number of cached entries
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for the full venue snapshot
    pub fn all_venues() -> String {
        "venues:all".to_string()
    }
}
