use crate::ports::outbound::RepositoryMetadataProvider;
use crate::soup_report::domain::{RepositoryCoordinates, RepositoryMetadata};
use async_trait::async_trait;
use dashmap::DashMap;

/// CachingMetadataProvider wraps a RepositoryMetadataProvider with an in-memory memo.
///
/// Several packages often share one source repository (monorepos, scoped
/// npm packages), so the memo avoids repeating the same three API calls
/// within a run. It lives only as long as the provider and is never written
/// to disk. Two concurrent misses for the same coordinates may both reach
/// the inner provider; the later result wins.
pub struct CachingMetadataProvider<P: RepositoryMetadataProvider> {
    inner: P,
    cache: DashMap<RepositoryCoordinates, RepositoryMetadata>,
}

impl<P: RepositoryMetadataProvider> CachingMetadataProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Number of memoized repositories
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<P: RepositoryMetadataProvider> RepositoryMetadataProvider for CachingMetadataProvider<P> {
    async fn fetch_metadata(&self, coordinates: &RepositoryCoordinates) -> RepositoryMetadata {
        if let Some(cached) = self.cache.get(coordinates) {
            return cached.clone();
        }

        let metadata = self.inner.fetch_metadata(coordinates).await;
        self.cache.insert(coordinates.clone(), metadata.clone());
        metadata
    }
}
