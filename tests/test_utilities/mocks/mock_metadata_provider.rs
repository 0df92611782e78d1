use async_trait::async_trait;
use cook_soup::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock RepositoryMetadataProvider with per-repository canned metadata
///
/// Unconfigured repositories get `fallback`. Every call is recorded as
/// `owner/repo`; clones share the call log.
#[derive(Clone, Default)]
pub struct MockMetadataProvider {
    repositories: HashMap<String, RepositoryMetadata>,
    fallback: RepositoryMetadata,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, slug: &str, metadata: RepositoryMetadata) -> Self {
        self.repositories.insert(slug.to_string(), metadata);
        self
    }

    pub fn with_fallback(mut self, metadata: RepositoryMetadata) -> Self {
        self.fallback = metadata;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RepositoryMetadataProvider for MockMetadataProvider {
    async fn fetch_metadata(&self, coordinates: &RepositoryCoordinates) -> RepositoryMetadata {
        let slug = coordinates.to_string();
        self.calls.lock().unwrap().push(slug.clone());
        self.repositories
            .get(&slug)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
