use chrono::{DateTime, Utc};

/// SoupRequest - Internal request DTO for the SOUP aggregation use case
#[derive(Debug, Clone)]
pub struct SoupRequest {
    /// Reference time for every recency rule in this run
    pub evaluated_at: DateTime<Utc>,
    /// Upper bound of dependencies enriched at the same time (1 = sequential)
    pub max_concurrent_fetches: usize,
}

impl SoupRequest {
    pub fn new(evaluated_at: DateTime<Utc>, max_concurrent_fetches: usize) -> Self {
        Self {
            evaluated_at,
            max_concurrent_fetches,
        }
    }
}
