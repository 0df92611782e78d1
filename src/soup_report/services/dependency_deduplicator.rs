use crate::soup_report::domain::{DependencyKey, DependencyRecord};
use std::collections::HashSet;

/// DependencyDeduplicator - Collapses records sharing a (name, version, license) key
///
/// The first occurrence wins and input order is preserved for the survivors.
/// URLs take no part in the key: two records differing only in URL collapse
/// into the first one.
pub struct DependencyDeduplicator;

impl DependencyDeduplicator {
    /// Removes duplicate records
    ///
    /// # Arguments
    /// * `records` - Records in scanner order, npm first then Poetry
    ///
    /// # Returns
    /// Records with unique keys, in first-seen order
    pub fn deduplicate(records: Vec<DependencyRecord>) -> Vec<DependencyRecord> {
        let mut seen: HashSet<DependencyKey> = HashSet::with_capacity(records.len());
        records
            .into_iter()
            .filter(|record| seen.insert(record.key()))
            .collect()
    }
}
