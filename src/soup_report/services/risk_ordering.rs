use crate::soup_report::domain::EnrichedDependency;

/// RiskOrdering - Report order: risk precedence first, then case-insensitive name
pub struct RiskOrdering;

impl RiskOrdering {
    /// Sorts entries High → Medium → Low, alphabetically within a level.
    ///
    /// The sort is stable, so entries whose names differ only in case keep
    /// their relative input order.
    pub fn sort(entries: &mut [EnrichedDependency]) {
        entries.sort_by_cached_key(|entry| {
            (
                entry.risk_level().precedence(),
                entry.record().name().to_lowercase(),
            )
        });
    }
}
