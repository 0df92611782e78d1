use crate::application::dto::{SoupRequest, SoupResponse};
use crate::application::use_cases::AssessRepositoryRiskUseCase;
use crate::ports::outbound::{InventoryReader, ProgressReporter, RepositoryMetadataProvider};
use crate::shared::Result;
use crate::soup_report::domain::{DependencyRecord, EnrichedDependency};
use crate::soup_report::policies::LicenseRegistry;
use crate::soup_report::services::{DependencyDeduplicator, RiskOrdering};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use tracing::{debug, info};

/// CookSoupUseCase - Core use case aggregating inventories into SOUP entries
///
/// Reads every present inventory, merges and deduplicates the records,
/// enriches each unique record with its license requirement and risk
/// assessment, and returns the entries in report order.
///
/// # Type Parameters
/// * `MP` - RepositoryMetadataProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct CookSoupUseCase<MP, PR> {
    inventory_readers: Vec<Box<dyn InventoryReader>>,
    risk_assessor: AssessRepositoryRiskUseCase<MP>,
    progress_reporter: PR,
}

impl<MP, PR> CookSoupUseCase<MP, PR>
where
    MP: RepositoryMetadataProvider,
    PR: ProgressReporter,
{
    /// Creates a new CookSoupUseCase with injected dependencies
    ///
    /// # Arguments
    /// * `inventory_readers` - Readers in merge order; earlier readers win
    ///   deduplication ties
    /// * `risk_assessor` - Repository risk assessment
    /// * `progress_reporter` - User feedback sink
    pub fn new(
        inventory_readers: Vec<Box<dyn InventoryReader>>,
        risk_assessor: AssessRepositoryRiskUseCase<MP>,
        progress_reporter: PR,
    ) -> Self {
        Self {
            inventory_readers,
            risk_assessor,
            progress_reporter,
        }
    }

    /// Executes the aggregation
    ///
    /// # Errors
    /// Returns an error if a present inventory cannot be read or parsed.
    /// Network problems never fail the run.
    pub async fn execute(&self, request: SoupRequest) -> Result<SoupResponse> {
        // Step 1: Read every inventory that exists
        let records = self.read_inventories()?;

        // Step 2: Merge duplicates, first occurrence wins
        let unique_records = self.deduplicate(records);

        // Step 3: License lookup and risk assessment
        let mut entries = self.enrich_dependencies(unique_records, &request).await;

        // Step 4: High first, then by name
        RiskOrdering::sort(&mut entries);

        let response = SoupResponse::new(entries);
        info!(
            high = response.summary.high,
            medium = response.summary.medium,
            low = response.summary.low,
            "aggregation finished"
        );
        Ok(response)
    }

    fn read_inventories(&self) -> Result<Vec<DependencyRecord>> {
        let mut records = Vec::new();
        let mut inventories_found = 0;

        for reader in &self.inventory_readers {
            let path = reader.inventory_path();
            if !reader.is_present() {
                debug!(
                    ecosystem = reader.ecosystem(),
                    path = %path.display(),
                    "inventory not found, skipping"
                );
                continue;
            }
            inventories_found += 1;

            self.progress_reporter.report(&format!(
                "📖 Loading {} license inventory from: {}",
                reader.ecosystem(),
                path.display()
            ));

            let inventory = reader.read_dependencies()?;

            self.progress_reporter
                .report(&format!("✅ Detected {} package(s)", inventory.len()));
            records.extend(inventory);
        }

        if inventories_found == 0 {
            self.progress_reporter.report_error(
                "⚠️  Warning: No license inventory found. The report table will be empty.",
            );
        }

        Ok(records)
    }

    fn deduplicate(&self, records: Vec<DependencyRecord>) -> Vec<DependencyRecord> {
        let total = records.len();
        let unique_records = DependencyDeduplicator::deduplicate(records);

        let duplicates = total - unique_records.len();
        if duplicates > 0 {
            debug!(duplicates, "dropped duplicate dependency records");
        }

        unique_records
    }

    async fn enrich_dependencies(
        &self,
        records: Vec<DependencyRecord>,
        request: &SoupRequest,
    ) -> Vec<EnrichedDependency> {
        let total = records.len();
        if total == 0 {
            return Vec::new();
        }

        self.progress_reporter.report(&format!(
            "🔍 Assessing supply-chain risk for {} unique package(s)...",
            total
        ));

        let concurrency = request.max_concurrent_fetches.max(1);
        let evaluated_at = request.evaluated_at;

        // `buffered` yields in input order, so progress matches the inventory order
        let mut assessments = stream::iter(records)
            .map(|record| self.enrich_dependency(record, evaluated_at))
            .buffered(concurrency);

        let mut entries = Vec::with_capacity(total);
        while let Some(entry) = assessments.next().await {
            self.progress_reporter
                .report_progress(entries.len() + 1, total, Some(entry.record().name()));
            entries.push(entry);
        }

        self.progress_reporter
            .report(&format!("✅ Assessed {} package(s)", entries.len()));

        entries
    }

    async fn enrich_dependency(
        &self,
        record: DependencyRecord,
        evaluated_at: DateTime<Utc>,
    ) -> EnrichedDependency {
        let license_info = LicenseRegistry::lookup(record.license());
        if !record.has_unknown_license() && !LicenseRegistry::is_known(record.license()) {
            debug!(
                package = record.name(),
                license = record.license(),
                "license not in registry, assuming no license file is required"
            );
        }

        let assessment = self
            .risk_assessor
            .execute(record.url(), record.version(), evaluated_at)
            .await;

        let assessment = if record.has_unknown_license() {
            assessment.unknown_license_override()
        } else {
            assessment
        };

        EnrichedDependency::new(record, license_info.requirement_text(), assessment)
    }
}
