use cook_soup::prelude::*;
use std::path::{Path, PathBuf};

/// Mock InventoryReader serving canned records
pub struct MockInventoryReader {
    ecosystem: String,
    path: PathBuf,
    present: bool,
    records: Vec<DependencyRecord>,
    failure: Option<String>,
}

impl MockInventoryReader {
    pub fn new(ecosystem: &str, records: Vec<DependencyRecord>) -> Self {
        Self {
            ecosystem: ecosystem.to_string(),
            path: PathBuf::from(format!("licenses-{}.json", ecosystem.to_lowercase())),
            present: true,
            records,
            failure: None,
        }
    }

    /// Reader whose inventory file does not exist
    pub fn absent(ecosystem: &str) -> Self {
        Self {
            present: false,
            ..Self::new(ecosystem, Vec::new())
        }
    }

    /// Reader that fails with the given message when read
    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

impl InventoryReader for MockInventoryReader {
    fn ecosystem(&self) -> &str {
        &self.ecosystem
    }

    fn inventory_path(&self) -> &Path {
        &self.path
    }

    fn is_present(&self) -> bool {
        self.present
    }

    fn read_dependencies(&self) -> Result<Vec<DependencyRecord>> {
        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }
        Ok(self.records.clone())
    }
}
