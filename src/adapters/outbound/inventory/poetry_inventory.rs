use super::{read_inventory_json, string_field};
use crate::ports::outbound::InventoryReader;
use crate::shared::error::SoupError;
use crate::shared::Result;
use crate::soup_report::domain::DependencyRecord;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Name and version reported when the scanner omitted them
const UNKNOWN_FIELD: &str = "Unknown";

/// PoetryInventoryReader adapter for `pip-licenses --format=json --with-urls` output
///
/// The inventory is an array of objects with case-sensitive keys
/// `Name`, `Version`, `URL` and `License`.
pub struct PoetryInventoryReader {
    inventory_path: PathBuf,
}

impl PoetryInventoryReader {
    pub fn new(inventory_path: PathBuf) -> Self {
        Self { inventory_path }
    }
}

impl InventoryReader for PoetryInventoryReader {
    fn ecosystem(&self) -> &str {
        "Poetry"
    }

    fn inventory_path(&self) -> &Path {
        &self.inventory_path
    }

    fn read_dependencies(&self) -> Result<Vec<DependencyRecord>> {
        let document = read_inventory_json(&self.inventory_path)?;
        parse_poetry_inventory(&document).map_err(|e| {
            SoupError::InventoryParseError {
                path: self.inventory_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Converts a parsed pip-licenses inventory into records, in document order
///
/// # Errors
/// Returns an error if the document is not a JSON array
pub fn parse_poetry_inventory(document: &Value) -> Result<Vec<DependencyRecord>> {
    let packages = document
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("expected a JSON array of package objects"))?;

    Ok(packages
        .iter()
        .map(|item| {
            DependencyRecord::new(
                string_field(item, "Name").unwrap_or(UNKNOWN_FIELD),
                string_field(item, "Version").unwrap_or(UNKNOWN_FIELD),
                string_field(item, "URL").unwrap_or(""),
                string_field(item, "License").unwrap_or(""),
            )
        })
        .collect())
}
