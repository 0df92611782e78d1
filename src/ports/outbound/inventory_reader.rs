use crate::shared::Result;
use crate::soup_report::domain::DependencyRecord;
use std::path::Path;

/// InventoryReader port for reading one ecosystem's license inventory
///
/// Implementations parse a scanner-generated JSON file into
/// [`DependencyRecord`]s. Whether the file exists is the caller's concern:
/// the pipeline only reads inventories that are present, so a missing file
/// here is a fatal read error like any other.
pub trait InventoryReader {
    /// Human-readable ecosystem name used in progress messages (e.g. "npm")
    fn ecosystem(&self) -> &str;

    /// Location of the inventory file
    fn inventory_path(&self) -> &Path;

    /// Whether the inventory file exists on disk
    fn is_present(&self) -> bool {
        self.inventory_path().exists()
    }

    /// Reads and parses the inventory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not valid JSON of the expected shape
    fn read_dependencies(&self) -> Result<Vec<DependencyRecord>>;
}
