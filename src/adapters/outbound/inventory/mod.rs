/// Inventory adapters turning scanner output into dependency records
mod npm_inventory;
mod poetry_inventory;

pub use npm_inventory::{parse_npm_inventory, NpmInventoryReader};
pub use poetry_inventory::{parse_poetry_inventory, PoetryInventoryReader};

use crate::shared::error::SoupError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// Reads an inventory file and parses it as JSON, mapping failures onto
/// the inventory error variants.
fn read_inventory_json(path: &Path) -> Result<serde_json::Value> {
    let file_description = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "license inventory".to_string());

    let content =
        read_regular_file(path, &file_description).map_err(|e| SoupError::InventoryReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    serde_json::from_str(&content).map_err(|e| {
        SoupError::InventoryParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Text of a JSON string field; absent or non-string values yield `None`
fn string_field<'a>(object: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    object.get(key).and_then(serde_json::Value::as_str)
}
