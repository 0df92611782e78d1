use super::{read_inventory_json, string_field};
use crate::ports::outbound::InventoryReader;
use crate::shared::error::SoupError;
use crate::shared::Result;
use crate::soup_report::domain::DependencyRecord;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Version reported for keys without a `@<version>` suffix
const UNKNOWN_VERSION: &str = "unknown";

/// NpmInventoryReader adapter for `license-checker --json` output
///
/// The inventory is an object keyed by `"<name>@<version>"`:
///
/// ```json
/// {
///   "react@18.2.0": { "licenses": "MIT", "repository": "https://github.com/facebook/react" },
///   "@babel/core@7.23.0": { "licenses": ["MIT"], "url": "https://babel.dev" }
/// }
/// ```
pub struct NpmInventoryReader {
    inventory_path: PathBuf,
}

impl NpmInventoryReader {
    pub fn new(inventory_path: PathBuf) -> Self {
        Self { inventory_path }
    }
}

impl InventoryReader for NpmInventoryReader {
    fn ecosystem(&self) -> &str {
        "npm"
    }

    fn inventory_path(&self) -> &Path {
        &self.inventory_path
    }

    fn read_dependencies(&self) -> Result<Vec<DependencyRecord>> {
        let document = read_inventory_json(&self.inventory_path)?;
        parse_npm_inventory(&document).map_err(|e| {
            SoupError::InventoryParseError {
                path: self.inventory_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Converts a parsed npm inventory into records, in document order
///
/// # Errors
/// Returns an error if the document is not a JSON object
pub fn parse_npm_inventory(document: &Value) -> Result<Vec<DependencyRecord>> {
    let packages = document
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("expected a JSON object keyed by \"name@version\""))?;

    Ok(packages
        .iter()
        .map(|(package_key, info)| {
            let (name, version) = split_package_key(package_key);
            DependencyRecord::new(name, version, repository_url(info), first_license(info))
        })
        .collect())
}

/// Splits `name@version` at the last `@`.
///
/// A leading `@` marks a scope, not a version separator, so `@types/node`
/// has no version. This deliberately departs from a literal last-`@` split,
/// which would give an empty name and the version `types/node`.
fn split_package_key(package_key: &str) -> (&str, &str) {
    match package_key.rsplit_once('@') {
        Some((name, version)) if !name.is_empty() => (name, version),
        _ => (package_key, UNKNOWN_VERSION),
    }
}

/// The `licenses` field as a single string; lists use their first element
fn first_license(info: &Value) -> &str {
    match info.get("licenses") {
        Some(Value::String(license)) => license.as_str(),
        Some(Value::Array(licenses)) => licenses.first().and_then(Value::as_str).unwrap_or(""),
        _ => "",
    }
}

/// First non-empty of `repository` (string or `{ "url": ... }`) and `url`
fn repository_url(info: &Value) -> &str {
    let repository = match info.get("repository") {
        Some(Value::String(url)) => Some(url.as_str()),
        Some(object @ Value::Object(_)) => string_field(object, "url"),
        _ => None,
    };

    [repository, string_field(info, "url")]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
        .unwrap_or("")
}
