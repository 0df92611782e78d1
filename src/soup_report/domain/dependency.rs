use super::license_info::{normalize_license, UNKNOWN_LICENSE};

/// Identity of a dependency for deduplication: (name, version, normalized license)
pub type DependencyKey = (String, String, String);

/// DependencyRecord value object produced by an inventory reader
///
/// The license is normalized at construction time, so every record in the
/// pipeline carries a registry-ready identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    name: String,
    version: String,
    url: String,
    license: String,
}

impl DependencyRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        url: impl Into<String>,
        raw_license: &str,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            url: url.into(),
            license: normalize_license(raw_license),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Source repository URL as declared by the scanner (may be empty)
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Normalized license identifier
    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn has_unknown_license(&self) -> bool {
        self.license == UNKNOWN_LICENSE
    }

    pub fn key(&self) -> DependencyKey {
        (
            self.name.clone(),
            self.version.clone(),
            self.license.clone(),
        )
    }
}
