/// Normalized identifier used for missing or empty license declarations
pub const UNKNOWN_LICENSE: &str = "unknown";

/// Normalizes a raw license declaration into a registry lookup key.
///
/// Surrounding whitespace and case are ignored; an empty (or
/// whitespace-only) declaration becomes [`UNKNOWN_LICENSE`]. The result is a
/// fixed point: normalizing it again yields the same string.
pub fn normalize_license(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        UNKNOWN_LICENSE.to_string()
    } else {
        normalized
    }
}

/// LicenseInfo value object describing the legal obligations of a license
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseInfo {
    requires_license_file: bool,
    is_non_commercial_only: bool,
}

impl LicenseInfo {
    pub const fn new(requires_license_file: bool, is_non_commercial_only: bool) -> Self {
        Self {
            requires_license_file,
            is_non_commercial_only,
        }
    }

    /// Whether a copy of the license text must ship with the product
    pub fn requires_license_file(&self) -> bool {
        self.requires_license_file
    }

    /// Whether the license forbids commercial use
    pub fn is_non_commercial_only(&self) -> bool {
        self.is_non_commercial_only
    }

    /// Text rendered in the "License Requirements" column
    pub fn requirement_text(&self) -> String {
        let mut text = if self.requires_license_file {
            String::from("Include License File")
        } else {
            String::from("No License File Required")
        };
        if self.is_non_commercial_only {
            text.push_str(", NON-COMMERCIAL USE ONLY");
        }
        text
    }
}
