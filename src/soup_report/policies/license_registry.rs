use crate::soup_report::domain::{normalize_license, LicenseInfo};

/// Fallback attributes for identifiers missing from the table
const UNKNOWN_LICENSE_INFO: LicenseInfo = LicenseInfo::new(false, false);

/// Known licenses keyed by normalized identifier
const LICENSE_TABLE: &[(&str, LicenseInfo)] = &[
    ("apache-2.0", LicenseInfo::new(true, false)),
    ("mit", LicenseInfo::new(true, false)),
    ("bsd", LicenseInfo::new(true, false)),
    ("bsd-2-clause", LicenseInfo::new(true, false)),
    ("bsd-3-clause", LicenseInfo::new(true, false)),
    ("gpl-2.0", LicenseInfo::new(true, false)),
    ("gpl-3.0", LicenseInfo::new(true, false)),
    ("lgpl-2.1", LicenseInfo::new(true, false)),
    ("lgpl-3.0", LicenseInfo::new(true, false)),
    ("mpl-2.0", LicenseInfo::new(true, false)),
    ("cc0-1.0", LicenseInfo::new(false, false)),
    ("isc", LicenseInfo::new(true, false)),
    ("agpl-3.0", LicenseInfo::new(true, false)),
    ("unlicense", LicenseInfo::new(true, false)),
    ("cc-by-nc-4.0", LicenseInfo::new(true, true)),
    ("unknown", UNKNOWN_LICENSE_INFO),
];

/// LicenseRegistry policy mapping license identifiers to their legal attributes
///
/// The table is compiled into the binary and never mutated. Lookup is total:
/// every string, including the empty one, resolves to some [`LicenseInfo`].
pub struct LicenseRegistry;

impl LicenseRegistry {
    /// Looks up the attributes of a license identifier.
    ///
    /// The identifier is normalized first, so `" MIT "` and `"mit"` resolve
    /// to the same entry. Unmatched identifiers resolve to the unknown entry.
    pub fn lookup(identifier: &str) -> LicenseInfo {
        let normalized = normalize_license(identifier);
        LICENSE_TABLE
            .iter()
            .find(|(id, _)| *id == normalized)
            .map(|(_, info)| *info)
            .unwrap_or(UNKNOWN_LICENSE_INFO)
    }

    /// Whether the identifier has a dedicated table entry
    pub fn is_known(identifier: &str) -> bool {
        let normalized = normalize_license(identifier);
        LICENSE_TABLE.iter().any(|(id, _)| *id == normalized)
    }
}
