use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One wilaya and its delivery prices. A price of `0` means the service is
/// not offered there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAreaEntry {
    pub wilaya: String,
    pub price_home: u32,
    pub price_desk: u32,
}

impl DeliveryAreaEntry {
    #[must_use]
    pub fn offers_home(&self) -> bool {
        self.price_home > 0
    }

    #[must_use]
    pub fn offers_desk(&self) -> bool {
        self.price_desk > 0
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub areas: Vec<DeliveryAreaEntry>,
}

/// Load the delivery-area catalog from a YAML file.
///
/// Entries keep their file order. Row contents are not checked here: a bad
/// row is still submitted and the API decides whether to reject it. Use
/// [`suspect_entries`] to report rows that are likely to be rejected.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)
}

/// Describe rows with a blank wilaya or a wilaya repeated (ignoring case)
/// earlier in the catalog. Never fails.
#[must_use]
pub fn suspect_entries(entries: &[DeliveryAreaEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let name = entry.wilaya.trim();
        if name.is_empty() {
            warnings.push(format!("entry {}: wilaya name is blank", index + 1));
        } else if !seen.insert(name.to_lowercase()) {
            warnings.push(format!(
                "entry {}: duplicate wilaya '{}'",
                index + 1,
                entry.wilaya
            ));
        }
    }

    warnings
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
