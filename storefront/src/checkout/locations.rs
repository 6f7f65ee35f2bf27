//! Philippine location reference data
//!
//! Backs the province/municipality/barangay pickers on the address form.
//! Loading degrades instead of failing: full dataset first, then a
//! provinces-only list, then an empty directory with free-text entry left
//! to the form.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
enum DatasetError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A barangay with its postal code when the dataset carries one.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Barangay {
    pub name: String,
    #[serde(default, rename = "postal")]
    pub postal_code: Option<String>,
}

/// One province: its municipalities plus, keyed by municipality name, the
/// barangay lists. The dataset flattens the two side by side.
#[derive(Debug, Clone, Default, Deserialize)]
struct ProvinceEntry {
    #[serde(default)]
    municipalities: Vec<String>,
    #[serde(flatten)]
    barangays: HashMap<String, Vec<Barangay>>,
}

#[derive(Debug, Clone, Default)]
pub struct LocationDirectory {
    provinces: HashMap<String, ProvinceEntry>,
}

impl LocationDirectory {
    /// Load the directory, degrading through the fallback dataset to an
    /// empty directory. Never fails; failures are logged.
    pub fn load(primary: &Path, fallback: &Path) -> Self {
        match Self::load_full(primary) {
            Ok(directory) => {
                tracing::info!(provinces = directory.provinces.len(), "Locations loaded");
                return directory;
            }
            Err(err) => {
                tracing::warn!(path = %primary.display(), %err, "Full locations dataset unavailable")
            }
        }

        match Self::load_provinces_only(fallback) {
            Ok(directory) => {
                tracing::info!(
                    provinces = directory.provinces.len(),
                    "Provinces-only fallback loaded"
                );
                directory
            }
            Err(err) => {
                tracing::error!(path = %fallback.display(), %err, "No locations data available");
                Self::default()
            }
        }
    }

    fn load_full(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path)?;
        let provinces = serde_json::from_str(&json)?;
        Ok(Self { provinces })
    }

    /// The fallback file is a flat array of province names.
    fn load_provinces_only(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path)?;
        let names: Vec<String> = serde_json::from_str(&json)?;
        Ok(Self {
            provinces: names
                .into_iter()
                .map(|name| (name, ProvinceEntry::default()))
                .collect(),
        })
    }

    /// Whether any reference data loaded at all.
    pub fn is_available(&self) -> bool {
        !self.provinces.is_empty()
    }

    /// Province names, sorted for display.
    pub fn provinces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.provinces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn municipalities(&self, province: &str) -> &[String] {
        self.provinces
            .get(province)
            .map(|entry| entry.municipalities.as_slice())
            .unwrap_or_default()
    }

    pub fn barangays(&self, province: &str, municipality: &str) -> &[Barangay] {
        self.provinces
            .get(province)
            .and_then(|entry| entry.barangays.get(municipality))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const FULL: &str = r#"{
        "Cebu": {
            "municipalities": ["Cebu City", "Mandaue"],
            "Cebu City": [
                { "name": "Lahug", "postal": "6000" },
                { "name": "Guadalupe" }
            ]
        },
        "Bohol": {
            "municipalities": ["Tagbilaran"]
        }
    }"#;

    #[test]
    fn test_full_dataset_drives_all_three_levels() {
        let dir = tempfile::tempdir().unwrap();
        let primary = dir.path().join("locations.json");
        fs::write(&primary, FULL).unwrap();

        let locations = LocationDirectory::load(&primary, &dir.path().join("missing.json"));
        assert!(locations.is_available());
        assert_eq!(locations.provinces(), ["Bohol", "Cebu"]);
        assert_eq!(locations.municipalities("Cebu"), ["Cebu City", "Mandaue"]);

        let barangays = locations.barangays("Cebu", "Cebu City");
        assert_eq!(barangays[0].name, "Lahug");
        assert_eq!(barangays[0].postal_code.as_deref(), Some("6000"));
        assert_eq!(barangays[1].postal_code, None);
    }

    #[test]
    fn test_falls_back_to_provinces_only() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("provinces.json");
        fs::write(&fallback, r#"["Cebu", "Bohol", "Leyte"]"#).unwrap();

        let locations = LocationDirectory::load(&dir.path().join("missing.json"), &fallback);
        assert!(locations.is_available());
        assert_eq!(locations.provinces().len(), 3);
        assert!(locations.municipalities("Cebu").is_empty());
        assert!(locations.barangays("Cebu", "Cebu City").is_empty());
    }

    #[test]
    fn test_missing_datasets_degrade_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let locations = LocationDirectory::load(
            &dir.path().join("missing.json"),
            &dir.path().join("also-missing.json"),
        );
        assert!(!locations.is_available());
        assert!(locations.provinces().is_empty());
    }

    #[test]
    fn test_unknown_province_yields_empty_slices() {
        let locations = LocationDirectory::default();
        assert!(locations.municipalities("Atlantis").is_empty());
        assert!(locations.barangays("Atlantis", "Nowhere").is_empty());
    }
}
