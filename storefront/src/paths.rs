//! StorePaths - data directory layout
//!
//! Centralizes the paths the storefront reads and writes.
//!
//! ```text
//! {data-dir}/
//! ├── store.redb                      # persisted collections
//! └── data/
//!     ├── product-variants.json       # static variant catalog
//!     ├── philippines-locations.json  # full location dataset
//!     └── philippines-provinces.json  # provinces-only fallback
//! ```

use std::path::{Path, PathBuf};

/// Data-directory layout for the storefront
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Data directory root
    base: PathBuf,
}

impl StorePaths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Key-value database: {base}/store.redb
    pub fn store_db_file(&self) -> PathBuf {
        self.base.join("store.redb")
    }

    /// Reference data directory: {base}/data/
    pub fn data_dir(&self) -> PathBuf {
        self.base.join("data")
    }

    /// Static variant catalog: {base}/data/product-variants.json
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir().join("product-variants.json")
    }

    /// Full location dataset: {base}/data/philippines-locations.json
    pub fn locations_file(&self) -> PathBuf {
        self.data_dir().join("philippines-locations.json")
    }

    /// Provinces-only fallback: {base}/data/philippines-provinces.json
    pub fn provinces_file(&self) -> PathBuf {
        self.data_dir().join("philippines-provinces.json")
    }

    /// Ensure the directory tree exists.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.data_dir())
    }
}
