//! Static product variant catalog
//!
//! Maps product names to their color/size options and per-size prices.
//! Loaded once from a JSON file and read-only afterwards. Colors may be
//! spelled as bare strings or full objects in the source data; both forms
//! normalize to [`ColorOption`] here.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Product '{product}' lists size '{size}' without a base price")]
    MissingBasePrice { product: String, size: String },
}

/// One selectable color: display name, swatch hex, optional per-color
/// image override.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorOption {
    pub name: String,
    pub hex: String,
    pub image: Option<String>,
}

/// Variant data for a single product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductVariants {
    /// Ordered as authored; the order is what the UI presents
    pub colors: Vec<ColorOption>,
    /// `None` for products sold in a single configuration
    pub sizes: Option<Vec<String>>,
    pub base_prices: HashMap<String, f64>,
}

impl ProductVariants {
    /// Price for a size, or the product's own price when the size has no
    /// entry.
    pub fn price_for(&self, size: &str, base_price: f64) -> f64 {
        self.base_prices.get(size).copied().unwrap_or(base_price)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        hex: Option<String>,
        #[serde(default)]
        image: Option<String>,
    },
}

impl From<RawColor> for ColorOption {
    fn from(raw: RawColor) -> Self {
        match raw {
            RawColor::Name(name) => Self {
                name,
                hex: "#000".to_string(),
                image: None,
            },
            RawColor::Full { name, hex, image } => Self {
                name,
                hex: hex.unwrap_or_else(|| "#000".to_string()),
                image,
            },
        }
    }
}

#[derive(Deserialize)]
struct RawVariants {
    colors: Vec<RawColor>,
    #[serde(default)]
    sizes: Option<Vec<String>>,
    #[serde(default, rename = "basePrices")]
    base_prices: Option<HashMap<String, f64>>,
}

/// The full catalog, keyed by product name.
#[derive(Debug, Clone, Default)]
pub struct VariantCatalog {
    products: HashMap<String, ProductVariants>,
}

impl VariantCatalog {
    /// Parse a catalog from JSON, rejecting any product that lists a size
    /// without a matching base price.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, RawVariants> = serde_json::from_str(json)?;

        let mut products = HashMap::with_capacity(raw.len());
        for (name, entry) in raw {
            let base_prices = entry.base_prices.unwrap_or_default();
            if let Some(sizes) = &entry.sizes {
                for size in sizes {
                    if !base_prices.contains_key(size) {
                        return Err(CatalogError::MissingBasePrice {
                            product: name,
                            size: size.clone(),
                        });
                    }
                }
            }
            products.insert(
                name,
                ProductVariants {
                    colors: entry.colors.into_iter().map(ColorOption::from).collect(),
                    sizes: entry.sizes,
                    base_prices,
                },
            );
        }

        Ok(Self { products })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(products = catalog.products.len(), "Variant catalog loaded");
        Ok(catalog)
    }

    /// Variants for a product by display name, if the catalog knows it.
    pub fn variants_for(&self, product_name: &str) -> Option<&ProductVariants> {
        self.products.get(product_name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
