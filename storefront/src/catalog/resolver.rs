//! Variant selection and resolution
//!
//! A [`VariantSelection`] is the state behind a "Select Options" dialog:
//! one product, its catalog variants, and at most one chosen color and
//! size. [`resolve`](VariantSelection::resolve) turns a complete
//! selection into a cart candidate, or reports which choice is missing.

use crate::catalog::variants::{ColorOption, ProductVariants, VariantCatalog};
use shared::models::{CartCandidate, ProductRef};
use shared::util::variant_identity;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantError {
    #[error("Please select a color")]
    ColorNotSelected,
    #[error("Please select a size")]
    SizeNotSelected,
    #[error("Unknown color '{0}'")]
    UnknownColor(String),
    #[error("Unknown size '{0}'")]
    UnknownSize(String),
}

/// A size paired with the price it resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeOption {
    pub size: String,
    pub price: f64,
}

/// In-progress variant choice for one product.
#[derive(Debug, Clone)]
pub struct VariantSelection {
    product: ProductRef,
    variants: ProductVariants,
    selected_color: Option<String>,
    selected_size: Option<String>,
}

/// Swatches offered when the catalog has no entry for a product.
fn default_variants() -> ProductVariants {
    ProductVariants {
        colors: vec![
            ColorOption {
                name: "Black".to_string(),
                hex: "#000000".to_string(),
                image: None,
            },
            ColorOption {
                name: "White".to_string(),
                hex: "#ffffff".to_string(),
                image: None,
            },
        ],
        sizes: None,
        base_prices: Default::default(),
    }
}

impl VariantSelection {
    /// Start a selection for a product. Products the catalog does not
    /// know get a default two-swatch color list and no sizes.
    pub fn begin(product: ProductRef, catalog: &VariantCatalog) -> Self {
        let variants = catalog
            .variants_for(&product.name)
            .cloned()
            .unwrap_or_else(default_variants);
        Self {
            product,
            variants,
            selected_color: None,
            selected_size: None,
        }
    }

    pub fn color_options(&self) -> &[ColorOption] {
        &self.variants.colors
    }

    /// Whether a size must be chosen before the selection can resolve.
    pub fn has_sizes(&self) -> bool {
        self.variants.sizes.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// Sizes in catalog order, each with its resolved price.
    pub fn size_options(&self) -> Vec<SizeOption> {
        let Some(sizes) = &self.variants.sizes else {
            return Vec::new();
        };
        sizes
            .iter()
            .map(|size| SizeOption {
                size: size.clone(),
                price: self.variants.price_for(size, self.product.price),
            })
            .collect()
    }

    pub fn select_color(&mut self, name: &str) -> Result<(), VariantError> {
        if !self.variants.colors.iter().any(|c| c.name == name) {
            return Err(VariantError::UnknownColor(name.to_string()));
        }
        self.selected_color = Some(name.to_string());
        Ok(())
    }

    pub fn select_size(&mut self, size: &str) -> Result<(), VariantError> {
        let known = self
            .variants
            .sizes
            .as_ref()
            .is_some_and(|sizes| sizes.iter().any(|s| s == size));
        if !known {
            return Err(VariantError::UnknownSize(size.to_string()));
        }
        self.selected_size = Some(size.to_string());
        Ok(())
    }

    /// Resolve a complete selection into a cart candidate.
    ///
    /// A color is always required; a size only when the product has
    /// sizes. Price follows the chosen size's base price, image follows
    /// the chosen color's override when present.
    pub fn resolve(&self) -> Result<CartCandidate, VariantError> {
        let color = self
            .selected_color
            .as_deref()
            .ok_or(VariantError::ColorNotSelected)?;

        if self.has_sizes() && self.selected_size.is_none() {
            return Err(VariantError::SizeNotSelected);
        }
        let size = self.selected_size.as_deref();

        let price = match size {
            Some(size) => self.variants.price_for(size, self.product.price),
            None => self.product.price,
        };

        let image = self
            .variants
            .colors
            .iter()
            .find(|c| c.name == color)
            .and_then(|c| c.image.clone())
            .unwrap_or_else(|| self.product.image.clone());

        Ok(CartCandidate {
            id: variant_identity(&self.product.id, color, size),
            name: self.product.name.clone(),
            price,
            image,
            color: color.to_string(),
            size: size.map(str::to_string),
        })
    }
}
