//! Product variant catalog and selection

pub mod resolver;
pub mod variants;

pub use resolver::{SizeOption, VariantError, VariantSelection};
pub use variants::{CatalogError, ColorOption, ProductVariants, VariantCatalog};
