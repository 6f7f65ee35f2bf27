//! Storefront core: cart, orders, favorites, and variant selection over a
//! local embedded key-value store.
//!
//! The crate is the state layer behind a storefront UI. All persistence
//! is synchronous and local; the UI calls in through [`Storefront`] and
//! renders whatever comes back.
//!
//! ```text
//! select_variants ─► VariantSelection ─► CartCandidate
//!                                            │
//!                                      CartStore.add
//!                                            │
//! CheckoutService.submit ─► OrderStore.create (snapshot + clear cart)
//! ```

pub mod catalog;
pub mod checkout;
pub mod paths;
pub mod session;
pub mod storage;
pub mod stores;

pub use catalog::{VariantCatalog, VariantError, VariantSelection};
pub use checkout::{CheckoutError, CheckoutService, LocationDirectory};
pub use paths::StorePaths;
pub use session::SessionStore;
pub use storage::{KvStore, StorageError};
pub use stores::{CartStore, FavoritesStore, OrderStore};

pub use shared::models::{
    Address, CartCandidate, CartItem, FavoriteEntry, Order, OrderStatus, ProductRef, UserProfile,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Entry point owning the store, the variant catalog, and the location
/// reference data. Component handles are cheap to construct; each one
/// clones a shared database handle.
#[derive(Clone)]
pub struct Storefront {
    kv: KvStore,
    catalog: VariantCatalog,
    locations: LocationDirectory,
}

impl Storefront {
    /// Open the on-disk store and load reference data from `paths`.
    ///
    /// A missing or bad catalog file is an error; missing location data
    /// is not, the directory just comes up empty.
    pub fn open(paths: &StorePaths) -> Result<Self, StorefrontError> {
        paths.ensure_dirs()?;
        let kv = KvStore::open(&paths.store_db_file())?;
        let catalog = VariantCatalog::load(&paths.catalog_file())?;
        let locations = LocationDirectory::load(&paths.locations_file(), &paths.provinces_file());
        Ok(Self {
            kv,
            catalog,
            locations,
        })
    }

    /// In-memory store with a caller-supplied catalog and no location
    /// data. Nothing touches the filesystem.
    pub fn open_in_memory(catalog: VariantCatalog) -> Result<Self, StorefrontError> {
        Ok(Self {
            kv: KvStore::open_in_memory()?,
            catalog,
            locations: LocationDirectory::default(),
        })
    }

    pub fn catalog(&self) -> &VariantCatalog {
        &self.catalog
    }

    pub fn locations(&self) -> &LocationDirectory {
        &self.locations
    }

    pub fn session(&self) -> SessionStore {
        SessionStore::new(self.kv.clone())
    }

    pub fn cart(&self) -> CartStore {
        CartStore::new(self.kv.clone())
    }

    pub fn favorites(&self) -> FavoritesStore {
        FavoritesStore::new(self.kv.clone(), self.session())
    }

    pub fn orders(&self) -> OrderStore {
        OrderStore::new(self.kv.clone(), self.session())
    }

    pub fn checkout(&self) -> CheckoutService {
        CheckoutService::new(self.cart(), self.orders(), self.session())
    }

    /// Begin variant selection for a product.
    pub fn select_variants(&self, product: ProductRef) -> VariantSelection {
        VariantSelection::begin(product, &self.catalog)
    }
}
