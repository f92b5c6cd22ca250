//! Core services.

pub mod products;
pub mod session;
pub mod storage;

pub use products::{CatalogStore, NewProduct, Product, ProductCatalog};
pub use storage::LocalStorage;
