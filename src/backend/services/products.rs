//! Product catalog shown in the dashboard.

use crate::simple_error;
use crate::utils::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::fs;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub updated_at: DateTime<Utc>,
}

/// Form input for a new product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl NewProduct {
    /// Parses raw form fields.
    pub fn parse(name: &str, price: &str, stock: &str) -> Result<Self> {
        let price = price
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| simple_error!("El precio debe ser un número"))?;
        let stock = if stock.trim().is_empty() {
            0
        } else {
            stock
                .trim()
                .parse::<u32>()
                .map_err(|_| simple_error!("El stock debe ser un número entero"))?
        };
        Ok(Self {
            name: name.trim().to_string(),
            price,
            stock,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl ProductCatalog {
    /// Catalog used before anything has been saved.
    pub fn seed() -> Self {
        let now = Utc::now();
        let products = [
            ("Café molido 500g", 6.5, 40),
            ("Té verde 20 sobres", 3.2, 25),
            ("Azúcar moreno 1kg", 2.1, 60),
            ("Galletas de avena", 2.8, 0),
        ]
        .into_iter()
        .zip(1..)
        .map(|((name, price, stock), id)| Product {
            id,
            name: name.to_string(),
            price,
            stock,
            updated_at: now,
        })
        .collect();
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn add(&mut self, product: NewProduct) -> Result<&Product> {
        let name = product.name.trim();
        if name.is_empty() {
            return Err(simple_error!("El nombre del producto no puede estar vacío"));
        }
        if !product.price.is_finite() {
            return Err(simple_error!("El precio debe ser un número finito"));
        }
        if product.price < 0.0 {
            return Err(simple_error!("El precio no puede ser negativo"));
        }
        if self
            .products
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name))
        {
            return Err(simple_error!("Ya existe un producto llamado '{}'", name));
        }

        let id = self
            .products
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| simple_error!("No quedan identificadores de producto libres"))?;
        self.products.push(Product {
            id,
            name: name.to_string(),
            price: product.price,
            stock: product.stock,
            updated_at: Utc::now(),
        });
        log::info!("Added product {id} ({name})");

        Ok(&self.products[self.products.len() - 1])
    }

    /// Returns whether a product was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        before != self.products.len()
    }

    /// Changes stock by `delta`, refusing to go below zero.
    pub fn adjust_stock(&mut self, id: u32, delta: i64) -> Result<u32> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| simple_error!("Producto desconocido: {}", id))?;

        let stock = i64::from(product.stock) + delta;
        let stock = u32::try_from(stock).map_err(|_| simple_error!("El stock no puede ser negativo"))?;
        product.stock = stock;
        product.updated_at = Utc::now();
        Ok(stock)
    }

    /// Products whose name contains `query`, case-insensitively.
    pub fn filter(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Loads the catalog; a missing file yields the seed catalog.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::seed());
        }
        let json = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Writes to a sibling temp file first, then renames it over `path`.
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, path).await?;
        Ok(())
    }
}

/// On-disk home of the catalog.
///
/// Saves are numbered when requested and written one at a time; a save
/// older than the last one written is dropped.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
    requested: Arc<AtomicU64>,
    written: Arc<Mutex<u64>>,
    writable: Arc<AtomicBool>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            requested: Arc::new(AtomicU64::new(0)),
            written: Arc::new(Mutex::new(0)),
            writable: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    pub fn is_writable(&self) -> bool {
        self.writable.load(Ordering::Acquire)
    }

    /// Loads the catalog. An unreadable file is moved to the backup path and
    /// the seed catalog is returned; if the move fails, saving is disabled so
    /// the file is never overwritten.
    pub async fn load(&self) -> ProductCatalog {
        match ProductCatalog::load(&self.path).await {
            Ok(catalog) => catalog,
            Err(e) => {
                let backup = self.backup_path();
                log::error!("Failed to load catalog {}: {e}", self.path.display());
                match fs::rename(&self.path, &backup).await {
                    Ok(()) => log::warn!("Moved unreadable catalog to {}", backup.display()),
                    Err(e) => {
                        log::error!("Failed to back up catalog, saving disabled: {e}");
                        self.writable.store(false, Ordering::Release);
                    }
                }
                ProductCatalog::seed()
            }
        }
    }

    /// Reserves the number of the next save.
    pub fn next_save(&self) -> u64 {
        self.requested.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Writes `catalog` as save number `generation`. Returns `false` when it
    /// was skipped because a newer save already landed or saving is disabled.
    pub async fn save(&self, generation: u64, catalog: &ProductCatalog) -> Result<bool> {
        if !self.is_writable() {
            return Ok(false);
        }
        let mut written = self.written.lock().await;
        if generation <= *written {
            log::debug!("Skipping catalog save {generation}, {} already written", *written);
            return Ok(false);
        }
        catalog.save(&self.path).await?;
        *written = generation;
        Ok(true)
    }
}
