//! Session and catalog contexts shared with the component tree.

use crate::backend::navigation::guard::Session;
use crate::backend::services::session::{clear_session, persist_login};
use crate::backend::services::{CatalogStore, LocalStorage, NewProduct, ProductCatalog};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionState {
    pub session: Signal<Session>,
    pub username: Signal<Option<String>>,
    storage: Signal<LocalStorage>,
}

impl SessionState {
    pub fn new(storage: LocalStorage, session: Session, username: Option<String>) -> Self {
        Self {
            session: Signal::new(session),
            username: Signal::new(username),
            storage: Signal::new(storage),
        }
    }

    /// Current session, as the guard sees it.
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    /// Validates the credentials and persists the session flag.
    pub async fn login(&mut self, username: String, password: &str) -> Result<(), String> {
        let storage = self.storage.peek().clone();
        persist_login(&storage, &username, password)
            .await
            .map_err(|e| e.message().to_string())?;

        self.username.set(Some(username));
        self.session.set(Session::authenticated());
        Ok(())
    }

    /// Clears the session flag in memory and on disk.
    pub async fn logout(&mut self) {
        self.session.set(Session::anonymous());
        self.username.set(None);

        let storage = self.storage.peek().clone();
        // Failures are logged per key.
        let _ = clear_session(&storage).await;
    }

    pub fn get_username(&self) -> String {
        self.username
            .read()
            .clone()
            .unwrap_or_else(|| "Administrador".to_string())
    }
}

#[derive(Clone, Copy)]
pub struct CatalogState {
    pub catalog: Signal<ProductCatalog>,
    pub currency: Signal<String>,
    store: Signal<CatalogStore>,
}

impl CatalogState {
    pub fn new(catalog: ProductCatalog, store: CatalogStore, currency: String) -> Self {
        Self {
            catalog: Signal::new(catalog),
            currency: Signal::new(currency),
            store: Signal::new(store),
        }
    }

    pub fn add(&mut self, product: NewProduct) -> Result<(), String> {
        self.catalog
            .write()
            .add(product)
            .map(|_| ())
            .map_err(|e| e.message().to_string())?;
        self.persist();
        Ok(())
    }

    pub fn remove(&mut self, id: u32) {
        if self.catalog.write().remove(id) {
            self.persist();
        }
    }

    pub fn adjust_stock(&mut self, id: u32, delta: i64) -> Result<(), String> {
        self.catalog
            .write()
            .adjust_stock(id, delta)
            .map_err(|e| e.message().to_string())?;
        self.persist();
        Ok(())
    }

    pub fn format_price(&self, price: f64) -> String {
        let currency = self.currency.read();
        format!("{}{price:.2}", &*currency)
    }

    fn persist(&self) {
        let catalog = self.catalog.peek().clone();
        let store = self.store.peek().clone();
        let generation = store.next_save();
        spawn(async move {
            if let Err(e) = store.save(generation, &catalog).await {
                log::error!("Failed to save catalog: {e}");
            }
        });
    }
}
