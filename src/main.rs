mod backend;
mod frontend;
mod utils;

use crate::backend::navigation::Session;
use crate::backend::services::session::load_session;
use crate::backend::services::{CatalogStore, LocalStorage, ProductCatalog};
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::route::Route;
use crate::frontend::services::context::{CatalogState, SessionState};
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();
static STARTUP: OnceLock<Startup> = OnceLock::new();

/// State read from disk before the first render.
struct Startup {
    config: AppConfig,
    storage: LocalStorage,
    session: Session,
    username: Option<String>,
    catalog: ProductCatalog,
    store: CatalogStore,
}

impl Startup {
    async fn load() -> Self {
        let config = AppConfig::load().await;
        let storage = LocalStorage::new(config.storage_path());
        log::debug!("Using storage at {}", storage.path().display());
        let (session, username) = load_session(&storage).await;

        let store = CatalogStore::new(config.catalog_path());
        let catalog = store.load().await;

        log::info!(
            "Loaded {} products, session {}",
            catalog.products().len(),
            if session.is_authenticated() { "active" } else { "inactive" }
        );

        Self {
            config,
            storage,
            session,
            username,
            catalog,
            store,
        }
    }
}

fn main() {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Initialize runtime once
    let rt = RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create runtime")
    });
    let _guard = rt.enter();
    let startup = STARTUP.get_or_init(|| rt.block_on(Startup::load()));

    let window = &startup.config.window;
    let size = LogicalSize::new(window.width, window.height);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(window.title.clone())
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(900.0, 600.0))
                .with_resizable(window.resizable),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let Some(startup) = STARTUP.get() else {
        return rsx! { "Startup state missing" };
    };

    use_context_provider(|| {
        SessionState::new(
            startup.storage.clone(),
            startup.session.clone(),
            startup.username.clone(),
        )
    });
    use_context_provider(|| {
        CatalogState::new(
            startup.catalog.clone(),
            startup.store.clone(),
            startup.config.catalog.currency.clone(),
        )
    });

    rsx! { Router::<Route> {} }
}
