use crate::backend::navigation::table;
use crate::frontend::services::{CatalogState, SessionState};
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn DashboardHome() -> Element {
    let nav = navigator();
    let session = use_context::<SessionState>();
    let catalog = use_context::<CatalogState>();

    let (count, units, out_of_stock, value) = {
        let catalog = catalog.catalog.read();
        let products = catalog.products();
        (
            products.len(),
            products.iter().map(|p| u64::from(p.stock)).sum::<u64>(),
            products.iter().filter(|p| p.stock == 0).count(),
            products.iter().map(|p| p.price * f64::from(p.stock)).sum::<f64>(),
        )
    };
    let value = catalog.format_price(value);
    let username = session.get_username();
    let products_path = table::find_by_name("productos").unwrap_or_default();
    let catalog_path = table::find_by_name("catalogo").unwrap_or_default();

    rsx! {
        h1 { "Hola, {username}" }
        div { class: "stats",
            div { class: "card",
                div { class: "stat-value", "{count}" }
                div { class: "stat-label", "Productos" }
            }
            div { class: "card",
                div { class: "stat-value", "{units}" }
                div { class: "stat-label", "Unidades en stock" }
            }
            div { class: "card",
                div { class: "stat-value", "{out_of_stock}" }
                div { class: "stat-label", "Agotados" }
            }
            div { class: "card",
                div { class: "stat-value", "{value}" }
                div { class: "stat-label", "Valor del inventario" }
            }
        }
        div { class: "card",
            button { class: "primary", onclick: move |_| { nav.push(products_path.as_str()); }, "Gestionar productos" }
            " "
            button { class: "primary", onclick: move |_| { nav.push(catalog_path.as_str()); }, "Ver catálogo" }
        }
    }
}
