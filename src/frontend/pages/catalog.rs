use crate::frontend::services::CatalogState;
use dioxus::prelude::*;

#[component]
pub fn Catalog() -> Element {
    let catalog = use_context::<CatalogState>();
    let mut query = use_signal(String::new);

    let cards: Vec<(u32, String, String, u32)> = catalog
        .catalog
        .read()
        .filter(&query.read())
        .into_iter()
        .map(|p| (p.id, p.name.clone(), catalog.format_price(p.price), p.stock))
        .collect();
    let empty = cards.is_empty();

    rsx! {
        h1 { "Catálogo" }
        input {
            class: "search",
            placeholder: "Buscar producto...",
            value: "{query}",
            oninput: move |e| query.set(e.value())
        }
        if empty {
            p { "No hay productos que coincidan." }
        }
        div { class: "grid",
            for (id, name, price, stock) in cards {
                div { class: "card", key: "{id}",
                    h3 { "{name}" }
                    div { class: "stat-value", "{price}" }
                    if stock == 0 {
                        div { class: "out-of-stock", "Agotado" }
                    } else {
                        div { class: "stat-label", "{stock} disponibles" }
                    }
                }
            }
        }
    }
}
