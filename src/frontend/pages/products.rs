//! Product management page.

use crate::backend::services::NewProduct;
use crate::frontend::services::CatalogState;
use dioxus::prelude::*;

#[component]
pub fn Products() -> Element {
    let mut catalog = use_context::<CatalogState>();
    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut stock = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let result = NewProduct::parse(&name.read(), &price.read(), &stock.read())
            .map_err(|e| e.to_string())
            .and_then(|product| catalog.add(product));

        match result {
            Ok(()) => {
                name.set(String::new());
                price.set(String::new());
                stock.set(String::new());
                error.set(None);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let rows: Vec<(u32, String, String, u32)> = catalog
        .catalog
        .read()
        .products()
        .iter()
        .map(|p| (p.id, p.name.clone(), catalog.format_price(p.price), p.stock))
        .collect();

    rsx! {
        h1 { "Productos" }

        div { class: "card",
            form { class: "product-form", onsubmit: on_submit,
                input {
                    placeholder: "Nombre",
                    value: "{name}",
                    oninput: move |e| name.set(e.value())
                }
                input {
                    placeholder: "Precio",
                    value: "{price}",
                    oninput: move |e| price.set(e.value())
                }
                input {
                    placeholder: "Stock",
                    value: "{stock}",
                    oninput: move |e| stock.set(e.value())
                }
                button { class: "primary", r#type: "submit", "Añadir" }
            }
            if let Some(message) = error() {
                div { class: "error-message error-visible", "{message}" }
            }
        }

        div { class: "card",
            table {
                thead {
                    tr {
                        th { "#" }
                        th { "Nombre" }
                        th { "Precio" }
                        th { "Stock" }
                        th {}
                    }
                }
                tbody {
                    for (id, name, price, stock) in rows {
                        tr { key: "{id}",
                            td { "{id}" }
                            td { "{name}" }
                            td { "{price}" }
                            td {
                                class: if stock == 0 { "out-of-stock" } else { "" },
                                "{stock}"
                            }
                            td {
                                button {
                                    class: "small",
                                    onclick: move |_| {
                                        if let Err(message) = catalog.adjust_stock(id, -1) {
                                            error.set(Some(message));
                                        }
                                    },
                                    "-"
                                }
                                button {
                                    class: "small",
                                    onclick: move |_| {
                                        if let Err(message) = catalog.adjust_stock(id, 1) {
                                            error.set(Some(message));
                                        }
                                    },
                                    "+"
                                }
                                button {
                                    class: "danger small",
                                    onclick: move |_| catalog.remove(id),
                                    "Eliminar"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
