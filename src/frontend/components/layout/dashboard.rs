//! Dashboard layout: sidebar built from the route table plus the page outlet.

use crate::backend::navigation::table;
use crate::backend::utils::css::ResourceLoader;
use crate::backend::utils::route::Route;
use crate::frontend::services::SessionState;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator, use_route};

/// Sidebar label for a named dashboard route.
fn label(name: &'static str) -> &'static str {
    match name {
        "dashboard" => "Inicio",
        "productos" => "Productos",
        "catalogo" => "Catálogo",
        other => other,
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let session = use_context::<SessionState>();
    let current = route.guard_path();
    let username = session.get_username();
    let items: Vec<(&str, String, bool)> = table::children_of("/dashboard")
        .into_iter()
        .map(|(name, path)| {
            let active = current == path;
            (label(name), path, active)
        })
        .collect();

    let on_logout = move |_: MouseEvent| {
        let mut session = session;
        spawn(async move {
            session.logout().await;
            nav.replace(Route::Login {});
        });
    };

    rsx! {
        style {
            dangerous_inner_html: ResourceLoader::get_css("main")
        }

        div { class: "dashboard",
            aside { class: "sidebar",
                div { class: "brand", "Catalog Panel" }
                div { class: "user", "Sesión: {username}" }
                ul { class: "nav-items",
                    for (label, path, active) in items {
                        li {
                            key: "{label}",
                            class: if active { "nav-item active" } else { "nav-item" },
                            onclick: move |_| { nav.push(path.as_str()); },
                            "{label}"
                        }
                    }
                }
                button { class: "logout-button", onclick: on_logout, "Cerrar sesión" }
            }

            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
