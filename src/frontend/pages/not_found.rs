use crate::backend::utils::route::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::debug!("No route for {path}");

    rsx! {
        div { class: "content",
            h1 { "Página no encontrada" }
            p { "No existe ninguna página en {path}." }
            Link { to: Route::DashboardHome {}, "Volver al panel" }
        }
    }
}
