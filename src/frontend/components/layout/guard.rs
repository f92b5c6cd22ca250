//! Layout wrapping every route with the navigation guard.

use crate::backend::navigation;
use crate::backend::utils::route::Route;
use crate::frontend::services::SessionState;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator, use_route};

#[component]
pub fn RouteGuard() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let session = use_context::<SessionState>();

    let path = route.guard_path();
    let outcome = navigation::navigate(&path, &session.snapshot());

    if outcome.path() != path {
        nav.replace(outcome.path());
        return rsx! { div {} };
    }

    log::debug!("Showing {:?} at {path}", outcome.leaf());
    rsx! { Outlet::<Route> {} }
}
