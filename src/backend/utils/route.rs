//! Application routing.
//!
//! Declares the same routes as [`crate::backend::navigation::table`]; every
//! route sits under [`RouteGuard`] so the guard runs on each transition.

use crate::frontend::components::layout::{Dashboard, RouteGuard};
use crate::frontend::pages::{Catalog, DashboardHome, Login, NotFound, Products};

use dioxus::prelude::*;
use dioxus_router::Routable;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RouteGuard)]
        #[redirect("/", || Route::Login {})]
        #[route("/login")]
        Login {},
        #[nest("/dashboard")]
            #[layout(Dashboard)]
                #[route("/")]
                DashboardHome {},
                #[route("/productos")]
                Products {},
                #[route("/catalogo")]
                Catalog {},
            #[end_layout]
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Path handed to the guard, without a trailing slash.
    pub fn guard_path(&self) -> String {
        let path = self.to_string();
        match path.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::navigation::View;
    use crate::backend::navigation::table::{Resolution, resolve};

    fn view(route: &Route) -> Option<View> {
        match route {
            Route::Login {} => Some(View::Login),
            Route::DashboardHome {} => Some(View::DashboardHome),
            Route::Products {} => Some(View::Products),
            Route::Catalog {} => Some(View::Catalog),
            Route::NotFound { .. } => None,
        }
    }

    fn parse(path: &str) -> Route {
        path.parse::<Route>()
            .unwrap_or_else(|_| panic!("{path} should parse"))
    }

    #[test]
    fn root_redirects_to_login() {
        assert_eq!(parse("/"), Route::Login {});
    }

    #[test]
    fn routes_agree_with_the_table() {
        for path in ["/login", "/dashboard", "/dashboard/productos", "/dashboard/catalogo"] {
            let Some(Resolution::Views(views)) = resolve(path) else {
                panic!("{path} missing from the table");
            };
            assert_eq!(view(&parse(path)), views.last().copied(), "{path}");
        }
    }

    #[test]
    fn guard_paths_have_no_trailing_slash() {
        assert_eq!(Route::Login {}.guard_path(), "/login");
        assert_eq!(Route::DashboardHome {}.guard_path(), "/dashboard");
        assert_eq!(Route::Products {}.guard_path(), "/dashboard/productos");
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            parse("/ventas/2024"),
            Route::NotFound {
                segments: vec!["ventas".to_string(), "2024".to_string()]
            }
        );
    }
}
