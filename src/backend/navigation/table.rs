//! Static route table.
//!
//! Child paths are relative to their parent; an empty child path is the
//! parent's index page.

/// Views a route can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Dashboard,
    DashboardHome,
    Products,
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    View(View),
    /// Unconditional redirect, followed before the guard runs.
    Redirect(&'static str),
}

#[derive(Debug)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: Target,
    pub children: &'static [RouteDescriptor],
}

impl RouteDescriptor {
    const fn view(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name: Some(name),
            target: Target::View(view),
            children: &[],
        }
    }
}

const DASHBOARD_CHILDREN: &[RouteDescriptor] = &[
    RouteDescriptor::view("", "dashboard", View::DashboardHome),
    RouteDescriptor::view("productos", "productos", View::Products),
    RouteDescriptor::view("catalogo", "catalogo", View::Catalog),
];

static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/",
        name: None,
        target: Target::Redirect("/login"),
        children: &[],
    },
    RouteDescriptor::view("/login", "login", View::Login),
    RouteDescriptor {
        path: "/dashboard",
        name: None,
        target: Target::View(View::Dashboard),
        children: DASHBOARD_CHILDREN,
    },
];

pub fn routes() -> &'static [RouteDescriptor] {
    ROUTES
}

/// Result of matching a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Redirect(&'static str),
    /// Matched views, outermost layout first.
    Views(Vec<View>),
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Matches `path` against the table. Trailing slashes are ignored.
pub fn resolve(path: &str) -> Option<Resolution> {
    let segments = segments(path);
    let mut chain = Vec::new();
    match_level(routes(), &segments, &mut chain)
}

fn match_level(
    routes: &'static [RouteDescriptor],
    segments: &[&str],
    chain: &mut Vec<View>,
) -> Option<Resolution> {
    for route in routes {
        let own = self::segments(route.path);
        let Some(rest) = segments.strip_prefix(own.as_slice()) else {
            continue;
        };

        match route.target {
            Target::Redirect(to) if rest.is_empty() => return Some(Resolution::Redirect(to)),
            Target::Redirect(_) => {}
            Target::View(view) => {
                chain.push(view);
                if !route.children.is_empty() {
                    if let Some(found) = match_level(route.children, rest, chain) {
                        return Some(found);
                    }
                }
                if rest.is_empty() {
                    return Some(Resolution::Views(chain.clone()));
                }
                chain.pop();
            }
        }
    }
    None
}

fn join(parent: &str, child: &str) -> String {
    match (parent.trim_end_matches('/'), child) {
        (p, "") if p.is_empty() => "/".to_string(),
        (p, "") => p.to_string(),
        (p, c) if c.starts_with('/') => format!("{p}{c}"),
        (p, c) => format!("{p}/{c}"),
    }
}

/// Full path of the route carrying `name`.
pub fn find_by_name(name: &str) -> Option<String> {
    fn search(routes: &[RouteDescriptor], prefix: &str, name: &str) -> Option<String> {
        routes.iter().find_map(|route| {
            let path = join(prefix, route.path);
            if route.name == Some(name) {
                Some(path)
            } else {
                search(route.children, &path, name)
            }
        })
    }
    search(routes(), "", name)
}

/// Named children of the route at `path`, with their full paths.
pub fn children_of(path: &str) -> Vec<(&'static str, String)> {
    routes()
        .iter()
        .find(|route| route.path == path)
        .map(|route| {
            route
                .children
                .iter()
                .filter_map(|child| child.name.map(|name| (name, join(route.path, child.path))))
                .collect()
        })
        .unwrap_or_default()
}
