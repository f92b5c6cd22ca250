//! Route table, navigation guard and the transition pipeline tying them together.

pub mod guard;
pub mod table;

pub use guard::{Decision, SESSION_KEY, Session};
pub use table::{Resolution, View};

/// Upper bound on redirects followed by a single navigation.
const MAX_REDIRECTS: usize = 8;

/// Where a navigation ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render { path: String, views: Vec<View> },
    NotFound { path: String },
}

impl Outcome {
    pub fn path(&self) -> &str {
        match self {
            Self::Render { path, .. } | Self::NotFound { path } => path,
        }
    }

    /// Innermost view, if any.
    pub fn leaf(&self) -> Option<View> {
        match self {
            Self::Render { views, .. } => views.last().copied(),
            Self::NotFound { .. } => None,
        }
    }
}

/// Runs a transition to `path`: table redirects first, then the guard,
/// then view resolution.
pub fn navigate(path: &str, session: &Session) -> Outcome {
    navigate_with(path, session, table::resolve)
}

/// [`navigate`] against any resolver. The shipped table never chains
/// redirects, so only a custom resolver can hit `MAX_REDIRECTS`.
pub fn navigate_with(
    path: &str,
    session: &Session,
    resolve: impl Fn(&str) -> Option<Resolution>,
) -> Outcome {
    let mut current = path.to_string();

    for _ in 0..=MAX_REDIRECTS {
        let resolved = resolve(&current);

        if let Some(Resolution::Redirect(to)) = resolved {
            current = to.to_string();
            continue;
        }

        if let Decision::Redirect(to) = guard::check(&current, session) {
            current = to.to_string();
            continue;
        }

        return match resolved {
            Some(Resolution::Views(views)) => Outcome::Render {
                path: current,
                views,
            },
            _ => Outcome::NotFound { path: current },
        };
    }

    log::warn!("Too many redirects while navigating to {path}");
    Outcome::NotFound { path: current }
}
