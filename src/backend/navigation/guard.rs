//! Navigation guard.
//!
//! Runs before every route transition and decides whether the destination
//! may be shown or the user has to go through the login page first. The
//! guard only looks at the [`Session`] it is handed, never at storage.

/// Path of the login page, always reachable.
pub const LOGIN_PATH: &str = "/login";

/// Storage key holding the session flag.
pub const SESSION_KEY: &str = "isAuthenticated";

/// The only flag value that counts as logged in.
pub const SESSION_VALUE: &str = "true";

/// Snapshot of the persisted session flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    flag: Option<String>,
}

impl Session {
    pub fn new(flag: Option<String>) -> Self {
        Self { flag }
    }

    pub fn authenticated() -> Self {
        Self::new(Some(SESSION_VALUE.to_string()))
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Raw flag value as read from storage.
    pub fn flag(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Anything other than the exact string `"true"` is logged out.
    pub fn is_authenticated(&self) -> bool {
        self.flag() == Some(SESSION_VALUE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
}

/// Decides a transition to `destination` for the given session.
pub fn check(destination: &str, session: &Session) -> Decision {
    if destination == LOGIN_PATH || session.is_authenticated() {
        Decision::Allow
    } else {
        log::debug!(
            "Blocked navigation to {destination} (flag: {:?})",
            session.flag()
        );
        Decision::Redirect(LOGIN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sessions() -> Vec<Session> {
        vec![
            Session::anonymous(),
            Session::authenticated(),
            Session::new(Some("false".to_string())),
            Session::new(Some(String::new())),
            Session::new(Some("{corrupted".to_string())),
        ]
    }

    #[test]
    fn login_is_always_allowed() {
        for session in sessions() {
            assert_eq!(check(LOGIN_PATH, &session), Decision::Allow, "{session:?}");
        }
    }

    #[test]
    fn other_paths_need_the_exact_flag() {
        let paths = ["/", "/dashboard", "/dashboard/productos", "/nowhere", "/login/"];
        for path in paths {
            for session in sessions() {
                let expected = if session.is_authenticated() {
                    Decision::Allow
                } else {
                    Decision::Redirect(LOGIN_PATH)
                };
                assert_eq!(check(path, &session), expected, "{path} {session:?}");
            }
        }
    }

    #[test]
    fn flag_comparison_is_exact() {
        for value in ["TRUE", "True", " true", "true ", "1", "yes"] {
            let session = Session::new(Some(value.to_string()));
            assert!(!session.is_authenticated(), "{value}");
            assert_eq!(check("/dashboard", &session), Decision::Redirect(LOGIN_PATH));
        }
    }

    #[test]
    fn missing_flag_redirects_dashboard() {
        assert_eq!(
            check("/dashboard", &Session::anonymous()),
            Decision::Redirect(LOGIN_PATH)
        );
    }
}
