//! Embedded stylesheets.

use std::{collections::HashMap, sync::OnceLock};

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

macro_rules! embed_css {
    ($name:expr, $path:expr) => {
        (
            $name,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $path)),
        )
    };
}

const STYLES: &[(&str, &str)] = &[
    embed_css!("main", "assets/styles/main.css"),
    embed_css!("auth", "assets/styles/auth.css"),
];

pub struct ResourceLoader;

impl ResourceLoader {
    pub fn get_css(name: &str) -> &'static str {
        CSS_CACHE
            .get_or_init(|| STYLES.iter().copied().collect())
            .get(name)
            .copied()
            .unwrap_or_else(|| {
                log::warn!("Unknown stylesheet: {name}");
                ""
            })
    }

    /// Base stylesheet plus the login page styles.
    pub fn get_auth_css() -> String {
        format!("{}\n{}", Self::get_css("main"), Self::get_css("auth"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_styles_are_available() {
        assert!(ResourceLoader::get_css("main").contains(".sidebar"));
        assert!(ResourceLoader::get_auth_css().contains(".login-card"));
        assert_eq!(ResourceLoader::get_css("missing"), "");
    }
}
