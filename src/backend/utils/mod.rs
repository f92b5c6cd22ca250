//! Utility modules for the application backend.

/// Application configuration.
pub mod config;
/// Embedded stylesheets.
pub mod css;
/// Data directory resolution.
pub mod paths;
/// Application routing.
pub mod route;
