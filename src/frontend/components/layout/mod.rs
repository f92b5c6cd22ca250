//! Layout components.

pub mod auth;
pub mod dashboard;
pub mod guard;

pub use auth::AuthLayout;
pub use dashboard::Dashboard;
pub use guard::RouteGuard;
