//! Page components rendered by the router.

pub mod catalog;
pub mod home;
pub mod login;
pub mod not_found;
pub mod products;

pub use catalog::Catalog;
pub use home::DashboardHome;
pub use login::Login;
pub use not_found::NotFound;
pub use products::Products;
