//! Backend of the application.

pub mod navigation;
pub mod services;
pub mod utils;
