//! Frontend module for the `CatalogPanel` application.

pub mod components;
pub mod pages;
pub mod services;
