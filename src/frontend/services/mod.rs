//! Frontend services shared through the component context.

pub mod context;

pub use context::{CatalogState, SessionState};
