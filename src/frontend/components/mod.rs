//! UI components and layouts.

pub mod layout;
