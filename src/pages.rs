//! Page generation modules
//!
//! The dashboard is the only page. It is assembled from the shared
//! components in the components module.

pub mod dashboard;
