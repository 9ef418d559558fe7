//! Reusable HTML components for the dashboard page
//!
//! This module provides the Maud component functions the dashboard page is
//! assembled from: the document shell, the banner, the per-vendor issue
//! table and the inline interaction script.

pub mod banner;
pub mod issue_table;
pub mod layout;
pub mod script;
