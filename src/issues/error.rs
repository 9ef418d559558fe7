//! Issue fetching error types.

use thiserror::Error;

/// Errors that can occur while fetching vendor issues.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The label search returned no issues at all.
    #[error("No issues found for vendor {vendor} (label \"{label}\")")]
    EmptyResult { vendor: String, label: String },

    /// Issue body could not be rendered.
    #[error("Failed to render body of issue #{number}: {source}")]
    Render {
        number: u64,
        #[source]
        source: std::io::Error,
    },

    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),
}
