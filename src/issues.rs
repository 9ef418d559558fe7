//! Vendor issue fetching and normalization.
//!
//! Issues are pulled from the tracker through an [`IssueSource`], grouped
//! under a `vendor: {name}` label, and normalized into [`IssueRecord`] values
//! whose bodies are already rendered to HTML.

mod error;
mod fetch;
mod record;
mod source;

pub use error::FetchError;
pub use fetch::{IssueFetcher, vendor_label};
pub use record::{IssueRecord, IssueState, RawIssue, VendorIssueSet};
pub use source::{GitHubIssues, IssueSource};
