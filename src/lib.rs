//! Static dashboard of vendor-labeled GitHub issues.

pub mod components;
mod config;
mod format;
mod issues;
mod markdown;
mod output;
pub mod pages;
mod pipeline;

pub use config::Config;
pub use issues::{
    FetchError, GitHubIssues, IssueFetcher, IssueRecord, IssueSource, IssueState, RawIssue,
    VendorIssueSet, vendor_label,
};
pub use markdown::{MarkdownRenderer, rewrite_escaped_images};
pub use output::{render_document, write_output};
pub use pages::dashboard::assemble_page;
pub use pipeline::{REPO_NAME, REPO_OWNER, VENDORS, build_dashboard};
