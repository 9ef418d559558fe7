//! Shared test utilities for integration tests.
//!
//! Provides an in-memory issue source and issue builders used across
//! multiple test files.

use platform_tilt::{FetchError, IssueSource, IssueState, RawIssue, vendor_label};
use std::collections::HashMap;

/// Issue source serving fixed issues per label, in tracker order.
#[derive(Default)]
pub struct StaticSource {
    issues: HashMap<String, Vec<RawIssue>>,
}

impl StaticSource {
    /// Registers issues for a vendor, newest first as the tracker lists them.
    pub fn with_vendor(mut self, vendor: &str, issues: Vec<RawIssue>) -> Self {
        self.issues.insert(vendor_label(vendor), issues);
        self
    }
}

impl IssueSource for StaticSource {
    async fn list_labeled(&self, label: &str) -> Result<Vec<RawIssue>, FetchError> {
        Ok(self.issues.get(label).cloned().unwrap_or_default())
    }
}

/// Builds an open issue with a markdown body.
pub fn raw_issue(vendor: &str, number: u64, title: &str, body: &str) -> RawIssue {
    RawIssue {
        number,
        html_url: format!("https://github.com/mozilla/platform-tilt/issues/{}", number),
        title: title.to_string(),
        state: IssueState::Open,
        body: Some(body.to_string()),
        labels: vec![vendor_label(vendor)],
        comments_url: format!(
            "https://api.github.com/repos/mozilla/platform-tilt/issues/{}/comments",
            number
        ),
    }
}
