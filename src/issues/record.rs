//! Normalized issue data model.

use std::fmt;

/// Issue state as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueState {
    Open,
    Closed,
    /// Any other state, kept as the tracker spells it.
    Other(String),
}

impl IssueState {
    /// Returns the state string shown in the status column.
    pub fn as_str(&self) -> &str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::Other(state) => state,
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<octocrab::models::IssueState> for IssueState {
    fn from(state: octocrab::models::IssueState) -> Self {
        match state {
            octocrab::models::IssueState::Open => IssueState::Open,
            octocrab::models::IssueState::Closed => IssueState::Closed,
            other => IssueState::Other(tracker_spelling(&other)),
        }
    }
}

/// Returns the wire name of a state, falling back to its lowercased variant name.
fn tracker_spelling(state: &octocrab::models::IssueState) -> String {
    serde_json::to_value(state)
        .ok()
        .and_then(|value| value.as_str().map(String::from))
        .unwrap_or_else(|| format!("{:?}", state).to_lowercase())
}

/// Issue as returned by an [`IssueSource`](super::IssueSource), body still in markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIssue {
    pub number: u64,
    pub html_url: String,
    pub title: String,
    pub state: IssueState,
    pub body: Option<String>,
    pub labels: Vec<String>,
    pub comments_url: String,
}

impl From<octocrab::models::issues::Issue> for RawIssue {
    fn from(issue: octocrab::models::issues::Issue) -> Self {
        Self {
            number: issue.number,
            html_url: issue.html_url.to_string(),
            title: issue.title,
            state: issue.state.into(),
            body: issue.body,
            labels: issue.labels.into_iter().map(|label| label.name).collect(),
            comments_url: issue.comments_url.to_string(),
        }
    }
}

/// One fetched issue with its body rendered to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub number: u64,
    pub url: String,
    pub title: String,
    pub state: IssueState,
    /// Rendered HTML, injected into the page without escaping.
    pub body: String,
    pub labels: Vec<String>,
    pub comments_url: String,
}

impl IssueRecord {
    /// Anchor id of the disclosure element for this issue.
    pub fn anchor_id(&self) -> String {
        format!("issue_{}", self.number)
    }
}

/// Issues fetched under a single vendor label, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorIssueSet {
    pub label: String,
    pub vendor: String,
    pub issues: Vec<IssueRecord>,
}

impl VendorIssueSet {
    /// Element id of the table listing this vendor's issues.
    pub fn table_id(&self) -> String {
        format!("issues_{}", self.vendor)
    }
}
