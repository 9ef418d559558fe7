//! Issue tracker access.

use octocrab::Octocrab;
use octocrab::models::issues::Issue;
use tracing::debug;

use super::{FetchError, RawIssue};

/// Results per page for the issue listing endpoint.
const ISSUES_PER_PAGE: u8 = 100;

/// Source of label-filtered issues for a fixed repository.
///
/// Implementations must return issues in the tracker's default order,
/// newest first. [`IssueFetcher`](super::IssueFetcher) reverses that order.
pub trait IssueSource {
    /// Returns every issue carrying `label`, across all result pages.
    fn list_labeled(
        &self,
        label: &str,
    ) -> impl Future<Output = Result<Vec<RawIssue>, FetchError>> + Send;
}

/// GitHub issues of one repository, read through the REST API.
pub struct GitHubIssues {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubIssues {
    /// Builds a client for `owner/repo`.
    ///
    /// Without a token the client is unauthenticated and subject to the
    /// lower anonymous rate limit.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(
        token: Option<&str>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }

        Ok(Self::with_client(builder.build()?, owner, repo))
    }

    /// Wraps an already configured client, e.g. one pointed at a GitHub
    /// Enterprise base URI.
    pub fn with_client(
        octocrab: Octocrab,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            octocrab,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl IssueSource for GitHubIssues {
    async fn list_labeled(&self, label: &str) -> Result<Vec<RawIssue>, FetchError> {
        let labels = [label.to_string()];

        let mut page = self
            .octocrab
            .issues(&self.owner, &self.repo)
            .list()
            .labels(&labels)
            .per_page(ISSUES_PER_PAGE)
            .send()
            .await?;

        let mut issues: Vec<RawIssue> = page.take_items().into_iter().map(RawIssue::from).collect();
        let mut next = page.next.take();
        let mut pages = 1;

        while let Some(mut current) = self.octocrab.get_page::<Issue>(&next).await? {
            pages += 1;
            issues.extend(current.take_items().into_iter().map(RawIssue::from));
            next = current.next.take();
        }

        debug!(
            repo = %self.full_name(),
            label,
            pages,
            count = issues.len(),
            "Listed labeled issues"
        );
        Ok(issues)
    }
}
