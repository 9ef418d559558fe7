//! Vendor issue fetching.

use tracing::{Instrument, info, info_span};

use super::{FetchError, IssueRecord, IssueSource, RawIssue, VendorIssueSet};
use crate::markdown::MarkdownRenderer;

/// Returns the tracker label that classifies issues for `vendor`.
pub fn vendor_label(vendor: &str) -> String {
    format!("vendor: {}", vendor)
}

/// Fetches and normalizes the issues of each vendor.
///
/// The underlying [`IssueSource`] must list issues newest first. The fetcher
/// reverses that order so each [`VendorIssueSet`] starts with the oldest
/// matching issue.
pub struct IssueFetcher<S> {
    source: S,
    renderer: MarkdownRenderer<'static>,
}

impl<S: IssueSource> IssueFetcher<S> {
    /// Creates fetcher reading from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Fetches every issue labeled `vendor: {vendor}`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::EmptyResult`] if the label matches no issue,
    /// [`FetchError::Render`] if a body cannot be rendered, or the source
    /// error if the tracker request fails.
    pub async fn fetch_vendor_issues(&self, vendor: &str) -> Result<VendorIssueSet, FetchError> {
        let label = vendor_label(vendor);
        let span = info_span!("fetch_vendor", vendor, label = %label);

        async {
            info!("Fetching vendor issues");

            let mut raw = self.source.list_labeled(&label).await?;
            if raw.is_empty() {
                return Err(FetchError::EmptyResult {
                    vendor: vendor.to_string(),
                    label: label.clone(),
                });
            }

            raw.reverse();
            let issues = raw
                .into_iter()
                .map(|issue| self.normalize(issue))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(VendorIssueSet {
                label: label.clone(),
                vendor: vendor.to_string(),
                issues,
            })
        }
        .instrument(span)
        .await
    }

    /// Fetches all vendors one after another, in the given order.
    ///
    /// Stops at the first vendor that fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`] encountered.
    pub async fn fetch_all(&self, vendors: &[&str]) -> Result<Vec<VendorIssueSet>, FetchError> {
        let mut sets = Vec::with_capacity(vendors.len());
        for vendor in vendors {
            sets.push(self.fetch_vendor_issues(vendor).await?);
        }
        Ok(sets)
    }

    fn normalize(&self, issue: RawIssue) -> Result<IssueRecord, FetchError> {
        let body = self
            .renderer
            .render(issue.body.as_deref().unwrap_or(""))
            .map_err(|source| FetchError::Render {
                number: issue.number,
                source,
            })?;

        Ok(IssueRecord {
            number: issue.number,
            url: issue.html_url,
            title: issue.title,
            state: issue.state,
            body,
            labels: issue.labels,
            comments_url: issue.comments_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueState;
    use std::collections::HashMap;

    struct StaticSource {
        issues: HashMap<String, Vec<RawIssue>>,
    }

    impl IssueSource for StaticSource {
        async fn list_labeled(&self, label: &str) -> Result<Vec<RawIssue>, FetchError> {
            Ok(self.issues.get(label).cloned().unwrap_or_default())
        }
    }

    fn raw_issue(number: u64, body: Option<&str>) -> RawIssue {
        RawIssue {
            number,
            html_url: format!("https://github.com/mozilla/platform-tilt/issues/{}", number),
            title: format!("Issue {}", number),
            state: IssueState::Open,
            body: body.map(String::from),
            labels: vec!["vendor: apple".to_string(), "security".to_string()],
            comments_url: format!("https://api.github.com/issues/{}/comments", number),
        }
    }

    fn fetcher_with(label: &str, issues: Vec<RawIssue>) -> IssueFetcher<StaticSource> {
        let mut map = HashMap::new();
        map.insert(label.to_string(), issues);
        IssueFetcher::new(StaticSource { issues: map })
    }

    #[test]
    fn test_vendor_label_format() {
        assert_eq!(vendor_label("apple"), "vendor: apple");
    }

    #[tokio::test]
    async fn test_fetch_reverses_tracker_order() {
        // Arrange
        let fetcher = fetcher_with(
            "vendor: apple",
            vec![raw_issue(3, None), raw_issue(2, None), raw_issue(1, None)],
        );

        // Act
        let set = fetcher.fetch_vendor_issues("apple").await.unwrap();

        // Assert
        let numbers: Vec<u64> = set.issues.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(set.label, "vendor: apple");
        assert_eq!(set.vendor, "apple");
    }

    #[tokio::test]
    async fn test_fetch_empty_result_is_error() {
        // Arrange
        let fetcher = fetcher_with("vendor: apple", vec![raw_issue(1, None)]);

        // Act
        let result = fetcher.fetch_vendor_issues("google").await;

        // Assert
        match result {
            Err(FetchError::EmptyResult { vendor, label }) => {
                assert_eq!(vendor, "google");
                assert_eq!(label, "vendor: google");
            }
            other => panic!("Expected empty result error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_normalizes_fields() {
        // Arrange
        let fetcher = fetcher_with("vendor: apple", vec![raw_issue(7, Some("Hello *world*"))]);

        // Act
        let set = fetcher.fetch_vendor_issues("apple").await.unwrap();

        // Assert
        let issue = &set.issues[0];
        assert_eq!(issue.number, 7);
        assert_eq!(issue.url, "https://github.com/mozilla/platform-tilt/issues/7");
        assert_eq!(issue.title, "Issue 7");
        assert_eq!(issue.state, IssueState::Open);
        assert_eq!(issue.body, "<p>Hello <em>world</em></p>\n");
        assert_eq!(issue.labels, vec!["vendor: apple", "security"]);
        assert_eq!(
            issue.comments_url,
            "https://api.github.com/issues/7/comments"
        );
    }

    #[tokio::test]
    async fn test_fetch_renders_markdown_after_image_line() {
        // Arrange
        let fetcher = fetcher_with(
            "vendor: apple",
            vec![raw_issue(4, Some("<img src=\"a.png\" width=\"40\">\nSee **this**"))],
        );

        // Act
        let set = fetcher.fetch_vendor_issues("apple").await.unwrap();

        // Assert
        let body = &set.issues[0].body;
        assert!(body.contains(r#"<img src="a.png" width="40">"#));
        assert!(body.contains("<strong>this</strong>"));
    }

    #[tokio::test]
    async fn test_fetch_missing_body_renders_empty() {
        // Arrange
        let fetcher = fetcher_with("vendor: apple", vec![raw_issue(1, None)]);

        // Act
        let set = fetcher.fetch_vendor_issues("apple").await.unwrap();

        // Assert
        assert_eq!(set.issues[0].body, "");
    }

    #[tokio::test]
    async fn test_fetch_all_stops_at_empty_vendor() {
        // Arrange
        let fetcher = fetcher_with("vendor: apple", vec![raw_issue(1, None)]);

        // Act
        let result = fetcher.fetch_all(&["apple", "google", "microsoft"]).await;

        // Assert
        assert!(matches!(
            result,
            Err(FetchError::EmptyResult { ref vendor, .. }) if vendor == "google"
        ));
    }
}
