//! Dashboard build pipeline.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::issues::{IssueFetcher, IssueSource};
use crate::output::write_output;
use crate::pages::dashboard::assemble_page;

/// Owner of the tracked repository.
pub const REPO_OWNER: &str = "mozilla";

/// Name of the tracked repository.
pub const REPO_NAME: &str = "platform-tilt";

/// Vendors shown on the dashboard, in display order.
pub const VENDORS: &[&str] = &["apple", "google", "microsoft"];

/// Fetches every vendor, assembles the dashboard and writes it to `output`.
///
/// Vendors are fetched sequentially. Nothing is written unless every vendor
/// returned at least one issue.
///
/// # Arguments
///
/// * `fetcher`: Issue fetcher bound to the tracker
/// * `vendors`: Vendor keys in display order
/// * `output`: Output file path
///
/// # Errors
///
/// Returns error if any vendor fetch fails or has no issues, or if the
/// output cannot be written.
pub async fn build_dashboard<S: IssueSource>(
    fetcher: &IssueFetcher<S>,
    vendors: &[&str],
    output: &Path,
) -> Result<()> {
    let sets = fetcher
        .fetch_all(vendors)
        .await
        .context("Failed to fetch vendor issues")?;

    for set in &sets {
        info!(vendor = %set.vendor, count = set.issues.len(), "Vendor issues ready");
    }

    let document = assemble_page(&sets);
    write_output(document, output).context("Failed to write dashboard")?;

    Ok(())
}
