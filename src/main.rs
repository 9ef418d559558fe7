use anyhow::{Context, Result};
use platform_tilt::{
    Config, GitHubIssues, IssueFetcher, REPO_NAME, REPO_OWNER, VENDORS, build_dashboard,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes compact log output, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    if config.token().is_none() {
        warn!("No GitHub token configured, using unauthenticated requests");
    }

    let source = GitHubIssues::new(config.token(), REPO_OWNER, REPO_NAME)
        .context("Failed to create GitHub client")?;
    let fetcher = IssueFetcher::new(source);

    info!(repo = %format!("{}/{}", REPO_OWNER, REPO_NAME), "Building dashboard");
    build_dashboard(&fetcher, VENDORS, &config.output).await?;

    if config.open {
        open::that(&config.output)
            .with_context(|| format!("Failed to open {}", config.output.display()))?;
    }

    Ok(())
}
