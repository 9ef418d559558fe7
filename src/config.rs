//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the GitHub API token.
pub(crate) const TOKEN_ENV: &str = "GITHUB_DEV_API_TOKEN";

/// Command line configuration for the dashboard build.
#[derive(Debug, Clone, Parser)]
#[command(name = "platform-tilt", version, about, long_about = None)]
pub struct Config {
    /// Output file
    #[arg(short, long, default_value = "index.html")]
    pub output: PathBuf,

    /// GitHub API token (unauthenticated when absent)
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Open the generated page in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    ///
    /// A `.env` file in the working directory is loaded first, so the token
    /// may be kept there instead of the shell environment.
    pub fn parse() -> Self {
        dotenvy::dotenv().ok();
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the output path is an existing directory.
    pub fn validate(&self) -> Result<()> {
        if self.output.is_dir() {
            bail!("Output path is a directory: {}", self.output.display());
        }

        Ok(())
    }

    /// Returns the API token, treating an empty value as absent.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}
