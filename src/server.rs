use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::github::{DEFAULT_API_BASE, GithubClient};

pub const DEFAULT_USER_AGENT: &str = concat!("github-lookup/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Parser)]
#[command(version, about = "Look up GitHub users from the browser")]
pub struct ServerConfig {
    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_BASE", default_value = DEFAULT_API_BASE)]
    pub github_api_base: String,
    /// User-Agent sent with every GitHub request
    #[arg(long, env = "GITHUB_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    /// Timeout for a single GitHub request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Shared with server functions through the Leptos context.
#[derive(Debug, Clone)]
pub struct AppState {
    pub github: GithubClient,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let github = GithubClient::new(
            config.github_api_base.clone(),
            &config.user_agent,
            config.request_timeout(),
        )
        .context("failed to build GitHub client")?;
        Ok(Self { github })
    }
}
