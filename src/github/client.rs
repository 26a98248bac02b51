use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use thiserror::Error;

use super::{GithubUser, user_url};

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("username cannot be empty")]
    EmptyUsername,
    #[error("GitHub user `{0}` was not found")]
    NotFound(String),
    #[error("GitHub responded with {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("request to GitHub failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Issues the single user lookup against the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubClient {
    pub fn new(
        api_base: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        // GitHub rejects requests without a User-Agent.
        let http = reqwest::Client::builder()
            .user_agent(user_agent.to_string())
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub async fn fetch_user(&self, username: &str) -> Result<GithubUser, GithubError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(GithubError::EmptyUsername);
        }

        let url = user_url(&self.api_base, username);
        tracing::debug!(%url, "fetching GitHub user");
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GithubError::NotFound(username.to_string()));
        }
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(GithubError::Status { status, message });
        }

        Ok(response.json::<GithubUser>().await?)
    }
}
