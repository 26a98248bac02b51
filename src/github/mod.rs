#[cfg(feature = "ssr")]
pub mod client;

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod fake_api;

#[cfg(feature = "ssr")]
pub use client::{GithubClient, GithubError};

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// The fields of `GET /users/{username}` that the profile view renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GithubUser {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub public_repos: Option<u64>,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub following: Option<u64>,
}

pub fn user_url(api_base: &str, username: &str) -> String {
    format!(
        "{}/users/{}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(username)
    )
}
