use crate::github::GithubUser;
use leptos::prelude::*;

#[server]
pub async fn get_github_user(username: String) -> Result<GithubUser, ServerFnError> {
    let state = expect_context::<crate::server::AppState>();

    match state.github.fetch_user(&username).await {
        Ok(user) => {
            tracing::info!(%username, login = %user.login, "fetched GitHub user");
            Ok(user)
        }
        Err(e) => {
            tracing::warn!(%username, error = %e, "GitHub user lookup failed");
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::github::GithubClient;
    use crate::github::fake_api::{TEST_AGENT, spawn_fake_api};
    use crate::server::AppState;
    use leptos::reactive::{computed::ScopedFuture, owner::Owner};
    use std::time::Duration;

    async fn lookup(api_base: String, username: &str) -> Result<GithubUser, ServerFnError> {
        let github = GithubClient::new(api_base, TEST_AGENT, Duration::from_secs(5)).unwrap();
        let username = username.to_string();
        let owner = Owner::new();
        owner
            .with(|| {
                ScopedFuture::new(async move {
                    provide_context(AppState { github });
                    get_github_user(username).await
                })
            })
            .await
    }

    #[tokio::test]
    async fn returns_user_from_context_client() {
        let user = lookup(spawn_fake_api().await, "octocat").await.unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.followers, Some(20));
    }

    #[tokio::test]
    async fn reports_lookup_failure_as_message() {
        let err = lookup(spawn_fake_api().await, "nobody").await.unwrap_err();
        assert!(err.to_string().contains("was not found"), "{err}");
    }
}
