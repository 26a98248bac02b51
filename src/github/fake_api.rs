//! In-process stand-in for `GET /users/{username}` used by the tests.

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

pub const TEST_AGENT: &str = "github-lookup-tests";

async fn fake_user(
    Path(username): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if agent != TEST_AGENT {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "missing user agent" })),
        );
    }

    match username.as_str() {
        "octocat" => (
            StatusCode::OK,
            Json(json!({
                "login": "octocat",
                "name": "The Octocat",
                "bio": null,
                "avatar_url": "https://avatars.example/octocat",
                "html_url": "https://github.com/octocat",
                "public_repos": 8,
                "followers": 20,
                "following": 9
            })),
        ),
        "limited" => (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "API rate limit exceeded" })),
        ),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" }))),
    }
}

/// Serves the fake API on an ephemeral port and returns its base URL.
pub async fn spawn_fake_api() -> String {
    let router = Router::new().route("/users/{username}", get(fake_user));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
