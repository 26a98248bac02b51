use crate::components::search_form::user_path;
use crate::github::GithubUser;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub name: &'static str,
    pub value: Option<u64>,
    pub url: String,
}

/// Stat links are built from the username in the route, not the login
/// GitHub returned.
pub fn stats(user: &GithubUser, username: &str) -> Vec<Stat> {
    let base = user_path(username).unwrap_or_else(|| "/user".to_string());
    vec![
        Stat {
            name: "Public Repos",
            value: user.public_repos,
            url: format!("{base}/repos"),
        },
        Stat {
            name: "Followers",
            value: user.followers,
            url: format!("{base}/followers"),
        },
        Stat {
            name: "Following",
            value: user.following,
            url: format!("{base}/following"),
        },
    ]
}

pub fn profile_title(user: &GithubUser) -> String {
    format!("{} ({})", user.login, user.name.as_deref().unwrap_or_default())
}

#[component]
pub fn UserProfile(user: GithubUser, #[prop(into)] username: String) -> impl IntoView {
    let stats = stats(&user, &username);
    let title = profile_title(&user);
    let avatar_alt = format!("{} avatar", user.login);
    let profile_href = user_path(&user.login).unwrap_or_else(|| "/".to_string());

    view! {
        <div class="user-info">
            <A href=profile_href>
                <div class="user-info__text">
                    <img class="user-info__avatar" src=user.avatar_url alt=avatar_alt />
                    <h2 class="user-info__title">{title}</h2>
                    <p class="user-info__bio">{user.bio}</p>
                </div>
            </A>

            <ul class="user-info__stats">
                {stats.into_iter().map(|stat| view! { <StatItem stat /> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn StatItem(stat: Stat) -> impl IntoView {
    view! {
        <li class="user-info__stat">
            <A href=stat.url>
                <p class="user-info__stat-value">{stat.value}</p>
                <p class="user-info__stat-name">{stat.name}</p>
            </A>
        </li>
    }
}
