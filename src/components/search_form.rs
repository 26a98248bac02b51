use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Builds the profile route for a typed username, or `None` when there is
/// nothing to look up.
pub fn user_path(input: &str) -> Option<String> {
    let username = input.trim();
    if username.is_empty() {
        return None;
    }
    Some(format!("/user/{}", urlencoding::encode(username)))
}

#[component]
pub fn SearchForm() -> impl IntoView {
    let (user_input, set_user_input) = signal(String::new());
    let navigate = use_navigate();

    // Navigate instead of linking so the URL carries whatever was typed.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match user_path(&user_input.get()) {
            Some(path) => {
                tracing::debug!(%path, "navigating to user profile");
                navigate(&path, Default::default());
            }
            None => tracing::debug!("ignoring empty username"),
        }
    };

    view! {
        <div class="search-page">
            <h2>"Enter a GitHub username"</h2>
            <form on:submit=on_submit>
                <input
                    type="text"
                    class="search-page__input"
                    prop:value=user_input
                    on:input=move |ev| set_user_input.set(event_target_value(&ev))
                />
                <button type="submit" class="search-page__button">
                    "Search"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::user_path;

    #[test]
    fn user_path_for_plain_username() {
        assert_eq!(user_path("octocat"), Some("/user/octocat".to_string()));
    }

    #[test]
    fn user_path_trims_surrounding_whitespace() {
        assert_eq!(user_path("  octocat \n"), Some("/user/octocat".to_string()));
    }

    #[test]
    fn user_path_encodes_reserved_characters() {
        assert_eq!(
            user_path("foo bar/baz"),
            Some("/user/foo%20bar%2Fbaz".to_string())
        );
    }

    #[test]
    fn user_path_rejects_blank_input() {
        assert_eq!(user_path(""), None);
        assert_eq!(user_path("   "), None);
    }
}
