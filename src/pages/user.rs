use crate::components::UserProfile;
use crate::services::user_service::get_github_user;
use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, Debug, PartialEq)]
struct UserParams {
    username: String,
}

#[component]
pub fn UserPage() -> impl IntoView {
    let params = use_params::<UserParams>();
    // The router has already unescaped the segment.
    let username = move || {
        params.with(|p| match p {
            Ok(params) => params.username.clone(),
            Err(_) => String::new(),
        })
    };

    // Refetches whenever the route parameter changes.
    let user = Resource::new(username, get_github_user);

    view! {
        <Title text=username />
        <div class="user-page">
            <Suspense fallback=|| "LOADING...">
                {move || {
                    user.get()
                        .map(|res| match res {
                            Ok(user) => Either::Left(view! { <UserProfile user username=username() /> }),
                            Err(e) => {
                                Either::Right(
                                    view! { <p class="user-page__error">{e.to_string()}</p> },
                                )
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
