use crate::components::Header;
use crate::pages::{SearchPage, UserPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/github-lookup.css" />
                <Title formatter=|text| format!("{} - GitHub Lookup", text) text="Search" />
            </head>

            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Router>
            <div class="main-app">
                <Header />
                <main class="main-content">
                    <Routes fallback=|| "Page not found".into_view()>
                        <Route path=path!("/") view=SearchPage />
                        <Route path=path!("/user/:username") view=UserPage />
                        // Deeper user paths, such as the stat links, still show the profile.
                        <Route path=path!("/user/:username/*rest") view=UserPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
