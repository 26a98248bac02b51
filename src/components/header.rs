use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="main-header">
            <h1>
                <A href="/">"GitHub Lookup"</A>
            </h1>
        </header>
    }
}
