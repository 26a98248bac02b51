use crate::components::SearchForm;
use leptos::prelude::*;
use leptos_meta::Title;

pub mod user;
pub use user::UserPage;

#[component]
pub fn SearchPage() -> impl IntoView {
    view! {
        <Title text="Search" />
        <SearchForm />
    }
}
