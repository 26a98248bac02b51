pub mod header;
pub mod search_form;
pub mod user_profile;

pub use header::Header;
pub use search_form::SearchForm;
pub use user_profile::UserProfile;
