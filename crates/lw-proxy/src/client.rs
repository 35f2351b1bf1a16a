use reqwest::{Client, redirect::Policy};

/// HTTP client for talking to the backend.
///
/// Redirects are never followed: the caller receives the backend's `3xx`
/// and `Location` unchanged.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder().redirect(Policy::none()).build()
}
