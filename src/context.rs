//! Application Context
//!
//! Session-wide values passed explicitly through Leptos context instead of
//! ambient module state.

use leptos::prelude::*;
use tracing::warn;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// Local storage key holding the bearer token issued at sign-in
const AUTH_TOKEN_KEY: &str = "pantry.authToken";

#[derive(Clone)]
pub struct AppContext {
    /// REST client carrying the member's token
    pub api: ApiClient,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let api = ApiClient::new(config.api_base_url.clone(), stored_auth_token());
        Self { api, config }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn stored_auth_token() -> Option<String> {
    let storage = match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => storage,
        _ => {
            warn!("[AUTH] local storage unavailable, continuing signed out");
            return None;
        }
    };
    storage.get_item(AUTH_TOKEN_KEY).ok().flatten()
}
