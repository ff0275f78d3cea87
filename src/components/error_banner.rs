//! Error Banner Component
//!
//! Inline failure notice with Retry and Dismiss actions.

use leptos::prelude::*;

/// Inline error banner
///
/// # Arguments
/// * `message` - Human-readable failure text
/// * `on_retry` - Re-send the failed change
/// * `on_dismiss` - Hide the banner, keeping the unsent change
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-message">{message}</span>
            <button
                class="retry-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_retry.run(());
                }
            >
                "Retry"
            </button>
            <button
                class="dismiss-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_dismiss.run(());
                }
            >
                "Dismiss"
            </button>
        </div>
    }
}
