//! Pantry Frontend App
//!
//! Main application component: inventory list beside the item detail panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::{info, warn};

use crate::components::{InventoryList, ItemDetail};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::load());
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx.clone());
    provide_context(store);

    // Load inventory and the signed-in member on mount
    let api = ctx.api.clone();
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.list_inventory().await {
                Ok(loaded) => {
                    info!("[APP] Loaded {} items", loaded.len());
                    *store.items().write() = loaded;
                }
                Err(e) => warn!("[APP] Failed to load inventory: {}", e),
            }
            match api.current_member().await {
                Ok(member) => {
                    info!("[APP] Signed in as {} ({})", member.name, member.role.label());
                    *store.member().write() = Some(member);
                }
                Err(e) => warn!("[APP] Failed to load member: {}", e),
            }
        });
    });

    let member_label = move || {
        store.member().with(|member| match member {
            Some(m) => format!("{} · {}", m.name, m.role.label()),
            None => "Loading…".to_string(),
        })
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <header class="app-header">
                    <h1>"Pantry"</h1>
                    <span class="member-label">{member_label}</span>
                </header>
                <InventoryList />
            </main>
            <ItemDetail />
        </div>
    }
}
