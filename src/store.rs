//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{InventoryItem, Member};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Household inventory, as last confirmed by the backend
    pub items: Vec<InventoryItem>,
    /// Item shown in the detail panel
    pub selected_item_id: Option<String>,
    /// Signed-in member (None while loading or signed out)
    pub member: Option<Member>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace an item in the store by ID, appending it if unknown
pub fn store_upsert_item(store: &AppStore, item: InventoryItem) {
    let items_field = store.items();
    let mut items = items_field.write();
    match items.iter().position(|existing| existing.id == item.id) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

/// Record a server-confirmed quantity. Writes only when it changed.
pub fn store_set_quantity(store: &AppStore, item_id: &str, quantity: i64) {
    let changed = store.items().with_untracked(|items| {
        items
            .iter()
            .any(|item| item.id == item_id && item.quantity != quantity)
    });
    if !changed {
        return;
    }
    if let Some(item) = store.items().write().iter_mut().find(|item| item.id == item_id) {
        item.quantity = quantity;
    }
}

/// Look up the selected item
pub fn store_selected_item(store: &AppStore) -> Option<InventoryItem> {
    let id = store.selected_item_id().get()?;
    store.items().with(|items| items.iter().find(|item| item.id == id).cloned())
}

/// Whether the signed-in member may adjust stock
pub fn store_can_adjust(store: &AppStore) -> bool {
    store
        .member()
        .with(|member| member.as_ref().is_some_and(|m| m.role.can_adjust_stock()))
}
