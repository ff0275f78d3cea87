//! Inventory List Component
//!
//! Household items with their confirmed quantity; clicking a row selects it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::context::use_app_context;
use crate::store::{store_upsert_item, use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <ul class="inventory-list">
            <For
                each=move || store.items().get()
                key=|item| (item.id.clone(), item.quantity)
                children=move |item| {
                    let api = ctx.api.clone();
                    let row_id = item.id.clone();
                    let is_selected = move || {
                        store
                            .selected_item_id()
                            .with(|selected| selected.as_deref() == Some(row_id.as_str()))
                    };
                    let low_stock = item.is_low_stock(item.quantity);
                    let label = item.format_quantity(item.quantity);
                    let id = item.id.clone();

                    // Refresh the item before selecting so the adjuster
                    // starts from the backend's current quantity
                    let select = move |_| {
                        let api = api.clone();
                        let id = id.clone();
                        spawn_local(async move {
                            match api.get_item(&id).await {
                                Ok(fresh) => store_upsert_item(&store, fresh),
                                Err(e) => warn!("[LIST] Failed to refresh item {}: {}", id, e),
                            }
                            *store.selected_item_id().write() = Some(id);
                        });
                    };

                    view! {
                        <li
                            class=move || {
                                let mut class = String::from("inventory-row");
                                if is_selected() {
                                    class.push_str(" selected");
                                }
                                if low_stock {
                                    class.push_str(" low-stock");
                                }
                                class
                            }
                            on:click=select
                        >
                            <span class="item-name">{item.name.clone()}</span>
                            {item.category.clone().map(|c| view! { <span class="item-category">{c}</span> })}
                            <span class="item-quantity">{label}</span>
                            {low_stock.then(|| view! { <span class="low-stock-badge">"Low"</span> })}
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || store.items().with(|items| items.is_empty())>
            <p class="empty-hint">"No items yet."</p>
        </Show>
    }
}
