//! Item Detail Component
//!
//! Right panel: the selected item and its quantity control.

use leptos::prelude::*;

use crate::components::QuantityControl;
use crate::store::{store_can_adjust, store_selected_item, use_app_store};

#[component]
pub fn ItemDetail() -> impl IntoView {
    let store = use_app_store();
    let selected = Signal::derive(move || store_selected_item(&store));
    let read_only = Signal::derive(move || !store_can_adjust(&store));

    view! {
        <aside class="item-detail">
            <Show
                when=move || selected.with(|item| item.is_some())
                fallback=|| view! { <p class="empty-hint">"Select an item to adjust its stock."</p> }
            >
                <h2>{move || selected.with(|item| item.as_ref().map(|i| i.name.clone()))}</h2>
                {selected
                    .get_untracked()
                    .map(|initial| {
                        view! { <QuantityControl initial=initial item=selected read_only=read_only /> }
                    })}
                <Show when=move || read_only.get()>
                    <p class="role-hint">"Only admins can change stock levels."</p>
                </Show>
            </Show>
        </aside>
    }
}
