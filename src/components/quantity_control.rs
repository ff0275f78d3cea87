//! Quantity Control Component
//!
//! − / value / + stepper backed by the debounced adjuster.

use leptos::prelude::*;
use quantity_debounce::{Phase, SessionSnapshot};

use crate::adjuster::use_quantity_adjuster;
use crate::components::ErrorBanner;
use crate::models::InventoryItem;

/// Text shown next to the quantity while a change is unconfirmed
pub fn pending_label(snapshot: &SessionSnapshot) -> String {
    match snapshot.phase() {
        Phase::Flushing => "saving…".to_string(),
        Phase::Pending => format!("unsaved {:+}", snapshot.pending_delta),
        Phase::Failed => format!("not saved {:+}", snapshot.pending_delta),
        Phase::Idle => String::new(),
    }
}

#[component]
pub fn QuantityControl(
    /// Item the control mounts with
    initial: InventoryItem,
    /// Currently selected item; a new id switches sessions
    #[prop(into)] item: Signal<Option<InventoryItem>>,
    #[prop(into)] read_only: Signal<bool>,
) -> impl IntoView {
    let adjuster = use_quantity_adjuster(initial, item);
    let state = adjuster.state;

    let display = move || {
        let quantity = state.with(|s| s.local_quantity);
        item.with(|item| {
            item.as_ref()
                .map(|i| i.format_quantity(quantity))
                .unwrap_or_else(|| quantity.to_string())
        })
    };
    let low_stock = move || {
        let quantity = state.with(|s| s.local_quantity);
        item.with(|item| item.as_ref().is_some_and(|i| i.is_low_stock(quantity)))
    };

    view! {
        <div class=move || if low_stock() { "quantity-control low-stock" } else { "quantity-control" }>
            <button
                class="qty-btn"
                disabled=move || read_only.get()
                on:click=move |_| adjuster.adjust(-1)
            >
                "−"
            </button>
            <span class="qty-value">{display}</span>
            <button
                class="qty-btn"
                disabled=move || read_only.get()
                on:click=move |_| adjuster.adjust(1)
            >
                "+"
            </button>
            <span class="qty-status">{move || state.with(pending_label)}</span>
        </div>
        {move || {
            state
                .with(|s| s.last_error.clone())
                .map(|error| {
                    view! {
                        <ErrorBanner
                            message=error.message().to_string()
                            on_retry=Callback::new(move |_: ()| adjuster.retry())
                            on_dismiss=Callback::new(move |_: ()| adjuster.dismiss_error())
                        />
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantity_debounce::FlushError;

    #[test]
    fn test_pending_label_per_phase() {
        let mut snap = SessionSnapshot::new("milk", 4);
        assert_eq!(pending_label(&snap), "");

        snap.pending_delta = 3;
        snap.local_quantity = 7;
        assert_eq!(pending_label(&snap), "unsaved +3");

        snap.pending_delta = -2;
        assert_eq!(pending_label(&snap), "unsaved -2");

        snap.is_flushing = true;
        assert_eq!(pending_label(&snap), "saving…");

        snap.is_flushing = false;
        snap.last_error = Some(FlushError::new("offline"));
        assert_eq!(pending_label(&snap), "not saved -2");
    }
}
