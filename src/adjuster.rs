//! Quantity Adjuster Hook
//!
//! Binds a debounce controller to the reactive scope of the view that
//! mounts it.

use leptos::ev;
use leptos::prelude::*;
use quantity_debounce::{DebounceConfig, DebounceController, SessionSnapshot};
use tracing::info;

use crate::api::HttpFlushTransport;
use crate::context::use_app_context;
use crate::driver::BrowserDriver;
use crate::models::InventoryItem;
use crate::store::{store_set_quantity, use_app_store};

type Controller = DebounceController<HttpFlushTransport, BrowserDriver>;

/// Handle returned by [`use_quantity_adjuster`]
#[derive(Clone, Copy)]
pub struct QuantityAdjuster {
    /// Latest session snapshot
    pub state: ReadSignal<SessionSnapshot>,
    controller: StoredValue<Controller, LocalStorage>,
}

impl QuantityAdjuster {
    pub fn adjust(&self, delta: i64) {
        self.controller.with_value(|c| c.adjust(delta));
    }

    pub fn retry(&self) {
        self.controller.with_value(|c| c.request_retry());
    }

    pub fn dismiss_error(&self) {
        self.controller.with_value(|c| c.clear_error());
    }
}

/// Debounced stock adjustments for the item shown by the calling view.
///
/// `initial` seeds the first session; later changes of `item`'s id switch
/// sessions, flushing whatever the outgoing item still has pending. The
/// controller is dropped together with the calling scope, and its drop
/// fires the final flush.
pub fn use_quantity_adjuster(
    initial: InventoryItem,
    item: Signal<Option<InventoryItem>>,
) -> QuantityAdjuster {
    let ctx = use_app_context();
    let store = use_app_store();

    let (state, set_state) = signal(SessionSnapshot::new(initial.id.clone(), initial.quantity));

    let controller = DebounceController::new(
        HttpFlushTransport::new(ctx.api.clone()),
        BrowserDriver,
        DebounceConfig {
            delay: ctx.config.debounce_delay(),
        },
        initial.id,
        initial.quantity,
    );
    controller.subscribe(move |snapshot| {
        store_set_quantity(&store, &snapshot.item_id, snapshot.server_quantity);
        let _ = set_state.try_set(snapshot.clone());
    });
    let controller = StoredValue::new_local(controller);

    Effect::new(move |_| {
        let Some((id, quantity)) =
            item.with(|item| item.as_ref().map(|i| (i.id.clone(), i.quantity)))
        else {
            return;
        };
        controller.with_value(|c| {
            if c.snapshot().item_id != id {
                info!("[ADJUST] switching to item {}", id);
                c.switch_item(id, quantity);
            }
        });
    });

    // Leaving the page: send what is pending and ask the browser to confirm
    let handle = window_event_listener(ev::beforeunload, move |ev| {
        let pending = controller
            .try_with_value(|c| {
                let pending = c.has_pending();
                if pending {
                    c.request_flush();
                }
                pending
            })
            .unwrap_or(false);
        if pending {
            ev.prevent_default();
            ev.set_return_value("");
        }
    });
    on_cleanup(move || handle.remove());

    QuantityAdjuster { state, controller }
}
