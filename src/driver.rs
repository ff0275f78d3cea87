//! Browser Event Loop Driver
//!
//! Debounce timers on `setTimeout`, background flushes on the Leptos local
//! executor.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use quantity_debounce::{Driver, LocalTask};

pub struct BrowserDriver;

impl Driver for BrowserDriver {
    /// Dropping a `Timeout` clears it
    type Timer = Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }

    fn spawn(&self, task: LocalTask) {
        leptos::task::spawn_local(task);
    }
}
