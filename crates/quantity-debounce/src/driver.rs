//! Event loop seam.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// A future run on the host's single-threaded executor.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Timer and task primitives of the host event loop.
///
/// The browser implementation wraps `setTimeout` and the microtask queue;
/// tests drive a tokio `LocalSet` with paused time.
pub trait Driver: 'static {
    /// Handle to a scheduled callback. Dropping it cancels the callback.
    type Timer;

    /// Run `callback` once after `delay`, unless the returned handle is dropped first.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Timer;

    /// Run `task` to completion in the background. Results are not awaited.
    fn spawn(&self, task: LocalTask);
}
