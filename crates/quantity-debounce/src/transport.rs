//! Network seam.

use async_trait::async_trait;

use crate::error::FlushError;

/// Sends an accumulated delta to the backend.
///
/// `?Send` because implementations run on the browser's only thread and
/// hold non-`Send` HTTP futures. Idempotency and ordering are the
/// implementation's concern: every accepted delta is assumed to be applied
/// exactly once server-side.
#[async_trait(?Send)]
pub trait FlushTransport: 'static {
    /// Apply `delta` to the item and return the authoritative quantity.
    async fn adjust(&self, item_id: &str, delta: i64) -> Result<i64, FlushError>;
}
