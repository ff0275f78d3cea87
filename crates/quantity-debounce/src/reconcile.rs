//! Reconciliation arithmetic.
//!
//! Kept free of any state so the merge rule can be checked in isolation.
//! All arithmetic saturates at the `i64` bounds.

/// Apply a tap to a quantity.
pub fn apply_delta(quantity: i64, delta: i64) -> i64 {
    quantity.saturating_add(delta)
}

/// Merge an authoritative server result with local edits made after the
/// flush began.
///
/// `current_local - baseline - delta_sent` is exactly what was tapped while
/// the request was in flight; it is carried on top of `server_result`.
pub fn reconcile(baseline: i64, delta_sent: i64, server_result: i64, current_local: i64) -> i64 {
    let additional = current_local
        .saturating_sub(baseline)
        .saturating_sub(delta_sent);
    server_result.saturating_add(additional)
}
