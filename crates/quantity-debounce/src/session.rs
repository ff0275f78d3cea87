//! Adjustment Session
//!
//! Synchronous state machine for one item. All transitions are plain method
//! calls; the controller decides when they happen.

use crate::error::FlushError;
use crate::reconcile::{apply_delta, reconcile};

/// Observable phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Display matches the last confirmed quantity
    Idle,
    /// Unflushed taps, sent by the debounce timer or a forced flush.
    /// A dismissed failure waits here for the next tap.
    Pending,
    /// A flush request is outstanding
    Flushing,
    /// The last flush failed; its delta is re-armed for retry
    Failed,
}

/// Immutable copy of a session, published to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub item_id: String,
    /// Last value confirmed by the backend
    pub server_quantity: i64,
    /// What the UI displays
    pub local_quantity: i64,
    /// Net change not yet handed to a flush
    pub pending_delta: i64,
    pub is_flushing: bool,
    pub last_error: Option<FlushError>,
}

impl SessionSnapshot {
    /// Snapshot of a freshly mounted session
    pub fn new(item_id: impl Into<String>, quantity: i64) -> Self {
        AdjustmentSession::new(item_id, quantity).snapshot()
    }

    pub fn phase(&self) -> Phase {
        if self.is_flushing {
            Phase::Flushing
        } else if self.last_error.is_some() {
            Phase::Failed
        } else if self.pending_delta != 0 {
            Phase::Pending
        } else {
            Phase::Idle
        }
    }
}

/// Values captured when a flush begins.
///
/// Reconciliation is computed against these, never against live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushTicket {
    pub item_id: String,
    /// Delta handed to the transport
    pub delta: i64,
    /// `server_quantity` at the moment the flush began
    pub baseline: i64,
}

/// Optimistic quantity state for one item
#[derive(Debug, Clone)]
pub struct AdjustmentSession {
    item_id: String,
    server_quantity: i64,
    local_quantity: i64,
    pending_delta: i64,
    is_flushing: bool,
    last_error: Option<FlushError>,
}

impl AdjustmentSession {
    pub fn new(item_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            item_id: item_id.into(),
            server_quantity: quantity,
            local_quantity: quantity,
            pending_delta: 0,
            is_flushing: false,
            last_error: None,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn pending_delta(&self) -> i64 {
        self.pending_delta
    }

    pub fn is_flushing(&self) -> bool {
        self.is_flushing
    }

    pub fn last_error(&self) -> Option<&FlushError> {
        self.last_error.as_ref()
    }

    /// Apply a tap optimistically. Returns false for a zero delta, which
    /// changes nothing.
    pub fn apply(&mut self, delta: i64) -> bool {
        if delta == 0 {
            return false;
        }
        self.local_quantity = apply_delta(self.local_quantity, delta);
        self.pending_delta = apply_delta(self.pending_delta, delta);
        self.last_error = None;
        true
    }

    /// Start a flush: capture the pending delta and baseline, then reset the
    /// live delta so taps made during the request accumulate afresh.
    ///
    /// `None` when there is nothing to send or a flush is already outstanding.
    pub fn begin_flush(&mut self) -> Option<FlushTicket> {
        if self.pending_delta == 0 || self.is_flushing {
            return None;
        }
        let ticket = FlushTicket {
            item_id: self.item_id.clone(),
            delta: self.pending_delta,
            baseline: self.server_quantity,
        };
        self.pending_delta = 0;
        self.is_flushing = true;
        self.last_error = None;
        Some(ticket)
    }

    /// Settle the flush started with `ticket`.
    ///
    /// On failure the sent delta is added back to whatever accumulated
    /// meanwhile; `local_quantity` is left untouched either way except for
    /// reconciliation on success.
    pub fn finish_flush(&mut self, ticket: &FlushTicket, outcome: Result<i64, FlushError>) {
        self.is_flushing = false;
        match outcome {
            Ok(new_quantity) => {
                self.local_quantity =
                    reconcile(ticket.baseline, ticket.delta, new_quantity, self.local_quantity);
                self.server_quantity = new_quantity;
            }
            Err(error) => {
                self.pending_delta = apply_delta(self.pending_delta, ticket.delta);
                self.last_error = Some(error);
            }
        }
    }

    /// Retry is only offered after a failure that left work behind
    pub fn can_retry(&self) -> bool {
        self.last_error.is_some() && self.pending_delta != 0
    }

    /// Dismiss the error. Returns whether anything changed.
    pub fn clear_error(&mut self) -> bool {
        self.last_error.take().is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            item_id: self.item_id.clone(),
            server_quantity: self.server_quantity,
            local_quantity: self.local_quantity,
            pending_delta: self.pending_delta,
            is_flushing: self.is_flushing,
            last_error: self.last_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = AdjustmentSession::new("rice", 4);
        let snap = session.snapshot();
        assert_eq!(snap.server_quantity, 4);
        assert_eq!(snap.local_quantity, 4);
        assert_eq!(snap.phase(), Phase::Idle);
    }

    #[test]
    fn test_zero_delta_changes_nothing() {
        let mut session = AdjustmentSession::new("rice", 4);
        assert!(!session.apply(0));
        assert_eq!(session.pending_delta(), 0);
        assert!(session.begin_flush().is_none());
    }

    #[test]
    fn test_apply_accumulates_and_clears_error() {
        let mut session = AdjustmentSession::new("rice", 4);
        session.apply(2);
        let ticket = session.begin_flush().unwrap();
        session.finish_flush(&ticket, Err(FlushError::new("offline")));
        assert!(session.last_error().is_some());

        session.apply(-1);
        assert!(session.last_error().is_none());
        assert_eq!(session.pending_delta(), 1);
        assert_eq!(session.snapshot().local_quantity, 5);
    }

    #[test]
    fn test_begin_flush_resets_pending_and_guards_reentry() {
        let mut session = AdjustmentSession::new("rice", 10);
        session.apply(3);

        let ticket = session.begin_flush().unwrap();
        assert_eq!(ticket, FlushTicket { item_id: "rice".into(), delta: 3, baseline: 10 });
        assert_eq!(session.pending_delta(), 0);
        assert_eq!(session.snapshot().phase(), Phase::Flushing);

        session.apply(1);
        assert!(session.begin_flush().is_none(), "second flush while one is outstanding");
    }

    #[test]
    fn test_success_reconciles_concurrent_taps() {
        let mut session = AdjustmentSession::new("flour", 5);
        session.apply(2);
        let ticket = session.begin_flush().unwrap();
        session.apply(1);

        session.finish_flush(&ticket, Ok(7));
        let snap = session.snapshot();
        assert_eq!(snap.server_quantity, 7);
        assert_eq!(snap.local_quantity, 8);
        assert_eq!(snap.pending_delta, 1);
        assert_eq!(snap.phase(), Phase::Pending);
    }

    #[test]
    fn test_failure_rearms_delta_and_keeps_display() {
        let mut session = AdjustmentSession::new("milk", 10);
        session.apply(3);
        let ticket = session.begin_flush().unwrap();

        session.finish_flush(&ticket, Err(FlushError::new("502 Bad Gateway")));
        let snap = session.snapshot();
        assert_eq!(snap.pending_delta, 3);
        assert_eq!(snap.local_quantity, 13);
        assert_eq!(snap.server_quantity, 10);
        assert_eq!(snap.phase(), Phase::Failed);
        assert!(session.can_retry());
    }

    #[test]
    fn test_failure_keeps_taps_made_in_flight() {
        let mut session = AdjustmentSession::new("milk", 5);
        session.apply(2);
        let ticket = session.begin_flush().unwrap();
        session.apply(1);

        session.finish_flush(&ticket, Err(FlushError::new("timeout")));
        assert_eq!(session.pending_delta(), 3);
        assert_eq!(session.snapshot().local_quantity, 8);
    }

    #[test]
    fn test_clear_error_keeps_quantities() {
        let mut session = AdjustmentSession::new("milk", 1);
        session.apply(1);
        let ticket = session.begin_flush().unwrap();
        session.finish_flush(&ticket, Err(FlushError::new("offline")));

        assert!(session.clear_error());
        assert!(!session.clear_error());
        let snap = session.snapshot();
        assert_eq!(snap.pending_delta, 1);
        assert_eq!(snap.local_quantity, 2);
        assert_eq!(snap.phase(), Phase::Pending);
        assert!(!session.can_retry());
    }
}
