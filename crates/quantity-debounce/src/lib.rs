//! Quantity Debounce
//!
//! Coalesces rapid quantity taps into one backend call per idle period.
//! The displayed value stays optimistic and is reconciled with the server's
//! answer, including taps made while the request was in flight.
//!
//! Layers:
//! - reconcile: pure arithmetic
//! - session: synchronous state machine for one item
//! - controller: timer, transport and subscriber orchestration
//! - driver / transport: host seams (event loop, network)

mod controller;
mod driver;
mod error;
mod reconcile;
mod session;
mod transport;

pub use controller::{DebounceConfig, DebounceController, DEFAULT_DEBOUNCE};
pub use driver::{Driver, LocalTask};
pub use error::FlushError;
pub use reconcile::{apply_delta, reconcile};
pub use session::{AdjustmentSession, FlushTicket, Phase, SessionSnapshot};
pub use transport::FlushTransport;
