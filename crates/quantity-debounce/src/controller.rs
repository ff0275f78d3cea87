//! Debounce Controller
//!
//! Owns the current adjustment session, the debounce timer and the
//! subscriber list. Everything runs on one thread: shared state lives in
//! `Rc` + `RefCell`/`Cell`, and no borrow is held across an `.await`.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::driver::Driver;
use crate::session::{AdjustmentSession, SessionSnapshot};
use crate::transport::FlushTransport;

/// Quiet period after the last tap before a flush fires
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    pub delay: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DEBOUNCE,
        }
    }
}

type SharedSession = Rc<RefCell<AdjustmentSession>>;
type Listener = Box<dyn Fn(&SessionSnapshot)>;

/// Debounced, optimistic quantity adjustments for one view.
///
/// The controller lives exactly as long as the view that created it.
/// Dropping it runs [`DebounceController::dispose`], which fires a final
/// best-effort flush of any outstanding delta.
pub struct DebounceController<T: FlushTransport, D: Driver> {
    inner: Rc<Inner<T, D>>,
}

struct Inner<T: FlushTransport, D: Driver> {
    transport: T,
    driver: D,
    config: DebounceConfig,
    session: RefCell<SharedSession>,
    timer: RefCell<Option<D::Timer>>,
    armed: Cell<bool>,
    disposed: Cell<bool>,
    listeners: RefCell<Vec<Listener>>,
}

impl<T: FlushTransport, D: Driver> DebounceController<T, D> {
    pub fn new(
        transport: T,
        driver: D,
        config: DebounceConfig,
        item_id: impl Into<String>,
        quantity: i64,
    ) -> Self {
        let session = Rc::new(RefCell::new(AdjustmentSession::new(item_id, quantity)));
        Self {
            inner: Rc::new(Inner {
                transport,
                driver,
                config,
                session: RefCell::new(session),
                timer: RefCell::new(None),
                armed: Cell::new(false),
                disposed: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Apply a tap optimistically and restart the debounce timer.
    ///
    /// Zero is a no-op. Never blocks, never fails.
    pub fn adjust(&self, delta: i64) {
        if self.inner.disposed.get() {
            warn!(delta, "adjust on a disposed controller ignored");
            return;
        }
        let session = self.inner.current();
        if !session.borrow_mut().apply(delta) {
            return;
        }
        Inner::arm_timer(&self.inner);
        self.inner.publish(&session);
    }

    /// Send the pending delta now and wait for the outcome.
    ///
    /// A no-op when nothing is pending or a flush is already outstanding.
    /// Failures are recorded in the session, never returned.
    pub async fn flush(&self) {
        let session = self.inner.current();
        if let Some(task) = Inner::start_flush(&self.inner, session) {
            task.await;
        }
    }

    /// Re-send a delta left behind by a failed flush.
    pub async fn retry(&self) {
        let session = self.inner.current();
        if !session.borrow().can_retry() {
            return;
        }
        if let Some(task) = Inner::start_flush(&self.inner, session) {
            task.await;
        }
    }

    /// Fire-and-forget [`flush`](Self::flush). The flush is captured
    /// synchronously; only the network round trip runs in the background.
    pub fn request_flush(&self) {
        let session = self.inner.current();
        if let Some(task) = Inner::start_flush(&self.inner, session) {
            self.inner.driver.spawn(Box::pin(task));
        }
    }

    /// Fire-and-forget [`retry`](Self::retry).
    pub fn request_retry(&self) {
        let session = self.inner.current();
        if !session.borrow().can_retry() {
            return;
        }
        if let Some(task) = Inner::start_flush(&self.inner, session) {
            self.inner.driver.spawn(Box::pin(task));
        }
    }

    /// Dismiss the error banner without retrying. The re-armed delta stays
    /// pending until the next tap or forced flush.
    pub fn clear_error(&self) {
        let session = self.inner.current();
        let changed = session.borrow_mut().clear_error();
        if changed {
            self.inner.publish(&session);
        }
    }

    /// Detach from the current item and start a session for another one.
    ///
    /// The outgoing session's pending delta is flushed first; its result is
    /// applied to the detached session and never reaches subscribers. If a
    /// flush was already outstanding, taps made during it are sent as soon
    /// as it settles.
    pub fn switch_item(&self, item_id: impl Into<String>, quantity: i64) {
        if self.inner.disposed.get() {
            warn!("switch_item on a disposed controller ignored");
            return;
        }
        self.inner.cancel_timer();

        let outgoing = self.inner.current();
        if let Some(task) = Inner::start_flush(&self.inner, Rc::clone(&outgoing)) {
            debug!(item_id = %outgoing.borrow().item_id(), "flushing outgoing item before switch");
            self.inner.driver.spawn(Box::pin(task));
        }

        let incoming = Rc::new(RefCell::new(AdjustmentSession::new(item_id, quantity)));
        *self.inner.session.borrow_mut() = Rc::clone(&incoming);
        self.inner.publish(&incoming);
    }

    /// Tear down: cancel the timer, drop subscribers and flush what is
    /// pending without awaiting it. A flush already outstanding is followed
    /// by one more for the taps made during it. Idempotent.
    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        self.inner.cancel_timer();
        self.inner.listeners.borrow_mut().clear();

        let session = self.inner.current();
        if let Some(task) = Inner::start_flush(&self.inner, session) {
            info!("flushing pending delta on teardown");
            self.inner.driver.spawn(Box::pin(task));
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.current().borrow().snapshot()
    }

    /// True while taps are waiting to be sent (including a failed delta)
    pub fn has_pending(&self) -> bool {
        self.inner.current().borrow().pending_delta() != 0
    }

    /// Register a listener for every observable transition of the current
    /// session. Listeners must not subscribe re-entrantly.
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + 'static) {
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }
}

impl<T: FlushTransport, D: Driver> Drop for DebounceController<T, D> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T: FlushTransport, D: Driver> Inner<T, D> {
    fn current(&self) -> SharedSession {
        Rc::clone(&self.session.borrow())
    }

    fn is_current(&self, session: &SharedSession) -> bool {
        Rc::ptr_eq(&self.session.borrow(), session)
    }

    fn publish(&self, session: &SharedSession) {
        if self.disposed.get() || !self.is_current(session) {
            return;
        }
        let snapshot = session.borrow().snapshot();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }

    /// Trailing-edge debounce: the previous timer is dropped, which cancels it.
    fn arm_timer(inner: &Rc<Self>) {
        let weak = Rc::downgrade(inner);
        let timer = inner.driver.schedule(
            inner.config.delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Inner::on_timer(&inner);
                }
            }),
        );
        inner.armed.set(true);
        drop(inner.timer.replace(Some(timer)));
    }

    fn cancel_timer(&self) {
        self.armed.set(false);
        drop(self.timer.take());
    }

    // The fired handle stays in its slot: dropping it from inside its own
    // callback is not allowed by every host.
    fn on_timer(inner: &Rc<Self>) {
        inner.armed.set(false);
        if inner.disposed.get() {
            return;
        }
        let session = inner.current();
        if let Some(task) = Inner::start_flush(inner, session) {
            inner.driver.spawn(Box::pin(task));
        }
    }

    /// Capture the flush synchronously and return the network half.
    fn start_flush(inner: &Rc<Self>, session: SharedSession) -> Option<impl Future<Output = ()> + 'static> {
        let ticket = session.borrow_mut().begin_flush()?;
        debug!(item_id = %ticket.item_id, delta = ticket.delta, baseline = ticket.baseline, "flush started");
        inner.publish(&session);

        let inner = Rc::clone(inner);
        Some(async move {
            let outcome = inner.transport.adjust(&ticket.item_id, ticket.delta).await;
            match &outcome {
                Ok(quantity) => debug!(item_id = %ticket.item_id, quantity, "flush confirmed"),
                Err(e) => warn!(item_id = %ticket.item_id, delta = ticket.delta, "{}", e),
            }
            session.borrow_mut().finish_flush(&ticket, outcome);
            Inner::after_flush(&inner, &session);
        })
    }

    fn after_flush(inner: &Rc<Self>, session: &SharedSession) {
        // Taps made in flight whose timer already fired would otherwise wait
        // for the next tap. Failures are left for a manual retry.
        let followup = {
            let s = session.borrow();
            s.pending_delta() != 0 && s.last_error().is_none()
        };

        // Detached or torn down: no timer or tap will come for this session,
        // so the remainder goes out immediately.
        if inner.disposed.get() || !inner.is_current(session) {
            if followup {
                if let Some(task) = Inner::start_flush(inner, Rc::clone(session)) {
                    debug!(item_id = %session.borrow().item_id(), "flushing taps made during a detached flight");
                    inner.driver.spawn(Box::pin(task));
                }
            }
            return;
        }

        if followup && !inner.armed.get() {
            Inner::arm_timer(inner);
        }
        inner.publish(session);
    }
}
