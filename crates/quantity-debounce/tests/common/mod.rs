//! Test harness: tokio-backed driver and a transport whose replies are
//! released by the test.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use quantity_debounce::{
    DebounceConfig, DebounceController, Driver, FlushError, FlushTransport, LocalTask,
    SessionSnapshot,
};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const DELAY: Duration = Duration::from_millis(500);

pub type TestController = DebounceController<GatedTransport, TokioDriver>;

/// Timers are `spawn_local` tasks; must be used inside a `LocalSet`.
pub struct TokioDriver;

pub struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl Driver for TokioDriver {
    type Timer = AbortOnDrop;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> AbortOnDrop {
        AbortOnDrop(tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            callback();
        }))
    }

    fn spawn(&self, task: LocalTask) {
        tokio::task::spawn_local(task);
    }
}

/// A transport call waiting for the test to answer it
pub struct PendingCall {
    pub item_id: String,
    pub delta: i64,
    reply: oneshot::Sender<Result<i64, FlushError>>,
}

impl PendingCall {
    pub fn succeed(self, new_quantity: i64) {
        let _ = self.reply.send(Ok(new_quantity));
    }

    pub fn fail(self, message: &str) {
        let _ = self.reply.send(Err(FlushError::new(message)));
    }
}

#[derive(Clone, Default)]
pub struct GatedTransport {
    calls: Rc<RefCell<Vec<(String, i64)>>>,
    waiting: Rc<RefCell<VecDeque<PendingCall>>>,
}

impl GatedTransport {
    /// Every call ever made, in order
    pub fn calls(&self) -> Vec<(String, i64)> {
        self.calls.borrow().clone()
    }

    pub fn outstanding(&self) -> usize {
        self.waiting.borrow().len()
    }

    pub fn next_call(&self) -> PendingCall {
        self.waiting
            .borrow_mut()
            .pop_front()
            .expect("no transport call is waiting")
    }
}

#[async_trait(?Send)]
impl FlushTransport for GatedTransport {
    async fn adjust(&self, item_id: &str, delta: i64) -> Result<i64, FlushError> {
        let (reply, response) = oneshot::channel();
        self.calls.borrow_mut().push((item_id.to_string(), delta));
        self.waiting.borrow_mut().push_back(PendingCall {
            item_id: item_id.to_string(),
            delta,
            reply,
        });
        response
            .await
            .unwrap_or_else(|_| Err(FlushError::new("reply dropped")))
    }
}

pub fn controller(transport: &GatedTransport, item_id: &str, quantity: i64) -> TestController {
    DebounceController::new(
        transport.clone(),
        TokioDriver,
        DebounceConfig { delay: DELAY },
        item_id,
        quantity,
    )
}

/// Collect every snapshot the controller publishes
pub fn record(controller: &TestController) -> Rc<RefCell<Vec<SessionSnapshot>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controller.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
    seen
}

/// Let woken tasks run without reaching any debounce deadline
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

pub async fn past_debounce() {
    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
}
