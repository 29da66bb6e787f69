//! Trailing-edge debouncer.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;

use crate::debounce::timer::TimerSlot;
use crate::observability::metrics;

struct Shared<A> {
    wait: Duration,
    callback: Box<dyn Fn(A) + Send + Sync>,
    runtime: Handle,
    timer: Mutex<TimerSlot>,
}

/// Wraps a callback so a burst of calls collapses into one trailing call.
///
/// Each [`call`](Debouncer::call) cancels the pending invocation and schedules a
/// new one `wait` later with the latest arguments. Clones share the same timer.
///
/// A pending invocation still fires after every handle has been dropped.
pub struct Debouncer<A> {
    shared: Arc<Shared<A>>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A: Send + 'static> Debouncer<A> {
    /// Create a debouncer on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_handle(Handle::current(), wait, callback)
    }

    /// Create a debouncer with a wait given in milliseconds.
    pub fn from_millis<F>(wait_ms: u64, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(Duration::from_millis(wait_ms), callback)
    }

    /// Create a debouncer whose timers run on `runtime`.
    pub fn with_handle<F>(runtime: Handle, wait: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                wait,
                callback: Box::new(callback),
                runtime,
                timer: Mutex::new(TimerSlot::default()),
            }),
        }
    }

    /// Schedule `callback(args)` after the quiet period, superseding any pending call.
    pub fn call(&self, args: A) {
        let shared = Arc::clone(&self.shared);
        let mut timer = self.shared.timer.lock().expect("debounce timer mutex poisoned");

        timer.reschedule(|generation| {
            self.shared.runtime.spawn(async move {
                tokio::time::sleep(shared.wait).await;

                let current = shared
                    .timer
                    .lock()
                    .expect("debounce timer mutex poisoned")
                    .claim(generation);
                if !current {
                    return;
                }

                (shared.callback)(args);
                metrics::record_debounce_fired();
            })
        });

        tracing::trace!(
            wait_ms = self.shared.wait.as_millis() as u64,
            "Debounce timer rescheduled"
        );
    }

    /// Drop the pending invocation. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        self.shared
            .timer
            .lock()
            .expect("debounce timer mutex poisoned")
            .cancel()
    }

    /// Whether an invocation is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.shared
            .timer
            .lock()
            .expect("debounce timer mutex poisoned")
            .is_pending()
    }

    /// The quiet period each call waits out.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }
}
