//! One-shot timers for auto-dismiss.
//!
//! The store never schedules anything itself. Whatever renders toasts
//! supplies a [`TimerHost`] backed by its own executor.

use std::fmt;
use std::time::Duration;

/// Callback run when a timer expires.
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// A scheduled timer. Dropping the handle cancels it.
#[must_use = "dropping a timer handle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancels the timer. Cancelling a timer that already fired does nothing.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("pending", &self.cancel.is_some())
            .finish()
    }
}

/// Host timer facility.
pub trait TimerHost {
    /// Runs `fire` once after `after`, unless the handle is dropped first.
    fn schedule(&self, after: Duration, fire: TimerCallback) -> TimerHandle;
}

/// Timers on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioTimers {
    runtime: tokio::runtime::Handle,
}

impl TokioTimers {
    pub fn new(runtime: tokio::runtime::Handle) -> Self {
        Self { runtime }
    }

    /// Timers on the runtime the caller is running in.
    pub fn current() -> Result<Self, tokio::runtime::TryCurrentError> {
        tokio::runtime::Handle::try_current().map(Self::new)
    }
}

impl TimerHost for TokioTimers {
    fn schedule(&self, after: Duration, fire: TimerCallback) -> TimerHandle {
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            fire();
        });
        TimerHandle::new(move || task.abort())
    }
}

/// Timers on gpui's background executor.
#[derive(Clone)]
pub struct GpuiTimers {
    executor: gpui::BackgroundExecutor,
}

impl GpuiTimers {
    pub fn new(executor: gpui::BackgroundExecutor) -> Self {
        Self { executor }
    }
}

impl TimerHost for GpuiTimers {
    fn schedule(&self, after: Duration, fire: TimerCallback) -> TimerHandle {
        let timer = self.executor.timer(after);
        let task = self.executor.spawn(async move {
            timer.await;
            fire();
        });
        // gpui tasks are cancelled when dropped.
        TimerHandle::new(move || drop(task))
    }
}

impl fmt::Debug for GpuiTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GpuiTimers").finish_non_exhaustive()
    }
}
