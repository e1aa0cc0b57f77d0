use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Trailing-edge debouncer.
///
/// Every `call` takes a fresh token from a shared generation counter and
/// schedules its action after `delay`. When the timer elapses the action runs
/// only if no later `call` (or `cancel`) has moved the counter on.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Must be called from within a tokio runtime.
    pub fn call<F>(&self, action: F) -> u64
    where
        F: FnOnce() + Send + 'static,
    {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == token {
                action();
            } else {
                log::trace!("debounce token {token} superseded");
            }
        });

        token
    }

    /// Invalidates whatever timer is pending.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn current_token(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
