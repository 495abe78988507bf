//! Query debouncing.
//!
//! [`Debouncer`] holds a committed output value that only changes once the
//! input has stayed the same for the whole delay. Each [`Debouncer::push`]
//! cancels the pending commit and restarts the timer for the new value.
//! Consumers observe commits through a [`watch::Receiver`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    output: Arc<watch::Sender<T>>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a debouncer whose committed output starts at `initial`.
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            delay,
            output: Arc::new(tx),
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Receiver notified on every commit.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.subscribe()
    }

    /// The last committed output.
    #[must_use]
    pub fn current(&self) -> T {
        self.output.borrow().clone()
    }

    /// `true` while a commit is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Feeds a new input value. The commit deadline is fixed now, at
    /// `now + delay`, replacing any earlier pending commit.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn push(&mut self, value: T) {
        self.cancel();
        let deadline = Instant::now() + self.delay;
        let output = Arc::clone(&self.output);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            output.send_replace(value);
        }));
    }

    /// Drops the pending commit, if any. The committed output is unchanged.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
