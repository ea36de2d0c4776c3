//! Single-timer debouncer on the tokio runtime.
//!
//! A [`Debouncer`] owns at most one pending timer. Scheduling a value cancels the
//! previous timer and arms a new one; when the quiet period elapses the value is
//! sent back to the owner's event loop as a [`Fired`] message. The owner then
//! calls [`Debouncer::settle`] to confirm the fire belongs to the timer that is
//! still current.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// A debounced value delivered after its quiet period elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    /// Generation of the timer that produced this fire.
    pub generation: u64,
    /// Value passed to [`Debouncer::schedule`].
    pub value: T,
}

/// Debounces values of type `T` with a fixed quiet period.
///
/// Must be used from within a tokio runtime: [`Debouncer::schedule`] spawns the
/// timer task. Dropping the debouncer aborts a pending timer.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    fired: UnboundedSender<Fired<T>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates an idle debouncer delivering fires on `fired`.
    #[must_use]
    pub fn new(quiet_period: Duration, fired: UnboundedSender<Fired<T>>) -> Self {
        Self {
            quiet_period,
            generation: 0,
            pending: None,
            fired,
        }
    }

    /// Cancels any pending timer and arms a new one for `value`.
    ///
    /// Returns the generation of the newly armed timer.
    pub fn schedule(&mut self, value: T) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let quiet_period = self.quiet_period;
        let fired = self.fired.clone();

        tracing::trace!(generation, ?quiet_period, "timer armed");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            // The receiver only disappears on shutdown.
            let _ = fired.send(Fired { generation, value });
        }));

        generation
    }

    /// Disarms the pending timer without firing.
    ///
    /// Returns `true` if a timer was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let was_waiting = !handle.is_finished();
                handle.abort();
                if was_waiting {
                    tracing::trace!(generation = self.generation, "timer cancelled");
                }
                was_waiting
            }
            None => false,
        }
    }

    /// Accepts a fire if it came from the currently armed timer.
    ///
    /// Returns `false` for fires that were superseded by a later
    /// [`schedule`](Self::schedule) or [`cancel`](Self::cancel) call, including
    /// fires already queued on the channel at that time.
    pub fn settle(&mut self, fired: &Fired<T>) -> bool {
        if self.pending.is_none() || fired.generation != self.generation {
            tracing::trace!(
                fired_generation = fired.generation,
                current_generation = self.generation,
                "ignoring superseded fire"
            );
            return false;
        }
        self.pending = None;
        true
    }

    /// Whether a timer is armed and has not been settled or cancelled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    const QUIET: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_quiet_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        let generation = debouncer.schedule("ab");

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let fired = rx.try_recv().expect("timer should have fired");
        assert_eq!(fired, Fired { generation, value: "ab" });
        assert!(debouncer.settle(&fired));
        assert!(!debouncer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_cancels_the_previous_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        debouncer.schedule(1);
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(2);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err(), "first timer must not fire");

        tokio::time::sleep(Duration::from_millis(200)).await;
        let fired = rx.try_recv().expect("second timer should fire");
        assert_eq!(fired.value, 2);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn queued_fire_is_rejected_after_reschedule() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        debouncer.schedule("old");
        tokio::time::sleep(Duration::from_millis(350)).await;
        let stale = rx.try_recv().expect("old timer fired");

        debouncer.schedule("new");
        assert!(!debouncer.settle(&stale));
        assert!(debouncer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_disarms_without_firing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET, tx);

        debouncer.schedule(());
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_pending_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut debouncer = Debouncer::new(QUIET, tx);
            debouncer.schedule("gone");
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.recv().await.is_none());
    }
}
