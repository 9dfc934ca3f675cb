use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::Notify;

/// Cooperative pause/stop/single-step flags shared between the run loop
/// and the UI thread.
///
/// Suspension happens only at loop checkpoints (epoch boundary, animation
/// neuron boundary), never mid-computation. Waiters park on a `Notify`
/// instead of a sleep poll, so a resume wakes the loop synchronously.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    paused: AtomicBool,
    stopped: AtomicBool,
    step_requested: AtomicBool,
    wake: Notify,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes effect at the next checkpoint; an in-flight remote request
    /// is never cancelled.
    pub fn pause(&self) {
        self.inner.paused.store(true, Ordering::Release);
    }

    pub fn resume(&self) {
        self.inner.paused.store(false, Ordering::Release);
        self.inner.wake.notify_waiters();
    }

    /// Observed at every suspension point; the current loop exits without
    /// completing remaining epochs and nothing is rolled back.
    pub fn stop(&self) {
        self.inner.stopped.store(true, Ordering::Release);
        self.inner.paused.store(false, Ordering::Release);
        self.inner.wake.notify_waiters();
    }

    /// While paused, lets the animation advance exactly one neuron before
    /// re-suspending.
    pub fn request_step(&self) {
        self.inner.step_requested.store(true, Ordering::Release);
        self.inner.wake.notify_waiters();
    }

    /// Rearms every flag for a fresh run.
    pub fn arm(&self) {
        self.inner.stopped.store(false, Ordering::Release);
        self.inner.paused.store(false, Ordering::Release);
        self.inner.step_requested.store(false, Ordering::Release);
    }

    pub fn is_paused(&self) -> bool {
        self.inner.paused.load(Ordering::Acquire)
    }

    pub fn stop_requested(&self) -> bool {
        self.inner.stopped.load(Ordering::Acquire)
    }

    fn take_step_request(&self) -> bool {
        self.inner.step_requested.swap(false, Ordering::AcqRel)
    }

    fn may_proceed(&self) -> bool {
        !self.is_paused() || self.stop_requested() || self.take_step_request()
    }

    /// Suspends while paused, until resumed, single-stepped, or stopped.
    ///
    /// Interest in the wake notification is registered before the flags
    /// are re-checked, so a resume racing this call cannot be lost.
    pub async fn wait_if_paused(&self) {
        loop {
            if self.may_proceed() {
                return;
            }

            let wake = self.inner.wake.notified();
            tokio::pin!(wake);
            wake.as_mut().enable();

            if self.may_proceed() {
                return;
            }
            wake.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn passes_through_when_not_paused() {
        let c = Controls::new();
        timeout(Duration::from_millis(100), c.wait_if_paused())
            .await
            .expect("must not suspend");
    }

    #[tokio::test]
    async fn suspends_while_paused() {
        let c = Controls::new();
        c.pause();
        let blocked = timeout(Duration::from_millis(50), c.wait_if_paused()).await;
        assert!(blocked.is_err());
    }

    #[tokio::test]
    async fn resume_wakes_a_suspended_waiter() {
        let c = Controls::new();
        c.pause();

        let waiter = {
            let c = c.clone();
            tokio::spawn(async move { c.wait_if_paused().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        c.resume();

        timeout(Duration::from_millis(200), waiter)
            .await
            .expect("resume must wake the waiter")
            .unwrap();
    }

    #[tokio::test]
    async fn stop_releases_a_paused_waiter() {
        let c = Controls::new();
        c.pause();

        let waiter = {
            let c = c.clone();
            tokio::spawn(async move { c.wait_if_paused().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        c.stop();

        timeout(Duration::from_millis(200), waiter)
            .await
            .expect("stop must release the waiter")
            .unwrap();
        assert!(c.stop_requested());
    }

    #[tokio::test]
    async fn step_request_releases_exactly_one_suspension() {
        let c = Controls::new();
        c.pause();
        c.request_step();

        // first checkpoint consumes the pending step
        timeout(Duration::from_millis(100), c.wait_if_paused())
            .await
            .expect("pending step must release the wait");

        // next checkpoint re-suspends
        let blocked = timeout(Duration::from_millis(50), c.wait_if_paused()).await;
        assert!(blocked.is_err());
    }
}
