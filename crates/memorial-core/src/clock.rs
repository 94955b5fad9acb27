//! Analog clock face driven by a one-second ticker.
//!
//! [`hand_angles`] is the pure angle computation. [`ClockHandle`] owns the
//! periodic task that recomputes angles from wall-clock time and publishes
//! them on a watch channel. Dropping the handle cancels the task.

use std::time::Duration;

use chrono::{NaiveTime, Timelike};
use memorial_types::clock::HandAngles;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Interval between clock recomputations.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Compute hand angles for a time of day.
///
/// - second: 6 degrees per second
/// - minute: 6 degrees per minute plus 0.1 per second
/// - hour: 30 degrees per hour (12-hour dial) plus 0.5 per minute
///
/// All three carry the same -90 degree offset.
pub fn hand_angles(hours: u32, minutes: u32, seconds: u32) -> HandAngles {
    let (h, m, s) = (f64::from(hours % 12), f64::from(minutes), f64::from(seconds));
    HandAngles {
        hour: h * 30.0 + m * 0.5 - 90.0,
        minute: m * 6.0 + s * 0.1 - 90.0,
        second: s * 6.0 - 90.0,
    }
}

/// Hand angles for a [`Timelike`] value (local time, naive time, ...).
pub fn hand_angles_at<T: Timelike>(time: &T) -> HandAngles {
    hand_angles(time.hour(), time.minute(), time.second())
}

fn local_now() -> NaiveTime {
    chrono::Local::now().time()
}

/// Running clock. The ticker stops when the handle is stopped or dropped.
pub struct ClockHandle {
    cancel: CancellationToken,
    angles: watch::Receiver<HandAngles>,
    task: Option<JoinHandle<()>>,
}

impl ClockHandle {
    /// Start a clock reading local wall-clock time every [`TICK_INTERVAL`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn start() -> Self {
        Self::start_with(TICK_INTERVAL, local_now)
    }

    /// Start a clock with a custom period and time source.
    pub fn start_with<F>(period: Duration, now: F) -> Self
    where
        F: Fn() -> NaiveTime + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let (tx, rx) = watch::channel(hand_angles_at(&now()));

        let token = cancel.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the initial value is already published.
            ticker.tick().await;

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let angles = hand_angles_at(&now());
                        trace!(?angles, "clock tick");
                        if tx.send(angles).is_err() {
                            break;
                        }
                    }
                }
            }
            debug!("clock ticker stopped");
        });

        Self {
            cancel,
            angles: rx,
            task: Some(task),
        }
    }

    /// Most recently published angles.
    pub fn current(&self) -> HandAngles {
        *self.angles.borrow()
    }

    /// A receiver that is notified on every tick.
    pub fn subscribe(&self) -> watch::Receiver<HandAngles> {
        self.angles.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Cancel the ticker and wait for its task to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                debug!("clock task ended abnormally: {err}");
            }
        }
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn angles_at_quarter_past_three() {
        let a = hand_angles(3, 15, 30);
        assert!(approx(a.hour, 7.5));
        assert!(approx(a.minute, 3.0));
        assert!(approx(a.second, 90.0));

        // Without the -90 offset the hour hand sits at 97.5.
        assert!(approx(a.hour + 90.0, 97.5));
    }

    #[test]
    fn angles_at_midnight_point_up() {
        let a = hand_angles(0, 0, 0);
        assert!(approx(a.hour, -90.0));
        assert!(approx(a.minute, -90.0));
        assert!(approx(a.second, -90.0));
        assert!(approx(a.normalized().hour, 270.0));
    }

    #[test]
    fn hour_hand_uses_twelve_hour_dial() {
        assert_eq!(hand_angles(15, 15, 30), hand_angles(3, 15, 30));
        assert_eq!(hand_angles(12, 0, 0), hand_angles(0, 0, 0));
    }

    #[test]
    fn angles_from_naive_time() {
        let t = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let a = hand_angles_at(&t);
        assert!(approx(a.hour, 9.0 * 30.0 + 15.0 - 90.0));
        assert!(approx(a.minute, 180.0 - 90.0));
    }

    fn counting_source() -> (Arc<AtomicU32>, impl Fn() -> NaiveTime + Send + 'static) {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let source = move || {
            let n = c.fetch_add(1, Ordering::SeqCst);
            NaiveTime::from_num_seconds_from_midnight_opt(n % 86_400, 0).unwrap()
        };
        (counter, source)
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_publishes_every_period() {
        let (_, source) = counting_source();
        let clock = ClockHandle::start_with(TICK_INTERVAL, source);
        let mut rx = clock.subscribe();
        assert!(approx(clock.current().second, -90.0));

        rx.changed().await.unwrap();
        assert!(approx(rx.borrow_and_update().second, -84.0));
        rx.changed().await.unwrap();
        assert!(approx(rx.borrow_and_update().second, -78.0));
        assert!(clock.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_ticking() {
        let (counter, source) = counting_source();
        let clock = ClockHandle::start_with(TICK_INTERVAL, source);
        let mut rx = clock.subscribe();
        rx.changed().await.unwrap();

        clock.stop().await;
        let calls = counter.load(Ordering::SeqCst);

        // Drain anything sent before cancellation; then the sender is gone.
        while rx.changed().await.is_ok() {}
        assert!(rx.has_changed().is_err());
        tokio::time::sleep(TICK_INTERVAL * 5).await;
        assert_eq!(counter.load(Ordering::SeqCst), calls);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_ticker() {
        let (counter, source) = counting_source();
        let clock = ClockHandle::start_with(TICK_INTERVAL, source);
        let mut rx = clock.subscribe();
        drop(clock);

        while rx.changed().await.is_ok() {}
        assert!(rx.has_changed().is_err());
        let calls = counter.load(Ordering::SeqCst);
        tokio::time::sleep(TICK_INTERVAL * 3).await;
        assert_eq!(counter.load(Ordering::SeqCst), calls);
    }
}
