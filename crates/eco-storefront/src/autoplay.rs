//! Autoplay timers for the carousel rails.
//!
//! Timers never touch storefront state. They only send [`Command`]s down a
//! channel; whoever owns the [`Storefront`](crate::Storefront) receives and
//! dispatches them, so every transition stays on one task.

use std::time::Duration;

use eco_commerce::carousel::Direction;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, trace};

use crate::{Command, Rail};

/// Periodic forward advance for one rail.
///
/// The timer is cancelled on [`pause`](Self::pause) and on drop.
#[derive(Debug)]
pub struct Autoplay {
    rail: Rail,
    period: Duration,
    tx: UnboundedSender<Command>,
    handle: Option<JoinHandle<()>>,
}

impl Autoplay {
    /// Start ticking immediately. The first advance fires one `period` from
    /// now. Must be called inside a tokio runtime.
    pub fn start(rail: Rail, period: Duration, tx: UnboundedSender<Command>) -> Self {
        let mut autoplay = Self {
            rail,
            period,
            tx,
            handle: None,
        };
        autoplay.resume();
        autoplay
    }

    /// Stop ticking. No-op if already paused.
    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(rail = ?self.rail, "autoplay paused");
        }
    }

    /// Restart ticking with a fresh period. No-op if already running.
    pub fn resume(&mut self) {
        if self.is_running() {
            return;
        }
        let rail = self.rail;
        let period = self.period;
        let tx = self.tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                trace!(?rail, "autoplay tick");
                let command = Command::BeginAdvance {
                    rail,
                    direction: Direction::Forward,
                };
                if tx.send(command).is_err() {
                    break;
                }
            }
        }));
        debug!(rail = ?self.rail, period_ms = self.period.as_millis() as u64, "autoplay running");
    }

    /// Whether the timer task is alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn rail(&self) -> Rail {
        self.rail
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Send `CompleteAdvance` for `rail` once the slide animation has had
/// `delay` to run.
pub fn schedule_completion(
    rail: Rail,
    delay: Duration,
    tx: UnboundedSender<Command>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        time::sleep(delay).await;
        let _ = tx.send(Command::CompleteAdvance { rail });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_after_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = time::Instant::now();
        let _autoplay = Autoplay::start(Rail::Offers, Duration::from_millis(3500), tx);

        let command = rx.recv().await.unwrap();
        assert_eq!(
            command,
            Command::BeginAdvance {
                rail: Rail::Offers,
                direction: Direction::Forward
            }
        );
        assert!(started.elapsed() >= Duration::from_millis(3500));

        rx.recv().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(7000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_and_resume() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut autoplay = Autoplay::start(Rail::Hero, Duration::from_millis(100), tx);

        autoplay.pause();
        assert!(!autoplay.is_running());
        time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());

        autoplay.resume();
        assert!(autoplay.is_running());
        let command = rx.recv().await.unwrap();
        assert!(matches!(command, Command::BeginAdvance { rail: Rail::Hero, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let autoplay = Autoplay::start(Rail::Offers, Duration::from_millis(100), tx);
        drop(autoplay);

        // The aborted task drops its sender, closing the channel.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = time::Instant::now();
        schedule_completion(Rail::Offers, Duration::from_millis(600), tx);

        assert_eq!(
            rx.recv().await.unwrap(),
            Command::CompleteAdvance { rail: Rail::Offers }
        );
        assert!(started.elapsed() >= Duration::from_millis(600));
    }
}
