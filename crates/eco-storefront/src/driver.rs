//! Event loop tying the storefront to its timers.
//!
//! [`Driver`] owns the [`Storefront`] and one [`Autoplay`] per animated rail.
//! Every command, whether it comes from a timer or from the UI through
//! [`Driver::sender`], goes through [`Driver::handle`], which also keeps the
//! timers in step: hovering a rail stops its autoplay, leaving it restarts a
//! full period, and an accepted slide schedules its own completion.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::{schedule_completion, Autoplay, Command, Outcome, Rail, Storefront, StorefrontConfig};

/// Owner of a running storefront.
#[derive(Debug)]
pub struct Driver {
    storefront: Storefront,
    tx: UnboundedSender<Command>,
    rx: UnboundedReceiver<Command>,
    offers_autoplay: Autoplay,
    hero_autoplay: Autoplay,
    offers_transition: Duration,
    hero_transition: Duration,
}

impl Driver {
    /// Take ownership of `storefront` and start both autoplay timers. Must be
    /// called inside a tokio runtime.
    pub fn start(storefront: Storefront, config: &StorefrontConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            offers_autoplay: Autoplay::start(
                Rail::Offers,
                config.offers.autoplay_interval(),
                tx.clone(),
            ),
            hero_autoplay: Autoplay::start(
                Rail::Hero,
                config.hero.autoplay_interval(),
                tx.clone(),
            ),
            offers_transition: config.offers.transition(),
            hero_transition: config.hero.transition(),
            storefront,
            tx,
            rx,
        }
    }

    /// Channel for UI events.
    pub fn sender(&self) -> UnboundedSender<Command> {
        self.tx.clone()
    }

    pub fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    /// Apply a command and update the timers it affects.
    pub fn handle(&mut self, command: Command) -> Outcome {
        let follow_up = match command {
            Command::BeginAdvance { rail, .. } => Some(rail),
            _ => None,
        };
        let hover = match command {
            Command::SetHovered { rail, hovered } => Some((rail, hovered)),
            _ => None,
        };

        let outcome = self.storefront.dispatch(command);
        if outcome == Outcome::Ignored {
            return outcome;
        }

        if let Some((rail, hovered)) = hover {
            if let Some(timer) = self.autoplay_mut(rail) {
                if hovered {
                    timer.pause();
                } else {
                    timer.resume();
                }
            }
        }

        if let Some(rail) = follow_up {
            match self.transition(rail) {
                Some(delay) => {
                    schedule_completion(rail, delay, self.tx.clone());
                }
                None => {
                    self.storefront.dispatch(Command::CompleteAdvance { rail });
                }
            }
        }

        outcome
    }

    /// Wait for the next queued command and handle it.
    ///
    /// Returns `None` once every sender is gone, which cannot happen while
    /// the driver holds its own.
    pub async fn next(&mut self) -> Option<(Command, Outcome)> {
        let command = self.rx.recv().await?;
        let outcome = self.handle(command.clone());
        debug!(?command, ?outcome, "driver handled command");
        Some((command, outcome))
    }

    /// Stop both timers and hand the storefront back.
    pub fn into_storefront(self) -> Storefront {
        self.storefront
    }

    fn autoplay_mut(&mut self, rail: Rail) -> Option<&mut Autoplay> {
        match rail {
            Rail::Offers => Some(&mut self.offers_autoplay),
            Rail::Hero => Some(&mut self.hero_autoplay),
            Rail::Organic => None,
        }
    }

    /// Slide length, or `None` for rails that move without animation.
    fn transition(&self, rail: Rail) -> Option<Duration> {
        match rail {
            Rail::Offers => Some(self.offers_transition),
            Rail::Hero => Some(self.hero_transition),
            Rail::Organic => None,
        }
    }
}
