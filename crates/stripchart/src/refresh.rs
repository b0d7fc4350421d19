//! Fixed-rate redraw scheduling.
//!
//! The chart itself has no timer. A host toolkit usually owns the event loop
//! and only needs [`RefreshDriver::poll`] to decide whether a redraw is due;
//! headless callers can hand the whole loop to [`RefreshDriver::run`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::config::ChartConfig;

/// Smallest interval the driver will tick at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Fires once per elapsed interval.
///
/// When the caller falls behind, missed ticks are dropped rather than
/// replayed in a burst, and the next deadline keeps the existing phase.
#[derive(Debug, Clone)]
pub struct RefreshDriver {
    interval: Duration,
    next_due: Option<Instant>,
    ticks: u64,
}

impl RefreshDriver {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            next_due: None,
            ticks: 0,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.update_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks fired so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns true if a redraw is due at `now`.
    ///
    /// The first poll always fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.next_due {
            None => {
                self.next_due = Some(now + self.interval);
                self.ticks += 1;
                return true;
            }
            Some(due) => due,
        };

        if now < due {
            return false;
        }

        let behind = now.duration_since(due).as_nanos();
        let interval = self.interval.as_nanos();
        let skipped = behind / interval;
        if skipped > 0 {
            tracing::trace!("Refresh fell behind; skipping {} ticks", skipped);
        }

        let phase = Duration::from_nanos((behind % interval) as u64);
        self.next_due = Some(now + self.interval - phase);
        self.ticks += 1;
        true
    }

    /// Time left until the next tick, zero if one is already due.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }

    /// Block the current thread, calling `on_tick` with the tick count every
    /// interval until `stop` is set.
    pub fn run(&mut self, stop: &AtomicBool, mut on_tick: impl FnMut(u64)) {
        tracing::debug!("Refresh loop started ({:?} interval)", self.interval);
        while !stop.load(Ordering::Relaxed) {
            let now = Instant::now();
            if self.poll(now) {
                on_tick(self.ticks);
            } else {
                std::thread::sleep(self.time_until_next(now));
            }
        }
        tracing::debug!("Refresh loop stopped after {} ticks", self.ticks);
    }
}
