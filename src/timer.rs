//! Periodic tick source seen by the stopwatch core.

/// A periodic timer that fires once per configured period while started.
///
/// The stopwatch has no running flag of its own: it is running exactly when
/// its tick source is.
pub trait TickSource {
    type Error;

    /// Arms the source for a full period. No-op if already running.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Disarms the source so no further fires occur. No-op if stopped.
    fn stop(&mut self) -> Result<(), Self::Error>;

    fn is_running(&self) -> bool;

    /// Clears a fire and re-arms for the next period.
    ///
    /// Returns `false` if the source was stopped in the meantime, in which
    /// case the fire must not count as a tick. If re-arming fails the source
    /// is left stopped, so a later `start` can bring it back.
    fn acknowledge(&mut self) -> Result<bool, Self::Error>;
}

/// Where a periodic source stands within its current period.
///
/// Stopping keeps the part of the period still to run, so a later start
/// finishes the interrupted period instead of beginning a fresh one. Times
/// are microseconds on a free-running counter supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickPhase {
    period_us: u32,
    deadline_us: Option<u64>,
    remaining_us: Option<u32>,
}

impl TickPhase {
    pub const fn new(period_us: u32) -> Self {
        Self {
            period_us,
            deadline_us: None,
            remaining_us: None,
        }
    }

    /// Delay to arm the source with when starting at `now_us`.
    ///
    /// A stored remainder is used once, then periods run whole again.
    pub fn start(&mut self, now_us: u64) -> u32 {
        let delay = match self.remaining_us.take() {
            // A deadline that already passed still owes its tick.
            Some(remaining) => remaining.max(1),
            None => self.period_us,
        };
        self.deadline_us = Some(now_us + delay as u64);
        delay
    }

    /// Delay to the next fire after one was acknowledged at `now_us`.
    pub fn rearm(&mut self, now_us: u64) -> u32 {
        self.deadline_us = Some(now_us + self.period_us as u64);
        self.period_us
    }

    /// Records what is left of the current period when stopping at `now_us`.
    pub fn stop(&mut self, now_us: u64) {
        if let Some(deadline) = self.deadline_us.take() {
            let left = deadline.saturating_sub(now_us).min(self.period_us as u64);
            self.remaining_us = Some(left as u32);
        }
    }

    /// Forgets the current period entirely, so the next start runs a whole one.
    pub fn clear(&mut self) {
        self.deadline_us = None;
        self.remaining_us = None;
    }

    pub fn remaining_us(&self) -> Option<u32> {
        self.remaining_us
    }
}
