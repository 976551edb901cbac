//! Timing and policy settings fixed at build time.

use crate::clock::ClockState;
use crate::controls::Precedence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Period of the time-keeping tick.
    pub tick_period_us: u32,
    /// Period of the display refresh firing.
    pub refresh_period_us: u32,
    /// How long each digit stays lit before the next one is selected.
    pub settle_us: u32,
    pub precedence: Precedence,
    /// Value loaded at power-on.
    pub start: ClockState,
}

impl Config {
    pub const DEFAULT: Self = Self {
        tick_period_us: 1_000_000,
        refresh_period_us: 5_000,
        settle_us: 3_000,
        precedence: Precedence::DEFAULT,
        start: ClockState::ZERO,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
