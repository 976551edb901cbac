//! The stopwatch core: clock value plus the tick source that keeps it moving.
//!
//! Every path that touches the clock (ticks, controls, display reads) goes
//! through one `Stopwatch`, so a single lock around it is enough to keep
//! readers from ever seeing a half-carried value.

use crate::clock::ClockState;
use crate::config::Config;
use crate::controls::{Control, Edges, Precedence, ResetOrder};
use crate::timer::TickSource;

pub struct Stopwatch<T> {
    clock: ClockState,
    ticker: T,
    precedence: Precedence,
}

impl<T: TickSource> Stopwatch<T> {
    /// Loads the configured start value and starts counting.
    pub fn new(mut ticker: T, config: &Config) -> Result<Self, T::Error> {
        ticker.start()?;
        Ok(Self {
            clock: config.start,
            ticker,
            precedence: config.precedence,
        })
    }

    /// Copy of the current value, for the display.
    pub fn snapshot(&self) -> ClockState {
        self.clock
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Handles one fire of the tick source.
    ///
    /// `pending` holds control edges that arrived at the same instant. Those
    /// that the precedence policy orders before the tick are applied here and
    /// returned, so the caller can drop them; the rest are left to the
    /// control handler, which runs after the tick.
    pub fn on_tick(&mut self, pending: Edges) -> Result<Edges, T::Error> {
        let counts = self.ticker.acknowledge()?;

        let mut applied = Edges::NONE;
        if pending.reset && self.precedence.reset == ResetOrder::BeforeTick {
            self.reset();
            applied.insert(Control::Reset);
        }

        if counts {
            self.clock.advance();
        }
        Ok(applied)
    }

    pub fn reset(&mut self) {
        self.clock.clear();
    }

    /// Stops time-keeping. Returns whether anything changed.
    pub fn pause(&mut self) -> Result<bool, T::Error> {
        if !self.ticker.is_running() {
            return Ok(false);
        }
        self.ticker.stop()?;
        Ok(true)
    }

    /// Restarts time-keeping from the current value. Returns whether anything changed.
    pub fn resume(&mut self) -> Result<bool, T::Error> {
        if self.ticker.is_running() {
            return Ok(false);
        }
        self.ticker.start()?;
        Ok(true)
    }

    pub fn handle(&mut self, control: Control) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("control {} at {}", control, self.clock);

        match control {
            Control::Reset => self.reset(),
            Control::Pause => {
                self.pause()?;
            }
            Control::Resume => {
                self.resume()?;
            }
        }
        Ok(())
    }

    /// Applies edges that arrived together, in precedence order.
    pub fn apply(&mut self, edges: Edges) -> Result<(), T::Error> {
        for control in edges.ordered(self.precedence) {
            self.handle(control)?;
        }
        Ok(())
    }
}
