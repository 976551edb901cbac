
use embedded_hal::blocking::delay::DelayUs;

use crate::clock::{ClockState, DIGITS};
use crate::output::OutputBank;

/// Round-robin driver for the six-digit multiplexed display.
///
/// Only one digit is lit at a time. Each refresh firing walks all six
/// positions, holding each one selected for the settle time.
pub struct Multiplexer<B, D> {
    bank: B,
    delay: D,
    settle_us: u32,
    position: usize,
}

impl<B: OutputBank, D: DelayUs<u32>> Multiplexer<B, D> {
    pub fn new(bank: B, delay: D, settle_us: u32) -> Self {
        Self {
            bank,
            delay,
            settle_us,
            position: 0,
        }
    }

    /// Position the next [`step`](Self::step) will drive.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Drives one digit of `clock` and moves on to the next position.
    ///
    /// Blocks for the settle time while the digit is lit.
    pub fn step(&mut self, clock: &ClockState) -> Result<(), B::Error> {
        let position = self.position;
        self.bank.set_digit_select(position)?;
        self.bank.set_segment_pattern(clock.digit(position) & 0x0F)?;
        self.delay.delay_us(self.settle_us);
        self.position = (position + 1) % DIGITS;
        Ok(())
    }

    /// One refresh firing: all six digits, one after another.
    pub fn refresh(&mut self, clock: &ClockState) -> Result<(), B::Error> {
        for _ in 0..DIGITS {
            self.step(clock)?;
        }
        Ok(())
    }

    pub fn release(self) -> (B, D) {
        (self.bank, self.delay)
    }
}
