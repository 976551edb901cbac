//! Fakes standing in for the board peripherals.

#![allow(dead_code)]

use std::convert::Infallible;

use embedded_hal::blocking::delay::DelayUs;
use wokwi_stopwatch::{Config, OutputBank, Stopwatch, TickSource};

/// What a [`RecordingBank`] was asked to do, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Select(usize),
    Pattern(u8),
}

#[derive(Default)]
pub struct RecordingBank {
    pub ops: Vec<Op>,
}

impl OutputBank for RecordingBank {
    type Error = Infallible;

    fn set_digit_select(&mut self, position: usize) -> Result<(), Infallible> {
        self.ops.push(Op::Select(position));
        Ok(())
    }

    fn set_segment_pattern(&mut self, value: u8) -> Result<(), Infallible> {
        self.ops.push(Op::Pattern(value));
        Ok(())
    }
}

impl RecordingBank {
    /// `(position, value)` pairs as they were lit.
    pub fn lit(&self) -> Vec<(usize, u8)> {
        self.ops
            .chunks(2)
            .map(|pair| match pair {
                [Op::Select(p), Op::Pattern(v)] => (*p, *v),
                other => panic!("unexpected op sequence {other:?}"),
            })
            .collect()
    }
}

/// A bank whose lines refuse to be driven.
pub struct BrokenBank;

#[derive(Debug, PartialEq, Eq)]
pub struct LineFault;

impl OutputBank for BrokenBank {
    type Error = LineFault;

    fn set_digit_select(&mut self, _: usize) -> Result<(), LineFault> {
        Err(LineFault)
    }

    fn set_segment_pattern(&mut self, _: u8) -> Result<(), LineFault> {
        Err(LineFault)
    }
}

/// Records every requested delay instead of waiting.
#[derive(Default)]
pub struct RecordingDelay {
    pub waits_us: Vec<u32>,
}

impl DelayUs<u32> for RecordingDelay {
    fn delay_us(&mut self, us: u32) {
        self.waits_us.push(us);
    }
}

#[derive(Default)]
pub struct FakeTicker {
    pub running: bool,
    pub starts: u32,
    pub stops: u32,
}

impl TickSource for FakeTicker {
    type Error = Infallible;

    fn start(&mut self) -> Result<(), Infallible> {
        if !self.running {
            self.running = true;
            self.starts += 1;
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Infallible> {
        if self.running {
            self.running = false;
            self.stops += 1;
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn acknowledge(&mut self) -> Result<bool, Infallible> {
        Ok(self.running)
    }
}

/// A ticker whose next re-arm fails, the way an alarm refusing a schedule does.
#[derive(Default)]
pub struct FlakyTicker {
    pub inner: FakeTicker,
    pub fail_next_rearm: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RearmFault;

impl TickSource for FlakyTicker {
    type Error = RearmFault;

    fn start(&mut self) -> Result<(), RearmFault> {
        self.inner.start().map_err(|never| match never {})
    }

    fn stop(&mut self) -> Result<(), RearmFault> {
        self.inner.stop().map_err(|never| match never {})
    }

    fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    fn acknowledge(&mut self) -> Result<bool, RearmFault> {
        if self.inner.running && std::mem::take(&mut self.fail_next_rearm) {
            self.inner.running = false;
            return Err(RearmFault);
        }
        self.inner.acknowledge().map_err(|never| match never {})
    }
}

pub fn stopwatch(config: Config) -> Stopwatch<FakeTicker> {
    Stopwatch::new(FakeTicker::default(), &config).unwrap()
}
