//! Core of a six-digit HH:MM:SS stopwatch on a multiplexed seven-segment display.
//!
//! Everything here is independent of the board: the firmware binary plugs in
//! the RP2040 alarms, GPIO pins and delay, the host tests plug in fakes.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod controls;
pub mod display;
pub mod output;
pub mod stopwatch;
pub mod timer;

pub use clock::ClockState;
pub use config::Config;
pub use controls::{Control, Edges, Precedence};
pub use display::Multiplexer;
pub use output::{OutputBank, PinBank};
pub use stopwatch::Stopwatch;
pub use timer::{TickPhase, TickSource};
