//! Raspberry Pi Pico wiring for the stopwatch.
//!
//! | line            | pin        |
//! |-----------------|------------|
//! | digit select 0-5 | GP0..GP5 (active high) |
//! | BCD bit 0-3     | GP6..GP9   |
//! | decoder enable  | GP10       |
//! | reset           | GP11, pull-up, falling edge |
//! | pause           | GP12, pull-up, falling edge |
//! | resume          | GP13, pull-down, rising edge |
//! | heartbeat LED   | GP25       |

use rp_pico::hal::{
    fugit::ExtU32,
    gpio::{
        bank0::{Gpio11, Gpio12, Gpio13, Gpio25},
        DynPinId, FunctionSio, Interrupt, Pin, PullDown, PullUp, SioInput, SioOutput,
    },
    timer::{Alarm, ScheduleAlarmError, Timer},
};
use wokwi_stopwatch::{Edges, TickPhase, TickSource};

/// Any of the ten display output lines.
pub type LinePin = Pin<DynPinId, FunctionSio<SioOutput>, PullDown>;
pub type LedPin = Pin<Gpio25, FunctionSio<SioOutput>, PullDown>;

pub type ResetPin = Pin<Gpio11, FunctionSio<SioInput>, PullUp>;
pub type PausePin = Pin<Gpio12, FunctionSio<SioInput>, PullUp>;
pub type ResumePin = Pin<Gpio13, FunctionSio<SioInput>, PullDown>;

const RESET_EDGE: Interrupt = Interrupt::EdgeLow;
const PAUSE_EDGE: Interrupt = Interrupt::EdgeLow;
const RESUME_EDGE: Interrupt = Interrupt::EdgeHigh;

/// The three control inputs, each latching its edge in the GPIO block.
pub struct Buttons {
    reset: ResetPin,
    pause: PausePin,
    resume: ResumePin,
}

impl Buttons {
    pub fn new(reset: ResetPin, pause: PausePin, resume: ResumePin) -> Self {
        reset.set_interrupt_enabled(RESET_EDGE, true);
        pause.set_interrupt_enabled(PAUSE_EDGE, true);
        resume.set_interrupt_enabled(RESUME_EDGE, true);
        Self {
            reset,
            pause,
            resume,
        }
    }

    /// Edges latched since they were last cleared.
    pub fn pending(&self) -> Edges {
        Edges {
            reset: self.reset.interrupt_status(RESET_EDGE),
            pause: self.pause.interrupt_status(PAUSE_EDGE),
            resume: self.resume.interrupt_status(RESUME_EDGE),
        }
    }

    pub fn clear(&mut self, edges: Edges) {
        if edges.reset {
            self.reset.clear_interrupt(RESET_EDGE);
        }
        if edges.pause {
            self.pause.clear_interrupt(PAUSE_EDGE);
        }
        if edges.resume {
            self.resume.clear_interrupt(RESUME_EDGE);
        }
    }
}

/// A [`TickSource`] on one of the RP2040 timer alarms.
///
/// The alarm is one-shot, so it is re-armed on every acknowledged fire. A
/// stop keeps the unexpired part of the period and the next start runs only
/// that, so pausing never loses counted time.
pub struct AlarmTicker<A> {
    alarm: A,
    timer: Timer,
    phase: TickPhase,
    running: bool,
}

impl<A: Alarm> AlarmTicker<A> {
    pub fn new(mut alarm: A, timer: Timer, period_us: u32) -> Self {
        alarm.enable_interrupt();
        Self {
            alarm,
            timer,
            phase: TickPhase::new(period_us),
            running: false,
        }
    }

    fn now_us(&self) -> u64 {
        self.timer.get_counter().ticks()
    }
}

impl<A: Alarm> TickSource for AlarmTicker<A> {
    type Error = ScheduleAlarmError;

    fn start(&mut self) -> Result<(), Self::Error> {
        if self.running {
            return Ok(());
        }
        let delay = self.phase.start(self.now_us());
        if let Err(e) = self.alarm.schedule(delay.micros()) {
            self.phase.clear();
            return Err(e);
        }
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        if !self.running {
            return Ok(());
        }
        self.running = false;
        self.phase.stop(self.now_us());
        self.alarm.cancel()?;
        // A fire latched just before the cancel is still owed through the phase.
        self.alarm.clear_interrupt();
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn acknowledge(&mut self) -> Result<bool, Self::Error> {
        self.alarm.clear_interrupt();
        if !self.running {
            return Ok(false);
        }
        let delay = self.phase.rearm(self.now_us());
        if let Err(e) = self.alarm.schedule(delay.micros()) {
            // Nothing is armed now; let a later resume start over.
            self.running = false;
            self.phase.clear();
            return Err(e);
        }
        Ok(true)
    }
}
