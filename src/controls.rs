//! Edge-triggered controls and the order in which simultaneous ones apply.

use heapless::Vec;

/// One of the three physical controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Control {
    /// Zeroes the clock. Leaves the running state alone.
    Reset,
    /// Stops time-keeping. The display keeps showing the frozen value.
    Pause,
    /// Restarts time-keeping from the frozen value.
    Resume,
}

/// Edges seen on the control inputs at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edges {
    pub reset: bool,
    pub pause: bool,
    pub resume: bool,
}

impl Edges {
    pub const NONE: Self = Self {
        reset: false,
        pause: false,
        resume: false,
    };

    pub fn only(control: Control) -> Self {
        let mut edges = Self::NONE;
        edges.insert(control);
        edges
    }

    pub fn insert(&mut self, control: Control) {
        match control {
            Control::Reset => self.reset = true,
            Control::Pause => self.pause = true,
            Control::Resume => self.resume = true,
        }
    }

    pub fn contains(&self, control: Control) -> bool {
        match control {
            Control::Reset => self.reset,
            Control::Pause => self.pause,
            Control::Resume => self.resume,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.reset || self.pause || self.resume)
    }

    /// The pending controls in the order they must be applied.
    ///
    /// Reset goes first since it does not interact with pause or resume.
    /// When both pause and resume are pending, the one that wins goes last.
    pub fn ordered(&self, precedence: Precedence) -> Vec<Control, 3> {
        let mut order = Vec::new();
        let run = match precedence.run {
            RunOrder::PauseWins => [Control::Resume, Control::Pause],
            RunOrder::ResumeWins => [Control::Pause, Control::Resume],
        };
        for control in [Control::Reset].into_iter().chain(run) {
            if self.contains(control) {
                // Capacity matches the number of controls.
                order.push(control).ok();
            }
        }
        order
    }
}

/// How a reset lines up against a tick firing at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetOrder {
    /// The tick is counted first and then wiped by the reset.
    AfterTick,
    /// The reset lands first and the tick counts from zero.
    BeforeTick,
}

/// Which of pause and resume wins when both arrive together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunOrder {
    PauseWins,
    ResumeWins,
}

/// Policy for triggers that are logically simultaneous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Precedence {
    pub reset: ResetOrder,
    pub run: RunOrder,
}

impl Precedence {
    pub const DEFAULT: Self = Self {
        reset: ResetOrder::AfterTick,
        run: RunOrder::PauseWins,
    };
}

impl Default for Precedence {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_edges_yield_nothing() {
        assert!(Edges::NONE.is_empty());
        assert!(Edges::NONE.ordered(Precedence::DEFAULT).is_empty());
    }

    #[test]
    fn reset_is_applied_first() {
        let edges = Edges {
            reset: true,
            pause: true,
            resume: false,
        };
        assert_eq!(
            edges.ordered(Precedence::DEFAULT).as_slice(),
            &[Control::Reset, Control::Pause]
        );
    }

    #[test]
    fn winner_of_pause_and_resume_goes_last() {
        let edges = Edges {
            reset: false,
            pause: true,
            resume: true,
        };
        let pause_wins = Precedence::DEFAULT;
        let resume_wins = Precedence {
            run: RunOrder::ResumeWins,
            ..Precedence::DEFAULT
        };
        assert_eq!(
            edges.ordered(pause_wins).as_slice(),
            &[Control::Resume, Control::Pause]
        );
        assert_eq!(
            edges.ordered(resume_wins).as_slice(),
            &[Control::Pause, Control::Resume]
        );
    }

    #[test]
    fn only_sets_a_single_edge() {
        let edges = Edges::only(Control::Resume);
        assert!(edges.contains(Control::Resume));
        assert!(!edges.contains(Control::Reset));
        assert!(!edges.contains(Control::Pause));
    }
}
