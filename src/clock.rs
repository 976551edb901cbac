
/// Number of digit positions on the display.
pub const DIGITS: usize = 6;

/// Elapsed time held by the stopwatch.
///
/// Fields always stay within `secs < 60`, `mins < 60` and `hours < 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    pub hours: u8,
    pub mins: u8,
    pub secs: u8,
}

impl ClockState {
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Builds a state from its parts, wrapping each field into range.
    pub const fn new(hours: u8, mins: u8, secs: u8) -> Self {
        Self {
            hours: hours % 24,
            mins: mins % 60,
            secs: secs % 60,
        }
    }

    /// Advances by one second, carrying into minutes and hours.
    ///
    /// 23:59:59 wraps to 00:00:00.
    pub fn advance(&mut self) {
        if self.secs < 59 {
            self.secs += 1;
            return;
        }
        self.secs = 0;

        if self.mins < 59 {
            self.mins += 1;
            return;
        }
        self.mins = 0;

        self.hours = if self.hours < 23 { self.hours + 1 } else { 0 };
    }

    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Decimal digit shown at `position`, counted from the rightmost digit.
    ///
    /// Position 0 is the units of seconds, 5 the tens of hours. Positions past
    /// the last digit read as 0.
    pub fn digit(&self, position: usize) -> u8 {
        match position {
            0 => self.secs % 10,
            1 => self.secs / 10,
            2 => self.mins % 10,
            3 => self.mins / 10,
            4 => self.hours % 10,
            5 => self.hours / 10,
            _ => 0,
        }
    }

    /// All six digits, indexed by position.
    #[cfg(test)]
    pub fn digits(&self) -> [u8; DIGITS] {
        let mut digits = [0; DIGITS];
        for (position, d) in digits.iter_mut().enumerate() {
            *d = self.digit(position);
        }
        digits
    }
}
