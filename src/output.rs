//! Discrete output lines driving the multiplexed display.

use embedded_hal::digital::v2::OutputPin;

use crate::clock::DIGITS;

/// Number of lines carrying the BCD digit value to the segment decoder.
pub const BCD_LINES: usize = 4;

/// The output lines behind the display.
pub trait OutputBank {
    type Error;

    /// Activates the select line of `position` and deactivates all others.
    fn set_digit_select(&mut self, position: usize) -> Result<(), Self::Error>;

    /// Drives the segment lines with a 4-bit value (only the low nibble is used).
    fn set_segment_pattern(&mut self, value: u8) -> Result<(), Self::Error>;
}

/// An [`OutputBank`] made of individual GPIO pins.
///
/// Select lines are active high. The BCD lines carry bit 0 on `bcd[0]`.
pub struct PinBank<P> {
    select: [P; DIGITS],
    bcd: [P; BCD_LINES],
}

impl<P: OutputPin> PinBank<P> {
    /// Takes ownership of the pins and drives every line low.
    pub fn new(select: [P; DIGITS], bcd: [P; BCD_LINES]) -> Result<Self, P::Error> {
        let mut bank = Self { select, bcd };
        for pin in bank.select.iter_mut().chain(bank.bcd.iter_mut()) {
            pin.set_low()?;
        }
        Ok(bank)
    }
}

impl<P: OutputPin> OutputBank for PinBank<P> {
    type Error = P::Error;

    fn set_digit_select(&mut self, position: usize) -> Result<(), Self::Error> {
        // Break before make, so two digits never light together.
        for (i, pin) in self.select.iter_mut().enumerate() {
            if i != position {
                pin.set_low()?;
            }
        }
        if let Some(pin) = self.select.get_mut(position) {
            pin.set_high()?;
        }
        Ok(())
    }

    fn set_segment_pattern(&mut self, value: u8) -> Result<(), Self::Error> {
        for (bit, pin) in self.bcd.iter_mut().enumerate() {
            if value & (1 << bit) != 0 {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakePin(Rc<Cell<bool>>);

    impl OutputPin for FakePin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.set(true);
            Ok(())
        }
    }

    fn bank() -> (PinBank<FakePin>, [FakePin; DIGITS], [FakePin; BCD_LINES]) {
        let select: [FakePin; DIGITS] = Default::default();
        let bcd: [FakePin; BCD_LINES] = Default::default();
        let bank = PinBank::new(select.clone(), bcd.clone()).unwrap();
        (bank, select, bcd)
    }

    fn levels<const N: usize>(pins: &[FakePin; N]) -> [bool; N] {
        let mut out = [false; N];
        for (o, p) in out.iter_mut().zip(pins) {
            *o = p.0.get();
        }
        out
    }

    #[test]
    fn exactly_one_select_line_active() {
        let (mut bank, select, _) = bank();
        bank.set_digit_select(2).unwrap();
        assert_eq!(levels(&select), [false, false, true, false, false, false]);
        bank.set_digit_select(5).unwrap();
        assert_eq!(levels(&select), [false, false, false, false, false, true]);
    }

    #[test]
    fn segment_pattern_is_bcd() {
        let (mut bank, _, bcd) = bank();
        bank.set_segment_pattern(9).unwrap();
        assert_eq!(levels(&bcd), [true, false, false, true]);
        bank.set_segment_pattern(0x16).unwrap();
        assert_eq!(levels(&bcd), [false, true, true, false]);
    }
}
