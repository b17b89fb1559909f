//! Drives the eight segment lines through any [`OutputPin`] implementation.
//!
//! [`SegmentDriver::apply`] clears every line before raising the selected
//! ones, so a previous digit can never leave a stale segment lit.

use embedded_hal::digital::OutputPin;

use crate::segment::{SEGMENT_LINES, SegmentSet};

/// Owns the segment pins. Pin order follows the [`SegmentSet`] bit order:
/// A, B, C, D, E, F, G, DP.
pub struct SegmentDriver<P> {
    pins: [P; SEGMENT_LINES],
}

impl<P: OutputPin> SegmentDriver<P> {
    pub fn new(pins: [P; SEGMENT_LINES]) -> Self {
        Self { pins }
    }

    /// Drive every segment line low.
    pub fn clear(&mut self) -> Result<(), P::Error> {
        for pin in &mut self.pins {
            pin.set_low()?;
        }
        Ok(())
    }

    /// Show exactly `pattern`: clear all lines, then raise the selected ones.
    pub fn apply(&mut self, pattern: SegmentSet) -> Result<(), P::Error> {
        self.clear()?;
        for (line, pin) in self.pins.iter_mut().enumerate() {
            if pattern.bits() & (1 << line) != 0 {
                pin.set_high()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::segment::DIGIT_SEGMENTS;

    /// Shared log of every pin write, in order: (line, level).
    type PinLog = Rc<RefCell<Vec<(usize, bool)>>>;

    struct TestPin {
        line: usize,
        log: PinLog,
    }

    impl embedded_hal::digital::ErrorType for TestPin {
        type Error = core::convert::Infallible;
    }

    impl OutputPin for TestPin {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.line, true));
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.line, false));
            Ok(())
        }
    }

    fn test_driver() -> (SegmentDriver<TestPin>, PinLog) {
        let log: PinLog = Rc::new(RefCell::new(Vec::new()));
        let pins = core::array::from_fn(|line| TestPin {
            line,
            log: log.clone(),
        });
        (SegmentDriver::new(pins), log)
    }

    /// Final level of each line after replaying the log.
    fn levels(log: &PinLog) -> [bool; SEGMENT_LINES] {
        let mut levels = [false; SEGMENT_LINES];
        for &(line, level) in log.borrow().iter() {
            levels[line] = level;
        }
        levels
    }

    #[test]
    fn test_apply_clears_every_line_before_setting() {
        let (mut driver, log) = test_driver();
        driver.apply(DIGIT_SEGMENTS[8]).unwrap();

        let ops = log.borrow().clone();
        assert_eq!(ops.len(), SEGMENT_LINES + 7); // 8 clears + 7 strokes of "8"
        assert!(ops[..SEGMENT_LINES].iter().all(|&(_, level)| !level));
        assert!(ops[SEGMENT_LINES..].iter().all(|&(_, level)| level));
    }

    #[test]
    fn test_apply_replaces_previous_pattern() {
        let (mut driver, log) = test_driver();
        driver.apply(DIGIT_SEGMENTS[8]).unwrap();
        driver.apply(DIGIT_SEGMENTS[1]).unwrap();

        // only B and C (lines 1 and 2) remain lit
        assert_eq!(
            levels(&log),
            [false, true, true, false, false, false, false, false]
        );
    }

    #[test]
    fn test_clear_darkens_all() {
        let (mut driver, log) = test_driver();
        driver.apply(DIGIT_SEGMENTS[8]).unwrap();
        driver.clear().unwrap();
        assert_eq!(levels(&log), [false; SEGMENT_LINES]);
    }
}
