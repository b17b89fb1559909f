//! Segment lines and the digit lookup table.
//!
//! The display has seven strokes (A-G) plus the decimal point (DP), each on
//! its own GPIO line. The bit order here fixes the wiring order expected by
//! [`SegmentDriver`](crate::driver::SegmentDriver).

use bitflags::bitflags;

bitflags! {
    /// On/off pattern over the eight segment lines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SegmentSet: u8 {
        const A  = 1 << 0;
        const B  = 1 << 1;
        const C  = 1 << 2;
        const D  = 1 << 3;
        const E  = 1 << 4;
        const F  = 1 << 5;
        const G  = 1 << 6;
        const DP = 1 << 7;
    }
}

/// Number of segment lines.
pub const SEGMENT_LINES: usize = 8;

// Digit patterns, standard layout: A top, B top-right, C bottom-right,
// D bottom, E bottom-left, F top-left, G middle. Digits never light DP.
pub const DIGIT_SEGMENTS: [SegmentSet; 10] = [
    seg(0b0011_1111), // 0: ABCDEF
    seg(0b0000_0110), // 1: BC
    seg(0b0101_1011), // 2: ABDEG
    seg(0b0100_1111), // 3: ABCDG
    seg(0b0110_0110), // 4: BCFG
    seg(0b0110_1101), // 5: ACDFG
    seg(0b0111_1101), // 6: ACDEFG
    seg(0b0000_0111), // 7: ABC
    seg(0b0111_1111), // 8: ABCDEFG
    seg(0b0110_1111), // 9: ABCDFG
];

const fn seg(bits: u8) -> SegmentSet {
    SegmentSet::from_bits_truncate(bits)
}

/// Pattern for a decimal digit, `None` outside 0..=9.
pub fn segments_for_digit(digit: u8) -> Option<SegmentSet> {
    DIGIT_SEGMENTS.get(digit as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_digits() {
        assert_eq!(
            segments_for_digit(0),
            Some(seg(0b0011_1111)) // outer ring, middle dark
        );
        assert_eq!(segments_for_digit(1), Some(SegmentSet::B | SegmentSet::C));
        assert_eq!(
            segments_for_digit(8),
            Some(SegmentSet::all().difference(SegmentSet::DP))
        );
    }

    #[test]
    fn test_digits_never_light_dp() {
        for pattern in DIGIT_SEGMENTS {
            assert!(!pattern.contains(SegmentSet::DP));
        }
    }

    #[test]
    fn test_patterns_distinct() {
        for (i, a) in DIGIT_SEGMENTS.iter().enumerate() {
            for b in &DIGIT_SEGMENTS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_out_of_range_digit_has_no_pattern() {
        assert_eq!(segments_for_digit(10), None);
        assert_eq!(segments_for_digit(255), None);
    }
}
