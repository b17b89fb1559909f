//! GPIO |    Function     |      Notes
//! -----+-----------------+----------------------------------
//!  0   | Segment A       | top
//!  1   | Segment B       | top right
//!  2   | Segment C       | bottom right
//!  3   | Segment D       | bottom
//!  4   | Segment E       | bottom left
//!  5   | Segment F       | top left
//!  6   | Segment G       | middle
//!  7   | Segment DP      | decimal point
//!  9   | Button UP       | BOOT button, active LOW, internal pullup
//! 20   | Button DOWN     | active LOW, internal pullup (U0RXD; free, log goes over USB-JTAG)
//! 21   | Button MODE     | active LOW, internal pullup (U0TXD)

// ----- Segment lines (bit order of sevseg_core::SegmentSet) -----
pub const SEG_A: u8 = 0;
pub const SEG_B: u8 = 1;
pub const SEG_C: u8 = 2;
pub const SEG_D: u8 = 3;
pub const SEG_E: u8 = 4;
pub const SEG_F: u8 = 5;
pub const SEG_G: u8 = 6;
pub const SEG_DP: u8 = 7;

// ----- Buttons (digital, active LOW) -----
pub const BTN_UP: u8 = 9;
pub const BTN_DOWN: u8 = 20;
pub const BTN_MODE: u8 = 21;
