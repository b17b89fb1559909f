//! Seven-segment display logic, portable across firmware and host tests.
//!
//! Everything specific to one board lives in the firmware crate; this crate
//! only knows about the eight segment lines as an abstract pin set:
//!
//! - [`segment`] — the segment line set and the digit lookup table
//! - [`state`] — current digit + active/sleep mode
//! - [`command`] — the `digit` / `mode` attribute line protocol
//! - [`driver`] — applies a pattern to eight [`OutputPin`]s, clearing every
//!   line before raising the selected ones
//!
//! [`OutputPin`]: embedded_hal::digital::OutputPin

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod driver;
pub mod error;
pub mod segment;
pub mod state;

pub use command::Command;
pub use driver::SegmentDriver;
pub use error::Error;
pub use segment::{SEGMENT_LINES, SegmentSet, segments_for_digit};
pub use state::{DisplayState, Mode};
