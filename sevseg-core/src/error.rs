// Validation failures for attribute writes.
//
// Both control surfaces are log-and-drop: an invalid write leaves the
// display state untouched. Callers decide whether to log or report back.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Digit outside 0..=9.
    #[error("digit out of range")]
    DigitOutOfRange,
    /// Digit attribute written with something other than "0".."9".
    #[error("invalid digit")]
    InvalidDigit,
    /// Mode attribute written with a string naming neither active nor sleep.
    #[error("invalid mode")]
    InvalidMode,
    /// Line did not name a known attribute.
    #[error("unknown attribute")]
    UnknownAttribute,
}
