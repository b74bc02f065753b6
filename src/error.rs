//! Errors raised at the construction and multiplication boundary.
//!
//! Arithmetic on values that already exist is infallible; everything here is
//! about rejecting input that is not a non-negative decimal integer the
//! engine is willing to multiply.

use crate::BigInt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InvalidOperand>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOperand {
    /// No digits after the optional sign.
    #[error("invalid operand: no digits")]
    Empty,

    #[error("invalid operand: unexpected character {found:?} at byte {offset}")]
    InvalidDigit { offset: usize, found: char },

    /// A raw digit vector held a value outside `0..10`.
    #[error("invalid operand: digit value {0} is not a decimal digit")]
    DigitOutOfRange(u8),

    #[error("invalid operand: {0} is negative")]
    Negative(BigInt),

    #[error("invalid operand: {digits} digits exceeds the limit of {limit}")]
    TooLarge { digits: usize, limit: usize },
}
