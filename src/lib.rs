//! Exact multiplication of arbitrary-precision decimal integers with the
//! Karatsuba algorithm.
//!
//! [`BigInt`] stores base-10 digits least-significant first together with a
//! sign flag. The public [`multiply`] entry point only accepts non-negative
//! operands, but every primitive underneath is sign-aware because the
//! Karatsuba combination step produces transient negative values.
//!
//! ```
//! use karatsuba::{multiply, BigInt};
//!
//! let x: BigInt = "1234".parse().unwrap();
//! let y: BigInt = "5678".parse().unwrap();
//! assert_eq!(multiply(&x, &y).unwrap().to_string(), "7006652");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

mod addsub;
pub mod config;
pub mod error;
pub mod karatsuba;
mod low_level;
pub mod primitives;
pub mod schoolbook_mul;
#[cfg(test)]
mod test_utils;

pub use config::KaratsubaConfig;
pub use error::{InvalidOperand, Result};
pub use karatsuba::{multiply, Multiplier};

use low_level::{cmp_digits, BASE};

#[derive(PartialEq, Eq, Clone, Hash)]
pub struct BigInt {
    negative: bool,
    digits: Vec<u8>,
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BigInt")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.pad_integral(true, "", "0");
        }
        let text: String = self
            .digits
            .iter()
            .rev()
            .map(|&digit| char::from(b'0' + digit))
            .collect();
        f.pad_integral(!self.negative, "", &text)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign_cmp = other.negative.cmp(&self.negative);
        if sign_cmp != Ordering::Equal {
            return sign_cmp;
        }
        if self.negative {
            other.cmp_abs(self)
        } else {
            self.cmp_abs(other)
        }
    }
}

impl BigInt {
    pub const ZERO: BigInt = BigInt {
        digits: Vec::new(),
        negative: false,
    };

    pub fn one() -> Self {
        BigInt {
            digits: vec![1],
            negative: false,
        }
    }

    /// Builds a value from little-endian decimal digits.
    pub fn from_digits(digits: Vec<u8>, negative: bool) -> Result<Self> {
        if let Some(&bad) = digits.iter().find(|&&digit| digit >= BASE) {
            return Err(InvalidOperand::DigitOutOfRange(bad));
        }
        Ok(BigInt { digits, negative }.normalize())
    }

    /// Little-endian decimal digits. Zero has no digits.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    fn cmp_abs(&self, other: &Self) -> Ordering {
        cmp_digits(&self.digits, &other.digits)
    }

    fn normalize_in_place(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.negative = false;
        }
    }

    fn normalize(mut self) -> Self {
        self.normalize_in_place();
        self
    }

    fn neg_in_place(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    fn from_slice(digits: &[u8], negative: bool) -> Self {
        BigInt {
            digits: digits.to_vec(),
            negative,
        }
        .normalize()
    }

    fn from_u64(mut x: u64) -> Self {
        let mut digits = Vec::with_capacity(20);
        while x != 0 {
            digits.push((x % BASE as u64) as u8);
            x /= BASE as u64;
        }
        BigInt {
            digits,
            negative: false,
        }
    }
}

impl From<u64> for BigInt {
    fn from(x: u64) -> Self {
        BigInt::from_u64(x)
    }
}

impl From<u32> for BigInt {
    fn from(x: u32) -> Self {
        BigInt::from_u64(x as u64)
    }
}

impl FromStr for BigInt {
    type Err = InvalidOperand;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if body.is_empty() {
            return Err(InvalidOperand::Empty);
        }
        let offset = s.len() - body.len();
        let mut digits = Vec::with_capacity(body.len());
        for (i, found) in body.char_indices() {
            match found.to_digit(10) {
                Some(digit) => digits.push(digit as u8),
                None => {
                    return Err(InvalidOperand::InvalidDigit {
                        offset: offset + i,
                        found,
                    })
                }
            }
        }
        digits.reverse();
        Ok(BigInt { digits, negative }.normalize())
    }
}
