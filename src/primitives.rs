//! The arithmetic the Karatsuba engine is built from: digit length,
//! positional split, scaling by a power of ten, addition and subtraction.
//!
//! None of these multiply two full operands. All of them return a fresh
//! value and leave their inputs untouched.

use crate::low_level::split_digits;
use crate::BigInt;

/// Number of decimal digits in `a`, ignoring sign. Zero has length 1.
pub fn digit_length(a: &BigInt) -> usize {
    std::cmp::max(a.digits.len(), 1)
}

/// Splits `a` at decimal position `m` into `(high, low)` with
/// `high * 10^m + low == a`.
///
/// For non-negative `a`, `low = a mod 10^m` and `high = a div 10^m`, so
/// `m == 0` yields `(a, 0)`. A negative `a` splits its magnitude and both
/// halves carry the sign, which keeps the identity exact.
pub fn split(a: &BigInt, m: usize) -> (BigInt, BigInt) {
    let (low, high) = split_digits(&a.digits, m);
    (
        BigInt::from_slice(high, a.negative),
        BigInt::from_slice(low, a.negative),
    )
}

/// `a * 10^m`, done as a positional shift.
pub fn scale(a: &BigInt, m: usize) -> BigInt {
    if m == 0 || a.is_zero() {
        return a.clone();
    }
    let mut digits = Vec::with_capacity(a.digits.len() + m);
    digits.resize(m, 0);
    digits.extend_from_slice(&a.digits);
    BigInt {
        digits,
        negative: a.negative,
    }
}

pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
    a + b
}

/// Signed difference; negative whenever `a < b`.
pub fn subtract(a: &BigInt, b: &BigInt) -> BigInt {
    a - b
}
