use std::cmp::Ordering;

pub const BASE: u8 = 10;

pub fn add_to_digits(x: u8, digits: &mut [u8]) {
    let mut carry = x;
    for digit in digits.iter_mut() {
        if carry == 0 {
            return;
        }
        let sum = *digit + carry;
        *digit = sum % BASE;
        carry = sum / BASE;
    }
    debug_assert_eq!(carry, 0, "carry ran off the end of the digits");
}

pub fn sub_from_digits(x: u8, digits: &mut [u8]) {
    let mut borrow = x;
    for digit in digits.iter_mut() {
        if borrow == 0 {
            return;
        }
        if *digit >= borrow {
            *digit -= borrow;
            borrow = 0;
        } else {
            *digit = *digit + BASE - borrow;
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0, "borrow ran off the end of the digits");
}

pub fn add_assign_digits(target: &mut Vec<u8>, other: &[u8]) {
    let target_len = std::cmp::max(target.len(), other.len()) + 1;
    target.resize(target_len, 0);
    add_assign_digits_slice(&mut *target, other);
}

// Precondition: target is long enough to absorb the final carry
pub fn add_assign_digits_slice(target: &mut [u8], other: &[u8]) {
    let mut carry = 0;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let sum = *target_digit + other_digit + carry;
        *target_digit = sum % BASE;
        carry = sum / BASE;
    }
    if carry != 0 {
        add_to_digits(carry, &mut target[other.len()..]);
    }
}

// Precondition: target >= other
pub fn sub_assign_digits(target: &mut [u8], other: &[u8]) {
    let mut borrow = 0;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let sub = other_digit + borrow;
        if *target_digit >= sub {
            *target_digit -= sub;
            borrow = 0;
        } else {
            *target_digit = *target_digit + BASE - sub;
            borrow = 1;
        }
    }
    if borrow != 0 {
        sub_from_digits(1, &mut target[other.len()..]);
    }
}

// Precondition: target <= other
pub fn sub_assign_digits_reverse(target: &mut Vec<u8>, other: &[u8]) {
    target.resize(other.len(), 0);
    let mut borrow = 0;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let sub = *target_digit + borrow;
        if other_digit >= sub {
            *target_digit = other_digit - sub;
            borrow = 0;
        } else {
            *target_digit = other_digit + BASE - sub;
            borrow = 1;
        }
    }
    assert!(borrow == 0);
}

/// Compares two normalized little-endian magnitudes.
pub fn cmp_digits(l: &[u8], r: &[u8]) -> Ordering {
    l.len()
        .cmp(&r.len())
        .then_with(|| l.iter().rev().cmp(r.iter().rev()))
}

/// Splits little-endian digits into `(low, high)` at position `at`. Positions
/// past the end give an empty high half.
pub fn split_digits(digits: &[u8], at: usize) -> (&[u8], &[u8]) {
    digits.split_at(std::cmp::min(at, digits.len()))
}
