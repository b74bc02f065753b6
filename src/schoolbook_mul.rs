use crate::low_level::{add_to_digits, BASE};
use crate::BigInt;

/// Quadratic digit-by-digit product. Each row is a single-digit multiply
/// accumulated in place, so a single-digit operand costs one pass over the
/// other operand; this is the base case of the Karatsuba recursion.
pub fn schoolbook_mul(l: &BigInt, r: &BigInt) -> BigInt {
    if l.is_zero() || r.is_zero() {
        return BigInt::ZERO;
    }
    let mut digits = vec![0u8; l.digits.len() + r.digits.len() + 1];
    for (i, &l_digit) in l.digits.iter().enumerate() {
        if l_digit == 0 {
            continue;
        }
        // 9 * 9 + 9 + 9 fits comfortably in a u8
        let mut carry = 0u8;
        for (&r_digit, digit) in r.digits.iter().zip(digits[i..].iter_mut()) {
            let prod = l_digit * r_digit + *digit + carry;
            *digit = prod % BASE;
            carry = prod / BASE;
        }
        if carry != 0 {
            add_to_digits(carry, &mut digits[i + r.digits.len()..]);
        }
    }
    let negative = l.negative ^ r.negative;
    BigInt { digits, negative }.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mul_small(a in any::<u32>(), b in any::<u32>()) {
            let prod = schoolbook_mul(&BigInt::from(a), &BigInt::from(b));
            assert_eq!(prod, BigInt::from(a as u64 * b as u64));
       }
    }
    proptest! {
        #[test]
        fn mul_zero(a in any_bigint(0..40)) {
            let prod = schoolbook_mul(&BigInt::ZERO, &a);
            assert_eq!(prod, BigInt::ZERO);
        }
    }
    proptest! {
        #[test]
        fn mul_identity(a in any_bigint(0..40)) {
            let prod = schoolbook_mul(&BigInt::one(), &a);
            assert_eq!(prod, a);
        }
    }
    proptest! {
        #[test]
        fn distributive(a in any_bigint(0..40), b in any_bigint(0..40), c in any_bigint(0..40)) {
            let sum_last = schoolbook_mul(&a, &c) + schoolbook_mul(&b, &c);
            let sum_first = schoolbook_mul(&(a.clone() + b), &c);
            assert_eq!(sum_first, sum_last);
        }
    }
    proptest! {
        #[test]
        fn matches_reference(a in any_bigint(0..60), b in any_bigint(0..60)) {
            let prod = schoolbook_mul(&a, &b);
            assert_eq!(to_reference(&prod), to_reference(&a) * to_reference(&b));
        }
    }
    #[test]
    fn hardcoded() {
        let a = BigInt::from(2u32);
        let b: BigInt = "-99999999999999999999".parse().unwrap();
        let prod = schoolbook_mul(&a, &b);
        assert_eq!(prod.to_string(), "-199999999999999999998");
    }
    #[test]
    fn single_digit_table() {
        for x in 0u32..10 {
            for y in 0u32..10 {
                let prod = schoolbook_mul(&BigInt::from(x), &BigInt::from(y));
                assert_eq!(prod, BigInt::from(x * y));
            }
        }
    }
}
