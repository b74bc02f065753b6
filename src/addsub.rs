use crate::low_level::{add_assign_digits, cmp_digits, sub_assign_digits, sub_assign_digits_reverse};
use crate::BigInt;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl BigInt {
    /// Adds a signed magnitude to `self`. Subtraction is this with the sign
    /// flipped, so neither side is negated or cloned.
    fn add_signed_in_place(&mut self, other_negative: bool, other_digits: &[u8]) {
        if self.negative == other_negative {
            add_assign_digits(&mut self.digits, other_digits);
        } else {
            match cmp_digits(&self.digits, other_digits) {
                Ordering::Greater => sub_assign_digits(&mut self.digits, other_digits),
                Ordering::Equal => {
                    *self = BigInt::ZERO;
                    return;
                }
                Ordering::Less => {
                    sub_assign_digits_reverse(&mut self.digits, other_digits);
                    self.negative = other_negative;
                }
            }
        }
        self.normalize_in_place();
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, other: &'a Self) {
        self.add_signed_in_place(other.negative, &other.digits);
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, mut other: Self) {
        // Keep the longer buffer so the sum lands without reallocating.
        if self.digits.len() < other.digits.len() {
            std::mem::swap(self, &mut other);
        }
        *self += &other;
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, other: &'a Self) {
        // Zero is never negative, so flipping its sign must not happen here.
        let other_negative = !other.negative && !other.is_zero();
        self.add_signed_in_place(other_negative, &other.digits);
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign:ident) => {
        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(mut self, other: BigInt) -> BigInt {
                self.$assign(other);
                self
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, other: &'a BigInt) -> BigInt {
                self.$assign(other);
                self
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign(&other);
                out
            }
        }

        impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $method(self, other: &'b BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign(other);
                out
            }
        }
    };
}

forward_binop!(Add, add, add_assign);
forward_binop!(Sub, sub, sub_assign);

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.neg_in_place();
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_addition_methods_match(a in any_bigint(0..40), b in any_bigint(0..40)) {
            let reference_sum = &a + &b;
            assert_eq!(reference_sum, &b + &a);
            assert_eq!(reference_sum, a.clone() + &b);
            assert_eq!(reference_sum, &a + b.clone());
            assert_eq!(reference_sum, a.clone() + b.clone());
        }
    }
    proptest! {
        #[test]
        fn test_subtraction_methods_match(a in any_bigint(0..40), b in any_bigint(0..40)) {
            let reference_diff = &a - &b;
            assert_eq!(reference_diff, a.clone() - &b);
            assert_eq!(reference_diff, &a - b.clone());
            assert_eq!(reference_diff, a.clone() - b.clone());
            assert_eq!(reference_diff, -(&b - &a));
        }
    }
    proptest! {
        #[test]
        fn test_additive_identity(a in any_bigint(0..40)) {
            assert_eq!(a, BigInt::ZERO + &a);
            assert_eq!(a, &a - BigInt::ZERO);
            assert_eq!(BigInt::ZERO, &a - &a);
        }
    }
    proptest! {
        #[test]
        fn test_additive_associativity(
            a in any_bigint(0..40),
            b in any_bigint(0..40),
            c in any_bigint(0..40),
            ) {
            assert_eq!(&a + (&b + &c), (&a + &b) + &c);
        }
    }
    proptest! {
        #[test]
        fn test_add_sub_match_reference(a in any_bigint(0..40), b in any_bigint(0..40)) {
            assert_eq!(to_reference(&(&a + &b)), to_reference(&a) + to_reference(&b));
            assert_eq!(to_reference(&(&a - &b)), to_reference(&a) - to_reference(&b));
        }
    }
    #[test]
    fn test_sub_goes_negative() {
        let small = BigInt::from(17u32);
        let big = BigInt::from(1000u32);
        let diff = &small - &big;
        assert!(diff.is_negative());
        assert_eq!(diff.to_string(), "-983");
        assert_eq!(diff + &big, small);
    }
    #[test]
    fn test_carry_extends_length() {
        let a: BigInt = "999999999999".parse().unwrap();
        let sum = a + BigInt::one();
        assert_eq!(sum.to_string(), "1000000000000");
    }
}
