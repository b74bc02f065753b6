extern crate proptest;
use crate::BigInt;
use proptest::prelude::*;

pub fn any_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    (
        proptest::collection::vec(0u8..10, range),
        any::<bool>(),
    )
        .prop_map(|(digits, negative)| BigInt { digits, negative }.normalize())
}
pub fn nonnegative_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    proptest::collection::vec(0u8..10, range).prop_map(|digits| {
        BigInt {
            digits,
            negative: false,
        }
        .normalize()
    })
}
/// Digits biased towards 0 and 9 so carries and borrows ripple far.
pub fn lopsided_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    proptest::collection::vec(prop_oneof![Just(0u8), Just(9u8), 0u8..10], range).prop_map(
        |digits| {
            BigInt {
                digits,
                negative: false,
            }
            .normalize()
        },
    )
}
pub fn to_reference(a: &BigInt) -> num_bigint::BigInt {
    a.to_string()
        .parse()
        .expect("Display output is always valid decimal")
}
pub fn pow10(m: usize) -> BigInt {
    let mut digits = vec![0; m];
    digits.push(1);
    BigInt {
        digits,
        negative: false,
    }
}
