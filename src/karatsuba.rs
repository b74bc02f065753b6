use crate::config::KaratsubaConfig;
use crate::error::{InvalidOperand, Result};
use crate::primitives::{digit_length, scale, split};
use crate::schoolbook_mul::schoolbook_mul;
use crate::BigInt;
use log::debug;
use std::ops::Mul;

/// Multiplies two non-negative integers with the default configuration.
pub fn multiply(x: &BigInt, y: &BigInt) -> Result<BigInt> {
    Multiplier::default().multiply(x, y)
}

#[derive(Debug, Clone, Default)]
pub struct Multiplier {
    config: KaratsubaConfig,
}

impl Multiplier {
    pub fn new(config: KaratsubaConfig) -> Self {
        Multiplier { config }
    }

    pub fn config(&self) -> &KaratsubaConfig {
        &self.config
    }

    /// Exact product of `x` and `y`.
    ///
    /// Negative operands, and operands longer than
    /// `max_operand_digits` when a limit is set, are rejected.
    pub fn multiply(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        self.check_operand(x)?;
        self.check_operand(y)?;
        debug!(
            "karatsuba multiply: {} x {} digits",
            digit_length(x),
            digit_length(y)
        );
        Ok(karatsuba_mul(x, y, &self.config))
    }

    fn check_operand(&self, a: &BigInt) -> Result<()> {
        if a.is_negative() {
            return Err(InvalidOperand::Negative(a.clone()));
        }
        if let Some(limit) = self.config.max_operand_digits {
            let digits = digit_length(a);
            if digits > limit {
                return Err(InvalidOperand::TooLarge { digits, limit });
            }
        }
        Ok(())
    }
}

/// The recursion itself, without operand checks.
///
/// Splitting and the base case both carry signs, so this is exact for
/// signed operands too; [`Multiplier`] is what restricts the public entry
/// point to non-negative values.
pub fn karatsuba_mul(l: &BigInt, r: &BigInt, config: &KaratsubaConfig) -> BigInt {
    let l_len = digit_length(l);
    let r_len = digit_length(r);
    if config.is_base_case(l_len, r_len) {
        return schoolbook_mul(l, r);
    }
    // n >= 2 here, so m >= 1 and every sub-product is on smaller values.
    let n = std::cmp::max(l_len, r_len);
    let m = n / 2;
    let (high1, low1) = split(l, m);
    let (high2, low2) = split(r, m);
    let parallel = n >= config.parallel_threshold;
    let (z0, z1, z2) = join3(
        parallel,
        || karatsuba_mul(&low1, &low2, config),
        || karatsuba_mul(&(&low1 + &high1), &(&low2 + &high2), config),
        || karatsuba_mul(&high1, &high2, config),
    );
    // May be transiently negative for signed inputs; exact either way.
    let cross = z1 - &z2 - &z0;
    scale(&z2, 2 * m) + scale(&cross, m) + z0
}

#[cfg(feature = "parallel")]
fn join3<A, B, C>(parallel: bool, a: A, b: B, c: C) -> (BigInt, BigInt, BigInt)
where
    A: FnOnce() -> BigInt + Send,
    B: FnOnce() -> BigInt + Send,
    C: FnOnce() -> BigInt + Send,
{
    if parallel {
        log::trace!("dispatching karatsuba sub-products to the rayon pool");
        let (a, (b, c)) = rayon::join(a, || rayon::join(b, c));
        (a, b, c)
    } else {
        (a(), b(), c())
    }
}

#[cfg(not(feature = "parallel"))]
fn join3<A, B, C>(_parallel: bool, a: A, b: B, c: C) -> (BigInt, BigInt, BigInt)
where
    A: FnOnce() -> BigInt,
    B: FnOnce() -> BigInt,
    C: FnOnce() -> BigInt,
{
    (a(), b(), c())
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &'b BigInt) -> BigInt {
        karatsuba_mul(self, other, &KaratsubaConfig::default())
    }
}
