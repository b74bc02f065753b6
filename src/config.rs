/// Default digit length at or below which operands are multiplied directly.
/// One digit reproduces the classic `x < 10 || y < 10` cutoff.
pub const BASE_CASE_DIGITS: usize = 1;

/// Default operand size, in digits, from which the three sub-products of a
/// level are computed concurrently when the `parallel` feature is on.
pub const PARALLEL_THRESHOLD: usize = 1024;

/// Tuning knobs for [`Multiplier`](crate::Multiplier).
///
/// None of these change the product, only how it is computed and which
/// operands are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaratsubaConfig {
    pub base_case_digits: usize,
    pub parallel_threshold: usize,
    /// Largest accepted operand, in digits. `None` accepts anything that
    /// fits in memory; recursion depth only grows with the log of the size.
    pub max_operand_digits: Option<usize>,
}

impl Default for KaratsubaConfig {
    fn default() -> Self {
        KaratsubaConfig {
            base_case_digits: BASE_CASE_DIGITS,
            parallel_threshold: PARALLEL_THRESHOLD,
            max_operand_digits: None,
        }
    }
}

impl KaratsubaConfig {
    /// A threshold of zero would never reach the base case, so it is
    /// raised to one.
    pub fn with_base_case_digits(mut self, digits: usize) -> Self {
        self.base_case_digits = std::cmp::max(digits, 1);
        self
    }

    pub fn with_parallel_threshold(mut self, digits: usize) -> Self {
        self.parallel_threshold = digits;
        self
    }

    pub fn with_max_operand_digits(mut self, digits: usize) -> Self {
        self.max_operand_digits = Some(digits);
        self
    }

    pub(crate) fn is_base_case(&self, l_len: usize, r_len: usize) -> bool {
        let threshold = std::cmp::max(self.base_case_digits, 1);
        l_len <= threshold || r_len <= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_single_digit_cutoff() {
        let config = KaratsubaConfig::default();
        assert!(config.is_base_case(1, 500));
        assert!(config.is_base_case(500, 1));
        assert!(!config.is_base_case(2, 2));
        assert_eq!(config.max_operand_digits, None);
    }

    #[test]
    fn zero_threshold_is_clamped() {
        let config = KaratsubaConfig::default().with_base_case_digits(0);
        assert_eq!(config.base_case_digits, 1);

        // Fields are public, so the clamp is also applied at use.
        let raw = KaratsubaConfig {
            base_case_digits: 0,
            ..KaratsubaConfig::default()
        };
        assert!(raw.is_base_case(1, 7));
    }
}
