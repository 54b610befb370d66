/// Round `value` to `decimals` places
///
/// Rounds the exact binary value, so `0.15` (stored just below) becomes `0.1`
/// and a true tie such as `12.25` goes to the even digit. Scaling by a power
/// of ten first would round twice.
#[inline]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Percentage of the smaller input list that ended up paired, to one decimal
///
/// Returns 0 when either list is empty.
pub fn pairing_efficiency(total_pairs: usize, total_deliveries: usize, total_returns: usize) -> f64 {
    let pairable = total_deliveries.min(total_returns);
    if pairable == 0 {
        return 0.0;
    }

    round_to(total_pairs as f64 / pairable as f64 * 100.0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to(0.5510607772599071, 2), 0.55);
        assert_eq!(round_to(1.1119492664455874, 2), 1.11);
        assert_eq!(round_to(2.999, 2), 3.0);
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(round_to(12.25, 1), 12.2);
        assert_eq!(round_to(12.75, 1), 12.8);
    }

    #[test]
    fn test_round_uses_exact_binary_value() {
        // 0.05 is stored slightly above, 0.15 slightly below
        assert_eq!(round_to(0.05, 1), 0.1);
        assert_eq!(round_to(0.15, 1), 0.1);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_round_keeps_non_finite() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn test_efficiency_with_one_pair_in_large_batch() {
        assert_eq!(pairing_efficiency(1, 2000, 2000), 0.1);
        assert_eq!(pairing_efficiency(3, 2000, 2000), 0.1);
    }

    #[test]
    fn test_efficiency_full() {
        assert_eq!(pairing_efficiency(3, 3, 5), 100.0);
    }

    #[test]
    fn test_efficiency_partial() {
        assert_eq!(pairing_efficiency(2, 3, 4), 66.7);
        assert_eq!(pairing_efficiency(49, 400, 500), 12.2);
    }

    #[test]
    fn test_efficiency_empty_inputs() {
        assert_eq!(pairing_efficiency(0, 0, 4), 0.0);
        assert_eq!(pairing_efficiency(0, 4, 0), 0.0);
        assert_eq!(pairing_efficiency(0, 0, 0), 0.0);
    }
}
