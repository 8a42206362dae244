//! Numeric helpers shared by the statistics, chart and export modules

/// Rounds half-way values towards positive infinity.
///
/// Unlike `f64::round`, -2.5 becomes -2. Percentages (surge can be
/// negative) and displayed decimals go through this.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to one decimal place with [`round_half_up`]
pub fn round_one_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(1.25), 1.3);
        assert_eq!(round_one_decimal(0.4), 0.4);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }
}
