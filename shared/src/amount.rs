use crate::error::FormError;

/// Keeps only the ASCII digits of `input`, so "1,500,000đ" becomes "1500000".
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parses the digits of a free-text amount field.
///
/// A field without any digit parses to 0. Digit runs that overflow `u64`
/// return `FormError::AmountOverflow` with the stripped digits.
pub fn parse_amount_digits(input: &str) -> Result<u64, FormError> {
    let digits = strip_non_digits(input);
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<u64>()
        .map_err(|_| FormError::AmountOverflow(digits))
}

/// Adds a signed quick-add delta to an amount, clamping at 0 and `u64::MAX`.
pub fn apply_delta(base: u64, delta: i64) -> u64 {
    if delta >= 0 {
        base.saturating_add(delta.unsigned_abs())
    } else {
        base.saturating_sub(delta.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_separators_and_symbols() {
        assert_eq!(strip_non_digits("1,500,000đ"), "1500000");
        assert_eq!(strip_non_digits("  50.000 "), "50000");
        assert_eq!(strip_non_digits("abc"), "");
        assert_eq!(strip_non_digits(""), "");
    }

    #[test]
    fn test_strip_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not part of the amount
        assert_eq!(strip_non_digits("١٢3"), "3");
    }

    #[test]
    fn test_parse_amount_digits() {
        assert_eq!(parse_amount_digits("20000"), Ok(20000));
        assert_eq!(parse_amount_digits("20,000 VND"), Ok(20000));
        assert_eq!(parse_amount_digits("007"), Ok(7));
        assert_eq!(parse_amount_digits(""), Ok(0));
        assert_eq!(parse_amount_digits("-"), Ok(0));
    }

    #[test]
    fn test_parse_amount_digits_overflow() {
        let huge = "99999999999999999999999";
        assert_eq!(
            parse_amount_digits(huge),
            Err(FormError::AmountOverflow(huge.to_string()))
        );
        assert_eq!(parse_amount_digits(&u64::MAX.to_string()), Ok(u64::MAX));
    }

    #[test]
    fn test_apply_delta_clamps_at_zero() {
        assert_eq!(apply_delta(0, -10_000), 0);
        assert_eq!(apply_delta(5_000, -10_000), 0);
        assert_eq!(apply_delta(15_000, -10_000), 5_000);
        assert_eq!(apply_delta(0, i64::MIN), 0);
    }

    #[test]
    fn test_apply_delta_saturates_at_max() {
        assert_eq!(apply_delta(u64::MAX, 1), u64::MAX);
        assert_eq!(apply_delta(u64::MAX - 1, i64::MAX), u64::MAX);
    }

    #[test]
    fn test_apply_delta_composes_additively() {
        let base = 30_000;
        for (d1, d2) in [(10_000, 10_000), (50_000, -20_000), (-10_000, 5_000), (0, 0)] {
            assert_eq!(apply_delta(apply_delta(base, d1), d2), apply_delta(base, d1 + d2));
        }
    }
}
