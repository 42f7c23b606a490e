//! Cell value coercion
//!
//! Every numeric statistic enters a record through [`coerce_int`]. Malformed
//! cells are never an error; they count as zero.

/// Coerce a raw cell into an integer
///
/// Absent, blank and `nan` cells are 0. Decimal strings are truncated toward
/// zero, so `"12.0"` is 12 and `"-2.9"` is -2. Thousands separators are
/// accepted (`"1,204"` is 1204). Anything else is 0.
pub fn coerce_int(value: Option<&str>) -> i64 {
    let Some(raw) = value else {
        return 0;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return 0;
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();

    if let Ok(whole) = cleaned.parse::<i64>() {
        return whole;
    }

    match cleaned.parse::<f64>() {
        Ok(number) if number.is_finite() => number.trunc() as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_values_are_zero() {
        assert_eq!(coerce_int(None), 0);
        assert_eq!(coerce_int(Some("")), 0);
        assert_eq!(coerce_int(Some("   ")), 0);
        assert_eq!(coerce_int(Some("nan")), 0);
        assert_eq!(coerce_int(Some("NaN")), 0);
        assert_eq!(coerce_int(Some("abc")), 0);
        assert_eq!(coerce_int(Some("inf")), 0);
        assert_eq!(coerce_int(Some("12-3")), 0);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(coerce_int(Some("7")), 7);
        assert_eq!(coerce_int(Some(" 7 ")), 7);
        assert_eq!(coerce_int(Some("12.0")), 12);
        assert_eq!(coerce_int(Some("3.99")), 3);
        assert_eq!(coerce_int(Some("-2.9")), -2);
        assert_eq!(coerce_int(Some("1,204")), 1204);
        assert_eq!(coerce_int(Some("1e2")), 100);
    }
}
