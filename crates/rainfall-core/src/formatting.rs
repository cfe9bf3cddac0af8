use chrono::Month;

/// Format a rainfall figure the way the reports print it: two decimals, no
/// grouping.
///
/// ```
/// use rainfall_core::formatting::format_amount;
///
/// assert_eq!(format_amount(30.0), "30.00");
/// assert_eq!(format_amount(13.228756555322953), "13.23");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Like [`format_amount`], printing `n/a` for an undefined figure.
pub fn format_optional_amount(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_else(|| "n/a".to_string())
}

/// Three-letter English month name for `month` (1–12).
///
/// Out-of-range values fall back to the plain number.
pub fn month_abbrev(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name()[..3].to_string())
        .unwrap_or_else(|| month.to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(1523.456), "1523.46");
    }

    #[test]
    fn test_format_optional_amount() {
        assert_eq!(format_optional_amount(Some(4.5)), "4.50");
        assert_eq!(format_optional_amount(None), "n/a");
    }

    #[test]
    fn test_month_abbrev() {
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_abbrev(9), "Sep");
        assert_eq!(month_abbrev(12), "Dec");
        assert_eq!(month_abbrev(13), "13");
        assert_eq!(month_abbrev(0), "0");
    }
}
