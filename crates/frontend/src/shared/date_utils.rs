/// Utilities for date parsing and formatting
///
/// Form dates travel as `MM/DD/YYYY` strings, the format of the date pickers
/// and of the backend.
use chrono::NaiveDate;

pub const FORM_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse `MM/DD/YYYY`. Empty or malformed input gives `None`.
pub fn parse_form_date(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, FORM_DATE_FORMAT).ok()
}

/// Format a date as `MM/DD/YYYY`
pub fn format_form_date(date: NaiveDate) -> String {
    date.format(FORM_DATE_FORMAT).to_string()
}

/// `MM/DD/YYYY` → `YYYY-MM-DD` for `<input type="date">`; anything else is kept
pub fn form_date_to_iso(date_str: &str) -> String {
    parse_form_date(date_str)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

/// `YYYY-MM-DD` from `<input type="date">` → `MM/DD/YYYY`
pub fn iso_to_form_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d")
        .map(format_form_date)
        .unwrap_or_else(|_| iso.to_string())
}

/// `true` only when both dates parse and `date` is strictly earlier than `bound`
pub fn is_before(date: &str, bound: &str) -> bool {
    match (parse_form_date(date), parse_form_date(bound)) {
        (Some(d), Some(b)) => d < b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_date() {
        assert_eq!(
            parse_form_date("06/01/2024"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(parse_form_date(""), None);
        assert_eq!(parse_form_date("2024-06-01"), None);
    }

    #[test]
    fn test_iso_conversions() {
        assert_eq!(form_date_to_iso("06/10/2024"), "2024-06-10");
        assert_eq!(iso_to_form_date("2024-06-10"), "06/10/2024");
        assert_eq!(iso_to_form_date(""), "");
    }

    #[test]
    fn test_is_before() {
        assert!(is_before("04/30/2024", "05/01/2024"));
        assert!(!is_before("05/01/2024", "05/01/2024"));
        assert!(!is_before("", "05/01/2024"));
        assert!(!is_before("06/01/2024", "garbage"));
    }
}
