use chrono::NaiveDate;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// chrono's `%m`/`%d` accept single digits, so the shape is checked first.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parses a long-form display date such as `November 3, 2025`.
pub fn parse_long_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split_whitespace();
    let month_token = parts.next()?;
    let day_token = parts.next()?;
    let year_token = parts.next()?;

    let month = MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(month_token))?;
    let day: u32 = day_token.trim_end_matches(',').parse().ok()?;
    let year: i32 = year_token.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month as u32 + 1, day)
}

/// Tries the ISO form first, then the long display form.
pub fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    parse_iso_date(trimmed).or_else(|| parse_long_date(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_parsing_is_strict() {
        assert_eq!(parse_iso_date("2025-11-03"), Some(ymd(2025, 11, 3)));
        assert_eq!(parse_iso_date("2025-1-03"), None);
        assert_eq!(parse_iso_date("2025-02-30"), None);
        assert_eq!(parse_iso_date("2025/11/03"), None);
        assert_eq!(parse_iso_date(" 2025-11-03"), None);
    }

    #[test]
    fn long_form_parsing() {
        assert_eq!(parse_long_date("November 3, 2025"), Some(ymd(2025, 11, 3)));
        assert_eq!(parse_long_date("march 14 2024"), Some(ymd(2024, 3, 14)));
        assert_eq!(parse_long_date("Smarch 1, 2024"), None);
        assert_eq!(parse_long_date("February 30, 2024"), None);
        assert_eq!(parse_long_date("November"), None);
    }

    #[test]
    fn month_name_bounds() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
