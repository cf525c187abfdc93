use chrono::{Datelike, NaiveDate};

use super::dates::{month_name, parse_loose_date};

/// Collapses a set of date strings into a compact display range.
///
/// Entries that parse neither as `YYYY-MM-DD` nor as `Month D, YYYY` are
/// skipped. Returns `None` when nothing parses; callers supply their own label.
pub fn format_date_range<S: AsRef<str>>(dates: &[S]) -> Option<String> {
    let mut parsed = dates.iter().filter_map(|raw| parse_loose_date(raw.as_ref()));
    let first = parsed.next()?;
    let (start, end) = parsed.fold((first, first), |(lo, hi), date| {
        (lo.min(date), hi.max(date))
    });
    Some(render_range(start, end))
}

fn render_range(start: NaiveDate, end: NaiveDate) -> String {
    let start_month = month_name(start.month());
    let end_month = month_name(end.month());

    if start == end {
        format!("{} {}, {}", start_month, start.day(), start.year())
    } else if start.year() == end.year() && start.month() == end.month() {
        format!(
            "{} {}–{}, {}",
            start_month,
            start.day(),
            end.day(),
            start.year()
        )
    } else if start.year() == end.year() {
        format!(
            "{} {}–{} {}, {}",
            start_month,
            start.day(),
            end_month,
            end.day(),
            start.year()
        )
    } else {
        format!(
            "{} {}, {}–{} {}, {}",
            start_month,
            start.day(),
            start.year(),
            end_month,
            end.day(),
            end.year()
        )
    }
}
