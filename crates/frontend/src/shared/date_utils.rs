//! Date display helpers for table cells.

use chrono::NaiveDate;

/// Format a YYYY-MM-DD date as DD.MM.YYYY. Values that do not parse, such as
/// the "-" placeholder for unscheduled dates, are returned unchanged.
pub fn format_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}
