//! Display formatting for money and dates.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats whole taka with thousands separators.
///
/// # Examples
///
/// ```
/// use nexus_protocol::format::taka;
///
/// assert_eq!(taka(45_500), "৳45,500");
/// assert_eq!(taka(0), "৳0");
/// assert_eq!(taka(1_234_567), "৳1,234,567");
/// ```
#[must_use]
pub fn taka(amount: u64) -> String {
    format!("৳{}", thousands(amount))
}

/// Inserts `,` every three digits.
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a day as `Jan 24, 2026`.
#[must_use]
pub fn date(day: NaiveDate) -> String {
    day.format("%b %d, %Y").to_string()
}

/// Formats a timestamp as `Jan 24, 2026 04:02 PM`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nexus_protocol::format::date_time;
///
/// let at = NaiveDate::from_ymd_opt(2026, 1, 24).unwrap().and_hms_opt(16, 2, 0).unwrap();
/// assert_eq!(date_time(at), "Jan 24, 2026 04:02 PM");
/// ```
#[must_use]
pub fn date_time(at: NaiveDateTime) -> String {
    at.format("%b %d, %Y %I:%M %p").to_string()
}

/// Formats an optional day, showing `-` when absent.
#[must_use]
pub fn optional_date(day: Option<NaiveDate>) -> String {
    day.map_or_else(|| "-".to_string(), date)
}
