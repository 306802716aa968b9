use chrono::NaiveTime;

use crate::server::error::{auth::AuthError, domain::DomainError};

/// Weekday names in schedule order. Stored lower-case.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Normalizes a weekday name to its stored lower-case form.
///
/// # Arguments
/// - `value` - Day name in any case, surrounding whitespace ignored
///
/// # Returns
/// - `Ok(&'static str)` - Lower-case weekday
/// - `Err(DomainError::InvalidDay)` - Not one of the seven weekday names
pub fn normalize_weekday(value: &str) -> Result<&'static str, DomainError> {
    let lowered = value.trim().to_ascii_lowercase();

    WEEKDAYS
        .iter()
        .find(|day| **day == lowered)
        .copied()
        .ok_or_else(|| DomainError::InvalidDay(value.to_string()))
}

/// Position of a stored weekday in the Monday-first week. Unknown names sort last.
pub fn weekday_order(day: &str) -> usize {
    WEEKDAYS
        .iter()
        .position(|d| d.eq_ignore_ascii_case(day))
        .unwrap_or(WEEKDAYS.len())
}

/// Parses a time of day given as `HH:MM` or `HH:MM:SS`.
///
/// # Returns
/// - `Ok(NaiveTime)` - Parsed time
/// - `Err(DomainError::InvalidTime)` - Neither format matched
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, DomainError> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| DomainError::InvalidTime(value.to_string()))
}

/// Formats a time of day as `HH:MM`.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Parses the token `sub` claim into a user id.
///
/// # Returns
/// - `Ok(i32)` - Numeric user id
/// - `Err(AuthError::InvalidSubject)` - Subject is not an integer
pub fn parse_subject(sub: &str) -> Result<i32, AuthError> {
    sub.parse::<i32>()
        .map_err(|_| AuthError::InvalidSubject(sub.to_string()))
}
