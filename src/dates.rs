//! "Date added" rendering for issue timestamps.
//!
//! Only the calendar-date part of the timestamp is used; time and offset are
//! dropped without conversion, so `2017-12-14T23:59:00-05:00` stays on the 14th.

use crate::error::DateFormatError;
use chrono::NaiveDate;

/// Layout of the rendered cell. The trailing space is part of the format.
pub const DATE_ADDED_FORMAT: &str = "%A %d %m %Y ";

/// Render an ISO-8601 timestamp as `<weekday> <dd> <mm> <yyyy> `.
///
/// ```
/// use issue_xlsx::dates::format_date_added;
///
/// let cell = format_date_added("2017-12-14T07:10:34.500895+00:00").unwrap();
/// assert_eq!(cell, "Thursday 14 12 2017 ");
/// ```
pub fn format_date_added(timestamp: &str) -> Result<String, DateFormatError> {
    let (date_part, _time) = timestamp
        .split_once('T')
        .ok_or(DateFormatError::MissingSeparator)?;

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| DateFormatError::InvalidDate(date_part.to_string()))?;

    Ok(date.format(DATE_ADDED_FORMAT).to_string())
}
