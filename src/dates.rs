use chrono::DateTime;

use crate::constants::DATE_FORMAT;
use crate::error::{ArchiveError, Result};

/// Format seconds since the epoch as e.g. "21 May 2021, 01:00 PM" (UTC)
pub fn format_timestamp(epoch_seconds: i64) -> Result<String> {
    let datetime = DateTime::from_timestamp(epoch_seconds, 0).ok_or_else(|| {
        ArchiveError::MalformedInput(format!("timestamp {} out of range", epoch_seconds))
    })?;
    Ok(datetime.format(DATE_FORMAT).to_string())
}

/// Drop the time of day from a string produced by `format_timestamp`
/// "21 May 2021, 01:00 PM" -> "21 May 2021"
pub fn coarse_date(formatted: &str) -> Result<&str> {
    formatted
        .rfind(',')
        .map(|comma| &formatted[..comma])
        .ok_or_else(|| ArchiveError::MalformedInput(format!("no comma in date '{}'", formatted)))
}

/// Human duration, "1:02:03" or "2:03"; None for unknown (zero or negative)
pub fn format_duration(seconds: i64) -> Option<String> {
    if seconds <= 0 {
        return None;
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    Some(if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    })
}
