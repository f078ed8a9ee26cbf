//! Formatting of instants in Beijing time.
//!
//! All output is rendered in [`FIXED_TIME_ZONE`]; the host's local time zone is never consulted.

use std::time::SystemTime;

use jiff::{
    SignedDuration, Timestamp, Zoned,
    civil::{Date, DateTime},
    tz::TimeZone,
};

use thiserror::Error;

/// IANA name of the only time zone this crate renders in.
pub const FIXED_TIME_ZONE: &str = "Asia/Shanghai";

const FULL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SCHEDULE_TIME_FORMAT: &str = "%H:%M";
const DATE_LABEL_FORMAT: &str = "%m-%d";
const HOUR_LABEL_FORMAT: &str = "%H:00";

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("time zone {name:?} unavailable")]
    TimeZoneUnavailable {
        name: &'static str,
        #[source]
        source: jiff::Error,
    },
}

impl TimeError {
    fn invalid(input: impl ToString, reason: impl ToString) -> Self {
        Self::InvalidTimestamp {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Anything that can be resolved to a single point in time.
pub trait IntoInstant {
    fn into_instant(self) -> Result<Timestamp, TimeError>;
}

/// Epoch milliseconds.
impl IntoInstant for i64 {
    fn into_instant(self) -> Result<Timestamp, TimeError> {
        Timestamp::from_millisecond(self).map_err(|e| TimeError::invalid(self, e))
    }
}

impl IntoInstant for &str {
    fn into_instant(self) -> Result<Timestamp, TimeError> {
        parse_instant(self)
    }
}

impl IntoInstant for &String {
    fn into_instant(self) -> Result<Timestamp, TimeError> {
        parse_instant(self)
    }
}

impl IntoInstant for String {
    fn into_instant(self) -> Result<Timestamp, TimeError> {
        parse_instant(&self)
    }
}

impl IntoInstant for Timestamp {
    fn into_instant(self) -> Result<Timestamp, TimeError> {
        Ok(self)
    }
}

impl IntoInstant for &Zoned {
    fn into_instant(self) -> Result<Timestamp, TimeError> {
        Ok(self.timestamp())
    }
}

impl IntoInstant for Zoned {
    fn into_instant(self) -> Result<Timestamp, TimeError> {
        Ok(self.timestamp())
    }
}

impl IntoInstant for SystemTime {
    fn into_instant(self) -> Result<Timestamp, TimeError> {
        Timestamp::try_from(self).map_err(|e| TimeError::invalid(format!("{self:?}"), e))
    }
}

pub fn fixed_time_zone() -> Result<TimeZone, TimeError> {
    TimeZone::get(FIXED_TIME_ZONE).map_err(|source| TimeError::TimeZoneUnavailable {
        name: FIXED_TIME_ZONE,
        source,
    })
}

/// The current moment in the fixed time zone.
pub fn current_instant() -> Result<Zoned, TimeError> {
    Ok(Timestamp::now().to_zoned(fixed_time_zone()?))
}

/// Current time as `YYYY-MM-DD HH:mm:ss`.
pub fn get_current_time() -> Result<String, TimeError> {
    let now = current_instant()?;

    Ok(now.strftime(FULL_TIME_FORMAT).to_string())
}

/// Time of day of `timestamp` as `HH:mm`.
pub fn format_schedule_time(timestamp: impl IntoInstant) -> Result<String, TimeError> {
    render(timestamp, SCHEDULE_TIME_FORMAT)
}

/// `timestamp` as `YYYY-MM-DD HH:mm:ss`.
pub fn format_full_time(timestamp: impl IntoInstant) -> Result<String, TimeError> {
    render(timestamp, FULL_TIME_FORMAT)
}

/// Day of `timestamp` as `MM-DD`.
pub fn format_date_label(timestamp: impl IntoInstant) -> Result<String, TimeError> {
    render(timestamp, DATE_LABEL_FORMAT)
}

/// Hour of `timestamp` as `HH:00`.
pub fn format_hour_label(timestamp: impl IntoInstant) -> Result<String, TimeError> {
    render(timestamp, HOUR_LABEL_FORMAT)
}

fn render(timestamp: impl IntoInstant, format: &str) -> Result<String, TimeError> {
    let instant = timestamp.into_instant()?;

    let zoned = instant.to_zoned(fixed_time_zone()?);

    Ok(zoned.strftime(format).to_string())
}

fn is_epoch_millis(input: &str) -> bool {
    let digits = input.strip_prefix(['-', '+']).unwrap_or(input);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Rewrites ISO-8601 end of day (`2024-03-15T24:00:00`) to the same day's `T00:00:00`,
/// keeping any offset suffix. The caller adds the missing day.
fn end_of_day_as_midnight(input: &str) -> Option<String> {
    let (date, rest) = input.split_at_checked(10)?;
    let rest = rest.strip_prefix(['T', 't', ' '])?;
    let rest = rest.strip_prefix("24:00")?;
    let rest = rest.strip_prefix(":00").unwrap_or(rest);
    let rest = match rest.strip_prefix(['.', ',']) {
        Some(fraction) => fraction.trim_start_matches('0'),
        None => rest,
    };

    Some(format!("{date}T00:00:00{rest}"))
}

fn parse_instant(input: &str) -> Result<Timestamp, TimeError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(TimeError::invalid(input, "empty input"));
    }

    if is_epoch_millis(trimmed) {
        let millis: i64 = trimmed
            .parse()
            .map_err(|e| TimeError::invalid(input, e))?;
        return millis.into_instant();
    }

    if let Some(midnight) = end_of_day_as_midnight(trimmed) {
        let start_of_day = parse_instant(&midnight).map_err(|err| match err {
            TimeError::InvalidTimestamp { reason, .. } => TimeError::invalid(input, reason),
            other => other,
        })?;
        return start_of_day
            .checked_add(SignedDuration::from_hours(24))
            .map_err(|e| TimeError::invalid(input, e));
    }

    let timestamp_err = match trimmed.parse::<Timestamp>() {
        Ok(timestamp) => return Ok(timestamp),
        Err(err) => err,
    };

    // no offset given: the civil value is read as Beijing time
    let zoned = if let Ok(datetime) = trimmed.parse::<DateTime>() {
        datetime.to_zoned(fixed_time_zone()?)
    } else if let Ok(date) = trimmed.parse::<Date>() {
        date.to_zoned(fixed_time_zone()?)
    } else {
        return Err(TimeError::invalid(input, timestamp_err));
    };

    zoned
        .map(|zoned| zoned.timestamp())
        .map_err(|e| TimeError::invalid(input, e))
}
