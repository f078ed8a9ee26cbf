use serde::Serialize;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::utils::time::{self, FIXED_TIME_ZONE, TimeError};

pub trait TimeService {
    fn current_time(&self) -> Result<CurrentTimeDTO, TimeServiceError>;

    fn format_timestamp(&self, timestamp: &str) -> Result<FormattedTimeDTO, TimeServiceError>;
}

pub type DynTimeService = Arc<dyn TimeService + Send + Sync>;

#[derive(Debug, Serialize)]
pub struct CurrentTimeDTO {
    pub time_zone: &'static str,
    pub now: String,
}

#[derive(Debug, Serialize)]
pub struct FormattedTimeDTO {
    pub time_zone: &'static str,
    pub timestamp: String,
    pub full_time: String,
    pub schedule_time: String,
    pub date_label: String,
    pub hour_label: String,
}

#[derive(Debug)]
pub enum TimeServiceError {
    InvalidTimestamp(String),
    TimeZoneUnavailable(String),
}

impl From<TimeError> for TimeServiceError {
    fn from(err: TimeError) -> Self {
        match err {
            TimeError::InvalidTimestamp { .. } => Self::InvalidTimestamp(err.to_string()),
            TimeError::TimeZoneUnavailable { .. } => {
                warn!("time zone lookup failed: {:#}", anyhow::Error::from(err));
                Self::TimeZoneUnavailable(format!("time zone {FIXED_TIME_ZONE:?} unavailable"))
            }
        }
    }
}

pub fn new_time_service() -> DynTimeService {
    Arc::new(TimeServiceImpl)
}

struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    fn current_time(&self) -> Result<CurrentTimeDTO, TimeServiceError> {
        Ok(CurrentTimeDTO {
            time_zone: FIXED_TIME_ZONE,
            now: time::get_current_time()?,
        })
    }

    fn format_timestamp(&self, timestamp: &str) -> Result<FormattedTimeDTO, TimeServiceError> {
        debug!("format_timestamp timestamp = {:?}", timestamp);

        let instant = time::IntoInstant::into_instant(timestamp)?;

        Ok(FormattedTimeDTO {
            time_zone: FIXED_TIME_ZONE,
            timestamp: timestamp.to_owned(),
            full_time: time::format_full_time(instant)?,
            schedule_time: time::format_schedule_time(instant)?,
            date_label: time::format_date_label(instant)?,
            hour_label: time::format_hour_label(instant)?,
        })
    }
}
