use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde::Deserialize;

use tracing::debug;

use crate::service::time_service::{
    CurrentTimeDTO, DynTimeService, FormattedTimeDTO, TimeServiceError,
};

impl IntoResponse for TimeServiceError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidTimestamp(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::TimeZoneUnavailable(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FormatTimeParams {
    timestamp: String,
}

pub async fn current_time(
    State(time_service): State<DynTimeService>,
) -> Result<Json<CurrentTimeDTO>, TimeServiceError> {
    let response = time_service.current_time()?;

    Ok(Json(response))
}

pub async fn format_time(
    Query(params): Query<FormatTimeParams>,
    State(time_service): State<DynTimeService>,
) -> Result<Json<FormattedTimeDTO>, TimeServiceError> {
    debug!("in format_time params = {:?}", params);

    let response = time_service.format_timestamp(&params.timestamp)?;

    Ok(Json(response))
}
