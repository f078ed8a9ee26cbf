use axum::{Json, response::IntoResponse};

use crate::service::version_service;

pub async fn get_version_info() -> impl IntoResponse {
    Json(version_service::version_info())
}
