mod time;
mod version_info;

use axum::{Router, http::StatusCode, routing::get};

use tower::ServiceBuilder;

use tower_http::{
    ServiceBuilderExt,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use std::time::Duration;

use crate::{
    config::ServerConfiguration, service::time_service::DynTimeService,
    utils::request::CounterRequestId,
};

async fn health() -> &'static str {
    "all good"
}

fn request_timeout_layer(request_timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout)
}

fn create_api_routes(time_service: DynTimeService) -> Router {
    let time_routes = Router::new()
        .route("/current", get(time::current_time))
        .route("/format", get(time::format_time))
        .with_state(time_service);

    Router::new()
        .nest("/time", time_routes)
        .route("/version_info", get(version_info::get_version_info))
}

pub fn create_routes(
    server_configuration: &ServerConfiguration,
    time_service: DynTimeService,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest(
            &server_configuration.context,
            create_api_routes(time_service),
        )
        // Add middleware to all routes
        .layer(
            ServiceBuilder::new()
                // make sure to set request ids before the request reaches `TraceLayer`
                .set_x_request_id(CounterRequestId::default())
                // log requests and responses
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().include_headers(true))
                        .on_response(DefaultOnResponse::new().include_headers(true)),
                )
                // propagate the header to the response before the response reaches `TraceLayer`
                .propagate_x_request_id()
                .layer(request_timeout_layer(server_configuration.request_timeout))
                .into_inner(),
        )
}
