use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod state;
pub mod utils;
pub mod validation;

use state::AppState;

/// Assembles the full application router with shared layers and state.
///
/// Kept in the library crate so integration tests can drive the exact same
/// router through `tower::ServiceExt::oneshot`.
pub fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/attendance",
            post(handlers::attendance::submit_attendance)
                .get(handlers::attendance::reject_non_post),
        )
        .route("/api/history", get(handlers::history::query_history))
        .route("/api/courses", get(handlers::courses::list_courses))
        .route(
            "/api/courses/{id}/roster",
            get(handlers::courses::course_roster),
        );

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::request_id::request_id))
                .layer(axum_middleware::from_fn(
                    middleware::logging::log_error_responses,
                ))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
