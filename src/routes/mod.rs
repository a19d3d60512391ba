pub mod application;
pub mod docs;
pub mod extract;
pub mod health;
pub mod job;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{error::Error, AppState};

/// Routes served under `/api`. The static `/jobs/meta/*` segments take
/// precedence over `/jobs/:id`, so `meta` is never parsed as an id.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs/meta/categories", get(job::list_categories))
        .route("/jobs/meta/locations", get(job::list_locations))
        .route("/jobs", get(job::list_jobs).post(job::create_job))
        .route("/jobs/:id", get(job::get_job).delete(job::delete_job))
        .route(
            "/jobs/:id/applications",
            get(application::list_job_applications),
        )
        .route("/applications", post(application::submit_application))
        .route("/openapi.json", get(docs::openapi))
}

pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> Error {
    Error::NotFound("Route not found".to_string())
}
