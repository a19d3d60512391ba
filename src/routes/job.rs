use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        envelope::ApiResponse,
        job_dto::{CreateJobPayload, JobListQuery},
    },
    error::Result,
    routes::extract::{ApiJson, ApiPath, ApiQuery},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "jobs",
    params(JobListQuery),
    responses(
        (status = 200, description = "Matching jobs, newest first, with `total`")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list(query).await?;
    Ok(Json(ApiResponse::list(jobs)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(job)))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created successfully"),
        (status = 422, description = "Validation failed")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    let new_job = payload.into_new_job()?;
    let job = state.job_service.create(new_job).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(job).with_message("Job created successfully.")),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job and its applications deleted"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Job deleted successfully.")))
}

#[utoipa::path(
    get,
    path = "/api/jobs/meta/categories",
    tag = "jobs",
    responses(
        (status = 200, description = "Distinct job categories")
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.job_service.distinct_categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/meta/locations",
    tag = "jobs",
    responses(
        (status = 200, description = "Distinct job locations")
    )
)]
#[axum::debug_handler]
pub async fn list_locations(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let locations = state.job_service.distinct_locations().await?;
    Ok(Json(ApiResponse::ok(locations)))
}
