use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{application_dto::SubmitApplicationPayload, envelope::ApiResponse},
    error::Result,
    routes::extract::{ApiJson, ApiPath},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "applications",
    request_body = SubmitApplicationPayload,
    responses(
        (status = 201, description = "Application submitted, returned with its job"),
        (status = 404, description = "The selected job does not exist"),
        (status = 422, description = "Validation failed or already applied")
    )
)]
#[axum::debug_handler]
pub async fn submit_application(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SubmitApplicationPayload>,
) -> Result<impl IntoResponse> {
    let application = state
        .application_service
        .submit(payload)
        .await?
        .into_result()?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(application).with_message("Application submitted successfully.")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}/applications",
    tag = "applications",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Applications for the job, newest first, with `total`"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn list_job_applications(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<i64>,
) -> Result<impl IntoResponse> {
    let applications = state.application_service.list_by_job(job_id).await?;
    Ok(Json(ApiResponse::list(applications)))
}
