use axum::response::Json;
use utoipa::OpenApi;

use crate::{
    dto::{application_dto::SubmitApplicationPayload, job_dto::CreateJobPayload},
    models::{
        application::{Application, ApplicationWithJob},
        job::{Job, JobType},
    },
    routes::{application, health, job},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        job::list_jobs,
        job::get_job,
        job::create_job,
        job::delete_job,
        job::list_categories,
        job::list_locations,
        application::submit_application,
        application::list_job_applications,
    ),
    components(schemas(
        Job,
        JobType,
        Application,
        ApplicationWithJob,
        CreateJobPayload,
        SubmitApplicationPayload,
    )),
    tags(
        (name = "jobs", description = "Job postings"),
        (name = "applications", description = "Candidate applications")
    )
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
