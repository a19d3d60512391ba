pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use crate::services::{application_service::ApplicationService, job_service::JobService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub job_service: JobService,
    pub application_service: ApplicationService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let job_service = JobService::new(pool.clone());
        let application_service = ApplicationService::new(pool, job_service.clone());

        Self {
            job_service,
            application_service,
        }
    }
}
