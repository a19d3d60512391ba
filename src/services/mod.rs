pub mod application_service;
pub mod job_service;
