pub mod application_dto;
pub mod envelope;
pub mod job_dto;
