use crate::dto::application_dto::{NewApplication, SubmitApplicationPayload};
use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationWithJob};
use crate::services::job_service::JobService;
use crate::utils::validation::FieldErrors;
use sqlx::PgPool;

/// Every way a submission can end. Only storage failures are reported
/// through `Err`.
#[derive(Debug)]
pub enum SubmitOutcome {
    Submitted(ApplicationWithJob),
    ValidationFailed(FieldErrors),
    JobNotFound,
    Duplicate,
}

impl SubmitOutcome {
    pub fn into_result(self) -> Result<ApplicationWithJob> {
        match self {
            SubmitOutcome::Submitted(application) => Ok(application),
            SubmitOutcome::ValidationFailed(errors) => Err(Error::Validation(errors)),
            SubmitOutcome::JobNotFound => Err(Error::NotFound(
                "The selected job does not exist.".to_string(),
            )),
            SubmitOutcome::Duplicate => Err(Error::DuplicateApplication),
        }
    }
}

enum InsertOutcome {
    Inserted(Application),
    Duplicate,
    JobMissing,
}

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
    jobs: JobService,
}

impl ApplicationService {
    pub fn new(pool: PgPool, jobs: JobService) -> Self {
        Self { pool, jobs }
    }

    /// Validate, confirm the job, pre-check for a duplicate, insert, then
    /// attach the job. The unique index on (job_id, lower(email)) is what
    /// actually guarantees a single row per pair; the pre-check only gives the
    /// common case a cheap answer.
    pub async fn submit(&self, payload: SubmitApplicationPayload) -> Result<SubmitOutcome> {
        let new_application = match payload.into_new_application() {
            Ok(application) => application,
            Err(Error::Validation(errors)) => return Ok(SubmitOutcome::ValidationFailed(errors)),
            Err(other) => return Err(other),
        };

        if !self.jobs.exists(new_application.job_id).await? {
            return Ok(SubmitOutcome::JobNotFound);
        }

        if self
            .has_applied(new_application.job_id, &new_application.email)
            .await?
        {
            tracing::info!(job_id = new_application.job_id, "duplicate application rejected");
            return Ok(SubmitOutcome::Duplicate);
        }

        let application = match self.insert(&new_application).await? {
            InsertOutcome::Inserted(application) => application,
            InsertOutcome::Duplicate => {
                tracing::info!(
                    job_id = new_application.job_id,
                    "duplicate application rejected by storage constraint"
                );
                return Ok(SubmitOutcome::Duplicate);
            }
            InsertOutcome::JobMissing => return Ok(SubmitOutcome::JobNotFound),
        };

        let job = match self.jobs.get_by_id(application.job_id).await {
            Ok(job) => job,
            Err(Error::NotFound(_)) => return Ok(SubmitOutcome::JobNotFound),
            Err(other) => return Err(other),
        };

        tracing::info!(
            application_id = application.id,
            job_id = application.job_id,
            "application submitted"
        );
        Ok(SubmitOutcome::Submitted(ApplicationWithJob { application, job }))
    }

    pub async fn has_applied(&self, job_id: i64, email: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM applications WHERE job_id = $1 AND lower(email) = lower($2)
            )
            "#,
        )
        .bind(job_id)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn insert(&self, application: &NewApplication) -> Result<InsertOutcome> {
        let inserted = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (job_id, name, email, resume_link, cover_note)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, job_id, name, email, resume_link, cover_note, created_at, updated_at
            "#,
        )
        .bind(application.job_id)
        .bind(&application.name)
        .bind(&application.email)
        .bind(&application.resume_link)
        .bind(&application.cover_note)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(row) => Ok(InsertOutcome::Inserted(row)),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Ok(InsertOutcome::Duplicate)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Ok(InsertOutcome::JobMissing)
            }
            Err(other) => Err(other.into()),
        }
    }

    pub async fn list_by_job(&self, job_id: i64) -> Result<Vec<Application>> {
        if !self.jobs.exists(job_id).await? {
            return Err(Error::job_not_found());
        }

        let applications = sqlx::query_as::<_, Application>(
            r#"
            SELECT id, job_id, name, email, resume_link, cover_note, created_at, updated_at
            FROM applications
            WHERE job_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }
}
