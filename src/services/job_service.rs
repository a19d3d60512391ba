use crate::dto::job_dto::{JobListQuery, NewJob};
use crate::error::{Error, Result};
use crate::models::job::Job;
use crate::utils::query::contains_pattern;
use sqlx::PgPool;

const JOB_COLUMNS: &str = r#"
    j.id, j.title, j.company, j.location, j.category, j.type, j.salary,
    j.description, j.requirements, j.logo,
    (SELECT COUNT(*) FROM applications a WHERE a.job_id = j.id) AS application_count,
    j.created_at, j.updated_at
"#;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, job: NewJob) -> Result<Job> {
        let created = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (
                title, company, location, category, type,
                salary, description, requirements, logo
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, title, company, location, category, type, salary,
                description, requirements, logo,
                0::bigint AS application_count,
                created_at, updated_at
            "#,
        )
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.category)
        .bind(job.job_type)
        .bind(&job.salary)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(&job.logo)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(job_id = created.id, title = %created.title, "job created");
        Ok(created)
    }

    /// Lists jobs newest-first. Every supplied filter must match.
    pub async fn list(&self, query: JobListQuery) -> Result<Vec<Job>> {
        let query = query.normalized();

        let mut filters = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(search) = query.search {
            args.push(contains_pattern(&search));
            let n = args.len();
            filters.push(format!(
                "(j.title ILIKE ${n} OR j.company ILIKE ${n} OR j.description ILIKE ${n})"
            ));
        }
        if let Some(category) = query.category {
            args.push(category);
            filters.push(format!("j.category = ${}", args.len()));
        }
        if let Some(location) = query.location {
            args.push(contains_pattern(&location));
            filters.push(format!("j.location ILIKE ${}", args.len()));
        }
        if let Some(job_type) = query.job_type {
            args.push(job_type);
            filters.push(format!("j.type::text = ${}", args.len()));
        }

        let where_clause = if filters.is_empty() {
            "".to_string()
        } else {
            format!("WHERE {}", filters.join(" AND "))
        };

        let items_query = format!(
            "SELECT {} FROM jobs j {} ORDER BY j.created_at DESC, j.id DESC",
            JOB_COLUMNS, where_clause
        );

        let mut statement = sqlx::query_as::<_, Job>(&items_query);
        for value in &args {
            statement = statement.bind(value);
        }
        let items = statement.fetch_all(&self.pool).await?;

        Ok(items)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "SELECT {} FROM jobs j WHERE j.id = $1",
            JOB_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        job.ok_or_else(Error::job_not_found)
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Removes the job. Its applications go with it through the cascading
    /// foreign key.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::job_not_found());
        }

        tracing::info!(job_id = id, "job deleted");
        Ok(())
    }

    pub async fn distinct_categories(&self) -> Result<Vec<String>> {
        self.distinct_values("category").await
    }

    pub async fn distinct_locations(&self) -> Result<Vec<String>> {
        self.distinct_values("location").await
    }

    // `column` is always one of the literals above, never user input.
    async fn distinct_values(&self, column: &'static str) -> Result<Vec<String>> {
        let values = sqlx::query_scalar::<_, String>(&format!(
            "SELECT DISTINCT {column} FROM jobs
             WHERE {column} IS NOT NULL AND {column} <> ''
             ORDER BY {column}"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(values)
    }
}
