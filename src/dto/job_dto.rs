use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::{Error, Result};
use crate::models::job::JobType;
use crate::utils::validation::{clean, TypedFields};

/// Body of `POST /api/jobs`. Fields arrive as raw JSON values so that a
/// missing or mistyped field is reported as a validation error rather than a
/// parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateJobPayload {
    #[schema(value_type = Option<String>)]
    pub title: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub company: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub location: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub category: Option<Value>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>, example = "Full-time")]
    pub job_type: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub salary: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub requirements: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub logo: Option<Value>,
}

#[derive(Debug, Validate)]
struct JobForm {
    #[validate(
        required(message = "Job title is required."),
        length(max = 255, message = "Job title may not be greater than 255 characters.")
    )]
    title: Option<String>,
    #[validate(
        required(message = "Company name is required."),
        length(max = 255, message = "Company name may not be greater than 255 characters.")
    )]
    company: Option<String>,
    #[validate(
        required(message = "Location is required."),
        length(max = 255, message = "Location may not be greater than 255 characters.")
    )]
    location: Option<String>,
    #[validate(
        required(message = "Category is required."),
        length(max = 100, message = "Category may not be greater than 100 characters.")
    )]
    category: Option<String>,
    #[validate(
        required(message = "Job type is required."),
        custom(function = "validate_job_type")
    )]
    job_type: Option<String>,
    #[validate(length(max = 100, message = "Salary may not be greater than 100 characters."))]
    salary: Option<String>,
    #[validate(required(message = "Job description is required."))]
    description: Option<String>,
    requirements: Option<String>,
    #[validate(length(max = 500, message = "Logo may not be greater than 500 characters."))]
    logo: Option<String>,
}

fn validate_job_type(value: &str) -> std::result::Result<(), ValidationError> {
    value.parse::<JobType>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("in");
        error.message = Some(
            "Job type must be one of: Full-time, Part-time, Remote, Contract, Internship.".into(),
        );
        error
    })
}

/// A job that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: String,
    pub job_type: JobType,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Option<String>,
    pub logo: Option<String>,
}

impl CreateJobPayload {
    fn into_form(self, fields: &mut TypedFields) -> JobForm {
        JobForm {
            title: clean(fields.text("title", self.title)),
            company: clean(fields.text("company", self.company)),
            location: clean(fields.text("location", self.location)),
            category: clean(fields.text("category", self.category)),
            job_type: clean(fields.text("type", self.job_type)),
            salary: clean(fields.text("salary", self.salary)),
            description: clean(fields.text("description", self.description)),
            requirements: clean(fields.text("requirements", self.requirements)),
            logo: clean(fields.text("logo", self.logo)),
        }
    }

    /// Normalizes and validates the payload, reporting every violated field.
    pub fn into_new_job(self) -> Result<NewJob> {
        let mut fields = TypedFields::default();
        let form = self.into_form(&mut fields);
        fields.finish(form.validate())?;

        let job_type = required(form.job_type, "type")?
            .parse::<JobType>()
            .map_err(|e| Error::Internal(e.to_string()))?;

        Ok(NewJob {
            title: required(form.title, "title")?,
            company: required(form.company, "company")?,
            location: required(form.location, "location")?,
            category: required(form.category, "category")?,
            job_type,
            salary: form.salary,
            description: required(form.description, "description")?,
            requirements: form.requirements,
            logo: form.logo,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value.ok_or_else(|| Error::Internal(format!("{} missing after validation", field)))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct JobListQuery {
    /// Case-insensitive text matched against title, company and description
    pub search: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    /// Exact job type, e.g. `Full-time`
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

impl JobListQuery {
    pub fn normalized(self) -> Self {
        Self {
            search: clean(self.search),
            category: clean(self.category),
            location: clean(self.location),
            job_type: clean(self.job_type),
        }
    }
}
