use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{Error, Result};
use crate::utils::validation::{clean, TypedFields};

/// Body of `POST /api/applications`. `job_id` may be a number or a string
/// holding one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SubmitApplicationPayload {
    #[schema(value_type = Option<i64>)]
    pub job_id: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub resume_link: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub cover_note: Option<Value>,
}

#[derive(Debug, Validate)]
struct ApplicationForm {
    #[validate(required(message = "Job ID is required."))]
    job_id: Option<i64>,
    #[validate(
        required(message = "Your name is required."),
        length(max = 255, message = "Your name may not be greater than 255 characters.")
    )]
    name: Option<String>,
    #[validate(
        required(message = "Email address is required."),
        email(message = "Please provide a valid email address."),
        length(max = 255, message = "Email address may not be greater than 255 characters.")
    )]
    email: Option<String>,
    #[validate(
        required(message = "Resume link is required."),
        url(message = "Resume link must be a valid URL."),
        length(max = 500, message = "Resume link may not be greater than 500 characters.")
    )]
    resume_link: Option<String>,
    #[validate(length(max = 2000, message = "Cover note may not be greater than 2000 characters."))]
    cover_note: Option<String>,
}

/// An application whose fields passed validation. The referenced job has
/// not been checked yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_id: i64,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_note: Option<String>,
}

impl SubmitApplicationPayload {
    // Emails are compared case-insensitively, so they are stored lowercased.
    fn into_form(self, fields: &mut TypedFields) -> ApplicationForm {
        ApplicationForm {
            job_id: fields.integer("job_id", self.job_id),
            name: clean(fields.text("name", self.name)),
            email: clean(fields.text("email", self.email)).map(|email| email.to_lowercase()),
            resume_link: clean(fields.text("resume_link", self.resume_link)),
            cover_note: clean(fields.text("cover_note", self.cover_note)),
        }
    }

    pub fn into_new_application(self) -> Result<NewApplication> {
        let mut fields = TypedFields::default();
        let form = self.into_form(&mut fields);
        fields.finish(form.validate())?;

        let missing = |field: &str| Error::Internal(format!("{} missing after validation", field));
        Ok(NewApplication {
            job_id: form.job_id.ok_or_else(|| missing("job_id"))?,
            name: form.name.ok_or_else(|| missing("name"))?,
            email: form.email.ok_or_else(|| missing("email"))?,
            resume_link: form.resume_link.ok_or_else(|| missing("resume_link"))?,
            cover_note: form.cover_note,
        })
    }
}
