use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enquiry_models::{EnquiryRecord, Extras, WorkType};

/// Enquiry body as posted by the landing page. Everything is optional on the
/// wire so a missing field surfaces as a field error, not a JSON rejection.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnquiryRequest {
    pub name: String,
    pub email: String,
    pub class_name: String,
    pub work_type: String,
    pub subject: String,
    pub deadline: String,
    pub pages: Option<i64>,
    pub extras: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnquiryResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EnquiryErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} has an invalid value: {value}")]
    Invalid { field: &'static str, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing(field) => field,
            ValidationError::Invalid { field, .. } => field,
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(trimmed.to_string())
}

impl EnquiryRequest {
    /// Checks fields in form order and returns the first problem found.
    pub fn validate(self) -> Result<EnquiryRecord, ValidationError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        if !email.contains('@') {
            return Err(ValidationError::Invalid {
                field: "email",
                value: email,
            });
        }
        let class_name = required(&self.class_name, "className")?;

        let raw_work_type = required(&self.work_type, "workType")?;
        let work_type = WorkType::parse(&raw_work_type).ok_or(ValidationError::Invalid {
            field: "workType",
            value: raw_work_type.clone(),
        })?;

        let subject = required(&self.subject, "subject")?;

        let raw_deadline = required(&self.deadline, "deadline")?;
        let deadline = NaiveDate::parse_from_str(&raw_deadline, "%Y-%m-%d").map_err(|_| {
            ValidationError::Invalid {
                field: "deadline",
                value: raw_deadline.clone(),
            }
        })?;

        let raw_pages = self.pages.ok_or(ValidationError::Missing("pages"))?;
        let pages = u32::try_from(raw_pages)
            .ok()
            .filter(|pages| *pages > 0)
            .ok_or(ValidationError::Invalid {
                field: "pages",
                value: raw_pages.to_string(),
            })?;

        let extras = match self.extras.as_deref().map(str::trim) {
            None | Some("") => Extras::None,
            Some(raw) => Extras::parse(raw).ok_or(ValidationError::Invalid {
                field: "extras",
                value: raw.to_string(),
            })?,
        };

        let instructions = self
            .instructions
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(EnquiryRecord {
            name,
            email,
            class_name,
            work_type,
            subject,
            deadline,
            pages,
            extras,
            instructions,
        })
    }
}
