use std::future::Future;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::{parse_pages, WorkType};

pub const VALIDATION_MESSAGE: &str = "⚠️ Please fill in all required fields!";
pub const SENT_MESSAGE: &str =
    "✅ Thank you! Your enquiry has been recorded and sent successfully.";
pub const UNDELIVERED_MESSAGE: &str =
    "⚠️ Email could not be sent. Your details are still in the form, please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Extras {
    #[default]
    None,
    Images,
    Printouts,
}

impl Extras {
    pub const ALL: [Extras; 3] = [Extras::None, Extras::Images, Extras::Printouts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Extras::None => "None",
            Extras::Images => "Images",
            Extras::Printouts => "Printouts",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "None" => Some(Extras::None),
            "Images" => Some(Extras::Images),
            "Printouts" => Some(Extras::Printouts),
            _ => None,
        }
    }
}

/// A validated enquiry, ready to hand to the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryRecord {
    pub name: String,
    pub email: String,
    pub class_name: String,
    pub work_type: WorkType,
    pub subject: String,
    pub deadline: NaiveDate,
    pub pages: u32,
    pub extras: Extras,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnquiryField {
    Name,
    Email,
    ClassName,
    WorkType,
    Subject,
    Deadline,
    Pages,
    Extras,
    Instructions,
}

impl EnquiryField {
    pub fn label(&self) -> &'static str {
        match self {
            EnquiryField::Name => "Name",
            EnquiryField::Email => "Email",
            EnquiryField::ClassName => "Class",
            EnquiryField::WorkType => "Type of Work",
            EnquiryField::Subject => "Subject",
            EnquiryField::Deadline => "Deadline",
            EnquiryField::Pages => "Number of Pages",
            EnquiryField::Extras => "Extras",
            EnquiryField::Instructions => "Special Instructions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnquiryError {
    #[error("{} is required", .0.label())]
    Missing(EnquiryField),
    #[error("{} is invalid: '{value}'", .field.label())]
    Invalid { field: EnquiryField, value: String },
}

/// Form fields exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub class_name: String,
    pub work_type: String,
    pub subject: String,
    pub deadline: String,
    pub pages: String,
    pub extras: Extras,
    pub instructions: String,
}

impl EnquiryForm {
    pub fn set(&mut self, field: EnquiryField, value: String) {
        match field {
            EnquiryField::Name => self.name = value,
            EnquiryField::Email => self.email = value,
            EnquiryField::ClassName => self.class_name = value,
            EnquiryField::WorkType => self.work_type = value,
            EnquiryField::Subject => self.subject = value,
            EnquiryField::Deadline => self.deadline = value,
            EnquiryField::Pages => self.pages = value,
            EnquiryField::Extras => self.extras = Extras::parse(&value).unwrap_or_default(),
            EnquiryField::Instructions => self.instructions = value,
        }
    }

    pub fn validate(&self) -> Result<EnquiryRecord, EnquiryError> {
        let name = required(EnquiryField::Name, &self.name)?;
        let email = required(EnquiryField::Email, &self.email)?;
        if !email.contains('@') {
            return Err(EnquiryError::Invalid {
                field: EnquiryField::Email,
                value: email.to_string(),
            });
        }
        let class_name = required(EnquiryField::ClassName, &self.class_name)?;

        let work_type = required(EnquiryField::WorkType, &self.work_type)?;
        let work_type = WorkType::parse(work_type).ok_or_else(|| EnquiryError::Invalid {
            field: EnquiryField::WorkType,
            value: work_type.to_string(),
        })?;

        let subject = required(EnquiryField::Subject, &self.subject)?;

        let deadline = required(EnquiryField::Deadline, &self.deadline)?;
        let deadline = NaiveDate::parse_from_str(deadline, "%Y-%m-%d").map_err(|_| {
            EnquiryError::Invalid {
                field: EnquiryField::Deadline,
                value: deadline.to_string(),
            }
        })?;

        let pages = required(EnquiryField::Pages, &self.pages)?;
        let pages = parse_pages(pages).map_err(|_| EnquiryError::Invalid {
            field: EnquiryField::Pages,
            value: pages.to_string(),
        })?;

        let instructions = self.instructions.trim();

        Ok(EnquiryRecord {
            name: name.to_string(),
            email: email.to_string(),
            class_name: class_name.to_string(),
            work_type,
            subject: subject.to_string(),
            deadline,
            pages,
            extras: self.extras,
            instructions: (!instructions.is_empty()).then(|| instructions.to_string()),
        })
    }
}

fn required(field: EnquiryField, value: &str) -> Result<&str, EnquiryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(EnquiryError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

/// Lifecycle of the enquiry form. Controls are disabled while `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionState {
    /// Moves to `Submitting`. Returns false if a submission is already running.
    pub fn begin(&mut self) -> bool {
        match self {
            SubmissionState::Idle => {
                *self = SubmissionState::Submitting;
                true
            }
            SubmissionState::Submitting => false,
        }
    }

    pub fn finish(&mut self) {
        *self = SubmissionState::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        *self == SubmissionState::Submitting
    }
}

/// What happened to a valid enquiry. Delivery failure is reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Undelivered(String),
}

/// Validates `form`, hands the record to `send` and applies the outcome:
/// the form is cleared after a successful send and left untouched otherwise.
/// `send` is never called for an invalid form.
pub async fn submit_enquiry<S, Fut>(
    form: &mut EnquiryForm,
    send: S,
) -> Result<SubmitOutcome, EnquiryError>
where
    S: FnOnce(EnquiryRecord) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let record = form.validate()?;

    match send(record).await {
        Ok(()) => {
            *form = EnquiryForm::default();
            Ok(SubmitOutcome::Sent)
        }
        Err(reason) => Ok(SubmitOutcome::Undelivered(reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn filled_form() -> EnquiryForm {
        EnquiryForm {
            name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            class_name: "10th CBSE".into(),
            work_type: "Assignment".into(),
            subject: "History".into(),
            deadline: "2026-11-02".into(),
            pages: "8".into(),
            extras: Extras::Images,
            instructions: "  Blue ink please ".into(),
        }
    }

    #[test]
    fn validate_builds_record() {
        let record = filled_form().validate().unwrap();

        assert_eq!(record.name, "Asha Verma");
        assert_eq!(record.work_type, WorkType::Assignment);
        assert_eq!(record.deadline, NaiveDate::from_ymd_opt(2026, 11, 2).unwrap());
        assert_eq!(record.pages, 8);
        assert_eq!(record.extras, Extras::Images);
        assert_eq!(record.instructions.as_deref(), Some("Blue ink please"));
    }

    #[test]
    fn blank_instructions_become_absent() {
        let mut form = filled_form();
        form.instructions = "   ".into();

        assert_eq!(form.validate().unwrap().instructions, None);
    }

    #[test]
    fn each_required_field_is_enforced() {
        let required = [
            EnquiryField::Name,
            EnquiryField::Email,
            EnquiryField::ClassName,
            EnquiryField::WorkType,
            EnquiryField::Subject,
            EnquiryField::Deadline,
            EnquiryField::Pages,
        ];
        for field in required {
            let mut form = filled_form();
            form.set(field, " ".into());
            assert_eq!(form.validate(), Err(EnquiryError::Missing(field)));
        }
    }

    #[test]
    fn first_missing_field_is_reported() {
        let form = EnquiryForm::default();

        assert_eq!(form.validate(), Err(EnquiryError::Missing(EnquiryField::Name)));
    }

    #[test]
    fn malformed_values_are_invalid() {
        let mut form = filled_form();
        form.pages = "0".into();
        assert_eq!(
            form.validate(),
            Err(EnquiryError::Invalid {
                field: EnquiryField::Pages,
                value: "0".into()
            })
        );

        let mut form = filled_form();
        form.deadline = "next friday".into();
        assert!(matches!(
            form.validate(),
            Err(EnquiryError::Invalid {
                field: EnquiryField::Deadline,
                ..
            })
        ));

        let mut form = filled_form();
        form.email = "asha.example.com".into();
        assert!(matches!(
            form.validate(),
            Err(EnquiryError::Invalid {
                field: EnquiryField::Email,
                ..
            })
        ));

        let mut form = filled_form();
        form.work_type = "Essay".into();
        assert!(matches!(
            form.validate(),
            Err(EnquiryError::Invalid {
                field: EnquiryField::WorkType,
                ..
            })
        ));
    }

    #[test]
    fn unknown_extras_fall_back_to_none() {
        let mut form = filled_form();
        form.set(EnquiryField::Extras, "Glitter".into());

        assert_eq!(form.extras, Extras::None);
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(filled_form().validate().unwrap()).unwrap();

        assert_eq!(json["className"], "10th CBSE");
        assert_eq!(json["workType"], "Assignment");
        assert_eq!(json["deadline"], "2026-11-02");
        assert_eq!(json["pages"], 8);
        assert_eq!(json["extras"], "Images");
    }

    #[test]
    fn invalid_form_never_calls_sender() {
        let called = Cell::new(false);
        let mut form = filled_form();
        form.email.clear();

        let result = block_on(submit_enquiry(&mut form, |_| {
            called.set(true);
            async { Ok(()) }
        }));

        assert_eq!(result, Err(EnquiryError::Missing(EnquiryField::Email)));
        assert!(!called.get());
        assert_eq!(form.name, "Asha Verma");
    }

    #[test]
    fn successful_send_clears_the_form() {
        let mut form = filled_form();
        let mut sent = None;

        let result = block_on(submit_enquiry(&mut form, |record| {
            sent = Some(record);
            async { Ok(()) }
        }));

        assert_eq!(result, Ok(SubmitOutcome::Sent));
        assert_eq!(form, EnquiryForm::default());
        assert_eq!(sent.map(|r| r.subject), Some("History".to_string()));
    }

    #[test]
    fn failed_send_keeps_entered_values() {
        let mut form = filled_form();

        let result = block_on(submit_enquiry(&mut form, |_| async {
            Err("status 502".to_string())
        }));

        assert_eq!(result, Ok(SubmitOutcome::Undelivered("status 502".into())));
        assert_eq!(form, filled_form());
    }

    #[test]
    fn submission_state_blocks_reentry() {
        let mut state = SubmissionState::default();

        assert!(state.begin());
        assert!(state.is_submitting());
        assert!(!state.begin());

        state.finish();
        assert!(!state.is_submitting());
        assert!(state.begin());
    }
}
