use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Matches the browser's `toLocaleString()` for the en-IN locale.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkType {
    Assignment,
    Notebook,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Assignment => "Assignment",
            WorkType::Notebook => "Notebook",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Assignment" => Some(WorkType::Assignment),
            "Notebook" => Some(WorkType::Notebook),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Extras {
    #[default]
    None,
    Images,
    Printouts,
}

impl Extras {
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

#[derive(Debug, Clone, PartialEq, Eq)]
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

/// Flat field map handed to the email template. Field names are the
/// template's variable names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    pub timestamp: String,
    pub class: String,
    pub work_type: String,
    pub subject: String,
    pub deadline: String,
    pub pages: String,
    pub extras: String,
    pub instructions: String,
    pub message: String,
}

impl TemplateParams {
    pub fn new(record: &EnquiryRecord, recipient: &str, timestamp: &str) -> Self {
        let instructions = record
            .instructions
            .clone()
            .unwrap_or_else(|| "None".to_string());
        let deadline = record.deadline.format("%Y-%m-%d").to_string();

        let message = format!(
            "New Enquiry Received!\n\n\
             Name: {}\n\
             Email: {}\n\
             Class: {}\n\
             Type of Work: {}\n\
             Subject: {}\n\
             Deadline: {}\n\
             Number of Pages: {}\n\
             Extras: {}\n\
             Special Instructions: {}\n\n\
             Timestamp: {}\n",
            record.name,
            record.email,
            record.class_name,
            record.work_type.as_str(),
            record.subject,
            deadline,
            record.pages,
            record.extras.as_str(),
            instructions,
            timestamp,
        );

        Self {
            to_email: recipient.to_string(),
            from_name: record.name.clone(),
            from_email: record.email.clone(),
            timestamp: timestamp.to_string(),
            class: record.class_name.clone(),
            work_type: record.work_type.as_str().to_string(),
            subject: record.subject.clone(),
            deadline,
            pages: record.pages.to_string(),
            extras: record.extras.as_str().to_string(),
            instructions,
            message,
        }
    }
}
