use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ASSIGNMENT_RATE: u32 = 50; // ₹ per page
pub const NOTEBOOK_RATE: u32 = 40; // ₹ per page
pub const EXPRESS_MULTIPLIER: f64 = 1.5;

/// Subject surcharges. Anything not listed here is priced at 1.0.
pub const SUBJECT_MULTIPLIERS: [(&str, f64); 16] = [
    ("Mathematics", 1.2),
    ("Physics", 1.3),
    ("Chemistry", 1.3),
    ("Biology", 1.2),
    ("Computer Science", 1.4),
    ("Engineering", 1.4),
    ("Economics", 1.1),
    ("Accountancy", 1.2),
    ("Business Studies", 1.1),
    ("History", 1.0),
    ("Geography", 1.0),
    ("Political Science", 1.0),
    ("English", 1.0),
    ("Hindi", 1.0),
    ("Other Languages", 1.0),
    ("General Studies", 1.0),
];

/// Dropdown grouping for the calculator. Subjects outside a group are listed
/// after the groups.
pub const SUBJECT_GROUPS: [(&str, &[&str]); 5] = [
    ("Science & Math", &["Mathematics", "Physics", "Chemistry", "Biology"]),
    ("Technical", &["Computer Science", "Engineering"]),
    ("Commerce", &["Economics", "Accountancy", "Business Studies"]),
    ("Humanities", &["History", "Geography", "Political Science"]),
    ("Languages", &["English", "Hindi", "Other Languages"]),
];

pub const UNGROUPED_SUBJECTS: [&str; 1] = ["General Studies"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkType {
    Assignment,
    Notebook,
}

impl WorkType {
    pub const ALL: [WorkType; 2] = [WorkType::Assignment, WorkType::Notebook];

    pub fn base_price_per_page(&self) -> u32 {
        match self {
            WorkType::Assignment => ASSIGNMENT_RATE,
            WorkType::Notebook => NOTEBOOK_RATE,
        }
    }

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Normal,
    Express,
}

impl Urgency {
    pub fn multiplier(&self) -> f64 {
        match self {
            Urgency::Normal => 1.0,
            Urgency::Express => EXPRESS_MULTIPLIER,
        }
    }

    /// Form value used by the urgency `<select>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::Express => "express",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Urgency::Normal),
            "express" => Some(Urgency::Express),
            _ => None,
        }
    }

    pub fn delivery_label(&self) -> &'static str {
        match self {
            Urgency::Normal => "Normal (1-3 days)",
            Urgency::Express => "Express (24hrs)",
        }
    }
}

pub fn subject_multiplier(subject: &str) -> f64 {
    SUBJECT_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuoteInput {
    pub work_type: WorkType,
    pub subject: String,
    pub pages: u32,
    pub urgency: Urgency,
}

/// Price breakdown shown under the calculator. Derived on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub work_type: WorkType,
    pub subject: String,
    pub pages: u32,
    pub urgency: Urgency,
    pub base_price_per_page: u32,
    pub subject_multiplier: f64,
    pub urgency_multiplier: f64,
    pub subtotal: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("work type is required")]
    MissingWorkType,
    #[error("subject is required")]
    MissingSubject,
    #[error("number of pages is required")]
    MissingPages,
    #[error("number of pages must be a positive whole number, got '{0}'")]
    InvalidPages(String),
}

/// Computes a quote. The total is taken from the unrounded subtotal; both are
/// rounded to whole rupees only for the returned breakdown.
pub fn estimate(input: &PriceQuoteInput) -> PriceQuote {
    let base_price_per_page = input.work_type.base_price_per_page();
    let subject_multiplier = subject_multiplier(&input.subject);
    let urgency_multiplier = input.urgency.multiplier();

    let subtotal = f64::from(base_price_per_page) * f64::from(input.pages) * subject_multiplier;
    let total = subtotal * urgency_multiplier;

    PriceQuote {
        work_type: input.work_type,
        subject: input.subject.clone(),
        pages: input.pages,
        urgency: input.urgency,
        base_price_per_page,
        subject_multiplier,
        urgency_multiplier,
        subtotal: subtotal.round() as u64,
        total: total.round() as u64,
    }
}

/// Strict page count parsing shared by the calculator and the enquiry form.
pub fn parse_pages(raw: &str) -> Result<u32, QuoteError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QuoteError::MissingPages);
    }
    match trimmed.parse::<u32>() {
        Ok(pages) if pages > 0 => Ok(pages),
        _ => Err(QuoteError::InvalidPages(trimmed.to_string())),
    }
}

/// Raw calculator fields as typed into the widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorForm {
    pub work_type: String,
    pub subject: String,
    pub pages: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorField {
    WorkType,
    Subject,
    Pages,
    Urgency,
}

impl CalculatorForm {
    pub fn set(&mut self, field: CalculatorField, value: String) {
        match field {
            CalculatorField::WorkType => self.work_type = value,
            CalculatorField::Subject => self.subject = value,
            CalculatorField::Pages => self.pages = value,
            // Unknown urgency values keep the previous selection.
            CalculatorField::Urgency => {
                if let Some(urgency) = Urgency::parse(&value) {
                    self.urgency = urgency;
                }
            }
        }
    }

    pub fn to_input(&self) -> Result<PriceQuoteInput, QuoteError> {
        let work_type =
            WorkType::parse(self.work_type.trim()).ok_or(QuoteError::MissingWorkType)?;
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(QuoteError::MissingSubject);
        }
        let pages = parse_pages(&self.pages)?;

        Ok(PriceQuoteInput {
            work_type,
            subject: subject.to_string(),
            pages,
            urgency: self.urgency,
        })
    }

    pub fn quote(&self) -> Result<PriceQuote, QuoteError> {
        self.to_input().map(|input| estimate(&input))
    }
}
