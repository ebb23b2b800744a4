use async_trait::async_trait;
use thiserror::Error;

use crate::models::enquiry_models::TemplateParams;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("email service did not answer in time")]
    Timeout,
    #[error("could not reach email service: {0}")]
    Transport(String),
    #[error("email service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for MailError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            MailError::Timeout
        } else {
            MailError::Transport(e.to_string())
        }
    }
}

/// Delivers a filled-in enquiry template to the site owner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnquiryMailer: Send + Sync {
    async fn send(&self, params: TemplateParams) -> Result<(), MailError>;
}
