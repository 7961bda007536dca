pub mod contact;
pub mod email;
pub mod newsletter;
pub mod text;

use chrono::{DateTime, Utc};

use self::email::Email;
use crate::email::{EmailMessage, Mailboxes};

/// Why a submitted form was turned down before anything was sent.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Invalid email format")]
    InvalidEmail,
}

/// Subject and rendered HTML body of an email that has no addresses yet.
pub struct Letter {
    pub subject: &'static str,
    pub html_body: String,
}

impl Letter {
    pub fn addressed(self, from: &Email, to: &Email) -> EmailMessage {
        EmailMessage {
            to: to.clone(),
            from: from.clone(),
            subject: self.subject.to_owned(),
            html_body: self.html_body,
        }
    }
}

/// A validated form submission that knows which two emails it produces: one
/// back to the person who filled the form and one for the site admin.
pub trait Submission {
    /// Acknowledgement returned once both emails are out.
    const ACCEPTED: &'static str;
    /// Returned whenever the emails could not be sent. Never carries details.
    const FAILED: &'static str;

    fn submitter(&self) -> &Email;

    fn confirmation(&self) -> Result<Letter, askama::Error>;

    fn notification(&self, received_at: DateTime<Utc>) -> Result<Letter, askama::Error>;

    /// Confirmation for the submitter first, admin notification second.
    fn messages(
        &self,
        mailboxes: &Mailboxes,
        received_at: DateTime<Utc>,
    ) -> Result<[EmailMessage; 2], askama::Error> {
        Ok([
            self.confirmation()?
                .addressed(&mailboxes.sender, self.submitter()),
            self.notification(received_at)?
                .addressed(&mailboxes.sender, &mailboxes.admin),
        ])
    }
}

pub(crate) fn display_timestamp(received_at: DateTime<Utc>) -> String {
    received_at.format("%B %-d, %Y %H:%M:%S UTC").to_string()
}

/// Empty strings count as missing, like absent or `null` values.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
