use askama::Template;
use chrono::{DateTime, Utc};

use super::{
    display_timestamp, email::Email, present, text::RequiredText, Letter, Submission,
    ValidationError,
};

pub const REQUIRED_FIELDS: &str = "Name, email, reason, and message are required";

/// The options offered by the contact form's reason select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    General,
    BookInquiry,
    Collaboration,
    Feedback,
    Other,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::General,
        Topic::BookInquiry,
        Topic::Collaboration,
        Topic::Feedback,
        Topic::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Topic::General => "general",
            Topic::BookInquiry => "book-inquiry",
            Topic::Collaboration => "collaboration",
            Topic::Feedback => "feedback",
            Topic::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::General => "General Question",
            Topic::BookInquiry => "Book Inquiry",
            Topic::Collaboration => "Collaboration Idea",
            Topic::Feedback => "Feedback",
            Topic::Other => "Other",
        }
    }
}

/// Reason for an inquiry. Anything outside the select options is kept as
/// typed, since older clients or hand-written requests may send free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    Known(Topic),
    Custom(RequiredText),
}

impl Reason {
    pub fn as_str(&self) -> &str {
        match self {
            Reason::Known(topic) => topic.value(),
            Reason::Custom(text) => text.as_ref(),
        }
    }
}

impl TryFrom<String> for Reason {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match Topic::ALL.into_iter().find(|t| t.value() == value) {
            Some(topic) => Ok(Reason::Known(topic)),
            None => RequiredText::try_from(value).map(Reason::Custom),
        }
    }
}

#[derive(Debug)]
pub struct ContactSubmission {
    pub name: RequiredText,
    pub email: Email,
    pub reason: Reason,
    pub message: RequiredText,
}

impl ContactSubmission {
    pub fn parse(
        name: Option<String>,
        email: Option<String>,
        reason: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.and_then(|v| RequiredText::try_from(v).ok());
        let reason = reason.and_then(|v| Reason::try_from(v).ok());
        let message = message.and_then(|v| RequiredText::try_from(v).ok());
        let (Some(name), Some(email), Some(reason), Some(message)) =
            (name, present(email), reason, message)
        else {
            return Err(ValidationError::MissingFields(REQUIRED_FIELDS));
        };
        let email = Email::try_from(email).map_err(|_| ValidationError::InvalidEmail)?;

        Ok(Self {
            name,
            email,
            reason,
            message,
        })
    }
}

#[derive(Template)]
#[template(path = "email/contact_confirmation.html")]
struct ConfirmationEmail<'a> {
    name: &'a str,
}

#[derive(Template)]
#[template(path = "email/contact_admin.html")]
struct NewInquiryEmail<'a> {
    name: &'a str,
    email: &'a str,
    reason: &'a str,
    message_lines: Vec<&'a str>,
    received_at: String,
}

impl Submission for ContactSubmission {
    const ACCEPTED: &'static str = "Contact form submitted successfully";
    const FAILED: &'static str = "Failed to process contact form submission";

    fn submitter(&self) -> &Email {
        &self.email
    }

    fn confirmation(&self) -> Result<Letter, askama::Error> {
        Ok(Letter {
            subject: "Thank you for reaching out to Whispering Maps! 📬",
            html_body: ConfirmationEmail {
                name: self.name.as_ref(),
            }
            .render()?,
        })
    }

    fn notification(&self, received_at: DateTime<Utc>) -> Result<Letter, askama::Error> {
        Ok(Letter {
            subject: "New Contact Form Submission - Whispering Maps",
            html_body: NewInquiryEmail {
                name: self.name.as_ref(),
                email: self.email.as_ref(),
                reason: self.reason.as_str(),
                message_lines: self.message.lines().collect(),
                received_at: display_timestamp(received_at),
            }
            .render()?,
        })
    }
}
