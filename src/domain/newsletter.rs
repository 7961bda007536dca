use askama::Template;
use chrono::{DateTime, Utc};

use super::{
    display_timestamp, email::Email, present, text::RequiredText, Letter, Submission,
    ValidationError,
};

pub const REQUIRED_FIELDS: &str = "Name and email are required";

#[derive(Debug)]
pub struct NewsletterSubmission {
    pub name: RequiredText,
    pub email: Email,
}

impl NewsletterSubmission {
    pub fn parse(name: Option<String>, email: Option<String>) -> Result<Self, ValidationError> {
        let name = name.and_then(|n| RequiredText::try_from(n).ok());
        let (Some(name), Some(email)) = (name, present(email)) else {
            return Err(ValidationError::MissingFields(REQUIRED_FIELDS));
        };
        let email = Email::try_from(email).map_err(|_| ValidationError::InvalidEmail)?;

        Ok(Self { name, email })
    }
}

#[derive(Template)]
#[template(path = "email/newsletter_welcome.html")]
struct WelcomeEmail<'a> {
    name: &'a str,
}

#[derive(Template)]
#[template(path = "email/newsletter_admin.html")]
struct NewSubscriptionEmail<'a> {
    name: &'a str,
    email: &'a str,
    received_at: String,
}

impl Submission for NewsletterSubmission {
    const ACCEPTED: &'static str = "Subscription successful";
    const FAILED: &'static str = "Failed to process subscription";

    fn submitter(&self) -> &Email {
        &self.email
    }

    fn confirmation(&self) -> Result<Letter, askama::Error> {
        Ok(Letter {
            subject: "Welcome to Whispering Maps! 🔮",
            html_body: WelcomeEmail {
                name: self.name.as_ref(),
            }
            .render()?,
        })
    }

    fn notification(&self, received_at: DateTime<Utc>) -> Result<Letter, askama::Error> {
        Ok(Letter {
            subject: "New Newsletter Subscription - Whispering Maps",
            html_body: NewSubscriptionEmail {
                name: self.name.as_ref(),
                email: self.email.as_ref(),
                received_at: display_timestamp(received_at),
            }
            .render()?,
        })
    }
}
