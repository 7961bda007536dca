use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::email::Email;

/// One transactional email, ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: Email,
    pub from: Email,
    pub subject: String,
    pub html_body: String,
}

/// The fixed addresses every submission is mailed from and reported to.
#[derive(Debug, Clone)]
pub struct Mailboxes {
    pub sender: Email,
    pub admin: Email,
}

/// Thin client for SendGrid's v3 `mail/send` endpoint.
#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

#[derive(serde::Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(serde::Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

impl EmailClient {
    /// Without a `timeout` the HTTP client's own defaults apply.
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
            api_key,
        })
    }

    #[tracing::instrument(
        name = "Send an email",
        skip(self, message),
        fields(to = %message.to, subject = %message.subject)
    )]
    pub async fn send_email(&self, message: &EmailMessage) -> Result<(), reqwest::Error> {
        let url = format!("{}/v3/mail/send", self.base_url.trim_end_matches('/'));
        let body = SendEmailRequest {
            personalizations: [Personalization {
                to: [Address {
                    email: message.to.as_ref(),
                }],
            }],
            from: Address {
                email: message.from.as_ref(),
            },
            subject: &message.subject,
            content: [Content {
                kind: "text/html",
                value: &message.html_body,
            }],
        };

        self.http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
