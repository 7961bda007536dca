//! State of the landing page's modal forms.
//!
//! A popup is either shown or hidden, and independently carries the status
//! of its last submission. On the server only the initial state is used, to
//! render both popups. The transitions below (`open`, `close`, `submit`,
//! `settle`, `dismiss`) are the reference for `assets/js/forms.js`, which
//! performs them in the browser. Any change to one has to be mirrored in the
//! other, and the tests at the bottom of this file describe both.

use std::time::Duration;

use serde::Serialize;

pub const REJECTED_FALLBACK: &str = "Something went wrong. Please try again.";
pub const NETWORK_FAILURE: &str = "Network error. Please check your connection and try again.";

/// Describes one of the site's forms.
pub trait FormKind {
    type Fields: Default + Serialize;

    /// DOM id of the popup, also used as prefix for its inputs.
    const ID: &'static str;
    const ENDPOINT: &'static str;
    const SUCCESS_MESSAGE: &'static str;
    const SUBMIT_LABEL: &'static str;
    const SUBMITTING_LABEL: &'static str;
    /// How long the success message stays before the popup closes itself.
    const DISMISS_AFTER: Duration;
}

pub struct Newsletter;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterFields {
    pub name: String,
    pub email: String,
}

impl FormKind for Newsletter {
    type Fields = NewsletterFields;

    const ID: &'static str = "newsletter";
    const ENDPOINT: &'static str = "/api/newsletter";
    const SUCCESS_MESSAGE: &'static str =
        "Welcome to our Story Circle! Check your email to confirm your subscription.";
    const SUBMIT_LABEL: &'static str = "Subscribe";
    const SUBMITTING_LABEL: &'static str = "Subscribing...";
    const DISMISS_AFTER: Duration = Duration::from_secs(3);
}

pub struct Contact;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub reason: String,
    pub message: String,
}

impl FormKind for Contact {
    type Fields = ContactFields;

    const ID: &'static str = "contact";
    const ENDPOINT: &'static str = "/api/contact";
    const SUCCESS_MESSAGE: &'static str =
        "Thank you for your message! We typically respond within 48 hours.";
    const SUBMIT_LABEL: &'static str = "Send Message";
    const SUBMITTING_LABEL: &'static str = "Sending...";
    const DISMISS_AFTER: Duration = Duration::from_secs(4);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// How a submission came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    /// The server answered with an error status, optionally with its `error` text.
    Rejected(Option<String>),
    /// The request never got an answer.
    NetworkFailure,
}

pub struct Popup<K: FormKind> {
    open: bool,
    status: FormStatus,
    fields: K::Fields,
}

impl<K: FormKind> Default for Popup<K> {
    fn default() -> Self {
        Self {
            open: false,
            status: FormStatus::Idle,
            fields: K::Fields::default(),
        }
    }
}

impl<K: FormKind> Popup<K> {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the popup whatever its status. A request still in flight keeps
    /// running and settles the popup when it returns.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Starts a submission and hands back the fields to post, unless one is
    /// already in flight.
    pub fn submit(&mut self) -> Option<&K::Fields> {
        if self.status == FormStatus::Submitting {
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(&self.fields)
    }

    /// Records the answer to the in-flight submission. On success, returns
    /// the delay after which [`Popup::dismiss`] should run.
    pub fn settle(&mut self, outcome: Outcome) -> Option<Duration> {
        if self.status != FormStatus::Submitting {
            return None;
        }

        match outcome {
            Outcome::Accepted => {
                self.status = FormStatus::Succeeded(K::SUCCESS_MESSAGE.to_owned());
                self.fields = K::Fields::default();
                Some(K::DISMISS_AFTER)
            }
            Outcome::Rejected(error) => {
                self.status = FormStatus::Failed(
                    error
                        .filter(|e| !e.is_empty())
                        .unwrap_or_else(|| REJECTED_FALLBACK.to_owned()),
                );
                None
            }
            Outcome::NetworkFailure => {
                self.status = FormStatus::Failed(NETWORK_FAILURE.to_owned());
                None
            }
        }
    }

    /// Auto-dismiss after a success: hides the popup and forgets the message.
    pub fn dismiss(&mut self) {
        if let FormStatus::Succeeded(_) = self.status {
            self.open = false;
            self.status = FormStatus::Idle;
        }
    }

    /// Inputs are locked while a submission is in flight.
    pub fn fields_mut(&mut self) -> Option<&mut K::Fields> {
        match self.status {
            FormStatus::Submitting => None,
            _ => Some(&mut self.fields),
        }
    }

    pub fn fields(&self) -> &K::Fields {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn submit_enabled(&self) -> bool {
        self.status != FormStatus::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_enabled() {
            K::SUBMIT_LABEL
        } else {
            K::SUBMITTING_LABEL
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Succeeded(m) | FormStatus::Failed(m) => Some(m),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.status, FormStatus::Succeeded(_))
    }

    pub fn id(&self) -> &'static str {
        K::ID
    }

    pub fn endpoint(&self) -> &'static str {
        K::ENDPOINT
    }

    pub fn success_message(&self) -> &'static str {
        K::SUCCESS_MESSAGE
    }

    pub fn idle_label(&self) -> &'static str {
        K::SUBMIT_LABEL
    }

    pub fn busy_label(&self) -> &'static str {
        K::SUBMITTING_LABEL
    }

    pub fn dismiss_after_ms(&self) -> u128 {
        K::DISMISS_AFTER.as_millis()
    }
}
