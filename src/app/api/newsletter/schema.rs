use serde::Deserialize;

use crate::domain::{newsletter::NewsletterSubmission, ValidationError};

/// Fields are optional here so that a missing one is reported as a
/// validation failure rather than a deserialization error. A body that is not
/// an object reads as the default, with every field missing.
#[derive(Default, Deserialize)]
pub struct SubscribeBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<SubscribeBody> for NewsletterSubmission {
    type Error = ValidationError;
    fn try_from(value: SubscribeBody) -> Result<Self, Self::Error> {
        NewsletterSubmission::parse(value.name, value.email)
    }
}
