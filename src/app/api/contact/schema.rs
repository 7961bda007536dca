use serde::Deserialize;

use crate::domain::{contact::ContactSubmission, ValidationError};

#[derive(Default, Deserialize)]
pub struct ContactBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<ContactBody> for ContactSubmission {
    type Error = ValidationError;
    fn try_from(value: ContactBody) -> Result<Self, Self::Error> {
        ContactSubmission::parse(value.name, value.email, value.reason, value.message)
    }
}
