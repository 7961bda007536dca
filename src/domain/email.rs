use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately loose: something, an `@`, and a dotted domain without blanks.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("The email pattern is valid."));

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if EMAIL_PATTERN.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(format!("{value} is not a valid email"))
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
