use derive_more::Display;

/// Free text a form marks as required: anything but the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct RequiredText(String);

impl RequiredText {
    /// Splits on every `\n`, keeping a trailing empty line.
    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.0.split('\n')
    }
}

impl TryFrom<String> for RequiredText {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err("text is empty".into());
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
