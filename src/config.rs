use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;

use crate::domain::email::Email;

/// Sender used when neither the configuration files nor `FROM_EMAIL` name one.
pub const DEFAULT_SENDER_EMAIL: &str = "noreply@whisperingmaps.com";
/// Recipient of the admin notifications when `ADMIN_EMAIL` is not set.
pub const DEFAULT_ADMIN_EMAIL: &str = "hello@whisperingmaps.com";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub log_level: String,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub authorization_token: Secret<String>,
    pub sender_email: Option<String>,
    pub admin_email: Option<String>,
    pub timeout_milliseconds: Option<u64>,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<Email, String> {
        Email::try_from(
            self.sender_email
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_SENDER_EMAIL.to_owned()),
        )
    }

    pub fn admin(&self) -> Result<Email, String> {
        Email::try_from(
            self.admin_email
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_owned()),
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

/// Layers `configuration/base.yaml`, the environment specific file, `APP_*`
/// variables and finally the mail provider variables the deployment already
/// exports (`SENDGRID_API_KEY`, `FROM_EMAIL`, `ADMIN_EMAIL`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("no working directory: {e}")))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // E.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option(
            "email_client.authorization_token",
            non_empty_var("SENDGRID_API_KEY"),
        )?
        .set_override_option("email_client.sender_email", non_empty_var("FROM_EMAIL"))?
        .set_override_option("email_client.admin_email", non_empty_var("ADMIN_EMAIL"))?
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// An exported but empty variable counts as unset.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
