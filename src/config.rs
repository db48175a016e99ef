use std::env;

use crate::error::Error;

/// Runtime settings, all sourced from the environment. The three email
/// variables are mandatory; the document store is optional and the job
/// still emails without it.
#[derive(Debug, Clone)]
pub struct Config {
    pub sender: String,
    pub password: String,
    pub recipient: String,
    pub firestore_project: Option<String>,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Ok(Self {
            sender: required("EMAIL_SENDER")?,
            password: required("EMAIL_PASSWORD")?,
            recipient: required("EMAIL_RECEIVER")?,
            firestore_project: env::var("FIRESTORE_PROJECT_ID")
                .ok()
                .filter(|value| !value.is_empty()),
        })
    }
}

/// An empty value is as useless as an unset one, so both are rejected.
fn required(name: &'static str) -> crate::Result<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(Error::Config(name))
}
