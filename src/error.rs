use firestore::errors::FirestoreError;

use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Config(&'static str),
    Request(reqwest::Error),
    Decode(&'static str),
    Address(lettre::address::AddressError),
    Email(lettre::error::Error),
    Send(lettre::transport::smtp::Error),
    Database(FirestoreError),
}

impl Error {
    /// A failed or impossible delivery must flip the exit code; everything
    /// else is an expected daily condition the scheduler should not page on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::Address(_) | Error::Email(_) | Error::Send(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl From<lettre::address::AddressError> for Error {
    fn from(e: lettre::address::AddressError) -> Self {
        Error::Address(e)
    }
}

impl From<lettre::error::Error> for Error {
    fn from(e: lettre::error::Error) -> Self {
        Error::Email(e)
    }
}

impl From<lettre::transport::smtp::Error> for Error {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        Error::Send(e)
    }
}

impl From<FirestoreError> for Error {
    fn from(e: FirestoreError) -> Self {
        Error::Database(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(name) => write!(f, "Config error: {name} is not set"),
            Error::Request(e) => write!(f, "Request error: {}", e),
            Error::Decode(msg) => write!(f, "Decode error: {msg}"),
            Error::Address(e) => write!(f, "Address error: {}", e),
            Error::Email(e) => write!(f, "Email error: {}", e),
            Error::Send(e) => write!(f, "Send error: {}", e),
            Error::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
