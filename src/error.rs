// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An element the page markup is expected to provide is missing.
    MissingElement(String),
    /// The toast container could not be found or created.
    MissingContainer,
    /// The flash message payload is not valid JSON or has an unexpected shape.
    FlashPayload(String),
    Config(String),
    /// The host document rejected a DOM operation.
    Render(String),
    /// A severity name outside `success`, `danger`, `warning`, `info`.
    UnknownSeverity(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingElement(id) => write!(f, "Missing element: #{}", id),
            Error::MissingContainer => write!(f, "Toast container is not available"),
            Error::FlashPayload(e) => write!(f, "Flash payload Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
            Error::UnknownSeverity(name) => write!(f, "Unknown severity: {:?}", name),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::FlashPayload(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
