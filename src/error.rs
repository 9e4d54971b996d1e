// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Media failures keep their domain type ([`MediaError`]) so callers can pick
//! a localized message; everything else is carried as a plain description.

use crate::domain::error::MediaError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Media(MediaError),
}

impl Error {
    /// Returns the i18n message key describing this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Catalog(_) => "error-catalog",
            Error::Media(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_error_kind() {
        assert_eq!(
            Error::Catalog("no days".into()).to_string(),
            "Catalog Error: no days"
        );
        assert_eq!(Error::Io("gone".into()).to_string(), "I/O Error: gone");
    }

    #[test]
    fn media_error_converts_and_keeps_its_key() {
        let err: Error = MediaError::AutoplayDeclined.into();
        assert!(matches!(err, Error::Media(MediaError::AutoplayDeclined)));
        assert_eq!(err.i18n_key(), MediaError::AutoplayDeclined.i18n_key());
    }

    #[test]
    fn io_error_converts_to_io_variant() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing file")));
    }
}
