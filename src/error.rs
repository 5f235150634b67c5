// SPDX-License-Identifier: MPL-2.0
//! Error type for the fallible edges of the crate: configuration I/O and
//! parsing, and loading of translation resources.
//!
//! The notification system itself never fails; see [`crate::notifications`].

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A Fluent resource failed to parse or register.
    #[error("Translation Error: {0}")]
    I18n(String),
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
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let parse_error = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn i18n_error_mentions_translation() {
        let err = Error::I18n("bad resource".to_string());
        assert_eq!(err.to_string(), "Translation Error: bad resource");
    }
}
