//! All error types for the langtool crate.
//!
//! These are returned from all fallible operations (configuration checks,
//! API fetches, placeholder validation, rendering).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status} for {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },

    #[error(
        "{count} entries had problems in string format placeholders: {}",
        codes.join(", ")
    )]
    PlaceholderMismatch { count: usize, codes: Vec<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl Error {
    /// Creates a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error() {
        let error = Error::config("must specify API token");
        assert_eq!(
            error.to_string(),
            "configuration error: must specify API token"
        );
    }

    #[test]
    fn test_api_error() {
        let error = Error::Api {
            status: 401,
            url: "http://localhost:60632/api/v1/entries".to_string(),
            body: "invalid token".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("401"));
        assert!(display.contains("entries"));
        assert!(display.contains("invalid token"));
    }

    #[test]
    fn test_placeholder_mismatch_error() {
        let error = Error::PlaceholderMismatch {
            count: 2,
            codes: vec!["Greeting".to_string(), "Farewell".to_string()],
        };
        let display = error.to_string();
        assert!(display.contains("2 entries"));
        assert!(display.contains("Greeting, Farewell"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::config("test");
        let debug = format!("{:?}", error);
        assert!(debug.contains("Config"));
        assert!(debug.contains("test"));
    }
}
