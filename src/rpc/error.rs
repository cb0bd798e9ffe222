//! # JSON RPC module errors

use crate::core;
use std::{error, fmt};

/// Daemon error code signalling that the target account is locked
pub const AUTHENTICATION_NEEDED_CODE: i64 = -32000;

/// JSON RPC errors
#[derive(Debug)]
pub enum Error {
    /// Http client error
    HttpClient(reqwest::Error),

    /// Non-200 status from the endpoint, body left unread
    UnexpectedHttpStatus(u16, String),

    /// Response body does not fit the reply envelope
    InvalidDataFormat(String),

    /// The daemon requires the account to be unlocked first;
    /// carries the daemon's message verbatim
    AuthenticationNeeded(String),

    /// Any other daemon reported failure, code and message verbatim
    Remote(i64, String),

    /// Value decoding failed after a successful exchange
    Core(core::Error),
}

impl Error {
    /// Whether the failure is the daemon asking for the account to be
    /// unlocked, so a caller can prompt for credentials instead of
    /// matching on message text
    pub fn is_authentication_needed(&self) -> bool {
        matches!(self, Error::AuthenticationNeeded(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::HttpClient(err)
    }
}

impl From<core::Error> for Error {
    fn from(err: core::Error) -> Self {
        Error::Core(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::HttpClient(ref err) => write!(f, "HTTP client error: {}", err),
            Error::UnexpectedHttpStatus(status, ref endpoint) => {
                write!(f, "Unexpected status code {} from \"{}\"", status, endpoint)
            }
            Error::InvalidDataFormat(ref str) => write!(f, "Invalid data format: {}", str),
            Error::AuthenticationNeeded(ref message) => write!(f, "{}", message),
            Error::Remote(code, ref message) => write!(
                f,
                "Error while processing request (code {}): {}",
                code, message
            ),
            Error::Core(ref err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::HttpClient(ref err) => Some(err),
            Error::Core(ref err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_authentication_capability() {
        let err = Error::AuthenticationNeeded("authentication needed".to_string());
        assert!(err.is_authentication_needed());
        assert_eq!(err.to_string(), "authentication needed");

        assert!(!Error::Remote(-32601, "no such method".to_string())
            .is_authentication_needed());
    }
}
