//! # Core domain logic module errors

use num::bigint::ParseBigIntError;
use std::{error, fmt};

/// Core domain logic errors
#[derive(Debug)]
pub enum Error {
    /// An unexpected hexadecimal prefix (should be '0x')
    UnexpectedHexPrefix(String),

    /// An unexpected hexadecimal encoding
    UnexpectedHexEncoding(String),

    /// An unexpected decimal notation for an ether amount
    UnexpectedDecimalEncoding(String),

    /// An invalid account address
    InvalidAddress(String),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::UnexpectedHexEncoding(err.to_string())
    }
}

impl From<ParseBigIntError> for Error {
    fn from(err: ParseBigIntError) -> Self {
        Error::UnexpectedHexEncoding(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnexpectedHexPrefix(ref str) => {
                write!(f, "Unexpected hexadecimal prefix (should be '0x'): {}", str)
            }
            Error::UnexpectedHexEncoding(ref str) => {
                write!(f, "Unexpected hexadecimal encoding: {}", str)
            }
            Error::UnexpectedDecimalEncoding(ref str) => {
                write!(f, "Unexpected decimal encoding: {}", str)
            }
            Error::InvalidAddress(ref str) => write!(f, "\"{}\" is not a valid address", str),
        }
    }
}

impl error::Error for Error {}
