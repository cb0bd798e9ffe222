//! # Account address

use super::Error;
use crate::util::HEX_PREFIX;
use std::fmt;
use std::str::FromStr;

/// Account address: an opaque `0x` prefixed identifier.
///
/// Only the prefix is checked on parsing; the daemon stays authoritative
/// for the rest of the format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Address(String);

impl Address {
    /// Address text, prefix included
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with(HEX_PREFIX) {
            return Err(Error::InvalidAddress(s.to_string()));
        }

        Ok(Address(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_real_address() {
        let addr = "0x0e7c045110b8dbf29765047380898919c5cb56f4"
            .parse::<Address>()
            .unwrap();
        assert_eq!(addr.to_string(), "0x0e7c045110b8dbf29765047380898919c5cb56f4");
    }

    #[test]
    fn should_catch_missing_address_prefix() {
        match "0e7c045110b8dbf29765047380898919c5cb56f4".parse::<Address>() {
            Err(Error::InvalidAddress(s)) => {
                assert_eq!(s, "0e7c045110b8dbf29765047380898919c5cb56f4")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn should_catch_empty_address_string() {
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let addr = "0x0e7c045110b8dbf29765047380898919c5cb56f4"
            .parse::<Address>()
            .unwrap();
        assert_eq!(
            serde_json::to_string(&addr).unwrap(),
            "\"0x0e7c045110b8dbf29765047380898919c5cb56f4\""
        );
    }
}
