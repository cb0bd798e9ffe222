//! # Util functions module
//!
//! Prefixed hexadecimal codec used for all values on the wire.

use crate::core::Error;
use num::bigint::BigUint;
use num::Num;

/// Required prefix of hex encoded data
pub const HEX_PREFIX: &str = "0x";

/// A value the daemon accepts in prefixed hex form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HexValue {
    /// Raw byte sequence
    Bytes(Vec<u8>),

    /// Unsigned arbitrary precision amount
    Amount(BigUint),
}

impl HexValue {
    /// Encode into a `0x` prefixed hex string
    pub fn encode(&self) -> String {
        match *self {
            HexValue::Bytes(ref data) => encode_bytes(data),
            HexValue::Amount(ref amount) => encode_amount(amount),
        }
    }
}

/// Encode a byte sequence into `0x` prefixed lowercase hex.
/// An empty sequence encodes as `"0x"`.
pub fn encode_bytes(data: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(data))
}

/// Encode an amount into `0x` prefixed hex with no leading zeros,
/// a single `"0"` for the zero value
pub fn encode_amount(amount: &BigUint) -> String {
    format!("{}{}", HEX_PREFIX, amount.to_str_radix(16))
}

/// Decode a `0x` prefixed hex string into an amount, any magnitude
pub fn decode(data: &str) -> Result<BigUint, Error> {
    let digits = strip_prefix(data)?;
    BigUint::from_str_radix(digits, 16).map_err(Error::from)
}

/// Decode a `0x` prefixed hex string into raw bytes, digits accepted
/// in either case
pub fn decode_bytes(data: &str) -> Result<Vec<u8>, Error> {
    let digits = strip_prefix(data)?;
    hex::decode(digits).map_err(Error::from)
}

fn strip_prefix(data: &str) -> Result<&str, Error> {
    if !data.starts_with(HEX_PREFIX) {
        return Err(Error::UnexpectedHexPrefix(data.to_string()));
    }

    Ok(&data[HEX_PREFIX.len()..])
}
