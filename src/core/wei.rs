//! # Wei amount with ether conversion

use super::Error;
use crate::util;
use num::bigint::BigUint;
use num::{Integer, Zero};
use std::fmt;

/// Decimal digits of one ether expressed in wei
pub const ETHER_DECIMAL_DIGITS: usize = 18;

lazy_static! {
    /// Wei in a single ether (10^18)
    pub static ref WEI_PER_ETHER: BigUint = "1000000000000000000"
        .parse()
        .expect("expect wei per ether constant");
}

/// Amount in wei, the smallest indivisible unit of ether.
///
/// Never negative, arbitrary magnitude; all arithmetic stays in exact
/// integers.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Wei(BigUint);

impl Wei {
    /// Zero wei
    pub fn zero() -> Wei {
        Wei(BigUint::zero())
    }

    /// Raw amount in wei
    pub fn amount(&self) -> &BigUint {
        &self.0
    }

    /// Split into whole ether and the wei remainder.
    ///
    /// The results satisfy `whole * 10^18 + remainder == amount` with
    /// `remainder < 10^18`.
    pub fn ether(&self) -> (BigUint, BigUint) {
        self.0.div_rem(&WEI_PER_ETHER)
    }

    /// Render as a fixed point ether string with `precision` fractional
    /// digits.
    ///
    /// The fraction is truncated, not rounded, and a `precision` above
    /// 18 is treated as 18. `precision` of zero leaves a bare trailing
    /// point, e.g. `"1."`.
    pub fn format(&self, precision: usize) -> String {
        let (whole, remainder) = self.ether();
        let padded = format!("{:0>width$}", remainder.to_string(), width = ETHER_DECIMAL_DIGITS);
        let precision = precision.min(ETHER_DECIMAL_DIGITS);

        format!("{}.{}", whole, &padded[..precision])
    }

    /// Convert a human entered decimal ether amount, e.g. `"1.5"`, into
    /// wei.
    ///
    /// The conversion is exact integer arithmetic; fractional digits
    /// beyond the 18th are below one wei and truncate toward zero.
    pub fn from_ether_text(text: &str) -> Result<Wei, Error> {
        let mut parts = text.splitn(2, '.');
        let whole = parts.next().unwrap_or("");
        let fraction = parts.next().unwrap_or("");

        if whole.is_empty() && fraction.is_empty() {
            return Err(Error::UnexpectedDecimalEncoding(text.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(Error::UnexpectedDecimalEncoding(text.to_string()));
        }

        let whole = if whole.is_empty() {
            BigUint::zero()
        } else {
            whole
                .parse::<BigUint>()
                .map_err(|_| Error::UnexpectedDecimalEncoding(text.to_string()))?
        };

        let digits = &fraction[..fraction.len().min(ETHER_DECIMAL_DIGITS)];
        let scaled = if digits.is_empty() {
            BigUint::zero()
        } else {
            format!("{:0<width$}", digits, width = ETHER_DECIMAL_DIGITS)
                .parse::<BigUint>()
                .map_err(|_| Error::UnexpectedDecimalEncoding(text.to_string()))?
        };

        Ok(Wei(whole * &*WEI_PER_ETHER + scaled))
    }

    /// Decode a `0x` prefixed hex amount, as returned by the daemon
    pub fn from_hex(text: &str) -> Result<Wei, Error> {
        util::decode(text).map(Wei)
    }

    /// Encode into the `0x` prefixed hex form the daemon expects
    pub fn to_hex(&self) -> String {
        util::encode_amount(&self.0)
    }
}

impl From<BigUint> for Wei {
    fn from(amount: BigUint) -> Self {
        Wei(amount)
    }
}

impl From<u64> for Wei {
    fn from(amount: u64) -> Self {
        Wei(BigUint::from(amount))
    }
}

impl From<u128> for Wei {
    fn from(amount: u128) -> Self {
        Wei(BigUint::from(amount))
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
