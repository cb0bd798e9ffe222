//! # Core domain logic module

mod address;
mod error;
mod transaction;
mod wei;

pub use self::address::Address;
pub use self::error::Error;
pub use self::transaction::Transaction;
pub use self::wei::{Wei, ETHER_DECIMAL_DIGITS, WEI_PER_ETHER};
