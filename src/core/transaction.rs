//! # Account transaction

use super::{Address, Wei};
use serde::Serializer;

/// Transfer of wei between two accounts.
///
/// `id` is assigned by the daemon once the transaction is accepted and
/// stays empty before that.
#[derive(Clone, Debug, Serialize)]
pub struct Transaction {
    /// Hash assigned by the daemon on submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Source account
    pub from: Address,

    /// Target account
    pub to: Address,

    /// Transferred amount, hex encoded on the wire
    #[serde(serialize_with = "value_to_hex")]
    pub value: Wei,
}

impl Transaction {
    /// Transaction of `value` wei between two accounts, not yet
    /// submitted
    pub fn new(from: Address, to: Address, value: Wei) -> Transaction {
        Transaction {
            id: None,
            from,
            to,
            value,
        }
    }
}

fn value_to_hex<S>(value: &Wei, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_hex())
}
