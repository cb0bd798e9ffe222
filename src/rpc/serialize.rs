//! # JSON RPC envelopes

use serde_json::Value;

/// Request envelope, consumed by exactly one post
#[derive(Clone, Debug, Serialize)]
pub struct JsonData<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    params: &'a [Value],
    id: usize,
}

impl<'a> JsonData<'a> {
    /// Envelope for a single call
    pub fn new(method: &'static str, params: &'a [Value], id: usize) -> JsonData<'a> {
        JsonData {
            jsonrpc: "2.0",
            method,
            params,
            id,
        }
    }
}

/// Reply envelope; a missing `error` member reads as code 0
#[derive(Debug, Deserialize)]
pub struct JsonReply {
    #[serde(default)]
    pub error: ReplyError,

    #[serde(default)]
    pub result: Value,
}

/// Daemon reported error, code 0 meaning success
#[derive(Debug, Default, Deserialize)]
pub struct ReplyError {
    #[serde(default)]
    pub code: i64,

    #[serde(default)]
    pub message: String,
}
