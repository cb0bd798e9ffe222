//! # JSON RPC module

mod error;
mod serialize;

pub use self::error::{Error, AUTHENTICATION_NEEDED_CODE};
use self::serialize::{JsonData, JsonReply};
use crate::config::NodeConfig;
use crate::core::{Address, Transaction, Wei};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Block tag for the latest available block
pub const BLOCK_LATEST: &str = "latest";

lazy_static! {
    static ref CLIENT: Client = Client::builder()
        .build()
        .expect("Expect to create an HTTP client");
}

/// RPC methods
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ClientMethod {
    /// [net_version](https://github.com/ethereum/wiki/wiki/JSON-RPC#net_version)
    NetVersion,

    /// [eth_getBalance](https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_getbalance)
    EthGetBalance,

    /// [eth_sendTransaction](https://github.com/ethereum/wiki/wiki/JSON-RPC#eth_sendtransaction)
    EthSendTransaction,

    /// [personal_unlockAccount](
    /// https://github.com/ethereum/go-ethereum/wiki/Management-APIs#personal_unlockaccount)
    PersonalUnlockAccount,
}

impl ClientMethod {
    /// Wire name of the method
    pub fn name(self) -> &'static str {
        match self {
            ClientMethod::NetVersion => "net_version",
            ClientMethod::EthGetBalance => "eth_getBalance",
            ClientMethod::EthSendTransaction => "eth_sendTransaction",
            ClientMethod::PersonalUnlockAccount => "personal_unlockAccount",
        }
    }
}

/// Connection to the JSON RPC endpoint of a geth daemon.
///
/// Holds no per-call state beyond the request id counter, so a single
/// instance can be shared between threads.
pub struct RpcClient {
    config: NodeConfig,
    req_id: AtomicUsize,
}

impl RpcClient {
    /// Client for the daemon at the provided endpoint
    pub fn new(config: NodeConfig) -> RpcClient {
        RpcClient {
            config,
            req_id: AtomicUsize::new(1),
        }
    }

    /// Client for `localhost:8545`, the default geth listen address
    pub fn local() -> RpcClient {
        RpcClient::new(NodeConfig::local())
    }

    /// Endpoint the client posts to
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    fn next_id(&self) -> usize {
        self.req_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Generic call to the daemon: a single synchronous round trip,
    /// no retries. Returns the raw `result` payload.
    pub fn call(&self, method: ClientMethod, params: &[Value]) -> Result<Value, Error> {
        self.call_with_timeout(method, params, None)
    }

    /// Same as [`call`](Self::call) with an optional per-call deadline;
    /// `None` blocks until the transport responds or fails
    pub fn call_with_timeout(
        &self,
        method: ClientMethod,
        params: &[Value],
        timeout: Option<Duration>,
    ) -> Result<Value, Error> {
        let id = self.next_id();
        let request = JsonData::new(method.name(), params, id);
        let endpoint = self.config.endpoint();
        debug!("Post {} (id: {}) to {}", method.name(), id, endpoint);

        let mut post = CLIENT.post(&endpoint).json(&request);
        if let Some(t) = timeout {
            post = post.timeout(t);
        }
        let response = post.send()?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("{} from {}", status, endpoint);
            return Err(Error::UnexpectedHttpStatus(status.as_u16(), endpoint));
        }

        let body = response.text()?;
        let reply: JsonReply = serde_json::from_str(&body).map_err(|err| {
            Error::InvalidDataFormat(format!("not a JSON RPC reply ({}): {}", err, snippet(&body)))
        })?;

        if reply.error.code != 0 {
            if reply.error.code == AUTHENTICATION_NEEDED_CODE {
                return Err(Error::AuthenticationNeeded(reply.error.message));
            }
            return Err(Error::Remote(reply.error.code, reply.error.message));
        }

        Ok(reply.result)
    }

    /// Get balance for an account at the latest block
    pub fn get_balance(&self, address: &Address) -> Result<Wei, Error> {
        let params = vec![
            Value::String(address.to_string()),
            Value::String(BLOCK_LATEST.to_string()),
        ];
        let result = self.call(ClientMethod::EthGetBalance, &params)?;

        let envelope = result.as_str().ok_or_else(|| {
            Error::InvalidDataFormat(format!("balance of {} is not a string: {}", address, result))
        })?;

        Wei::from_hex(envelope).map_err(|err| {
            error!("Unable to decode balance of {}: {}", address, err);
            Error::from(err)
        })
    }

    /// Send `value` wei from one account to another; the returned
    /// transaction carries the hash assigned by the daemon
    pub fn send_transaction(
        &self,
        from: &Address,
        to: &Address,
        value: &Wei,
    ) -> Result<Transaction, Error> {
        let mut tx = Transaction::new(from.clone(), to.clone(), value.clone());
        let params = vec![serde_json::to_value(&tx)
            .map_err(|err| Error::InvalidDataFormat(err.to_string()))?];

        let result = self.call(ClientMethod::EthSendTransaction, &params)?;

        match result.as_str() {
            Some(id) => {
                tx.id = Some(id.to_string());
                Ok(tx)
            }
            None => Err(Error::InvalidDataFormat(format!(
                "transaction id is not a string: {}",
                result
            ))),
        }
    }

    /// Unlock an account for `duration` seconds, if the daemon has the
    /// personal API enabled. Success is the call not failing; the
    /// reply payload is ignored.
    pub fn unlock_account(
        &self,
        address: &Address,
        passphrase: &str,
        duration: u64,
    ) -> Result<(), Error> {
        let params = vec![
            Value::String(address.to_string()),
            Value::String(passphrase.to_string()),
            Value::from(duration),
        ];
        self.call(ClientMethod::PersonalUnlockAccount, &params)?;

        Ok(())
    }

    /// Get version of the connected network
    pub fn get_version(&self) -> Result<String, Error> {
        let result = self.call(ClientMethod::NetVersion, &[])?;

        match result.as_str() {
            Some(version) => Ok(version.to_string()),
            None => Err(Error::InvalidDataFormat(format!(
                "network version is not a string: {}",
                result
            ))),
        }
    }
}

const SNIPPET_LEN: usize = 160;

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(SNIPPET_LEN) {
        Some((pos, _)) => &body[..pos],
        None => body,
    }
}
