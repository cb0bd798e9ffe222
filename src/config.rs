//! # Connection parameters for a geth daemon

use std::fmt;

/// Default geth JSON RPC listen port
pub const DEFAULT_PORT: u16 = 8545;

/// Target endpoint of a geth daemon, immutable once the client is built
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeConfig {
    /// Host name or address of the daemon
    pub host: String,

    /// JSON RPC listen port
    pub port: u16,
}

impl NodeConfig {
    /// Endpoint at the provided host and port
    pub fn new(host: &str, port: u16) -> NodeConfig {
        NodeConfig {
            host: host.to_string(),
            port,
        }
    }

    /// Endpoint at `localhost:8545`, the default geth listen address
    pub fn local() -> NodeConfig {
        NodeConfig::new("localhost", DEFAULT_PORT)
    }

    /// URL the client posts requests to
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig::local()
    }
}

impl fmt::Display for NodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
