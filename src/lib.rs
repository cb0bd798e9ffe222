//! # Geth connector library
//!
//! JSON RPC client for a geth daemon: account balance lookup,
//! transaction submission, account unlocking and network version
//! queries, together with the wei/ether conversion the responses need.
//!
//! ```no_run
//! use geth_connector::{NodeConfig, RpcClient};
//!
//! let client = RpcClient::new(NodeConfig::new("127.0.0.1", 8545));
//! let addr = "0x0e7c045110b8dbf29765047380898919c5cb56f4".parse().unwrap();
//! let balance = client.get_balance(&addr).unwrap();
//! println!("{}", balance.format(4));
//! ```

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod core;
pub mod rpc;
pub mod util;

pub use self::config::NodeConfig;
pub use self::core::{Address, Transaction, Wei};
pub use self::rpc::RpcClient;
