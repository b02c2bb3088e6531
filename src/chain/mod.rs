//! Rootstock chain access.
//!
//! This module wraps everything that touches the network: account
//! derivation, the RPC provider, transaction submission and the ERC-20
//! bindings. Tool handlers only ever see [`ChainClient`].

mod client;
mod erc20;
mod error;

pub use client::{ChainClient, TokenBalance};
pub use error::{ChainError, ChainResult};
