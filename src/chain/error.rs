//! Chain-specific error types.

use thiserror::Error;

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Errors that can occur while talking to the Rootstock network.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Invalid seed phrase or account derivation failure.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Contract call or ABI handling failure.
    #[error("Contract error: {0}")]
    Contract(String),
}

impl ChainError {
    /// Create an RPC error.
    pub fn rpc(msg: impl Into<String>) -> Self {
        Self::Rpc(msg.into())
    }

    /// Create a wallet error.
    pub fn wallet(msg: impl Into<String>) -> Self {
        Self::Wallet(msg.into())
    }

    /// Create a contract error.
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }
}
