//! Configuration management for the MCP server.
//!
//! All configuration comes from the process environment (optionally via a
//! `.env` file). The seed phrase is required; everything else has a
//! sensible default for the Rootstock testnet.

use tracing::warn;

use crate::core::error::{Error, Result};

/// Public Rootstock testnet RPC endpoint.
pub const TESTNET_RPC_URL: &str = "https://public-node.testnet.rsk.co";
/// Public Rootstock mainnet RPC endpoint.
pub const MAINNET_RPC_URL: &str = "https://public-node.rsk.co";

/// Rootstock testnet chain ID.
pub const TESTNET_CHAIN_ID: u64 = 31;
/// Rootstock mainnet chain ID.
pub const MAINNET_CHAIN_ID: u64 = 30;

/// Environment variable holding the BIP-39 seed phrase.
pub const SEED_PHRASE_ENV_VAR: &str = "SEED_PHRASE";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Chain endpoint configuration.
    pub chain: ChainConfig,

    /// Secrets loaded from the environment.
    pub credentials: CredentialsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Chain endpoint configuration.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Expected chain ID (30 mainnet, 31 testnet).
    pub chain_id: u64,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Secrets loaded from the environment.
#[derive(Clone)]
pub struct CredentialsConfig {
    /// BIP-39 seed phrase the signing account is derived from.
    pub seed_phrase: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("seed_phrase", &"[REDACTED]")
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Rootstock MCP Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::testnet()
    }
}

impl ChainConfig {
    /// Configuration for the public Rootstock testnet.
    pub fn testnet() -> Self {
        Self {
            rpc_url: TESTNET_RPC_URL.to_string(),
            chain_id: TESTNET_CHAIN_ID,
        }
    }

    /// Configuration for the public Rootstock mainnet.
    pub fn mainnet() -> Self {
        Self {
            rpc_url: MAINNET_RPC_URL.to_string(),
            chain_id: MAINNET_CHAIN_ID,
        }
    }

    /// Human-readable network label for this chain ID.
    pub fn network_name(&self) -> &'static str {
        match self.chain_id {
            MAINNET_CHAIN_ID => "rootstock-mainnet",
            TESTNET_CHAIN_ID => "rootstock-testnet",
            _ => "custom",
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored. Fails if the
    /// required `SEED_PHRASE` variable is absent or empty; everything else
    /// falls back to testnet defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let seed_phrase = std::env::var(SEED_PHRASE_ENV_VAR).map_err(|_| {
            Error::config(format!(
                "{SEED_PHRASE_ENV_VAR} environment variable is not set"
            ))
        })?;
        if seed_phrase.trim().is_empty() {
            return Err(Error::config(format!(
                "{SEED_PHRASE_ENV_VAR} environment variable is empty"
            )));
        }

        let mut server = ServerConfig::default();
        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            server.name = name;
        }

        let mut logging = LoggingConfig::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        let mut chain = match std::env::var("RSK_NETWORK") {
            Ok(network) => match network.to_lowercase().as_str() {
                "mainnet" => ChainConfig::mainnet(),
                "testnet" => ChainConfig::testnet(),
                other => {
                    warn!("Unknown RSK_NETWORK '{}', defaulting to testnet", other);
                    ChainConfig::testnet()
                }
            },
            Err(_) => ChainConfig::testnet(),
        };
        if let Ok(rpc_url) = std::env::var("RSK_RPC_URL") {
            chain.rpc_url = rpc_url;
        }

        Ok(Self {
            server,
            chain,
            credentials: CredentialsConfig { seed_phrase },
            logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const TEST_SEED_PHRASE: &str =
        "test test test test test test test test test test test junk";

    fn clear_env() {
        unsafe {
            std::env::remove_var(SEED_PHRASE_ENV_VAR);
            std::env::remove_var("RSK_NETWORK");
            std::env::remove_var("RSK_RPC_URL");
            std::env::remove_var("MCP_SERVER_NAME");
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }

    #[test]
    fn test_missing_seed_phrase_is_an_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains(SEED_PHRASE_ENV_VAR)
        );
    }

    #[test]
    fn test_empty_seed_phrase_is_an_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(SEED_PHRASE_ENV_VAR, "   ");
        }
        let result = Config::from_env();
        assert!(result.is_err());
        clear_env();
    }

    #[test]
    fn test_defaults_to_testnet() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(SEED_PHRASE_ENV_VAR, TEST_SEED_PHRASE);
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.chain.chain_id, TESTNET_CHAIN_ID);
        assert_eq!(config.chain.rpc_url, TESTNET_RPC_URL);
        assert_eq!(config.server.name, "Rootstock MCP Server");
        clear_env();
    }

    #[test]
    fn test_mainnet_selection_and_rpc_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(SEED_PHRASE_ENV_VAR, TEST_SEED_PHRASE);
            std::env::set_var("RSK_NETWORK", "mainnet");
            std::env::set_var("RSK_RPC_URL", "http://localhost:4444");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.chain.chain_id, MAINNET_CHAIN_ID);
        assert_eq!(config.chain.rpc_url, "http://localhost:4444");
        clear_env();
    }

    #[test]
    fn test_seed_phrase_redacted_in_debug() {
        let creds = CredentialsConfig {
            seed_phrase: TEST_SEED_PHRASE.to_string(),
        };
        let debug_str = format!("{creds:?}");
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("junk"));
    }

    #[test]
    fn test_network_names() {
        assert_eq!(ChainConfig::testnet().network_name(), "rootstock-testnet");
        assert_eq!(ChainConfig::mainnet().network_name(), "rootstock-mainnet");
        let custom = ChainConfig {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 1337,
        };
        assert_eq!(custom.network_name(), "custom");
    }
}
