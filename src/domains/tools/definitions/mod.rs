//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub(crate) mod common;
pub mod contract;
pub mod network;
pub mod token;
pub mod wallet;

pub use contract::{ReadContractTool, WriteContractTool};
pub use network::{GetBlockNumberTool, GetGasPriceTool, GetTransactionReceiptTool};
pub use token::{GetTokenBalanceTool, TransferTokenTool};
pub use wallet::{GetAddressTool, GetBalanceTool, TransferRbtcTool};
