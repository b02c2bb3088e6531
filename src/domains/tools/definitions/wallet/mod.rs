//! Wallet tools: the server's signing account and RBTC movements.

mod get_address;
mod get_balance;
mod transfer_rbtc;

pub use get_address::GetAddressTool;
pub use get_balance::GetBalanceTool;
pub use transfer_rbtc::TransferRbtcTool;
