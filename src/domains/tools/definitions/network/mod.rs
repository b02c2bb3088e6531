//! Network tools: chain-level state queries.

mod block_number;
mod gas_price;
mod transaction_receipt;

pub use block_number::GetBlockNumberTool;
pub use gas_price::GetGasPriceTool;
pub use transaction_receipt::GetTransactionReceiptTool;
