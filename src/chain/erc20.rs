//! ERC-20 interface bindings.
//!
//! The minimal interface surface the token tools need: balance, transfer,
//! and the metadata views used to scale and label amounts.

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract Erc20 {
        function balanceOf(address owner) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
    }
}
