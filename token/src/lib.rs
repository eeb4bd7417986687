//! Faucet Token - Mintable Fungible Token Ledger
//!
//! A minimal cw20-compatible ledger whose supply can only grow through a single
//! authorized minter. The deployer (owner) hands the minter role to the faucet
//! contract during deployment wiring.
//!
//! # Roles
//! - Owner: the instantiating address, may (re)assign the minter
//! - Minter: the only address allowed to call `Mint`

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
