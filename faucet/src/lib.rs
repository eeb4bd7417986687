//! Token Faucet Contract
//!
//! Mints a fixed amount of the faucet token to whoever asks, subject to:
//! - a per-address cooldown between successful claims
//! - a lifetime cap on the total any single address may receive
//! - an admin-controlled pause switch
//!
//! The faucet must hold the token's minter role before any claim can succeed.
//! A claim updates the claimant's record and dispatches a `Mint` to the token
//! in the same transaction, so a failed mint reverts the record update too.

pub mod contract;
pub mod eligibility;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
