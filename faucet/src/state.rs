//! State definitions for the faucet contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:token-faucet";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Claim Parameters
// ============================================================================

/// Amounts are in token base units (18 decimals)
pub const CLAIM_AMOUNT: Uint128 = Uint128::new(100_000_000_000_000_000_000); // 100 tokens
pub const MAX_LIFETIME_CLAIM: Uint128 = Uint128::new(1_000_000_000_000_000_000_000); // 1000 tokens
pub const COOLDOWN_PERIOD: u64 = 86_400; // 24 hours

// ============================================================================
// Storage
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// May pause and unpause claims. Fixed at instantiation.
    pub admin: Addr,
    /// Token contract the faucet mints from. Fixed at instantiation.
    pub token: Addr,
    /// Whether claims are currently blocked
    pub paused: bool,
}

/// Per-claimant record, created by the first successful claim
#[cw_serde]
#[derive(Default)]
pub struct ClaimRecord {
    /// Block time (seconds) of the last successful claim, 0 if never claimed
    pub last_claim_time: u64,
    /// Cumulative amount minted to this address
    pub total_claimed: Uint128,
}

/// Faucet-wide counters
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_claims: u64,
    pub total_distributed: Uint128,
    pub unique_claimants: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// claimant => claim record
pub const CLAIMS: Map<&Addr, ClaimRecord> = Map::new("claims");

pub const STATS: Item<Stats> = Item::new("stats");
