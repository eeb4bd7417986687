use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:faucet-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Deployer; the only address allowed to assign the minter
pub const OWNER: Item<Addr> = Item::new("owner");

/// Sole address allowed to increase balances. Absent until assigned.
pub const MINTER: Item<Addr> = Item::new("minter");

/// holder => balance (absent means zero)
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
