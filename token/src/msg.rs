use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw20::{BalanceResponse, MinterResponse, TokenInfoResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Optional initial minter. Usually assigned later with `SetMinter`
    /// once the faucet address is known.
    pub minter: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Minter only: create `amount` new tokens for `recipient`.
    /// Same JSON shape as the cw20 `Mint` message.
    Mint { recipient: String, amount: Uint128 },
    /// Owner only: assign the minter role
    SetMinter { minter: String },
    /// Move tokens from the sender to `recipient`
    Transfer { recipient: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Balance of `address`, zero if it never held tokens
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// Returns `None` until a minter has been assigned
    #[returns(Option<MinterResponse>)]
    Minter {},
    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: String,
}
