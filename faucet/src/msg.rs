use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Token contract to mint from. The faucet needs that token's minter role.
    pub token: String,
    /// Admin who can pause/unpause. Defaults to the instantiating address.
    pub admin: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint the fixed claim amount to the sender (once per cooldown period,
    /// up to the lifetime cap)
    RequestTokens {},
    /// Admin: block or resume claims for everyone
    SetPaused { paused: bool },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Whether `RequestTokens` from `address` would succeed right now
    #[returns(CanClaimResponse)]
    CanClaim { address: String },
    /// Amount `address` may still claim over its lifetime
    #[returns(RemainingAllowanceResponse)]
    RemainingAllowance { address: String },
    /// Returns the token contract address
    #[returns(TokenResponse)]
    Token {},
    /// Returns the admin address
    #[returns(AdminResponse)]
    Admin {},
    /// Pause state and claim parameters
    #[returns(ConfigResponse)]
    Config {},
    /// Full claim status for one address
    #[returns(ClaimInfoResponse)]
    ClaimInfo { address: String },
    /// Faucet-wide claim counters
    #[returns(StatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct CanClaimResponse {
    pub can_claim: bool,
}

#[cw_serde]
pub struct RemainingAllowanceResponse {
    pub remaining: Uint128,
}

#[cw_serde]
pub struct TokenResponse {
    pub token: String,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: String,
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub token: Addr,
    pub paused: bool,
    pub claim_amount: Uint128,
    pub max_lifetime_claim: Uint128,
    pub cooldown_period: u64,
}

#[cw_serde]
pub struct ClaimInfoResponse {
    pub address: Addr,
    /// Seconds; 0 if the address has never claimed
    pub last_claim_time: u64,
    pub total_claimed: Uint128,
    pub remaining: Uint128,
    /// Seconds when the cooldown ends; 0 if the address has never claimed
    pub claimable_at: u64,
    pub can_claim: bool,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_claims: u64,
    pub total_distributed: Uint128,
    pub unique_claimants: u64,
}
