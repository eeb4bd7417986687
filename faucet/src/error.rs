use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Faucet is paused")]
    FaucetPaused,

    #[error("Cooldown active: claimable at {claimable_at}")]
    CooldownActive { claimable_at: u64 },

    #[error("Lifetime limit reached")]
    LifetimeLimitReached,
}
