use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: Uint128, required: Uint128 },
}
