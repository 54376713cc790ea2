use common::Amount;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Only owner can mint")]
    Unauthorized,

    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: Amount },

    #[error("Not enough coins to send: balance {balance}, requested {requested}")]
    InsufficientBalance { balance: Amount, requested: Amount },

    #[error("Not enough coins approved to send: allowance {allowance}, requested {requested}")]
    InsufficientAllowance { allowance: Amount, requested: Amount },
}
