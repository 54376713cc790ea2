use common::{Amount, CodecError};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: Amount },

    #[error("Nonce overflow for {ethereum_address}")]
    NonceOverflow { ethereum_address: String },
}
