use common::{Amount, CodecError};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    // ========================================================================
    // Authorization / Preconditions
    // ========================================================================
    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: Amount },

    #[error("Nonce overflow for {ethereum_address}")]
    NonceOverflow { ethereum_address: String },

    // ========================================================================
    // Registry
    // ========================================================================
    #[error("Token not supported: {ethereum_contract}")]
    TokenNotSupported { ethereum_contract: String },

    #[error("Token already registered: {ethereum_contract}")]
    TokenAlreadyRegistered { ethereum_contract: String },

    // ========================================================================
    // Interface negotiation
    // ========================================================================
    #[error("Token interface unavailable on {contract}: {reason}")]
    InterfaceUnavailable { contract: String, reason: String },

    #[error("Incompatible token interface on {contract}: {interface}")]
    IncompatibleInterface { contract: String, interface: String },

    #[error("Token {contract} is missing capabilities: {missing}")]
    MissingCapabilities { contract: String, missing: String },
}
