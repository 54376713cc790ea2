//! Common - Shared Types and Utilities for the CL8Y Clearing House Contracts
//!
//! Pure logic used by the `wrapped-token`, `bridge` and `router` contracts:
//! exact decimal amounts, the fixed-width ABI codec, ABI hashing, the ledger
//! token interface and the proof registry storage.

pub mod abi;
pub mod amount;
pub mod codec;
pub mod hash;
pub mod proof;
pub mod token;

pub use abi::{AbiMessage, AbiMessageResponse};
pub use amount::Amount;
pub use codec::CodecError;
pub use token::{TokenCapability, TokenContract, TokenExecuteMsg, TokenQueryMsg};
