//! Ledger token interface
//!
//! Message schema shared by the `wrapped-token` contract and every contract that
//! drives one. A token advertises what it serves through
//! [`TokenQueryMsg::TokenInterface`]; the router refuses to register a token whose
//! answer is missing any of [`TokenCapability::REQUIRED`].

use std::fmt;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, CustomQuery, QuerierWrapper, StdResult, WasmMsg,
};

use crate::amount::Amount;

/// Identifier of the message schema below. Bumped on any breaking change.
pub const TOKEN_INTERFACE: &str = "wrapped-token/1";

#[cw_serde]
#[derive(Copy, Eq, PartialOrd, Ord)]
pub enum TokenCapability {
    Mint,
    Transfer,
    BalanceOf,
    Allowance,
    Approve,
    TransferFrom,
}

impl TokenCapability {
    pub const REQUIRED: [TokenCapability; 6] = [
        TokenCapability::Mint,
        TokenCapability::Transfer,
        TokenCapability::BalanceOf,
        TokenCapability::Allowance,
        TokenCapability::Approve,
        TokenCapability::TransferFrom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCapability::Mint => "mint",
            TokenCapability::Transfer => "transfer",
            TokenCapability::BalanceOf => "balance_of",
            TokenCapability::Allowance => "allowance",
            TokenCapability::Approve => "approve",
            TokenCapability::TransferFrom => "transfer_from",
        }
    }
}

impl fmt::Display for TokenCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cw_serde]
pub enum TokenExecuteMsg {
    /// Owner only. Credits `to`.
    Mint { amount: Amount, to: String },
    Transfer { amount: Amount, to: String },
    /// Adds `amount` to the caller's allowance for `to`.
    Approve { amount: Amount, to: String },
    /// Spends the caller's allowance on `main_account`, crediting `to`.
    TransferFrom {
        amount: Amount,
        to: String,
        main_account: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum TokenQueryMsg {
    #[returns(BalanceResponse)]
    BalanceOf { account: String },
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(OwnerResponse)]
    Owner {},
    #[returns(TokenInterfaceResponse)]
    TokenInterface {},
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Amount,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Amount,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct TokenInterfaceResponse {
    pub interface: String,
    pub capabilities: Vec<TokenCapability>,
}

impl TokenInterfaceResponse {
    /// Capabilities from `required` this token does not serve, in `required` order.
    pub fn missing(&self, required: &[TokenCapability]) -> Vec<TokenCapability> {
        required
            .iter()
            .filter(|c| !self.capabilities.contains(*c))
            .copied()
            .collect()
    }
}

/// Handle to a deployed ledger token.
#[cw_serde]
pub struct TokenContract(pub Addr);

impl TokenContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call(&self, msg: TokenExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }
        .into())
    }

    pub fn balance<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
        account: impl Into<String>,
    ) -> StdResult<Amount> {
        let res: BalanceResponse = querier.query_wasm_smart(
            self.addr(),
            &TokenQueryMsg::BalanceOf {
                account: account.into(),
            },
        )?;
        Ok(res.balance)
    }

    pub fn interface<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
    ) -> StdResult<TokenInterfaceResponse> {
        querier.query_wasm_smart(self.addr(), &TokenQueryMsg::TokenInterface {})
    }
}
