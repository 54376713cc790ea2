use common::token::{TokenCapability, TOKEN_INTERFACE};
use common::Amount;
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    AllowanceResponse, BalanceResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, OwnerResponse,
    QueryMsg, TokenInterfaceResponse,
};
use crate::state::{ALLOWANCES, BALANCES, CONTRACT_NAME, CONTRACT_VERSION, OWNER};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    OWNER.save(deps.storage, &owner)?;

    for initial in &msg.initial_balances {
        ensure_positive(&initial.amount)?;
        let account = deps.api.addr_validate(&initial.address)?;
        credit(deps.storage, &account, &initial.amount)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("initial_balances", msg.initial_balances.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { amount, to } => execute_mint(deps, info, amount, to),
        ExecuteMsg::Transfer { amount, to } => execute_transfer(deps, info, amount, to),
        ExecuteMsg::Approve { amount, to } => execute_approve(deps, info, amount, to),
        ExecuteMsg::TransferFrom {
            amount,
            to,
            main_account,
        } => execute_transfer_from(deps, info, amount, to, main_account),
    }
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    amount: Amount,
    to: String,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }
    ensure_positive(&amount)?;

    let to = deps.api.addr_validate(&to)?;
    credit(deps.storage, &to, &amount)?;

    Ok(Response::new()
        .add_attribute("method", "mint")
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string()))
}

fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    amount: Amount,
    to: String,
) -> Result<Response, ContractError> {
    ensure_positive(&amount)?;
    let to = deps.api.addr_validate(&to)?;

    debit(deps.storage, &info.sender, &amount)?;
    credit(deps.storage, &to, &amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string()))
}

/// Allowances accumulate: approving 5 twice leaves 10.
fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    amount: Amount,
    to: String,
) -> Result<Response, ContractError> {
    ensure_positive(&amount)?;
    let spender = deps.api.addr_validate(&to)?;

    let key = (&info.sender, &spender);
    let allowance = ALLOWANCES.may_load(deps.storage, key)?.unwrap_or_default() + &amount;
    ALLOWANCES.save(deps.storage, key, &allowance)?;

    Ok(Response::new()
        .set_data(to_json_binary(&AllowanceResponse {
            allowance: allowance.clone(),
        })?)
        .add_attribute("method", "approve")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("allowance", allowance.to_string()))
}

fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    amount: Amount,
    to: String,
    main_account: String,
) -> Result<Response, ContractError> {
    ensure_positive(&amount)?;
    let to = deps.api.addr_validate(&to)?;
    let main_account = deps.api.addr_validate(&main_account)?;

    // Allowance is checked before balance.
    let key = (&main_account, &info.sender);
    let allowance = ALLOWANCES.may_load(deps.storage, key)?.unwrap_or_default();
    let remaining = allowance
        .checked_sub(&amount)
        .ok_or_else(|| ContractError::InsufficientAllowance {
            allowance: allowance.clone(),
            requested: amount.clone(),
        })?;

    debit(deps.storage, &main_account, &amount)?;
    ALLOWANCES.save(deps.storage, key, &remaining)?;
    credit(deps.storage, &to, &amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_from")
        .add_attribute("spender", info.sender)
        .add_attribute("from", main_account)
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string()))
}

fn ensure_positive(amount: &Amount) -> Result<(), ContractError> {
    if !amount.is_positive() {
        return Err(ContractError::InvalidAmount {
            amount: amount.clone(),
        });
    }
    Ok(())
}

fn credit(storage: &mut dyn Storage, account: &Addr, amount: &Amount) -> StdResult<()> {
    let balance = BALANCES.may_load(storage, account)?.unwrap_or_default() + amount;
    BALANCES.save(storage, account, &balance)
}

fn debit(storage: &mut dyn Storage, account: &Addr, amount: &Amount) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, account)?.unwrap_or_default();
    let remaining =
        balance
            .checked_sub(amount)
            .ok_or_else(|| ContractError::InsufficientBalance {
                balance: balance.clone(),
                requested: amount.clone(),
            })?;
    BALANCES.save(storage, account, &remaining)?;
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::BalanceOf { account } => to_json_binary(&query_balance_of(deps, account)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::TokenInterface {} => to_json_binary(&query_token_interface()),
    }
}

fn query_balance_of(deps: Deps, account: String) -> StdResult<BalanceResponse> {
    let account = deps.api.addr_validate(&account)?;
    let balance = BALANCES
        .may_load(deps.storage, &account)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &spender))?
        .unwrap_or_default();
    Ok(AllowanceResponse { allowance })
}

fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let owner = OWNER.load(deps.storage)?;
    Ok(OwnerResponse { owner })
}

fn query_token_interface() -> TokenInterfaceResponse {
    TokenInterfaceResponse {
        interface: TOKEN_INTERFACE.to_string(),
        capabilities: TokenCapability::REQUIRED.to_vec(),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::InitialBalance;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use std::str::FromStr;

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    fn setup(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                owner: "owner".to_string(),
                initial_balances: vec![InitialBalance {
                    address: "alice".to_string(),
                    amount: amount("100"),
                }],
            },
        )
        .unwrap();
    }

    fn balance(deps: Deps, account: &str) -> Amount {
        query_balance_of(deps, account.to_string()).unwrap().balance
    }

    #[test]
    fn test_instantiate_seeds_balances() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        assert_eq!(balance(deps.as_ref(), "alice"), amount("100"));
        assert_eq!(balance(deps.as_ref(), "bob"), Amount::zero());
        assert_eq!(query_owner(deps.as_ref()).unwrap().owner, "owner");
    }

    #[test]
    fn test_instantiate_rejects_non_positive_seed() {
        let mut deps = mock_dependencies();
        let err = instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                owner: "owner".to_string(),
                initial_balances: vec![InitialBalance {
                    address: "alice".to_string(),
                    amount: Amount::zero(),
                }],
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidAmount {
                amount: Amount::zero()
            }
        );
    }

    #[test]
    fn test_mint_owner_only() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute_mint(
            deps.as_mut(),
            mock_info("alice", &[]),
            amount("1"),
            "alice".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        execute_mint(
            deps.as_mut(),
            mock_info("owner", &[]),
            amount("0.000000000000000016"),
            "bob".to_string(),
        )
        .unwrap();
        assert_eq!(balance(deps.as_ref(), "bob"), amount("16e-18"));
    }

    #[test]
    fn test_transfer_moves_exact_decimals() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        execute_transfer(
            deps.as_mut(),
            mock_info("alice", &[]),
            amount("10.0000000000000000001"),
            "bob".to_string(),
        )
        .unwrap();

        assert_eq!(balance(deps.as_ref(), "alice"), amount("89.9999999999999999999"));
        assert_eq!(balance(deps.as_ref(), "bob"), amount("10.0000000000000000001"));
    }

    #[test]
    fn test_transfer_rejects_overdraft_and_non_positive() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute_transfer(
            deps.as_mut(),
            mock_info("alice", &[]),
            amount("100.1"),
            "bob".to_string(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientBalance {
                balance: amount("100"),
                requested: amount("100.1"),
            }
        );

        for bad in ["0", "-1"] {
            let err = execute_transfer(
                deps.as_mut(),
                mock_info("alice", &[]),
                amount(bad),
                "bob".to_string(),
            )
            .unwrap_err();
            assert!(matches!(err, ContractError::InvalidAmount { .. }));
        }

        assert_eq!(balance(deps.as_ref(), "alice"), amount("100"));
    }

    #[test]
    fn test_approve_accumulates() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        execute_approve(
            deps.as_mut(),
            mock_info("alice", &[]),
            amount("5"),
            "spender".to_string(),
        )
        .unwrap();
        let res = execute_approve(
            deps.as_mut(),
            mock_info("alice", &[]),
            amount("2.5"),
            "spender".to_string(),
        )
        .unwrap();

        let data: AllowanceResponse = cosmwasm_std::from_json(res.data.unwrap()).unwrap();
        assert_eq!(data.allowance, amount("7.5"));
        assert_eq!(
            query_allowance(deps.as_ref(), "alice".to_string(), "spender".to_string())
                .unwrap()
                .allowance,
            amount("7.5")
        );
        // allowances are directional
        assert_eq!(
            query_allowance(deps.as_ref(), "spender".to_string(), "alice".to_string())
                .unwrap()
                .allowance,
            Amount::zero()
        );
    }

    #[test]
    fn test_transfer_from_checks_allowance_before_balance() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        // neither allowance nor balance suffices: allowance error wins
        let err = execute_transfer_from(
            deps.as_mut(),
            mock_info("spender", &[]),
            amount("500"),
            "bob".to_string(),
            "alice".to_string(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientAllowance {
                allowance: Amount::zero(),
                requested: amount("500"),
            }
        );

        execute_approve(
            deps.as_mut(),
            mock_info("alice", &[]),
            amount("1000"),
            "spender".to_string(),
        )
        .unwrap();

        let err = execute_transfer_from(
            deps.as_mut(),
            mock_info("spender", &[]),
            amount("500"),
            "bob".to_string(),
            "alice".to_string(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientBalance {
                balance: amount("100"),
                requested: amount("500"),
            }
        );
        assert_eq!(
            query_allowance(deps.as_ref(), "alice".to_string(), "spender".to_string())
                .unwrap()
                .allowance,
            amount("1000")
        );
    }

    #[test]
    fn test_transfer_from_debits_allowance_and_balance() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        execute_approve(
            deps.as_mut(),
            mock_info("alice", &[]),
            amount("40"),
            "spender".to_string(),
        )
        .unwrap();
        execute_transfer_from(
            deps.as_mut(),
            mock_info("spender", &[]),
            amount("30"),
            "bob".to_string(),
            "alice".to_string(),
        )
        .unwrap();

        assert_eq!(balance(deps.as_ref(), "alice"), amount("70"));
        assert_eq!(balance(deps.as_ref(), "bob"), amount("30"));
        assert_eq!(
            query_allowance(deps.as_ref(), "alice".to_string(), "spender".to_string())
                .unwrap()
                .allowance,
            amount("10")
        );
    }

    #[test]
    fn test_token_interface_lists_every_capability() {
        let res = query_token_interface();
        assert_eq!(res.interface, TOKEN_INTERFACE);
        assert!(res.missing(&TokenCapability::REQUIRED).is_empty());
    }
}
