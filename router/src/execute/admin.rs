//! Administrative handlers: executor rotation and emergency recovery.

use common::AssetInfo;
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Rotate the swap executor address.
pub fn execute_set_swap_executor(
    deps: DepsMut,
    info: MessageInfo,
    executor: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.swap_executor = deps.api.addr_validate(&executor)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_swap_executor")
        .add_attribute("executor", executor))
}

/// Withdraw stuck native or token balance to the owner.
pub fn execute_emergency_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let msg = asset.transfer_msg(&config.owner, amount)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "emergency_withdraw")
        .add_attribute("token", asset.id())
        .add_attribute("amount", amount.to_string()))
}
