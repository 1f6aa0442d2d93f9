//! XSwap Router Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `reply`   - Submessage continuations (swap deltas, transport send)
//! - `query`   - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_emergency_withdraw, execute_instant_receive, execute_set_route,
    execute_set_route_many, execute_set_swap_executor, execute_swap_and_send,
    execute_transport_receive, execute_update_whitelist_sender,
    execute_update_whitelist_sender_many, execute_update_whitelist_token,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_build_message, query_config, query_estimate_fees, query_is_sender_whitelisted,
    query_is_token_whitelisted, query_message_executor, query_route,
};
use crate::reply::handle_reply;
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        transport: deps.api.addr_validate(&msg.transport)?,
        fee_oracle: deps.api.addr_validate(&msg.fee_oracle)?,
        fee_collector: deps.api.addr_validate(&msg.fee_collector)?,
        swap_executor: deps.api.addr_validate(&msg.swap_executor)?,
        native_denom: msg.native_denom,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("transport", config.transport)
        .add_attribute("native_denom", config.native_denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Message pipeline
        ExecuteMsg::SwapAndSend {
            payment,
            destination_chain,
            dest,
            origin,
            gas_limit,
        } => execute_swap_and_send(
            deps,
            env,
            info,
            payment,
            destination_chain,
            dest,
            origin,
            gas_limit,
        ),
        ExecuteMsg::TransportReceive { message } => {
            execute_transport_receive(deps, env, info, message)
        }
        ExecuteMsg::InstantReceive { message } => execute_instant_receive(deps, env, info, message),

        // Whitelist registry
        ExecuteMsg::UpdateWhitelistSender {
            chain_selector,
            sender,
            allowed,
        } => execute_update_whitelist_sender(deps, info, chain_selector, sender, allowed),
        ExecuteMsg::UpdateWhitelistSenderMany {
            chain_selectors,
            senders,
            allowed,
        } => execute_update_whitelist_sender_many(deps, info, chain_selectors, senders, allowed),
        ExecuteMsg::UpdateWhitelistToken { token, allowed } => {
            execute_update_whitelist_token(deps, info, token, allowed)
        }

        // Routing table
        ExecuteMsg::SetRoute {
            chain_selector,
            router,
        } => execute_set_route(deps, info, chain_selector, router),
        ExecuteMsg::SetRouteMany {
            chain_selectors,
            routers,
        } => execute_set_route_many(deps, info, chain_selectors, routers),

        // Administration
        ExecuteMsg::SetSwapExecutor { executor } => {
            execute_set_swap_executor(deps, info, executor)
        }
        ExecuteMsg::EmergencyWithdraw { asset, amount } => {
            execute_emergency_withdraw(deps, info, asset, amount)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_reply(deps, env, msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsSenderWhitelisted {
            chain_selector,
            sender,
        } => to_json_binary(&query_is_sender_whitelisted(deps, chain_selector, sender)?),
        QueryMsg::IsTokenWhitelisted { token } => {
            to_json_binary(&query_is_token_whitelisted(deps, token)?)
        }
        QueryMsg::Route { chain_selector } => to_json_binary(&query_route(deps, chain_selector)?),
        QueryMsg::MessageExecutor { message } => {
            to_json_binary(&query_message_executor(deps, message)?)
        }
        QueryMsg::EstimateFees {
            payment,
            destination_chain,
            dest,
            token,
            amount,
            gas_limit,
        } => to_json_binary(&query_estimate_fees(
            deps,
            payment,
            destination_chain,
            dest,
            token,
            amount,
            gas_limit,
        )?),
        QueryMsg::BuildMessage {
            payment,
            destination_chain,
            dest,
            token,
            amount,
            gas_limit,
        } => to_json_binary(&query_build_message(
            deps,
            destination_chain,
            dest,
            token,
            amount,
            payment,
            gas_limit,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
