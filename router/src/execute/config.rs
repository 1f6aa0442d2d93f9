//! Whitelist registry and routing table handlers.
//!
//! All mutations here are owner-gated. Batch forms check input lengths
//! before any write, so a mismatch leaves state untouched.

use common::AssetInfo;
use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, ROUTES, SENDER_WHITELIST, TOKEN_WHITELIST};

// ============================================================================
// Sender Whitelist
// ============================================================================

/// Allow or revoke a single (chain, sender) pair.
pub fn execute_update_whitelist_sender(
    deps: DepsMut,
    info: MessageInfo,
    chain_selector: u64,
    sender: Binary,
    allowed: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    SENDER_WHITELIST.save(deps.storage, (chain_selector, sender.as_slice()), &allowed)?;

    Ok(Response::new()
        .add_attribute("action", "update_whitelist_sender")
        .add_attribute("chain_selector", chain_selector.to_string())
        .add_attribute("sender", sender.to_base64())
        .add_attribute("allowed", allowed.to_string()))
}

/// Batch form; all three arrays must have equal length.
pub fn execute_update_whitelist_sender_many(
    deps: DepsMut,
    info: MessageInfo,
    chain_selectors: Vec<u64>,
    senders: Vec<Binary>,
    allowed: Vec<bool>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if chain_selectors.len() != senders.len() || chain_selectors.len() != allowed.len() {
        return Err(ContractError::IncorrectArrayLength);
    }

    for ((chain_selector, sender), allow) in chain_selectors
        .iter()
        .zip(senders.iter())
        .zip(allowed.iter())
    {
        SENDER_WHITELIST.save(deps.storage, (*chain_selector, sender.as_slice()), allow)?;
    }

    Ok(Response::new()
        .add_attribute("action", "update_whitelist_sender_many")
        .add_attribute("count", chain_selectors.len().to_string()))
}

// ============================================================================
// Token Whitelist
// ============================================================================

/// Allow or revoke a token for outbound transport.
pub fn execute_update_whitelist_token(
    deps: DepsMut,
    info: MessageInfo,
    token: AssetInfo,
    allowed: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    TOKEN_WHITELIST.save(deps.storage, token.id(), &allowed)?;

    Ok(Response::new()
        .add_attribute("action", "update_whitelist_token")
        .add_attribute("token", token.id())
        .add_attribute("allowed", allowed.to_string()))
}

// ============================================================================
// Routing Table
// ============================================================================

/// Map a chain selector to its peer router address.
pub fn execute_set_route(
    deps: DepsMut,
    info: MessageInfo,
    chain_selector: u64,
    router: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    ROUTES.save(deps.storage, chain_selector, &router)?;

    Ok(Response::new()
        .add_attribute("action", "set_route")
        .add_attribute("chain_selector", chain_selector.to_string())
        .add_attribute("router", router.to_base64()))
}

/// Batch form; both arrays must have equal length.
pub fn execute_set_route_many(
    deps: DepsMut,
    info: MessageInfo,
    chain_selectors: Vec<u64>,
    routers: Vec<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if chain_selectors.len() != routers.len() {
        return Err(ContractError::IncorrectArrayLength);
    }

    for (chain_selector, router) in chain_selectors.iter().zip(routers.iter()) {
        ROUTES.save(deps.storage, *chain_selector, router)?;
    }

    Ok(Response::new()
        .add_attribute("action", "set_route_many")
        .add_attribute("count", chain_selectors.len().to_string()))
}
