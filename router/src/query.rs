//! Query handlers for the XSwap Router contract.

use common::AssetInfo;
use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};

use crate::hash::compute_message_execution_hash;
use crate::interfaces::{OracleFeeResponse, OracleQueryMsg, TransportFeeResponse, TransportQueryMsg};
use crate::message::{build_outbound_message, OutboundMessage};
use crate::msg::{
    ConfigResponse, FeesResponse, InboundMessage, MessageExecutorResponse, RouteResponse,
    SwapDestinationData, WhitelistResponse,
};
use crate::state::{CLAIMS, CONFIG, ROUTES, SENDER_WHITELIST, TOKEN_WHITELIST};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        transport: config.transport,
        fee_oracle: config.fee_oracle,
        fee_collector: config.fee_collector,
        swap_executor: config.swap_executor,
        native_denom: config.native_denom,
    })
}

/// Whether a (chain, sender) pair is whitelisted. Absence means false.
pub fn query_is_sender_whitelisted(
    deps: Deps,
    chain_selector: u64,
    sender: Binary,
) -> StdResult<WhitelistResponse> {
    let whitelisted = SENDER_WHITELIST
        .may_load(deps.storage, (chain_selector, sender.as_slice()))?
        .unwrap_or(false);
    Ok(WhitelistResponse { whitelisted })
}

/// Whether a token is whitelisted for transport. Absence means false.
pub fn query_is_token_whitelisted(deps: Deps, token: AssetInfo) -> StdResult<WhitelistResponse> {
    let whitelisted = TOKEN_WHITELIST
        .may_load(deps.storage, token.id())?
        .unwrap_or(false);
    Ok(WhitelistResponse { whitelisted })
}

/// Peer router for a chain, if configured.
pub fn query_route(deps: Deps, chain_selector: u64) -> StdResult<RouteResponse> {
    let router = ROUTES.may_load(deps.storage, chain_selector)?;
    Ok(RouteResponse { router })
}

/// Execution-claim hash and recorded claimant for a message.
pub fn query_message_executor(
    deps: Deps,
    message: InboundMessage,
) -> StdResult<MessageExecutorResponse> {
    let hash = compute_message_execution_hash(&message);
    let executor = CLAIMS.may_load(deps.storage, &hash)?;
    Ok(MessageExecutorResponse {
        hash: Binary::from(hash.as_slice()),
        executor,
    })
}

/// Build the exact message the send path would dispatch for these inputs.
pub fn query_build_message(
    deps: Deps,
    destination_chain: u64,
    dest: SwapDestinationData,
    token: AssetInfo,
    amount: Uint128,
    payment: AssetInfo,
    gas_limit: u64,
) -> StdResult<OutboundMessage> {
    let route = ROUTES
        .may_load(deps.storage, destination_chain)?
        .ok_or_else(|| StdError::generic_err("no xswap router on selected chain"))?;
    build_outbound_message(route, &dest, token, amount, payment, gas_limit)
}

/// Fee quote for a prospective swap-and-send. Prices the exact message the
/// send path would construct; no side effects.
#[allow(clippy::too_many_arguments)]
pub fn query_estimate_fees(
    deps: Deps,
    payment: AssetInfo,
    destination_chain: u64,
    dest: SwapDestinationData,
    token: AssetInfo,
    amount: Uint128,
    gas_limit: u64,
) -> StdResult<FeesResponse> {
    let config = CONFIG.load(deps.storage)?;

    let message = query_build_message(
        deps,
        destination_chain,
        dest,
        token.clone(),
        amount,
        payment.clone(),
        gas_limit,
    )?;

    let oracle_fee: OracleFeeResponse = deps.querier.query_wasm_smart(
        &config.fee_oracle,
        &OracleQueryMsg::Quote {
            payment,
            token,
            amount,
        },
    )?;

    let transport_fee: TransportFeeResponse = deps.querier.query_wasm_smart(
        &config.transport,
        &TransportQueryMsg::EstimateFee {
            destination_chain,
            message,
        },
    )?;

    Ok(FeesResponse {
        token_fee: oracle_fee.token_fee,
        oracle_native_fee: oracle_fee.native_fee,
        transport_native_fee: transport_fee.native_fee,
    })
}
