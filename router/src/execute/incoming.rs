//! Inbound delivery handlers: canonical transport receive and instant
//! (speculative) receive.
//!
//! Both paths converge on `deliver_message`: a direct transfer when the
//! destination descriptor carries no calls, otherwise a destination swap
//! dispatched `reply_always` so executor failure degrades to a direct
//! transfer of the original transported pair instead of failing delivery.

use cosmwasm_std::{
    coins, from_json, to_json_binary, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, SubMsg,
    Uint128, WasmMsg,
};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, compute_message_execution_hash};
use crate::interfaces::ExecutorExecuteMsg;
use crate::msg::{InboundMessage, SwapDestinationData};
use crate::state::{
    Config, PendingInbound, CLAIMS, CONFIG, PENDING_INBOUND, REPLY_INBOUND_SWAP, SENDER_WHITELIST,
};

// ============================================================================
// Canonical Receive
// ============================================================================

/// Process an authenticated message from the transport.
pub fn execute_transport_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    message: InboundMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.transport {
        return Err(ContractError::Unauthorized);
    }

    // An unlisted chain is never whitelisted for any sender, so this check
    // subsumes "wrong chain".
    let whitelisted = SENDER_WHITELIST
        .may_load(
            deps.storage,
            (message.source_chain, message.sender.as_slice()),
        )?
        .unwrap_or(false);
    if !whitelisted {
        return Err(ContractError::SenderNotWhitelisted {
            chain_selector: message.source_chain,
        });
    }

    if message.token_amounts.len() != 1 {
        return Err(ContractError::MessageMustTransferOnlyOneToken);
    }

    let dest: SwapDestinationData = from_json(&message.payload)?;
    let receiver = deps.api.addr_validate(&dest.receiver)?;

    // Claim reconciliation: an earlier instant executor is reimbursed with
    // the canonical amount; the speculative transfer to the receiver is
    // never reversed. With no prior claim the receiver is recorded, which
    // blocks later instant execution of the same message.
    let hash = compute_message_execution_hash(&message);
    let deliver_to = match CLAIMS.may_load(deps.storage, &hash)? {
        Some(claimant) => claimant,
        None => {
            CLAIMS.save(deps.storage, &hash, &receiver)?;
            receiver
        }
    };

    deliver_message(
        deps,
        &env,
        &config,
        &message,
        dest,
        deliver_to,
        "message_received",
        vec![],
    )
}

// ============================================================================
// Instant Receive
// ============================================================================

/// Speculatively fulfill a not-yet-arrived canonical message: the caller
/// fronts the transported amount to the receiver and records a set-once
/// execution claim for later reimbursement.
pub fn execute_instant_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    message: InboundMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if message.token_amounts.len() != 1 {
        return Err(ContractError::MessageMustTransferOnlyOneToken);
    }

    let hash = compute_message_execution_hash(&message);
    if CLAIMS.may_load(deps.storage, &hash)?.is_some() {
        return Err(ContractError::MessageAlreadyExecuted);
    }
    // Claim is written before any external call; a reentrant attempt on the
    // same hash fails above.
    CLAIMS.save(deps.storage, &hash, &info.sender)?;

    let dest: SwapDestinationData = from_json(&message.payload)?;
    let receiver = deps.api.addr_validate(&dest.receiver)?;

    // Pull the fronted amount from the caller.
    let pair = &message.token_amounts[0];
    let mut pull_msgs: Vec<CosmosMsg> = vec![];
    if pair.token.is_native() {
        let attached = info
            .funds
            .iter()
            .find(|c| c.denom == pair.token.id())
            .map(|c| c.amount)
            .unwrap_or(Uint128::zero());
        if attached < pair.amount {
            return Err(ContractError::NotEnoughNative {
                required: pair.amount,
                attached,
            });
        }
    } else {
        pull_msgs.push(pair.token.transfer_from_msg(
            &info.sender,
            &env.contract.address,
            pair.amount,
        )?);
    }

    let response = deliver_message(
        deps,
        &env,
        &config,
        &message,
        dest,
        receiver,
        "instant_receive",
        pull_msgs,
    )?;

    Ok(response
        .add_attribute("executor", info.sender)
        .add_attribute("execution_hash", bytes32_to_hex(&hash)))
}

// ============================================================================
// Shared Delivery
// ============================================================================

/// Deliver the transported pair to `deliver_to`, through the destination
/// swap when the descriptor carries calls. `pre_msgs` run first (the
/// instant-receive pull must land before any transfer out).
#[allow(clippy::too_many_arguments)]
fn deliver_message(
    deps: DepsMut,
    env: &Env,
    config: &Config,
    message: &InboundMessage,
    dest: SwapDestinationData,
    deliver_to: Addr,
    action: &str,
    pre_msgs: Vec<CosmosMsg>,
) -> Result<Response, ContractError> {
    let pair = &message.token_amounts[0];

    if dest.calls.is_empty() {
        // No conversion requested; move the transported pair directly.
        return Ok(Response::new()
            .add_messages(pre_msgs)
            .add_message(pair.token.transfer_msg(&deliver_to, pair.amount)?)
            .add_attribute("action", action)
            .add_attribute("message_id", message.message_id.to_base64())
            .add_attribute("token", pair.token.id())
            .add_attribute("amount", pair.amount.to_string())
            .add_attribute("deliver_to", deliver_to.to_string()));
    }

    if PENDING_INBOUND.may_load(deps.storage)?.is_some() {
        return Err(ContractError::OperationAlreadyPending);
    }

    let mut msgs: Vec<CosmosMsg> = vec![];
    let executor_funds = if pair.token.is_native() {
        coins(pair.amount.u128(), pair.token.id())
    } else {
        msgs.push(
            pair.token
                .increase_allowance_msg(&config.swap_executor, pair.amount)?,
        );
        vec![]
    };

    PENDING_INBOUND.save(
        deps.storage,
        &PendingInbound {
            message_id: message.message_id.clone(),
            token: pair.token.clone(),
            amount: pair.amount,
            token_out: dest.token_out.clone(),
            pre_balance: dest
                .token_out
                .query_balance(&deps.querier, &env.contract.address)?,
            deliver_to,
            action: action.to_string(),
        },
    )?;

    let run = WasmMsg::Execute {
        contract_addr: config.swap_executor.to_string(),
        msg: to_json_binary(&ExecutorExecuteMsg::Run {
            calls: dest.calls,
            token_out: dest.token_out,
        })?,
        funds: executor_funds,
    };

    // reply_always: executor failure rolls back the swap but not this
    // handler; the reply falls back to a direct transfer.
    Ok(Response::new()
        .add_messages(pre_msgs)
        .add_messages(msgs)
        .add_submessage(SubMsg::reply_always(run, REPLY_INBOUND_SWAP))
        .add_attribute("action", action)
        .add_attribute("message_id", message.message_id.to_base64()))
}
