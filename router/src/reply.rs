//! Submessage reply handlers.
//!
//! Three continuations arrive here: the outbound origin swap (success only;
//! failure aborts the transaction), the inbound destination swap (always;
//! failure falls back to a direct transfer), and the transport send (success
//! only; carries the assigned message id in its data).

use cosmwasm_std::{DepsMut, Env, Reply, Response, SubMsgResult};

use crate::error::ContractError;
use crate::execute::finish_send;
use crate::state::{
    PENDING_INBOUND, PENDING_OUTBOUND, REPLY_INBOUND_SWAP, REPLY_OUTBOUND_SWAP,
    REPLY_TRANSPORT_SEND,
};

pub fn handle_reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_OUTBOUND_SWAP => reply_outbound_swap(deps, env),
        REPLY_INBOUND_SWAP => reply_inbound_swap(deps, env, msg.result),
        REPLY_TRANSPORT_SEND => reply_transport_send(msg.result),
        id => Err(ContractError::InvalidReplyId { id }),
    }
}

/// The origin swap succeeded; observe the token_out balance delta and run
/// the fee/dispatch phase.
fn reply_outbound_swap(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let pending = PENDING_OUTBOUND.load(deps.storage)?;
    PENDING_OUTBOUND.remove(deps.storage);

    let post_balance = pending
        .token_out
        .query_balance(&deps.querier, &env.contract.address)?;
    // Delta observation guards against fee-on-transfer and executor
    // slippage: only what actually arrived is transported.
    let out_amount = post_balance
        .checked_sub(pending.pre_balance)
        .map_err(cosmwasm_std::StdError::overflow)?;

    let (msgs, attrs) = finish_send(deps.as_ref(), &env, &pending, out_amount)?;

    Ok(Response::new().add_submessages(msgs).add_attributes(attrs))
}

/// The destination swap finished. On success the token_out delta goes to
/// the delivery target; on failure the original transported pair does.
/// Delivery itself never fails because the conversion did.
fn reply_inbound_swap(
    deps: DepsMut,
    env: Env,
    result: SubMsgResult,
) -> Result<Response, ContractError> {
    let pending = PENDING_INBOUND.load(deps.storage)?;
    PENDING_INBOUND.remove(deps.storage);

    let (msg, swapped, token, amount) = match result {
        SubMsgResult::Ok(_) => {
            let post_balance = pending
                .token_out
                .query_balance(&deps.querier, &env.contract.address)?;
            let out_amount = post_balance
                .checked_sub(pending.pre_balance)
                .map_err(cosmwasm_std::StdError::overflow)?;
            (
                pending
                    .token_out
                    .transfer_msg(&pending.deliver_to, out_amount)?,
                true,
                pending.token_out.id(),
                out_amount,
            )
        }
        SubMsgResult::Err(_) => (
            pending
                .token
                .transfer_msg(&pending.deliver_to, pending.amount)?,
            false,
            pending.token.id(),
            pending.amount,
        ),
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", pending.action)
        .add_attribute("message_id", pending.message_id.to_base64())
        .add_attribute("swapped", swapped.to_string())
        .add_attribute("token", token)
        .add_attribute("amount", amount.to_string())
        .add_attribute("deliver_to", pending.deliver_to.to_string()))
}

/// The transport accepted the message; surface the assigned id.
fn reply_transport_send(result: SubMsgResult) -> Result<Response, ContractError> {
    let response = result
        .into_result()
        .map_err(cosmwasm_std::StdError::generic_err)?;

    let mut res = Response::new().add_attribute("action", "message_sent");
    if let Some(data) = response.data {
        res = res.add_attribute("message_id", data.to_base64());
    }
    Ok(res)
}
