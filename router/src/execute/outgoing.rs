//! Outbound swap-and-send pipeline.
//!
//! The pipeline has two phases. Phase one runs every fatal check that must
//! precede fund movement (route, token whitelist), pulls the input token and
//! dispatches the origin swap as a `reply_on_success` submessage — an
//! executor failure therefore aborts the whole transaction. Phase two
//! (`finish_send`, reached from the reply handler, or inline when there is
//! no origin swap) observes the token_out balance delta, collects fees, and
//! hands the message to the transport.

use common::AssetInfo;
use cosmwasm_std::{
    coins, to_json_binary, Attribute, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    SubMsg, Uint128, WasmMsg,
};

use crate::error::ContractError;
use crate::interfaces::{
    CollectorExecuteMsg, ExecutorExecuteMsg, OracleFeeResponse, OracleQueryMsg,
    TransportExecuteMsg, TransportFeeResponse, TransportQueryMsg,
};
use crate::message::build_outbound_message;
use crate::msg::{SwapDestinationData, SwapOriginData};
use crate::state::{
    PendingOutbound, CONFIG, PENDING_OUTBOUND, REPLY_OUTBOUND_SWAP, REPLY_TRANSPORT_SEND, ROUTES,
    TOKEN_WHITELIST,
};

/// Entry point for `SwapAndSend`.
pub fn execute_swap_and_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    payment: AssetInfo,
    destination_chain: u64,
    dest: SwapDestinationData,
    origin: SwapOriginData,
    gas_limit: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Both checks below must fail before any token pull.
    let route = ROUTES
        .may_load(deps.storage, destination_chain)?
        .ok_or(ContractError::NoXSwapRouterOnSelectedChain {
            chain_selector: destination_chain,
        })?;

    let token_whitelisted = TOKEN_WHITELIST
        .may_load(deps.storage, origin.token_out.id())?
        .unwrap_or(false);
    if !token_whitelisted {
        return Err(ContractError::TokenNotWhitelisted {
            token: origin.token_out.id(),
        });
    }

    if PENDING_OUTBOUND.may_load(deps.storage)?.is_some() {
        return Err(ContractError::OperationAlreadyPending);
    }

    let attached_native = info
        .funds
        .iter()
        .find(|c| c.denom == config.native_denom)
        .map(|c| c.amount)
        .unwrap_or(Uint128::zero());

    // A native token_in is consumed from the attached value.
    let native_amount_in = if origin.token_in.is_native() {
        if attached_native < origin.amount_in {
            return Err(ContractError::NotEnoughNative {
                required: origin.amount_in,
                attached: attached_native,
            });
        }
        origin.amount_in
    } else {
        Uint128::zero()
    };

    let pending = PendingOutbound {
        sender: info.sender.clone(),
        payment,
        destination_chain,
        route,
        dest,
        token_out: origin.token_out.clone(),
        pre_balance: origin
            .token_out
            .query_balance(&deps.querier, &env.contract.address)?,
        attached_native,
        native_amount_in,
        value_for_destination_gas: origin.value_for_destination_gas,
        value_for_instant_receive: origin.value_for_instant_receive,
        gas_limit,
    };

    let mut msgs: Vec<CosmosMsg> = vec![];

    // Pull the input token from the caller.
    if !origin.token_in.is_native() && !origin.amount_in.is_zero() {
        msgs.push(origin.token_in.transfer_from_msg(
            &info.sender,
            &env.contract.address,
            origin.amount_in,
        )?);
    }

    if origin.calls.is_empty() {
        // No origin swap: amount_in is already denominated in token_out.
        let (finish_msgs, attrs) = finish_send(deps.as_ref(), &env, &pending, origin.amount_in)?;
        return Ok(Response::new()
            .add_messages(msgs)
            .add_submessages(finish_msgs)
            .add_attribute("action", "swap_and_send")
            .add_attributes(attrs));
    }

    // Origin swap: grant the executor the input and run the call list. The
    // balance delta is read in the reply.
    let executor_funds = if origin.token_in.is_native() {
        coins(origin.amount_in.u128(), &config.native_denom)
    } else {
        msgs.push(
            origin
                .token_in
                .increase_allowance_msg(&config.swap_executor, origin.amount_in)?,
        );
        vec![]
    };

    PENDING_OUTBOUND.save(deps.storage, &pending)?;

    let run = WasmMsg::Execute {
        contract_addr: config.swap_executor.to_string(),
        msg: to_json_binary(&ExecutorExecuteMsg::Run {
            calls: origin.calls,
            token_out: origin.token_out,
        })?,
        funds: executor_funds,
    };

    Ok(Response::new()
        .add_messages(msgs)
        .add_submessage(SubMsg::reply_on_success(run, REPLY_OUTBOUND_SWAP))
        .add_attribute("action", "swap_and_send")
        .add_attribute("destination_chain", destination_chain.to_string()))
}

/// Phase two: fee collection and transport dispatch for `out_amount` of
/// token_out. Shared by the direct path and the post-swap reply.
pub fn finish_send(
    deps: Deps,
    env: &Env,
    pending: &PendingOutbound,
    out_amount: Uint128,
) -> Result<(Vec<SubMsg>, Vec<Attribute>), ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let oracle_fee: OracleFeeResponse = deps.querier.query_wasm_smart(
        &config.fee_oracle,
        &OracleQueryMsg::Quote {
            payment: pending.payment.clone(),
            token: pending.token_out.clone(),
            amount: out_amount,
        },
    )?;

    let net_out = out_amount.checked_sub(oracle_fee.token_fee).map_err(
        cosmwasm_std::StdError::overflow,
    )?;

    let mut msgs: Vec<SubMsg> = vec![];

    // Swap-side token fee to the collector.
    if !oracle_fee.token_fee.is_zero() {
        msgs.push(SubMsg::new(
            pending
                .token_out
                .transfer_msg(&config.fee_collector, oracle_fee.token_fee)?,
        ));
        msgs.push(SubMsg::new(WasmMsg::Execute {
            contract_addr: config.fee_collector.to_string(),
            msg: to_json_binary(&CollectorExecuteMsg::ReceiveToken {
                token: pending.token_out.clone(),
                amount: oracle_fee.token_fee,
            })?,
            funds: vec![],
        }));
    }

    // The estimator builds this same message for the same inputs.
    let message = build_outbound_message(
        pending.route.clone(),
        &pending.dest,
        pending.token_out.clone(),
        net_out,
        pending.payment.clone(),
        pending.gas_limit,
    )?;

    let transport_fee: TransportFeeResponse = deps.querier.query_wasm_smart(
        &config.transport,
        &TransportQueryMsg::EstimateFee {
            destination_chain: pending.destination_chain,
            message: message.clone(),
        },
    )?;

    // Everything the attached native value must cover.
    let mut required_native = pending.native_amount_in
        + pending.value_for_destination_gas
        + pending.value_for_instant_receive
        + oracle_fee.native_fee;
    if pending.payment.is_native() {
        required_native += transport_fee.native_fee;
    }
    if pending.attached_native < required_native {
        return Err(ContractError::NotEnoughNative {
            required: required_native,
            attached: pending.attached_native,
        });
    }

    // Native receipts to the collector: oracle fee, instant pre-funding,
    // destination gas.
    for value in [
        oracle_fee.native_fee,
        pending.value_for_instant_receive,
        pending.value_for_destination_gas,
    ] {
        if !value.is_zero() {
            msgs.push(SubMsg::new(WasmMsg::Execute {
                contract_addr: config.fee_collector.to_string(),
                msg: to_json_binary(&CollectorExecuteMsg::ReceiveNative {})?,
                funds: coins(value.u128(), &config.native_denom),
            }));
        }
    }

    // Transport fee: attach native value, or pull the payment token and
    // grant the transport an allowance.
    let mut transport_funds: Vec<Coin> = vec![];
    if !transport_fee.native_fee.is_zero() {
        if pending.payment.is_native() {
            add_coin(
                &mut transport_funds,
                Coin {
                    denom: config.native_denom.clone(),
                    amount: transport_fee.native_fee,
                },
            );
        } else {
            msgs.push(SubMsg::new(pending.payment.transfer_from_msg(
                &pending.sender,
                &env.contract.address,
                transport_fee.native_fee,
            )?));
            msgs.push(SubMsg::new(
                pending
                    .payment
                    .increase_allowance_msg(&config.transport, transport_fee.native_fee)?,
            ));
        }
    }

    // Hand the transported token to the transport.
    if !net_out.is_zero() {
        match &pending.token_out {
            AssetInfo::Native { denom } => add_coin(
                &mut transport_funds,
                Coin {
                    denom: denom.clone(),
                    amount: net_out,
                },
            ),
            token_out @ AssetInfo::Cw20 { .. } => {
                msgs.push(SubMsg::new(
                    token_out.increase_allowance_msg(&config.transport, net_out)?,
                ));
            }
        }
    }

    let send = WasmMsg::Execute {
        contract_addr: config.transport.to_string(),
        msg: to_json_binary(&TransportExecuteMsg::Send {
            destination_chain: pending.destination_chain,
            message,
        })?,
        funds: transport_funds,
    };
    msgs.push(SubMsg::reply_on_success(send, REPLY_TRANSPORT_SEND));

    let attrs = vec![
        Attribute::new("destination_chain", pending.destination_chain.to_string()),
        Attribute::new("token_out", pending.token_out.id()),
        Attribute::new("amount", net_out.to_string()),
        Attribute::new("token_fee", oracle_fee.token_fee.to_string()),
        Attribute::new("oracle_native_fee", oracle_fee.native_fee.to_string()),
        Attribute::new("transport_fee", transport_fee.native_fee.to_string()),
        Attribute::new(
            "value_for_instant_receive",
            pending.value_for_instant_receive.to_string(),
        ),
    ];

    Ok((msgs, attrs))
}

/// Merge a coin into a funds vector, combining amounts for equal denoms.
fn add_coin(funds: &mut Vec<Coin>, coin: Coin) {
    match funds.iter_mut().find(|c| c.denom == coin.denom) {
        Some(existing) => existing.amount += coin.amount,
        None => funds.push(coin),
    }
}
