//! Outbound message construction.
//!
//! The fee estimator and the send pipeline must price and dispatch the very
//! same bytes, so both go through `build_outbound_message`. Anything that
//! changes the encoding here changes quotes and sends together.

use common::{AssetInfo, TokenAmount};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, StdResult, Uint128};

use crate::msg::SwapDestinationData;

/// Tag prefixing the gas-limit extra args, fixed by the transport wire
/// format.
pub const EXTRA_ARGS_TAG: [u8; 4] = [0x97, 0xa6, 0x57, 0xc9];

/// The exact structure priced by the fee estimator and handed to the
/// transport.
#[cw_serde]
pub struct OutboundMessage {
    /// Encoded peer router address on the destination chain
    pub receiver: Binary,
    /// Encoded `SwapDestinationData`
    pub payload: Binary,
    /// The single transported token-amount pair
    pub token_amount: TokenAmount,
    /// Transport-specific extra arguments (gas budget encoding)
    pub extra_args: Binary,
    /// Asset paying the transport messaging fee
    pub fee_asset: AssetInfo,
}

/// Build the outbound message for a prospective or actual send.
pub fn build_outbound_message(
    route: Binary,
    dest: &SwapDestinationData,
    token: AssetInfo,
    amount: Uint128,
    fee_asset: AssetInfo,
    gas_limit: u64,
) -> StdResult<OutboundMessage> {
    Ok(OutboundMessage {
        receiver: route,
        payload: to_json_binary(dest)?,
        token_amount: TokenAmount { token, amount },
        extra_args: build_extra_args(gas_limit),
        fee_asset,
    })
}

/// Encode the destination gas budget as transport extra args:
/// 4-byte tag followed by the gas limit as a 32-byte big-endian integer.
pub fn build_extra_args(gas_limit: u64) -> Binary {
    let mut data = [0u8; 36];
    data[0..4].copy_from_slice(&EXTRA_ARGS_TAG);
    data[28..36].copy_from_slice(&gas_limit.to_be_bytes());
    Binary::from(data.as_slice())
}
