//! Interfaces of the external collaborators the router consumes.
//!
//! The transport, swap executor, fee oracle, and fee collector are opaque
//! contracts specified only at this boundary. The router trusts the transport
//! for message authenticity and treats the others as black boxes.

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::message::OutboundMessage;
use crate::msg::SwapCall;

// ============================================================================
// Transport
// ============================================================================

/// Execute interface of the message transport.
#[cw_serde]
pub enum TransportExecuteMsg {
    /// Dispatch `message` to the peer router on `destination_chain`.
    ///
    /// The native messaging fee is attached as funds when the fee asset is
    /// native; otherwise the transport pulls the granted CW20 allowance.
    /// The response `data` carries the 32-byte message identifier.
    Send {
        destination_chain: u64,
        message: OutboundMessage,
    },
}

/// Query interface of the message transport.
#[cw_serde]
pub enum TransportQueryMsg {
    /// Native-denominated messaging fee for delivering `message`.
    EstimateFee {
        destination_chain: u64,
        message: OutboundMessage,
    },
}

#[cw_serde]
pub struct TransportFeeResponse {
    pub native_fee: Uint128,
}

// ============================================================================
// Swap Executor
// ============================================================================

/// Execute interface of the swap executor.
#[cw_serde]
pub enum ExecutorExecuteMsg {
    /// Execute `calls` in order, atomically; any sub-call failure fails the
    /// whole run. The caller observes the resulting `token_out` balance
    /// delta.
    Run {
        calls: Vec<SwapCall>,
        token_out: AssetInfo,
    },
}

// ============================================================================
// Fee Oracle
// ============================================================================

/// Query interface of the fee oracle.
#[cw_serde]
pub enum OracleQueryMsg {
    /// Price the swap-side fee for transporting `amount` of `token`, paid
    /// with `payment`.
    Quote {
        payment: AssetInfo,
        token: AssetInfo,
        amount: Uint128,
    },
}

#[cw_serde]
pub struct OracleFeeResponse {
    /// Fee taken from the transported token
    pub token_fee: Uint128,
    /// Fee charged in native value
    pub native_fee: Uint128,
}

// ============================================================================
// Fee Collector
// ============================================================================

/// Execute interface of the fee collector sink. No return contract is relied
/// upon beyond acceptance.
#[cw_serde]
pub enum CollectorExecuteMsg {
    /// Accept attached native funds.
    ReceiveNative {},
    /// Notification that `amount` of `token` was transferred to the
    /// collector in the same transaction.
    ReceiveToken { token: AssetInfo, amount: Uint128 },
}
