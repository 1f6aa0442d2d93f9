//! Message types for the XSwap Router contract.

use common::{AssetInfo, TokenAmount};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::message::OutboundMessage;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address, gates administrative mutations
    pub owner: String,
    /// Transport contract trusted to deliver canonical messages
    pub transport: String,
    /// Fee oracle contract
    pub fee_oracle: String,
    /// Fee collector contract
    pub fee_collector: String,
    /// Swap executor contract
    pub swap_executor: String,
    /// Denom treated as native value on this chain
    pub native_denom: String,
}

// ============================================================================
// Swap Descriptors
// ============================================================================

/// One opaque sub-call forwarded to the swap executor. The router never
/// interprets `msg`; the executor does.
#[cw_serde]
pub struct SwapCall {
    /// Contract the executor will call
    pub target: String,
    /// Executor-specific call payload
    pub msg: Binary,
    /// Native value the executor should attach to the call
    pub native_amount: Uint128,
}

/// Origin-side swap descriptor. Created per `SwapAndSend` call, consumed
/// once, never persisted beyond the call.
#[cw_serde]
pub struct SwapOriginData {
    /// Native value earmarked for destination gas
    pub value_for_destination_gas: Uint128,
    /// Native value earmarked for instant-receive pre-funding
    pub value_for_instant_receive: Uint128,
    /// Input token (native denom or CW20)
    pub token_in: AssetInfo,
    /// Input amount pulled from the caller
    pub amount_in: Uint128,
    /// Token transported to the destination chain
    pub token_out: AssetInfo,
    /// Slippage bound for the origin swap
    pub estimated_amount_out: Uint128,
    /// Ordered sub-calls for the swap executor; empty skips the swap
    pub calls: Vec<SwapCall>,
    /// Opaque extra data carried for off-chain consumers
    pub additional_data: Binary,
}

/// Destination-side swap descriptor, encoded into the outbound message
/// payload and decoded by the peer router.
#[cw_serde]
pub struct SwapDestinationData {
    /// Final receiver address on the destination chain
    pub receiver: String,
    /// Token the receiver should end up with
    pub token_out: AssetInfo,
    /// Estimated output of the destination swap
    pub estimated_amount_out: Uint128,
    /// Ordered sub-calls for the destination swap executor; empty skips
    pub calls: Vec<SwapCall>,
}

/// An authenticated message as delivered by the transport (or speculatively
/// presented to `InstantReceive`).
#[cw_serde]
pub struct InboundMessage {
    /// Transport-assigned message identifier
    pub message_id: Binary,
    /// Chain selector of the originating chain
    pub source_chain: u64,
    /// Encoded sender address on the source chain
    pub sender: Binary,
    /// Encoded `SwapDestinationData`
    pub payload: Binary,
    /// Transported token-amount pairs (exactly one for valid messages)
    pub token_amounts: Vec<TokenAmount>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Message Pipeline
    // ========================================================================
    /// Swap (optionally) and dispatch a cross-chain message to the peer
    /// router on `destination_chain`.
    ///
    /// Authorization: Anyone. Native legs (input amount for a native
    /// token_in, instant-receive and destination-gas value, native fees)
    /// must be covered by attached funds.
    SwapAndSend {
        /// Asset paying the transport messaging fee (native or CW20)
        payment: AssetInfo,
        /// Destination chain selector
        destination_chain: u64,
        /// Destination-side swap descriptor
        dest: SwapDestinationData,
        /// Origin-side swap descriptor
        origin: SwapOriginData,
        /// Destination gas budget
        gas_limit: u64,
    },

    /// Canonical receive path, invoked by the trusted transport only.
    TransportReceive { message: InboundMessage },

    /// Speculative receive path: the caller fronts the transported amount to
    /// the receiver and records an execution claim for later reimbursement.
    ///
    /// Authorization: Anyone. CW20 transported tokens require a prior
    /// allowance for this contract; native amounts must be attached.
    InstantReceive { message: InboundMessage },

    // ========================================================================
    // Whitelist Registry
    // ========================================================================
    /// Allow or revoke a remote sender for a chain.
    ///
    /// Authorization: Owner only
    UpdateWhitelistSender {
        chain_selector: u64,
        /// Encoded remote sender address
        sender: Binary,
        allowed: bool,
    },

    /// Batch form of `UpdateWhitelistSender`. All three arrays must have
    /// equal length; the length check precedes any write.
    ///
    /// Authorization: Owner only
    UpdateWhitelistSenderMany {
        chain_selectors: Vec<u64>,
        senders: Vec<Binary>,
        allowed: Vec<bool>,
    },

    /// Allow or revoke a token for outbound transport.
    ///
    /// Authorization: Owner only
    UpdateWhitelistToken { token: AssetInfo, allowed: bool },

    // ========================================================================
    // Routing Table
    // ========================================================================
    /// Map a chain selector to the peer router address on that chain.
    ///
    /// Authorization: Owner only
    SetRoute {
        chain_selector: u64,
        /// Encoded peer router address
        router: Binary,
    },

    /// Batch form of `SetRoute`; arrays must have equal length.
    ///
    /// Authorization: Owner only
    SetRouteMany {
        chain_selectors: Vec<u64>,
        routers: Vec<Binary>,
    },

    // ========================================================================
    // Administration
    // ========================================================================
    /// Rotate the swap executor address.
    ///
    /// Authorization: Owner only
    SetSwapExecutor { executor: String },

    /// Withdraw stuck native or token balance to the owner.
    ///
    /// Authorization: Owner only
    EmergencyWithdraw { asset: AssetInfo, amount: Uint128 },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Whether (chain, sender) is whitelisted. Defaults to false.
    #[returns(WhitelistResponse)]
    IsSenderWhitelisted { chain_selector: u64, sender: Binary },

    /// Whether a token is whitelisted for transport. Defaults to false.
    #[returns(WhitelistResponse)]
    IsTokenWhitelisted { token: AssetInfo },

    /// Peer router configured for a chain, if any.
    #[returns(RouteResponse)]
    Route { chain_selector: u64 },

    /// Execution-claim hash for a message and the recorded claimant, if any.
    #[returns(MessageExecutorResponse)]
    MessageExecutor { message: InboundMessage },

    /// Fee quote for a prospective swap-and-send. Builds the exact message
    /// the send path would dispatch and prices it. Pure; identical inputs
    /// over identical state yield identical results.
    #[returns(FeesResponse)]
    EstimateFees {
        payment: AssetInfo,
        destination_chain: u64,
        dest: SwapDestinationData,
        token: AssetInfo,
        amount: Uint128,
        gas_limit: u64,
    },

    /// The exact outbound message the send path would construct for these
    /// inputs. Exposed for quote/send parity verification.
    #[returns(OutboundMessage)]
    BuildMessage {
        payment: AssetInfo,
        destination_chain: u64,
        dest: SwapDestinationData,
        token: AssetInfo,
        amount: Uint128,
        gas_limit: u64,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub transport: Addr,
    pub fee_oracle: Addr,
    pub fee_collector: Addr,
    pub swap_executor: Addr,
    pub native_denom: String,
}

#[cw_serde]
pub struct WhitelistResponse {
    pub whitelisted: bool,
}

#[cw_serde]
pub struct RouteResponse {
    pub router: Option<Binary>,
}

#[cw_serde]
pub struct MessageExecutorResponse {
    /// 32-byte execution-claim hash
    pub hash: Binary,
    /// Recorded claimant, if the message was already executed
    pub executor: Option<Addr>,
}

/// Fee quote. The two components may be charged in different assets: the
/// token fee is denominated in the transported token, both native fees in
/// the native denom.
#[cw_serde]
pub struct FeesResponse {
    /// Swap-side fee taken from the transported token
    pub token_fee: Uint128,
    /// Swap-side fee charged in native value
    pub oracle_native_fee: Uint128,
    /// Transport messaging fee in native value
    pub transport_native_fee: Uint128,
}
