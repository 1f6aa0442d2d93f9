//! State definitions for the XSwap Router contract.
//!
//! Storage falls into three groups: the owner-managed configuration
//! (collaborator addresses, whitelists, routing table), the set-once message
//! execution claims, and the short-lived continuation records that carry an
//! in-flight swap across a submessage reply.

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

use crate::msg::SwapDestinationData;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address, gates all administrative mutations
    pub owner: Addr,
    /// Transport contract trusted to deliver canonical inbound messages
    pub transport: Addr,
    /// Fee oracle queried for swap-side fees
    pub fee_oracle: Addr,
    /// Fee collector sink for token and native fees
    pub fee_collector: Addr,
    /// Swap executor invoked for origin/destination conversions
    pub swap_executor: Addr,
    /// Denom treated as the native value of this chain
    pub native_denom: String,
}

// ============================================================================
// In-Flight Swap Continuations
// ============================================================================

/// Outbound state carried from the execute handler into the swap-executor
/// reply. Present only while a `SwapAndSend` with origin calls is in flight.
#[cw_serde]
pub struct PendingOutbound {
    /// Account that initiated the send (fees are pulled from it)
    pub sender: Addr,
    /// Asset paying the transport messaging fee
    pub payment: AssetInfo,
    /// Destination chain selector
    pub destination_chain: u64,
    /// Encoded peer router address on the destination chain
    pub route: Binary,
    /// Destination-side swap descriptor, encoded into the message payload
    pub dest: SwapDestinationData,
    /// Token being transported after the origin swap
    pub token_out: AssetInfo,
    /// token_out balance before the executor ran
    pub pre_balance: Uint128,
    /// Native value attached to the originating call
    pub attached_native: Uint128,
    /// Native value the caller consumed for a native token_in pull
    pub native_amount_in: Uint128,
    /// Native value earmarked for destination gas
    pub value_for_destination_gas: Uint128,
    /// Native value earmarked for instant-receive pre-funding
    pub value_for_instant_receive: Uint128,
    /// Destination gas budget encoded into the message extra args
    pub gas_limit: u64,
}

/// Inbound state carried from the receive handlers into the swap-executor
/// reply. `deliver_to` already accounts for claim reconciliation.
#[cw_serde]
pub struct PendingInbound {
    /// Message identifier, echoed in the receipt attributes
    pub message_id: Binary,
    /// Transported token as received
    pub token: AssetInfo,
    /// Transported amount as received
    pub amount: Uint128,
    /// Token the destination swap targets
    pub token_out: AssetInfo,
    /// token_out balance before the executor ran
    pub pre_balance: Uint128,
    /// Final delivery target (receiver, or the recorded claimant)
    pub deliver_to: Addr,
    /// Attribute tag: "message_received" or "instant_receive"
    pub action: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:xswap-router";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "1.0.0";

/// Reply id: outbound origin swap completed
pub const REPLY_OUTBOUND_SWAP: u64 = 1;

/// Reply id: inbound destination swap completed (or failed; reply_always)
pub const REPLY_INBOUND_SWAP: u64 = 2;

/// Reply id: transport accepted the outbound message
pub const REPLY_TRANSPORT_SEND: u64 = 3;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Per-(chain selector, encoded remote sender) allow-list.
/// Absence means not whitelisted.
pub const SENDER_WHITELIST: Map<(u64, &[u8]), bool> = Map::new("sender_whitelist");

/// Per-token allow-list, keyed by `AssetInfo::id()`.
/// Absence means not whitelisted.
pub const TOKEN_WHITELIST: Map<String, bool> = Map::new("token_whitelist");

/// Chain selector -> encoded peer router address on that chain.
/// Absence means no router configured.
pub const ROUTES: Map<u64, Binary> = Map::new("routes");

/// Message execution claims: 32-byte content hash -> claimant.
/// Set once, never overwritten, never deleted.
pub const CLAIMS: Map<&[u8], Addr> = Map::new("claims");

/// In-flight outbound swap continuation (at most one per transaction)
pub const PENDING_OUTBOUND: Item<PendingOutbound> = Item::new("pending_outbound");

/// In-flight inbound swap continuation (at most one per transaction)
pub const PENDING_INBOUND: Item<PendingInbound> = Item::new("pending_inbound");
