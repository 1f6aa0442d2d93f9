//! XSwap Router Contract - Cross-Chain Swap-and-Send Routing
//!
//! This contract accepts a token (or native value) on the source chain,
//! optionally converts it through an external swap executor, and dispatches a
//! message over an external transport to the paired router on the destination
//! chain, which delivers (and optionally converts) the value to the final
//! receiver.
//!
//! # Outbound Flow
//! 1. Caller invokes `SwapAndSend` with origin/destination swap descriptors
//! 2. The router resolves the peer router, optionally runs the local swap,
//!    collects fees, and dispatches the transport message
//!
//! # Inbound Flow
//! 1. The transport invokes `TransportReceive` with an authenticated message
//! 2. The router re-validates sender whitelisting, optionally converts the
//!    transported token, and delivers to the receiver
//!
//! # Instant Receive
//! Any account may pre-fund the receiver against a not-yet-arrived canonical
//! message via `InstantReceive`. A set-once execution claim guarantees exactly
//! one party is reimbursed when the canonical message lands.
//!
//! # Security
//! - Per-(chain, sender) and per-token allow-lists, default-deny
//! - Transport-gated canonical receive
//! - Content-hash execution claims written before any external call

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod interfaces;
pub mod message;
pub mod msg;
mod query;
mod reply;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{compute_message_execution_hash, keccak256};
pub use crate::message::build_outbound_message;
