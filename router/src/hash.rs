//! Execution-claim hash computation.
//!
//! An execution claim is keyed by a keccak256 content hash over the logical
//! message: two messages with the same id, source chain, sender, payload, and
//! transported token-amounts hash identically regardless of who presents
//! them.
//!
//! # Byte Layout (136 bytes total)
//! Variable-length fields are keccak-hashed first so the outer buffer is
//! fixed-size:
//! - Bytes 0-31:    keccak256(message_id)
//! - Bytes 32-39:   source_chain (u64, big-endian)
//! - Bytes 40-71:   keccak256(sender)
//! - Bytes 72-103:  keccak256(payload)
//! - Bytes 104-135: keccak256(token-amounts encoding)
//!
//! The token-amounts encoding concatenates, per entry:
//! - 32 bytes: keccak256 of the token id (denom or contract address)
//! - 16 bytes: amount (u128, big-endian)

use tiny_keccak::{Hasher, Keccak};

use crate::msg::InboundMessage;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the execution-claim hash for an inbound message.
pub fn compute_message_execution_hash(message: &InboundMessage) -> [u8; 32] {
    let mut token_amounts = Vec::with_capacity(message.token_amounts.len() * 48);
    for pair in &message.token_amounts {
        token_amounts.extend_from_slice(&keccak256(pair.token.id().as_bytes()));
        token_amounts.extend_from_slice(&pair.amount.u128().to_be_bytes());
    }

    let mut data = [0u8; 136];
    data[0..32].copy_from_slice(&keccak256(message.message_id.as_slice()));
    data[32..40].copy_from_slice(&message.source_chain.to_be_bytes());
    data[40..72].copy_from_slice(&keccak256(message.sender.as_slice()));
    data[72..104].copy_from_slice(&keccak256(message.payload.as_slice()));
    data[104..136].copy_from_slice(&keccak256(&token_amounts));

    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
