//! Error types for the XSwap Router contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller may not perform this action")]
    Unauthorized,

    #[error("Sender not whitelisted for chain {chain_selector}")]
    SenderNotWhitelisted { chain_selector: u64 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Incorrect array length")]
    IncorrectArrayLength,

    #[error("No XSwap router on selected chain {chain_selector}")]
    NoXSwapRouterOnSelectedChain { chain_selector: u64 },

    // ========================================================================
    // Policy Errors
    // ========================================================================

    #[error("Token not whitelisted: {token}")]
    TokenNotWhitelisted { token: String },

    #[error("Not enough native: required {required}, attached {attached}")]
    NotEnoughNative {
        required: Uint128,
        attached: Uint128,
    },

    #[error("Message must transfer only one token")]
    MessageMustTransferOnlyOneToken,

    // ========================================================================
    // Duplicate Execution Errors
    // ========================================================================

    #[error("Message already executed")]
    MessageAlreadyExecuted,

    // ========================================================================
    // Internal Invariant Errors
    // ========================================================================

    #[error("Another swap operation is already pending")]
    OperationAlreadyPending,

    #[error("Unknown reply id: {id}")]
    InvalidReplyId { id: u64 },
}
