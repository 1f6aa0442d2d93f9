//! Common - Shared Types for XSwap Router Contracts
//!
//! This package provides the asset abstraction used across the XSwap Router
//! contracts: native coins and CW20 tokens behind one enum.

pub mod asset;

pub use asset::{Asset, AssetInfo, TokenAmount};
