//! Asset abstraction over native coins and CW20 tokens.
//!
//! The router moves value in two forms: bank-module coins (identified by
//! denom) and CW20 tokens (identified by contract address). `AssetInfo`
//! unifies both behind the message constructors the contracts need.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdError, StdResult, Uint128,
    WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg};

/// Identifies a transferable asset: a native denom or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    /// Native bank-module coin
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: String },
}

impl AssetInfo {
    /// Stable string identifier usable as a storage map key.
    pub fn id(&self) -> String {
        match self {
            AssetInfo::Native { denom } => denom.clone(),
            AssetInfo::Cw20 { contract_addr } => contract_addr.clone(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// Message sending `amount` of this asset from the calling contract to
    /// `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            })),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            })),
        }
    }

    /// Message pulling `amount` of a CW20 token from `owner` into `recipient`
    /// (requires a prior allowance). Native coins cannot be pulled; they must
    /// arrive as attached funds.
    pub fn transfer_from_msg(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { .. } => Err(StdError::generic_err(
                "cannot pull native coins; attach them as funds",
            )),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: owner.to_string(),
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            })),
        }
    }

    /// Message granting `spender` an allowance of `amount` over this CW20
    /// token. Errors for native coins.
    pub fn increase_allowance_msg(&self, spender: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { .. } => Err(StdError::generic_err(
                "native coins have no allowance; attach them as funds",
            )),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
                    spender: spender.to_string(),
                    amount,
                    expires: None,
                })?,
                funds: vec![],
            })),
        }
    }

    /// Current balance of `address` in this asset.
    pub fn query_balance(&self, querier: &QuerierWrapper, address: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => {
                let coin = querier.query_balance(address, denom)?;
                Ok(coin.amount)
            }
            AssetInfo::Cw20 { contract_addr } => {
                let res: cw20::BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &Cw20QueryMsg::Balance {
                        address: address.to_string(),
                    },
                )?;
                Ok(res.balance)
            }
        }
    }
}

/// An asset paired with an amount.
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

/// A token-amount pair as transported in a cross-chain message.
#[cw_serde]
pub struct TokenAmount {
    pub token: AssetInfo,
    pub amount: Uint128,
}
