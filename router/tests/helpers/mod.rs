//! Shared test harness: mock collaborator contracts (transport, fee oracle,
//! swap executor, fee collector), cw20-base tokens, and a pre-wired router
//! suite mirroring a two-chain deployment.

#![allow(dead_code)]

use cosmwasm_std::{coins, Addr, Binary, Empty, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use common::{AssetInfo, TokenAmount};
use xswap_router::msg::{
    ExecuteMsg, InboundMessage, InstantiateMsg, SwapCall, SwapDestinationData, SwapOriginData,
};

// Chain selectors mirroring a paired two-chain deployment.
pub const DEST_CHAIN: u64 = 14_767_482_510_784_806_043;
pub const SOURCE_CHAIN: u64 = 16_767_482_510_784_806_043;

pub const NATIVE_DENOM: &str = "uluna";

/// Encoded peer router addresses on the remote chains.
pub fn dest_router() -> Binary {
    Binary::from(b"peer-router-dest".as_slice())
}

pub fn source_router() -> Binary {
    Binary::from(b"peer-router-src".as_slice())
}

/// Message id assigned by the mock transport on send.
pub const SENT_MESSAGE_ID: [u8; 32] = [0xab; 32];

// ============================================================================
// Mock Transport
// ============================================================================

pub mod mock_transport {
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{
        to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
    };
    use cw_storage_plus::Item;

    use xswap_router::interfaces::{TransportExecuteMsg, TransportFeeResponse};
    use xswap_router::message::OutboundMessage;

    #[cw_serde]
    pub struct InstantiateMsg {
        pub fee: Uint128,
    }

    #[cw_serde]
    pub enum QueryMsg {
        EstimateFee {
            destination_chain: u64,
            message: OutboundMessage,
        },
        LastMessage {},
    }

    #[cw_serde]
    pub struct LastMessageResponse {
        pub destination_chain: Option<u64>,
        pub message: Option<OutboundMessage>,
    }

    const FEE: Item<Uint128> = Item::new("fee");
    const LAST: Item<(u64, OutboundMessage)> = Item::new("last");

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> StdResult<Response> {
        FEE.save(deps.storage, &msg.fee)?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: TransportExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            TransportExecuteMsg::Send {
                destination_chain,
                message,
            } => {
                LAST.save(deps.storage, &(destination_chain, message))?;
                Ok(Response::new().set_data(Binary::from(super::SENT_MESSAGE_ID.as_slice())))
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::EstimateFee { .. } => to_json_binary(&TransportFeeResponse {
                native_fee: FEE.load(deps.storage)?,
            }),
            QueryMsg::LastMessage {} => {
                let last = LAST.may_load(deps.storage)?;
                let (destination_chain, message) = match last {
                    Some((c, m)) => (Some(c), Some(m)),
                    None => (None, None),
                };
                to_json_binary(&LastMessageResponse {
                    destination_chain,
                    message,
                })
            }
        }
    }
}

// ============================================================================
// Mock Fee Oracle
// ============================================================================

pub mod mock_oracle {
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{
        to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
    };
    use cw_storage_plus::Item;

    use common::AssetInfo;
    use xswap_router::interfaces::OracleFeeResponse;

    #[cw_serde]
    pub struct InstantiateMsg {
        pub token_fee: Uint128,
        pub native_fee: Uint128,
    }

    #[cw_serde]
    pub enum ExecuteMsg {
        SetFee {
            token_fee: Uint128,
            native_fee: Uint128,
        },
    }

    #[cw_serde]
    pub enum QueryMsg {
        Quote {
            payment: AssetInfo,
            token: AssetInfo,
            amount: Uint128,
        },
    }

    const FEES: Item<(Uint128, Uint128)> = Item::new("fees");

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> StdResult<Response> {
        FEES.save(deps.storage, &(msg.token_fee, msg.native_fee))?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            ExecuteMsg::SetFee {
                token_fee,
                native_fee,
            } => {
                FEES.save(deps.storage, &(token_fee, native_fee))?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::Quote { .. } => {
                let (token_fee, native_fee) = FEES.load(deps.storage)?;
                to_json_binary(&OracleFeeResponse {
                    token_fee,
                    native_fee,
                })
            }
        }
    }
}

// ============================================================================
// Mock Swap Executor
// ============================================================================

pub mod mock_executor {
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{
        to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
        Uint128,
    };
    use cw_storage_plus::Item;

    use common::AssetInfo;

    /// What the mock does when `Run` is invoked.
    #[cw_serde]
    pub enum Behavior {
        /// Fail the whole run
        Fail,
        /// Transfer `amount` of `token` from the executor's own balance to
        /// the caller (simulating swap output)
        Pay { token: AssetInfo, amount: Uint128 },
    }

    #[cw_serde]
    pub struct InstantiateMsg {
        pub behavior: Behavior,
    }

    #[cw_serde]
    pub enum ConfigureMsg {
        Run {
            calls: Vec<xswap_router::msg::SwapCall>,
            token_out: AssetInfo,
        },
        SetBehavior {
            behavior: Behavior,
        },
    }

    #[cw_serde]
    pub enum QueryMsg {
        RunCount {},
    }

    const BEHAVIOR: Item<Behavior> = Item::new("behavior");
    const RUN_COUNT: Item<u64> = Item::new("run_count");

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> StdResult<Response> {
        BEHAVIOR.save(deps.storage, &msg.behavior)?;
        RUN_COUNT.save(deps.storage, &0u64)?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: ConfigureMsg,
    ) -> StdResult<Response> {
        match msg {
            ConfigureMsg::Run { .. } => {
                let count = RUN_COUNT.load(deps.storage)? + 1;
                RUN_COUNT.save(deps.storage, &count)?;
                match BEHAVIOR.load(deps.storage)? {
                    Behavior::Fail => Err(StdError::generic_err("swap failed")),
                    Behavior::Pay { token, amount } => Ok(Response::new()
                        .add_message(token.transfer_msg(&info.sender, amount)?)),
                }
            }
            ConfigureMsg::SetBehavior { behavior } => {
                BEHAVIOR.save(deps.storage, &behavior)?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::RunCount {} => to_json_binary(&RUN_COUNT.load(deps.storage)?),
        }
    }
}

// ============================================================================
// Mock Fee Collector
// ============================================================================

pub mod mock_collector {
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{
        to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
    };
    use cw_storage_plus::Item;

    use xswap_router::interfaces::CollectorExecuteMsg;

    #[cw_serde]
    pub struct InstantiateMsg {}

    #[cw_serde]
    pub enum QueryMsg {
        /// Total native value accepted via ReceiveNative
        NativeReceived {},
    }

    const NATIVE_RECEIVED: Item<Uint128> = Item::new("native_received");

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: InstantiateMsg,
    ) -> StdResult<Response> {
        NATIVE_RECEIVED.save(deps.storage, &Uint128::zero())?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: CollectorExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            CollectorExecuteMsg::ReceiveNative {} => {
                let received: Uint128 = info.funds.iter().map(|c| c.amount).sum();
                let total = NATIVE_RECEIVED.load(deps.storage)? + received;
                NATIVE_RECEIVED.save(deps.storage, &total)?;
                Ok(Response::new())
            }
            CollectorExecuteMsg::ReceiveToken { .. } => Ok(Response::new()),
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::NativeReceived {} => to_json_binary(&NATIVE_RECEIVED.load(deps.storage)?),
        }
    }
}

// ============================================================================
// Contract Wrappers
// ============================================================================

pub fn contract_router() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        xswap_router::contract::execute,
        xswap_router::contract::instantiate,
        xswap_router::contract::query,
    )
    .with_reply(xswap_router::contract::reply);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub fn contract_transport() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_transport::execute,
        mock_transport::instantiate,
        mock_transport::query,
    ))
}

pub fn contract_oracle() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_oracle::execute,
        mock_oracle::instantiate,
        mock_oracle::query,
    ))
}

pub fn contract_executor() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_executor::execute,
        mock_executor::instantiate,
        mock_executor::query,
    ))
}

pub fn contract_collector() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_collector::execute,
        mock_collector::instantiate,
        mock_collector::query,
    ))
}

// ============================================================================
// Suite
// ============================================================================

/// Default transport messaging fee used by the suite.
pub const TRANSPORT_FEE: u128 = 9_999_999;

pub struct Suite {
    pub app: App,
    pub owner: Addr,
    pub user: Addr,
    pub fronter: Addr,
    pub router: Addr,
    pub transport: Addr,
    pub oracle: Addr,
    pub collector: Addr,
    pub swap_executor: Addr,
    pub token_out: Addr,
    pub token_in: Addr,
    pub token_final: Addr,
    pub payment_token: Addr,
}

impl Suite {
    /// Full deployment: router + collaborators + three cw20 tokens, with the
    /// default route, sender whitelist, and token whitelist configured.
    pub fn new() -> Self {
        Self::with_fees(Uint128::zero(), Uint128::zero())
    }

    pub fn with_fees(oracle_token_fee: Uint128, oracle_native_fee: Uint128) -> Self {
        let owner = Addr::unchecked("terra1owner");
        let user = Addr::unchecked("terra1user");
        let fronter = Addr::unchecked("terra1fronter");

        let mut app = App::default();
        app.init_modules(|router, _, storage| {
            router
                .bank
                .init_balance(storage, &owner, coins(1_000_000_000_000, NATIVE_DENOM))
                .unwrap();
            router
                .bank
                .init_balance(storage, &user, coins(1_000_000_000_000, NATIVE_DENOM))
                .unwrap();
            router
                .bank
                .init_balance(storage, &fronter, coins(1_000_000_000_000, NATIVE_DENOM))
                .unwrap();
        });

        let transport_code = app.store_code(contract_transport());
        let transport = app
            .instantiate_contract(
                transport_code,
                owner.clone(),
                &mock_transport::InstantiateMsg {
                    fee: Uint128::new(TRANSPORT_FEE),
                },
                &[],
                "mock-transport",
                None,
            )
            .unwrap();

        let oracle_code = app.store_code(contract_oracle());
        let oracle = app
            .instantiate_contract(
                oracle_code,
                owner.clone(),
                &mock_oracle::InstantiateMsg {
                    token_fee: oracle_token_fee,
                    native_fee: oracle_native_fee,
                },
                &[],
                "mock-oracle",
                None,
            )
            .unwrap();

        let collector_code = app.store_code(contract_collector());
        let collector = app
            .instantiate_contract(
                collector_code,
                owner.clone(),
                &mock_collector::InstantiateMsg {},
                &[],
                "mock-collector",
                None,
            )
            .unwrap();

        let executor_code = app.store_code(contract_executor());
        let swap_executor = app
            .instantiate_contract(
                executor_code,
                owner.clone(),
                &mock_executor::InstantiateMsg {
                    behavior: mock_executor::Behavior::Fail,
                },
                &[],
                "mock-executor",
                None,
            )
            .unwrap();

        let router_code = app.store_code(contract_router());
        let router = app
            .instantiate_contract(
                router_code,
                owner.clone(),
                &InstantiateMsg {
                    owner: owner.to_string(),
                    transport: transport.to_string(),
                    fee_oracle: oracle.to_string(),
                    fee_collector: collector.to_string(),
                    swap_executor: swap_executor.to_string(),
                    native_denom: NATIVE_DENOM.to_string(),
                },
                &[],
                "xswap-router",
                Some(owner.to_string()),
            )
            .unwrap();

        let cw20_code = app.store_code(contract_cw20());
        let mut instantiate_token = |name: &str| {
            app.instantiate_contract(
                cw20_code,
                owner.clone(),
                &cw20_base::msg::InstantiateMsg {
                    name: name.to_string(),
                    symbol: "TKN".to_string(),
                    decimals: 6,
                    initial_balances: vec![],
                    mint: Some(MinterResponse {
                        minter: owner.to_string(),
                        cap: None,
                    }),
                    marketing: None,
                },
                &[],
                name,
                None,
            )
            .unwrap()
        };
        let token_out = instantiate_token("token-out");
        let token_in = instantiate_token("token-in");
        let token_final = instantiate_token("token-final");
        let payment_token = instantiate_token("payment-token");

        let mut suite = Suite {
            app,
            owner,
            user,
            fronter,
            router,
            transport,
            oracle,
            collector,
            swap_executor,
            token_out,
            token_in,
            token_final,
            payment_token,
        };

        // Default wiring mirroring the paired deployment.
        suite.set_route(DEST_CHAIN, dest_router());
        suite.whitelist_sender(SOURCE_CHAIN, source_router(), true);
        let token = suite.cw20_info(&suite.token_out.clone());
        suite.whitelist_token(token, true);

        suite
    }

    // ========================================================================
    // Config helpers
    // ========================================================================

    pub fn cw20_info(&self, addr: &Addr) -> AssetInfo {
        AssetInfo::Cw20 {
            contract_addr: addr.to_string(),
        }
    }

    pub fn native_info(&self) -> AssetInfo {
        AssetInfo::Native {
            denom: NATIVE_DENOM.to_string(),
        }
    }

    pub fn set_route(&mut self, chain_selector: u64, router: Binary) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.router.clone(),
                &ExecuteMsg::SetRoute {
                    chain_selector,
                    router,
                },
                &[],
            )
            .unwrap();
    }

    pub fn whitelist_sender(&mut self, chain_selector: u64, sender: Binary, allowed: bool) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.router.clone(),
                &ExecuteMsg::UpdateWhitelistSender {
                    chain_selector,
                    sender,
                    allowed,
                },
                &[],
            )
            .unwrap();
    }

    pub fn whitelist_token(&mut self, token: AssetInfo, allowed: bool) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.router.clone(),
                &ExecuteMsg::UpdateWhitelistToken { token, allowed },
                &[],
            )
            .unwrap();
    }

    pub fn set_executor_behavior(&mut self, behavior: mock_executor::Behavior) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.swap_executor.clone(),
                &mock_executor::ConfigureMsg::SetBehavior { behavior },
                &[],
            )
            .unwrap();
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    pub fn mint(&mut self, token: &Addr, recipient: &Addr, amount: u128) {
        self.app
            .execute_contract(
                self.owner.clone(),
                token.clone(),
                &cw20::Cw20ExecuteMsg::Mint {
                    recipient: recipient.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
    }

    pub fn approve(&mut self, token: &Addr, owner: &Addr, spender: &Addr, amount: u128) {
        self.app
            .execute_contract(
                owner.clone(),
                token.clone(),
                &cw20::Cw20ExecuteMsg::IncreaseAllowance {
                    spender: spender.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn cw20_balance(&self, token: &Addr, address: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn native_balance(&self, address: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(address, NATIVE_DENOM)
            .unwrap()
            .amount
            .u128()
    }

    // ========================================================================
    // Message builders
    // ========================================================================

    /// Destination descriptor with no swap calls.
    pub fn direct_dest(&self, receiver: &Addr, token_out: AssetInfo) -> SwapDestinationData {
        SwapDestinationData {
            receiver: receiver.to_string(),
            token_out,
            estimated_amount_out: Uint128::new(999),
            calls: vec![],
        }
    }

    /// A single opaque executor sub-call.
    pub fn example_call(&self) -> SwapCall {
        SwapCall {
            target: "terra1target".to_string(),
            msg: Binary::default(),
            native_amount: Uint128::zero(),
        }
    }

    /// Origin descriptor for a direct (no-swap) send of `amount` token_out.
    pub fn direct_origin(&self, amount: u128) -> SwapOriginData {
        let token_out = self.cw20_info(&self.token_out);
        SwapOriginData {
            value_for_destination_gas: Uint128::zero(),
            value_for_instant_receive: Uint128::zero(),
            token_in: token_out.clone(),
            amount_in: Uint128::new(amount),
            token_out,
            estimated_amount_out: Uint128::new(amount),
            calls: vec![],
            additional_data: Binary::default(),
        }
    }

    /// Inbound message carrying `amount` of token_out from the whitelisted
    /// source router, with `dest` as payload.
    pub fn inbound_message(&self, dest: &SwapDestinationData, amount: u128) -> InboundMessage {
        InboundMessage {
            message_id: Binary::from([0x11u8; 32]),
            source_chain: SOURCE_CHAIN,
            sender: source_router(),
            payload: cosmwasm_std::to_json_binary(dest).unwrap(),
            token_amounts: vec![TokenAmount {
                token: self.cw20_info(&self.token_out),
                amount: Uint128::new(amount),
            }],
        }
    }

    pub fn executor_run_count(&self) -> u64 {
        self.app
            .wrap()
            .query_wasm_smart(&self.swap_executor, &mock_executor::QueryMsg::RunCount {})
            .unwrap()
    }

    pub fn last_transport_message(&self) -> mock_transport::LastMessageResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.transport, &mock_transport::QueryMsg::LastMessage {})
            .unwrap()
    }

    pub fn collector_native_received(&self) -> u128 {
        let amount: Uint128 = self
            .app
            .wrap()
            .query_wasm_smart(&self.collector, &mock_collector::QueryMsg::NativeReceived {})
            .unwrap();
        amount.u128()
    }
}

/// Find an attribute value across all events of a response.
pub fn find_attr(res: &cw_multi_test::AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
