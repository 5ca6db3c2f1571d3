//! Cosmos contract interface (SPEC_FULL.md §4.4): the wire shapes exchanged
//! with the CosmWasm bridge contract, plus the gRPC client that carries them.
//!
//! The contract itself is out of scope; this module only needs to agree
//! with its `ExecuteMsg`/`QueryMsg` JSON shape, grounded on the
//! `coreumbridge-xrpl` contract's own `msg.rs`/`evidence.rs` definitions.

pub mod client;

use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::BigUint;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::relayer::error::ContractError;
use crate::relayer::types::{CoreumToken, Evidence, PendingOperation, RelayerSet, XrplToken};

pub use client::ContractClient;

/// Seam over `ContractClient`'s `query`/`execute` so callers (the
/// `Submitter`, the token registry refresher) can be driven against a mock
/// in tests instead of a live gRPC channel, the same way `XrplNodeClient`
/// decouples the scanner/submitter from a live JSON-RPC node.
#[allow(async_fn_in_trait)]
pub trait ContractApi: Send + Sync {
    async fn query<Q: Serialize + Send + Sync, R: DeserializeOwned>(
        &self,
        msg: &Q,
    ) -> Result<R, ContractError>;
    async fn execute<M: Serialize + Send + Sync>(&self, msg: &M) -> Result<String, ContractError>;
}

impl ContractApi for ContractClient {
    async fn query<Q: Serialize + Send + Sync, R: DeserializeOwned>(
        &self,
        msg: &Q,
    ) -> Result<R, ContractError> {
        ContractClient::query(self, msg).await
    }

    async fn execute<M: Serialize + Send + Sync>(&self, msg: &M) -> Result<String, ContractError> {
        ContractClient::execute(self, msg).await
    }
}

/// Messages the relayer sends to the contract's `execute` entry point.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SaveEvidence {
        evidence: Evidence,
    },
    SaveSignature {
        operation_id: u32,
        operation_version: u32,
        signature: String,
    },
    RecoverTickets {
        account_sequence: u32,
        number_of_tickets: u32,
    },
}

/// Messages the relayer sends to the contract's `query` entry point.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    XrplTokens {
        offset: Option<u32>,
        limit: Option<u32>,
    },
    CoreumTokens {
        offset: Option<u32>,
        limit: Option<u32>,
    },
    PendingOperations {},
    AvailableTickets {},
    PendingRefunds {
        address: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigResponse {
    pub relayers: RelayerSet,
    pub bridge_state: BridgeState,
    pub xrpl_base_fee: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeState {
    Active,
    Halted,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XrplTokensResponse {
    pub tokens: Vec<XrplToken>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoreumTokensResponse {
    pub tokens: Vec<CoreumToken>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PendingOperationsResponse {
    pub operations: Vec<PendingOperation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailableTicketsResponse {
    pub tickets: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PendingRefundsResponse {
    pub refunds: Vec<PendingRefund>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PendingRefund {
    pub id: String,
    pub coreum_denom: String,
    pub amount: BigUint,
}
