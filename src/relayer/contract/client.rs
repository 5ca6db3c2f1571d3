//! gRPC transport for the contract client: query via
//! `wasm.QuerySmartContractState`, execute via simulate → sign → broadcast.
//!
//! Grounded on the simulate-then-adjust-gas pattern in the pack's
//! `KeplerQuant-cosmos` Cosmos client (`CosmosClient::sign_tx`), adapted to a
//! single fixed CosmWasm contract address instead of a generic tx body
//! builder.

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use serde::{de::DeserializeOwned, Serialize};

use cosmrs::cosmwasm::MsgExecuteContract;
use cosmrs::crypto::secp256k1::SigningKey;
use cosmrs::proto::cosmos::auth::v1beta1::{
    query_client::QueryClient as AuthQueryClient, BaseAccount, QueryAccountRequest,
};
use cosmrs::proto::cosmos::tx::v1beta1::{
    service_client::ServiceClient as TxServiceClient, BroadcastMode, BroadcastTxRequest,
    SimulateRequest,
};
use cosmrs::proto::cosmwasm::wasm::v1::{
    query_client::QueryClient as WasmQueryClient, QuerySmartContractStateRequest,
};
use cosmrs::tx::{self, Fee, SignDoc, SignerInfo};
use cosmrs::{AccountId, Coin};
use tonic::transport::Channel;

use crate::relayer::error::ContractError;

/// Multiplier applied to the gas reported by `simulate`, matching the
/// pack's `gas_adjustment_percent` idiom (a percentage over 100, not a
/// float factor, to avoid floating point in a retry-sensitive path).
#[derive(Debug, Clone, Copy)]
pub struct GasAdjustment {
    pub percent_over_estimate: u64,
    pub max_retries: u32,
    pub retry_delay: core::time::Duration,
}

impl Default for GasAdjustment {
    fn default() -> Self {
        Self {
            percent_over_estimate: 30,
            max_retries: 3,
            retry_delay: core::time::Duration::from_millis(500),
        }
    }
}

pub struct ContractClient {
    channel: Channel,
    contract_address: AccountId,
    chain_id: String,
    gas_price: Coin,
    gas_adjustment: GasAdjustment,
    signing_key: Arc<SigningKey>,
    signer_account_id: AccountId,
}

impl ContractClient {
    pub fn new(
        channel: Channel,
        contract_address: AccountId,
        chain_id: String,
        gas_price: Coin,
        gas_adjustment: GasAdjustment,
        signing_key: SigningKey,
        signer_account_id: AccountId,
    ) -> Self {
        Self {
            channel,
            contract_address,
            chain_id,
            gas_price,
            gas_adjustment,
            signing_key: Arc::new(signing_key),
            signer_account_id,
        }
    }

    /// Runs a `QuerySmartContractState` query and decodes the JSON response.
    pub async fn query<Q: Serialize, R: DeserializeOwned>(
        &self,
        msg: &Q,
    ) -> Result<R, ContractError> {
        let mut client = WasmQueryClient::new(self.channel.clone());
        let query_data =
            serde_json::to_vec(msg).map_err(|e| ContractError::Malformed(e.to_string()))?;
        let response = client
            .smart_contract_state(QuerySmartContractStateRequest {
                address: self.contract_address.to_string(),
                query_data,
            })
            .await
            .map_err(|status| ContractError::TransientRpc(status.to_string()))?
            .into_inner();
        serde_json::from_slice(&response.data).map_err(|e| ContractError::Malformed(e.to_string()))
    }

    /// Executes a contract call, retrying with progressively larger gas once
    /// on out-of-gas, per SPEC_FULL.md §4.4/§4.7 ("out-of-gas retry").
    pub async fn execute<M: Serialize>(&self, msg: &M) -> Result<String, ContractError> {
        let mut attempt = 0;
        let mut gas_override: Option<u64> = None;
        loop {
            attempt += 1;
            match self.execute_once(msg, gas_override).await {
                Ok(tx_hash) => return Ok(tx_hash),
                Err(ContractError::OutOfGas { .. }) if attempt < self.gas_adjustment.max_retries => {
                    let bumped = gas_override
                        .unwrap_or(200_000)
                        .saturating_mul(100 + self.gas_adjustment.percent_over_estimate)
                        / 100;
                    gas_override = Some(bumped);
                    tokio::time::sleep(self.gas_adjustment.retry_delay).await;
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn execute_once<M: Serialize>(
        &self,
        msg: &M,
        gas_override: Option<u64>,
    ) -> Result<String, ContractError> {
        let execute_msg = serde_json::to_vec(msg)
            .map_err(|e| ContractError::Malformed(e.to_string()))?;
        let msg_execute = MsgExecuteContract {
            sender: self.signer_account_id.clone(),
            contract: self.contract_address.clone(),
            msg: execute_msg,
            funds: alloc::vec::Vec::new(),
        };

        let account = self.fetch_account().await?;
        let body = tx::Body::new(
            alloc::vec![msg_execute
                .to_any()
                .map_err(|e| ContractError::Malformed(e.to_string()))?],
            "",
            0u32,
        );

        let gas_limit = match gas_override {
            Some(gas) => gas,
            None => self.simulate_gas(&body, &account).await?,
        };
        let fee_amount = self.gas_price.amount * gas_limit as u128;
        let fee = Fee::from_amount_and_gas(
            Coin {
                denom: self.gas_price.denom.clone(),
                amount: fee_amount,
            },
            gas_limit,
        );

        let signer_info = SignerInfo::single_direct(
            Some(self.signing_key.public_key()),
            account.sequence,
        );
        let auth_info = signer_info.auth_info(fee);
        let sign_doc = SignDoc::new(
            &body,
            &auth_info,
            &self
                .chain_id
                .parse()
                .map_err(|_| ContractError::Malformed("invalid chain id".into()))?,
            account.account_number,
        )
        .map_err(|e| ContractError::Malformed(e.to_string()))?;
        let signed = sign_doc
            .sign(&self.signing_key)
            .map_err(|e| ContractError::Malformed(e.to_string()))?;

        let mut tx_client = TxServiceClient::new(self.channel.clone());
        let response = tx_client
            .broadcast_tx(BroadcastTxRequest {
                tx_bytes: signed
                    .to_bytes()
                    .map_err(|e| ContractError::Malformed(e.to_string()))?,
                mode: BroadcastMode::Sync as i32,
            })
            .await
            .map_err(|status| ContractError::TransientRpc(status.to_string()))?
            .into_inner();

        let tx_response = response.tx_response.ok_or(ContractError::NilResponse)?;
        if tx_response.code == 0 {
            Ok(tx_response.txhash)
        } else if is_out_of_gas(&tx_response.raw_log) {
            Err(ContractError::OutOfGas {
                attempts: 0,
                message: tx_response.raw_log,
            })
        } else if tx_response.raw_log.contains("evidence already provided") {
            Err(ContractError::DuplicateEvidence)
        } else if tx_response.raw_log.contains("already executed") {
            Err(ContractError::AlreadyProcessed)
        } else if tx_response.raw_log.contains("bridge halted")
            || tx_response.raw_log.contains("is halted")
        {
            Err(ContractError::ContractHalted)
        } else {
            Err(ContractError::Malformed(tx_response.raw_log))
        }
    }

    async fn simulate_gas(&self, body: &tx::Body, account: &BaseAccount) -> Result<u64, ContractError> {
        let signer_info =
            SignerInfo::single_direct(Some(self.signing_key.public_key()), account.sequence);
        let auth_info = signer_info.auth_info(Fee::from_amount_and_gas(
            self.gas_price.clone(),
            0u64,
        ));
        let tx_raw = tx::SignDoc::new(
            body,
            &auth_info,
            &self
                .chain_id
                .parse()
                .map_err(|_| ContractError::Malformed("invalid chain id".into()))?,
            account.account_number,
        )
        .map_err(|e| ContractError::Malformed(e.to_string()))?
        .sign(&self.signing_key)
        .map_err(|e| ContractError::Malformed(e.to_string()))?;

        let mut tx_client = TxServiceClient::new(self.channel.clone());
        let response = tx_client
            .simulate(SimulateRequest {
                tx_bytes: tx_raw
                    .to_bytes()
                    .map_err(|e| ContractError::Malformed(e.to_string()))?,
                tx: None,
            })
            .await
            .map_err(|status| ContractError::TransientRpc(status.to_string()))?
            .into_inner();

        let gas_used = response
            .gas_info
            .ok_or(ContractError::NilResponse)?
            .gas_used;
        Ok(gas_used
            .saturating_mul(100 + self.gas_adjustment.percent_over_estimate)
            .saturating_div(100))
    }

    async fn fetch_account(&self) -> Result<BaseAccount, ContractError> {
        let mut client = AuthQueryClient::new(self.channel.clone());
        let response = client
            .account(QueryAccountRequest {
                address: self.signer_account_id.to_string(),
            })
            .await
            .map_err(|status| ContractError::TransientRpc(status.to_string()))?
            .into_inner();
        let any = response.account.ok_or(ContractError::NilResponse)?;
        BaseAccount::try_from(any).map_err(|e| ContractError::Malformed(e.to_string()))
    }
}

fn is_out_of_gas(raw_log: &str) -> bool {
    raw_log.contains("out of gas")
}
