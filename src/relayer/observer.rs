//! XRPL observer (SPEC_FULL.md §4.2): turns scanned Payment transactions
//! into `Evidence::XrplToCoreumTransfer` submissions, applying the
//! partial-payment/`delivered_amount` precedence rule and dropping (with a
//! metric, never a panic) anything that fails to decode.

use alloc::string::{String, ToString};
use num_bigint::BigUint;
use serde_json::Value;

use crate::models::transactions::payment::PaymentFlag;
use crate::relayer::amount_codec::{self, xrpl_to_coreum};
use crate::relayer::contract::{ContractClient, ExecuteMsg};
use crate::relayer::error::{CodecError, ObserverError};
use crate::relayer::metrics::RelayerMetrics;
use crate::relayer::rpc::ScannedTransaction;
use crate::relayer::types::{Evidence, TokenState, XrplToken};

/// A decoded, not-yet-submitted transfer observed on XRPL.
#[derive(Debug, Clone)]
pub struct DecodedTransfer {
    pub tx_hash: String,
    pub issuer: String,
    pub currency: String,
    pub amount: BigUint,
    pub recipient: String,
}

/// Looks up the registered token for an (issuer, currency) pair. The
/// observer is agnostic to where the registry is cached; callers (the
/// supervisor) refresh it from `ContractClient::query` on an interval.
/// Returns an owned clone rather than a reference so implementations can
/// use a plain `Mutex`-guarded cache without exposing its lock guard.
pub trait TokenRegistry {
    fn lookup(&self, issuer: Option<&str>, currency: &str) -> Option<XrplToken>;
}

pub struct XrplObserver<'a, R: TokenRegistry> {
    bridge_account: String,
    registry: &'a R,
    metrics: &'a RelayerMetrics,
}

impl<'a, R: TokenRegistry> XrplObserver<'a, R> {
    pub fn new(bridge_account: String, registry: &'a R, metrics: &'a RelayerMetrics) -> Self {
        Self {
            bridge_account,
            registry,
            metrics,
        }
    }

    /// Decodes a single scanned transaction into a transfer, or `None` if it
    /// is not a Payment credited to the bridge account (silently skipped,
    /// not an error).
    pub fn decode(&self, txn: &ScannedTransaction) -> Result<Option<DecodedTransfer>, ObserverError> {
        let tx_json = &txn.tx_json;
        if tx_json.get("TransactionType").and_then(Value::as_str) != Some("Payment") {
            return Ok(None);
        }
        let destination = tx_json.get("Destination").and_then(Value::as_str);
        if destination != Some(self.bridge_account.as_str()) {
            return Ok(None);
        }

        let engine_result = txn
            .meta
            .get("TransactionResult")
            .and_then(Value::as_str)
            .unwrap_or("");
        if engine_result != "tesSUCCESS" {
            return Ok(None);
        }

        let delivered = match self.delivered_amount(txn) {
            Some(amount) => amount,
            None => {
                self.metrics.evidence_dropped("partial_payment_without_delivered_amount");
                return Ok(None);
            }
        };
        let (issuer, currency, value_str) = match parse_amount_field(delivered) {
            Some(parts) => parts,
            None => {
                self.metrics.evidence_dropped("unparseable_amount");
                return Ok(None);
            }
        };

        let token = match self.registry.lookup(issuer.as_deref(), &currency) {
            Some(token) if token.state == TokenState::Enabled => token,
            Some(_) => {
                self.metrics.evidence_dropped("token_disabled");
                return Ok(None);
            }
            None => {
                self.metrics.evidence_dropped("unregistered_token");
                return Err(ObserverError::Codec(CodecError::UnregisteredToken {
                    issuer: issuer.clone().unwrap_or_default(),
                    currency: currency.clone(),
                }));
            }
        };

        let value = match rust_decimal::Decimal::from_str_exact(&value_str) {
            Ok(v) => v,
            Err(_) => {
                self.metrics.evidence_dropped("malformed_decimal");
                return Ok(None);
            }
        };

        let coreum_decimals = coreum_decimals_for(&token);
        let scaled = match xrpl_to_coreum(value, token.sending_precision, coreum_decimals) {
            Ok(v) => v,
            Err(_) => {
                self.metrics.evidence_dropped("precision_loss");
                return Ok(None);
            }
        };
        let after_fee = amount_codec::apply_bridging_fee(&scaled, &token.bridging_fee);

        // SPEC_FULL §4.5 step 3: clamp against max_holding_amount post-fee on
        // inbound. The relayer has no local view of the contract's running
        // holding total, so the only check it can make here is that this
        // single transfer alone does not already exceed the cap.
        if amount_codec::check_max_holding(&after_fee, &BigUint::from(0u32), &token.max_holding_amount)
            .is_err()
        {
            self.metrics.evidence_dropped("max_holding_exceeded");
            return Ok(None);
        }

        let memo_hex = tx_json
            .get("Memos")
            .and_then(Value::as_array)
            .and_then(|memos| memos.first())
            .and_then(|m| m.get("Memo"))
            .and_then(|m| m.get("MemoData"))
            .and_then(Value::as_str);
        let recipient = match amount_codec::decode_coreum_recipient_memo(memo_hex) {
            Ok(addr) => addr,
            Err(_) => {
                self.metrics.evidence_dropped("malformed_memo");
                return Ok(None);
            }
        };

        Ok(Some(DecodedTransfer {
            tx_hash: txn.hash.clone(),
            issuer: issuer.unwrap_or_default(),
            currency,
            amount: after_fee,
            recipient,
        }))
    }

    /// Applies XRPL's partial-payment rule: if `tfPartialPayment` is set,
    /// the sender's nominal `Amount` is only an upper bound, and the actual
    /// credited amount must come from `meta.delivered_amount` (missing
    /// `delivered_amount` on a flagged payment is treated as undecodable,
    /// not as "the full nominal amount arrived"). If the flag is clear, the
    /// nominal `Amount` is what was delivered.
    fn delivered_amount<'t>(&self, txn: &'t ScannedTransaction) -> Option<&'t Value> {
        static NULL: Value = Value::Null;
        let flags = txn
            .tx_json
            .get("Flags")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        let is_partial_payment = flags & (PaymentFlag::TfPartialPayment as u64) != 0;
        if is_partial_payment {
            txn.meta.get("delivered_amount")
        } else {
            Some(
                txn.meta
                    .get("delivered_amount")
                    .or_else(|| txn.tx_json.get("Amount"))
                    .unwrap_or(&NULL),
            )
        }
    }

    pub async fn submit_evidence(
        &self,
        contract: &ContractClient,
        transfer: DecodedTransfer,
    ) -> Result<(), ObserverError> {
        let evidence = Evidence::XrplToCoreumTransfer {
            tx_hash: transfer.tx_hash,
            issuer: transfer.issuer,
            currency: transfer.currency,
            amount: transfer.amount,
            recipient: transfer.recipient,
        };
        contract
            .execute(&ExecuteMsg::SaveEvidence { evidence })
            .await
            .map_err(ObserverError::Contract)?;
        self.metrics.evidence_emitted();
        Ok(())
    }
}

fn coreum_decimals_for(token: &XrplToken) -> u32 {
    if token.issuer.is_none() {
        amount_codec::XRP_ON_COREUM_DECIMALS
    } else {
        18
    }
}

/// Extracts `(issuer, currency, value)` from an XRPL `Amount` JSON value,
/// which is either a drops string (native XRP) or an issued-currency object.
fn parse_amount_field(amount: &Value) -> Option<(Option<String>, String, String)> {
    match amount {
        Value::String(drops) => {
            let value = rust_decimal::Decimal::from_str_exact(drops).ok()?
                / rust_decimal::Decimal::from(1_000_000u32);
            Some((None, "XRP".to_string(), value.to_string()))
        }
        Value::Object(map) => {
            let currency = map.get("currency")?.as_str()?.to_string();
            let issuer = map.get("issuer")?.as_str()?.to_string();
            let value = map.get("value")?.as_str()?.to_string();
            Some((Some(issuer), currency, value))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use serde_json::json;

    struct FixedRegistry {
        tokens: BTreeMap<String, XrplToken>,
    }

    impl TokenRegistry for FixedRegistry {
        fn lookup(&self, issuer: Option<&str>, currency: &str) -> Option<XrplToken> {
            let key = match issuer {
                Some(issuer) => alloc::format!("{issuer}:{currency}"),
                None => currency.to_string(),
            };
            self.tokens.get(&key).cloned()
        }
    }

    fn xrp_token() -> XrplToken {
        XrplToken {
            issuer: None,
            currency: "XRP".to_string(),
            coreum_denom: "uxrp".to_string(),
            state: TokenState::Enabled,
            sending_precision: 6,
            max_holding_amount: BigUint::from(u64::MAX),
            bridging_fee: BigUint::from(0u32),
        }
    }

    fn metrics() -> RelayerMetrics {
        RelayerMetrics::new()
    }

    #[test]
    fn decodes_a_native_xrp_payment_with_delivered_amount_precedence() {
        let mut tokens = BTreeMap::new();
        tokens.insert("XRP".to_string(), xrp_token());
        let registry = FixedRegistry { tokens };
        let metrics = metrics();
        let observer = XrplObserver::new("rBridge".to_string(), &registry, &metrics);

        let memo_hex = hex::encode("core1recipientaddress0000000000000000000");
        let txn = ScannedTransaction {
            hash: "ABCD".to_string(),
            ledger_index: 100,
            validated: true,
            tx_json: json!({
                "TransactionType": "Payment",
                "Destination": "rBridge",
                "Amount": "5000000",
                "Memos": [{"Memo": {"MemoData": memo_hex}}],
            }),
            meta: json!({
                "TransactionResult": "tesSUCCESS",
                "delivered_amount": "4000000",
            }),
        };

        let decoded = observer.decode(&txn).unwrap().unwrap();
        assert_eq!(decoded.amount, BigUint::from(4_000_000_000_000_000_000u128 / 1));
    }

    #[test]
    fn non_payment_transactions_are_skipped() {
        let registry = FixedRegistry {
            tokens: BTreeMap::new(),
        };
        let metrics = metrics();
        let observer = XrplObserver::new("rBridge".to_string(), &registry, &metrics);
        let txn = ScannedTransaction {
            hash: "ABCD".to_string(),
            ledger_index: 100,
            validated: true,
            tx_json: json!({ "TransactionType": "TrustSet" }),
            meta: json!({ "TransactionResult": "tesSUCCESS" }),
        };
        assert!(observer.decode(&txn).unwrap().is_none());
    }

    #[test]
    fn partial_payment_without_delivered_amount_is_dropped() {
        let mut tokens = BTreeMap::new();
        tokens.insert("XRP".to_string(), xrp_token());
        let registry = FixedRegistry { tokens };
        let metrics = metrics();
        let observer = XrplObserver::new("rBridge".to_string(), &registry, &metrics);

        let memo_hex = hex::encode("core1recipientaddress0000000000000000000");
        let txn = ScannedTransaction {
            hash: "ABCD".to_string(),
            ledger_index: 100,
            validated: true,
            tx_json: json!({
                "TransactionType": "Payment",
                "Destination": "rBridge",
                "Amount": "5000000",
                "Flags": PaymentFlag::TfPartialPayment as u32,
                "Memos": [{"Memo": {"MemoData": memo_hex}}],
            }),
            meta: json!({ "TransactionResult": "tesSUCCESS" }),
        };

        assert!(observer.decode(&txn).unwrap().is_none());
    }

    #[test]
    fn partial_payment_uses_delivered_amount_not_nominal_amount() {
        let mut tokens = BTreeMap::new();
        tokens.insert("XRP".to_string(), xrp_token());
        let registry = FixedRegistry { tokens };
        let metrics = metrics();
        let observer = XrplObserver::new("rBridge".to_string(), &registry, &metrics);

        let memo_hex = hex::encode("core1recipientaddress0000000000000000000");
        let txn = ScannedTransaction {
            hash: "ABCD".to_string(),
            ledger_index: 100,
            validated: true,
            tx_json: json!({
                "TransactionType": "Payment",
                "Destination": "rBridge",
                "Amount": "5000000",
                "Flags": PaymentFlag::TfPartialPayment as u32,
                "Memos": [{"Memo": {"MemoData": memo_hex}}],
            }),
            meta: json!({
                "TransactionResult": "tesSUCCESS",
                "delivered_amount": "1000000",
            }),
        };

        let decoded = observer.decode(&txn).unwrap().unwrap();
        assert_eq!(decoded.amount, BigUint::from(1_000_000_000_000_000_000u128));
    }

    #[test]
    fn transfer_exceeding_max_holding_amount_is_dropped() {
        let mut tokens = BTreeMap::new();
        tokens.insert(
            "XRP".to_string(),
            XrplToken {
                max_holding_amount: BigUint::from(500_000_000_000_000_000u128),
                ..xrp_token()
            },
        );
        let registry = FixedRegistry { tokens };
        let metrics = metrics();
        let observer = XrplObserver::new("rBridge".to_string(), &registry, &metrics);

        let memo_hex = hex::encode("core1recipientaddress0000000000000000000");
        let txn = ScannedTransaction {
            hash: "ABCD".to_string(),
            ledger_index: 100,
            validated: true,
            tx_json: json!({
                "TransactionType": "Payment",
                "Destination": "rBridge",
                "Amount": "5000000",
                "Memos": [{"Memo": {"MemoData": memo_hex}}],
            }),
            meta: json!({
                "TransactionResult": "tesSUCCESS",
                "delivered_amount": "5000000",
            }),
        };

        assert!(observer.decode(&txn).unwrap().is_none());
    }
}
