//! Conversion between XRPL amounts (drops, or 15-significant-digit decimal
//! issued-currency values) and Coreum's arbitrary-precision integer amounts
//! scaled by a per-token decimal count.
//!
//! Built on the teacher's `Amount`/`XRPAmount`/`IssuedCurrencyAmount` types
//! (`crate::models::amount`); this module only adds the cross-chain scaling
//! and precision rules, it does not re-parse XRPL amounts from scratch.

use alloc::string::{String, ToString};
use core::str::FromStr;
use cosmrs::AccountId;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use rust_decimal::Decimal;

use crate::relayer::error::CodecError;

/// Number of decimal places XRP drops are scaled by (1 XRP = 10^6 drops).
pub const XRP_DROPS_DECIMALS: u32 = 6;

/// Conventional scaling used for XRP once it is minted on Coreum.
pub const XRP_ON_COREUM_DECIMALS: u32 = 18;

/// `10^exp` as a `Decimal`, without pulling in `rust_decimal`'s `maths`
/// feature just for `powi`. `exp` never exceeds the low twenties in practice
/// (Coreum decimals, XRPL sending_precision), well inside `u64`'s range.
fn decimal_pow10(exp: u32) -> Decimal {
    Decimal::from(10u64.pow(exp))
}

/// Errors if `value` carries more fractional digits than `sending_precision`
/// allows (the "digits beyond sending_precision must be zero" rule).
pub fn validate_sending_precision(value: Decimal, sending_precision: i32) -> Result<(), CodecError> {
    let rounded = value.round_dp_with_strategy(
        sending_precision.max(0) as u32,
        rust_decimal::RoundingStrategy::ToZero,
    );
    if sending_precision >= 0 {
        if rounded != value {
            return Err(CodecError::PrecisionLoss { sending_precision });
        }
    } else {
        // Negative precision means whole multiples of 10^-sending_precision
        // must be preserved, e.g. sending_precision = -2 rejects any amount
        // that is not a multiple of 100.
        let unit = decimal_pow10((-sending_precision) as u32);
        if (value % unit) != Decimal::ZERO {
            return Err(CodecError::PrecisionLoss { sending_precision });
        }
    }
    Ok(())
}

/// Converts a human-readable XRPL-side decimal amount into a Coreum
/// arbitrary-precision integer, scaled by `coreum_decimals`.
///
/// Truncates toward zero after scaling (should be a no-op once
/// `validate_sending_precision` has already accepted the value).
pub fn xrpl_to_coreum(
    value: Decimal,
    sending_precision: i32,
    coreum_decimals: u32,
) -> Result<BigUint, CodecError> {
    if value.is_sign_negative() {
        return Err(CodecError::InvalidXrplAmount(value.to_string()));
    }
    validate_sending_precision(value, sending_precision)?;

    let scaled = value * decimal_pow10(coreum_decimals);
    let truncated = scaled.trunc();
    let digits = truncated.to_string();
    BigUint::from_str(&digits).map_err(|_| CodecError::InvalidXrplAmount(digits))
}

/// Converts a Coreum integer amount back into an XRPL-side decimal amount.
/// Rejects (rather than rounds) any precision beyond `sending_precision`.
pub fn coreum_to_xrpl(
    value: &BigUint,
    sending_precision: i32,
    coreum_decimals: u32,
) -> Result<Decimal, CodecError> {
    let digits = value.to_string();
    let as_decimal = Decimal::from_str(&digits)
        .map_err(|_| CodecError::InvalidXrplAmount(digits.clone()))?;
    let scale = decimal_pow10(coreum_decimals);
    let unscaled = as_decimal / scale;
    validate_sending_precision(unscaled, sending_precision)?;
    Ok(unscaled)
}

/// Deducts the registry-declared bridging fee, saturating at zero rather
/// than going negative.
pub fn apply_bridging_fee(amount: &BigUint, fee: &BigUint) -> BigUint {
    if amount > fee {
        amount - fee
    } else {
        BigUint::zero()
    }
}

/// Ensures `current_holding + amount` does not exceed `max_holding_amount`.
pub fn check_max_holding(
    amount: &BigUint,
    current_holding: &BigUint,
    max_holding_amount: &BigUint,
) -> Result<(), CodecError> {
    if current_holding + amount > *max_holding_amount {
        Err(CodecError::MaxHoldingExceeded)
    } else {
        Ok(())
    }
}

/// Decodes a Coreum bech32 address from an XRPL Payment's first memo entry.
/// Returns an error (which callers turn into a silent drop, per
/// SPEC_FULL.md §4.2) for any of: missing memo, non-hex memo data, or an
/// address that fails bech32 validation or carries the wrong prefix.
pub fn decode_coreum_recipient_memo(memo_data_hex: Option<&str>) -> Result<String, CodecError> {
    let hex_str = memo_data_hex.ok_or(CodecError::MalformedMemo)?;
    let bytes = hex::decode(hex_str).map_err(|_| CodecError::MalformedMemo)?;
    let address = String::from_utf8(bytes).map_err(|_| CodecError::MalformedMemo)?;
    let account_id = AccountId::from_str(&address).map_err(|_| CodecError::MalformedMemo)?;
    if account_id.prefix() != "core" {
        return Err(CodecError::MalformedMemo);
    }
    Ok(address)
}

/// Truncates a `BigUint` amount to an in-memory `u128` for callers (e.g. a
/// metrics histogram bucket) that do not need full arbitrary precision.
/// Saturates at `u128::MAX` instead of panicking on overflow.
pub fn saturating_to_u128(amount: &BigUint) -> u128 {
    amount.to_u128().unwrap_or(u128::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xrp_precision_fifteen_digit_roundtrip() {
        let value = Decimal::from_str("1.000000000000001").unwrap();
        let coreum = xrpl_to_coreum(value, 15, XRP_ON_COREUM_DECIMALS).unwrap();
        assert_eq!(coreum.to_string(), "1000000000000001000");

        let back = coreum_to_xrpl(&coreum, 15, XRP_ON_COREUM_DECIMALS).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn ten_thousand_xrp_scales_to_eighteen_decimals() {
        let value = Decimal::from_str("10000").unwrap();
        let coreum = xrpl_to_coreum(value, 6, XRP_ON_COREUM_DECIMALS).unwrap();
        assert_eq!(coreum.to_string(), "10000000000000000000000");
    }

    #[test]
    fn hex_currency_nine_point_nine_at_eighteen_decimals() {
        let value = Decimal::from_str("9.9").unwrap();
        let coreum = xrpl_to_coreum(value, 15, 18).unwrap();
        assert_eq!(coreum.to_string(), "9900000000000000000");
    }

    #[test]
    fn precision_beyond_sending_precision_is_rejected() {
        let value = Decimal::from_str("1.0000000000000011").unwrap();
        let err = xrpl_to_coreum(value, 15, XRP_ON_COREUM_DECIMALS).unwrap_err();
        assert!(matches!(err, CodecError::PrecisionLoss { sending_precision: 15 }));
    }

    #[test]
    fn bridging_fee_saturates_at_zero() {
        let amount = BigUint::from(5u32);
        let fee = BigUint::from(10u32);
        assert_eq!(apply_bridging_fee(&amount, &fee), BigUint::zero());
    }

    #[test]
    fn max_holding_rejects_overflow() {
        let current = BigUint::from(90u32);
        let incoming = BigUint::from(20u32);
        let max = BigUint::from(100u32);
        assert!(check_max_holding(&incoming, &current, &max).is_err());
    }

    #[test]
    fn malformed_memo_is_rejected_not_panicking() {
        assert!(decode_coreum_recipient_memo(None).is_err());
        assert!(decode_coreum_recipient_memo(Some("not-hex!!")).is_err());
    }

    #[test]
    fn memo_with_core_prefix_but_invalid_bech32_checksum_is_rejected() {
        let hex_str = hex::encode("core1notarealbech32address00000000");
        assert!(decode_coreum_recipient_memo(Some(&hex_str)).is_err());
    }

    #[test]
    fn memo_with_wrong_hrp_prefix_is_rejected() {
        // Valid bech32 (cosmos hub HRP), but not a Coreum address.
        let hex_str = hex::encode("cosmos1qqnde7kn89q6zvqv6wutlch7n8f204uhclpzd2");
        assert!(decode_coreum_recipient_memo(Some(&hex_str)).is_err());
    }
}
