//! Deterministic ECDSA signing on the XRPL BIP-44 path (`m/44'/144'/0'/0/0`),
//! SPEC_FULL.md §4.6.
//!
//! The teacher library only implements XRPL's native "family seed" key
//! derivation (`crate::core::keypairs::generate_seed`/`derive_keypair`), which
//! is not BIP-44. This module derives a secp256k1 keypair on the standard
//! HD path with the `bip32` crate, then hands the raw key bytes to the
//! teacher's existing secp256k1 signing path
//! (`crate::core::keypairs::sign`/`CryptoImplementation`) so hashing,
//! signature encoding and classic-address derivation stay unified with the
//! rest of the library.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use bip32::{DerivationPath, XPrv};
use core::str::FromStr;

use crate::core::addresscodec::decode_classic_address;
use crate::core::binarycodec;
use crate::core::keypairs::derive_classic_address;
use crate::models::transactions::{Signer as TxSigner, Transaction};
use crate::relayer::error::SignerError;

/// BIP-44 coin type registered for XRP (SLIP-44 entry 144).
pub const XRPL_BIP44_PATH: &str = "m/44'/144'/0'/0/0";

/// A secp256k1 keypair derived on the XRPL HD path, in the same hex
/// conventions the teacher's `core::keypairs::Secp256k1` engine expects
/// (compressed public key, zero-padded 33-byte private key).
pub struct DerivedKey {
    pub xrpl_address: String,
    pub public_key_hex: String,
    private_key_hex: String,
}

impl core::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("xrpl_address", &self.xrpl_address)
            .field("public_key_hex", &self.public_key_hex)
            .field("private_key_hex", &"-REDACTED-")
            .finish()
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.private_key_hex.zeroize();
    }
}

/// Derives the relayer's XRPL signing key from a BIP-39 seed at
/// `m/44'/144'/0'/0/0`.
pub fn derive_key(seed_bytes: &[u8]) -> Result<DerivedKey, SignerError> {
    let path = DerivationPath::from_str(XRPL_BIP44_PATH)
        .map_err(|e| SignerError::Derivation(e.to_string()))?;
    let child = XPrv::derive_from_path(seed_bytes, &path)
        .map_err(|e| SignerError::Derivation(e.to_string()))?;

    let secret_bytes = child.private_key().to_bytes();
    let secret_key = secp256k1::SecretKey::from_slice(&secret_bytes)
        .map_err(|e| SignerError::Derivation(e.to_string()))?;
    let secp = secp256k1::Secp256k1::signing_only();
    let public_key = secp256k1::PublicKey::from_secret_key(&secp, &secret_key);

    let private_key_hex = format!("{:0>66}", hex::encode_upper(secret_key.secret_bytes()));
    let public_key_hex = hex::encode_upper(public_key.serialize());
    let xrpl_address: String = derive_classic_address(&public_key_hex)?;

    Ok(DerivedKey {
        xrpl_address,
        public_key_hex,
        private_key_hex,
    })
}

impl DerivedKey {
    /// Signs an arbitrary XRPL signing blob (the hex output of
    /// `core::binarycodec::encode_for_signing`/`encode_for_multisigning`)
    /// and returns the uppercase-hex DER signature.
    pub fn sign_blob(&self, signing_blob_hex: &str) -> Result<String, SignerError> {
        let message =
            hex::decode(signing_blob_hex).map_err(|e| SignerError::Derivation(e.to_string()))?;
        Ok(crate::core::keypairs::sign(&message, &self.private_key_hex)?)
    }

    /// Returns the raw 32-byte secp256k1 secret scalar, stripped of the
    /// leading `0x00` type-prefix byte `core::keypairs` stores XRPL secp256k1
    /// keys with. Lets a caller hand this key's material to another
    /// secp256k1-based signing stack (e.g. `cosmrs::crypto::secp256k1::
    /// SigningKey::from_slice`) without re-deriving a second keypair.
    pub fn secp256k1_secret_bytes(&self) -> Result<[u8; 32], SignerError> {
        let bytes = hex::decode(&self.private_key_hex)
            .map_err(|e| SignerError::Derivation(e.to_string()))?;
        if bytes.len() < 32 {
            return Err(SignerError::Derivation(
                "derived private key is shorter than 32 bytes".to_string(),
            ));
        }
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes[bytes.len() - 32..]);
        Ok(secret)
    }

    /// Signs a transaction in place for multi-signing: encodes the
    /// transaction for multi-signing with this key's account as signer,
    /// signs the resulting blob, and appends a `Signer` entry.
    pub fn sign_for_multisign<'a, T, F>(&self, transaction: &mut T) -> Result<(), SignerError>
    where
        T: Transaction<'a, F> + serde::Serialize,
    {
        let blob = binarycodec::encode_for_multisigning(
            transaction,
            alloc::borrow::Cow::from(self.xrpl_address.as_str()),
        )?;
        let signature = self.sign_blob(&blob)?;

        let signer = TxSigner {
            account: self.xrpl_address.clone(),
            txn_signature: signature,
            signing_pub_key: self.public_key_hex.clone(),
        };
        let common = transaction.get_mut_common_fields();
        common.signers.get_or_insert_with(Vec::new).push(signer);
        Ok(())
    }
}

/// Reorders pre-collected `Signer` entries by decoded classic-address
/// ascending, exactly as XRPL's canonical multi-signature serialization
/// requires. Thin wrapper over the teacher's own
/// `crate::transaction::multisign`, which already implements this ordering.
pub fn assemble_multisigned<'a, T, F>(
    transaction: &mut T,
    tx_list: &'a alloc::vec::Vec<T>,
) -> Result<(), SignerError>
where
    F: strum::IntoEnumIterator + serde::Serialize + core::fmt::Debug + PartialEq + 'a,
    T: Transaction<'a, F>,
{
    crate::transaction::multisign(transaction, tx_list)
        .map_err(|e| SignerError::Derivation(e.to_string()))
}

/// Sorts raw (account, signature) pairs the same way, for callers assembling
/// a transaction directly from contract-stored signatures rather than from a
/// list of fully-signed transaction copies.
pub fn sort_signers_by_account(mut signers: Vec<TxSigner>) -> Vec<TxSigner> {
    signers.sort_by_key(|s| decode_classic_address(&s.account).unwrap_or_default());
    signers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_a_stable_xrpl_address_from_a_fixed_seed() {
        let seed = [7u8; 32];
        let key_a = derive_key(&seed).unwrap();
        let key_b = derive_key(&seed).unwrap();
        assert_eq!(key_a.xrpl_address, key_b.xrpl_address);
        assert!(key_a.xrpl_address.starts_with('r'));
    }

    #[test]
    fn secp256k1_secret_bytes_round_trips_through_hex() {
        let key = derive_key(&[5u8; 32]).unwrap();
        let secret = key.secp256k1_secret_bytes().unwrap();
        assert_eq!(
            hex::encode_upper(secret),
            key.private_key_hex[key.private_key_hex.len() - 64..]
        );
    }

    #[test]
    fn different_seeds_derive_different_addresses() {
        let key_a = derive_key(&[1u8; 32]).unwrap();
        let key_b = derive_key(&[2u8; 32]).unwrap();
        assert_ne!(key_a.xrpl_address, key_b.xrpl_address);
    }

    #[test]
    fn sort_signers_is_ascending_by_decoded_account_id() {
        let key_a = derive_key(&[3u8; 32]).unwrap();
        let key_b = derive_key(&[4u8; 32]).unwrap();
        let mut decoded: Vec<_> = [&key_a, &key_b]
            .iter()
            .map(|k| decode_classic_address(&k.xrpl_address).unwrap())
            .collect();
        decoded.sort();

        let unsorted = alloc::vec![
            TxSigner {
                account: key_b.xrpl_address.clone(),
                txn_signature: "AA".into(),
                signing_pub_key: key_b.public_key_hex.clone(),
            },
            TxSigner {
                account: key_a.xrpl_address.clone(),
                txn_signature: "BB".into(),
                signing_pub_key: key_a.public_key_hex.clone(),
            },
        ];
        let sorted = sort_signers_by_account(unsorted);
        let sorted_decoded: Vec<_> = sorted
            .iter()
            .map(|s| decode_classic_address(&s.account).unwrap())
            .collect();
        assert_eq!(sorted_decoded, decoded);
    }
}
