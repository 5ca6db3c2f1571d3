//! The bridge relayer node.
//!
//! Wires together the ledger scanner, XRPL observer, XRPL transaction
//! submitter, Cosmos contract client, amount codec, transaction signer and
//! process supervisor described in SPEC_FULL.md. `src/bin/relayer.rs` is the
//! CLI entry point; this module is the library surface it drives.

pub mod amount_codec;
pub mod config;
pub mod contract;
pub mod error;
pub mod keyring;
pub mod metrics;
pub mod observer;
pub mod rpc;
pub mod scanner;
pub mod signer;
pub mod submitter;
pub mod supervisor;
pub mod types;

pub use error::RelayerError;
