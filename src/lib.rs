#![allow(dead_code)] // Remove eventually

extern crate alloc;

mod _anyhow;
mod _serde;

pub mod constants;
#[cfg(feature = "core")]
pub mod core;
pub mod macros;
pub mod utils;
#[cfg(feature = "wallet")]
pub mod wallet;

#[cfg(feature = "models")]
pub mod models;

#[cfg(feature = "helpers")]
pub mod asynch;
#[cfg(feature = "helpers")]
pub mod transaction;

/// The bridge relayer node: ledger scanner, XRPL observer, XRPL transaction
/// submitter, Cosmos contract client, amount codec, transaction signer and
/// process supervisor.
#[cfg(feature = "relayer")]
pub mod relayer;
