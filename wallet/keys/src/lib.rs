//!
//! # HD Wallet Keys
//!
//! Key generation from a seed, derivation from serialized extended keys,
//! decoding and validation, and the address/WIF output of each.
//!
//! Formatting of the [`DerivedOutput`](output::DerivedOutput) records is
//! left to the caller; they implement `serde::Serialize`.
//!

pub mod error;
mod imports;
pub mod inspect;
pub mod keygen;
pub mod options;
pub mod output;
pub mod prelude;
pub mod result;
pub mod secret;
