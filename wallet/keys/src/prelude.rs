//!
//! Re-exports of the most commonly used types and functions in this crate.
//!

pub use crate::error::Error;
pub use crate::inspect::{DecodedKey, decode, validate};
pub use crate::keygen::{derive, from_public_key_hex, from_wif, generate};
pub use crate::options::{Options, PathSelection};
pub use crate::output::DerivedOutput;
pub use crate::result::Result;
pub use crate::secret::Secret;
pub use hdkeys_addresses::{Address, Addresses};
pub use hdkeys_bip32::{DerivationPath, Network, ScriptType};
