//!
//! This file contains most common imports that
//! are used internally in this crate.
//!

pub use crate::error::Error;
pub use crate::options::Options;
pub use crate::output::DerivedOutput;
pub use crate::result::Result;
pub use crate::secret::Secret;

pub use hdkeys_addresses::{Address, Addresses, Wif};
pub use hdkeys_bip32::{AddressFamily, Coin, DerivationPath, ExtendedKey, KeyType, Network, ScriptType};
pub use log::debug;
pub use serde::{Deserialize, Serialize};
pub use std::fmt::{self, Display, Formatter};
pub use std::str::FromStr;
