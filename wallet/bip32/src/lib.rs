//!
//! BIP32 hierarchical deterministic keys: derivation paths, the extended
//! key version registry, Base58Check serialization, child key derivation
//! and validation of serialized keys.
//!

mod attrs;
mod child_number;
mod derivation_path;
mod error;
mod private_key;
mod public_key;
mod result;
pub mod types;
mod validate;
mod version;
mod xkey;
mod xprivate_key;
mod xpublic_key;

pub use attrs::ExtendedKeyAttrs;
pub use child_number::ChildNumber;
pub use derivation_path::DerivationPath;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use result::Result;
pub use types::*;
pub use validate::validate;
pub use version::{AddressFamily, Coin, KeyType, Network, ScriptType, Version, VersionInfo, registry};
pub use xkey::ExtendedKey;
pub use xprivate_key::{ExtendedPrivateKey, XPrv};
pub use xpublic_key::{ExtendedPublicKey, XPub};

pub use secp256k1;
