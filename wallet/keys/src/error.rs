//!
//! Error types of key generation and derivation.
//!

use hdkeys_addresses::AddressError;
use hdkeys_bip32::Error as BIP32Error;
use thiserror::Error;

/// [`Error`](enum@Error) variants emitted by the key operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("Bip32 -> {0}")]
    BIP32Error(#[from] BIP32Error),

    #[error("Address -> {0}")]
    AddressError(#[from] AddressError),

    #[error("Invalid hex -> {0}")]
    InvalidHex(String),

    #[error("Invalid public key hex: expected a 33 byte compressed key, got {0} bytes")]
    InvalidPublicKeyHex(usize),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }
}

impl From<faster_hex::Error> for Error {
    fn from(err: faster_hex::Error) -> Self {
        Error::InvalidHex(err.to_string())
    }
}
