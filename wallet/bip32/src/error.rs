//! Error type.

use crate::{ChildNumber, KeyType, Version};
use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid derivation path `{path}` at segment {segment}")]
    InvalidPath { path: String, segment: usize },

    #[error("derivation index {index} at segment {segment:?} does not fit in 31 bits")]
    PathIndexOverflow { segment: Option<usize>, index: u64 },

    #[error("invalid seed ({length} bytes): {reason}")]
    InvalidSeed { length: usize, reason: &'static str },

    #[error("child key {0} is invalid for this parent, try the next index")]
    InvalidChildKey(ChildNumber),

    #[error("hardened child {0} can not be derived from a public key")]
    HardenedFromPublic(ChildNumber),

    #[error("HMAC: invalid key length")]
    Hmac,

    #[error("maximum derivation depth exceeded")]
    Depth,

    #[error("invalid base58 character `{character}` at position {index}")]
    InvalidBase58Alphabet { character: char, index: usize },

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("base58 checksum mismatch")]
    ChecksumMismatch,

    #[error("unknown key version: {0}")]
    UnknownVersion(String),

    #[error("key material does not match version {version}, the version is for {expected} keys")]
    KeyTypeVersionMismatch { version: Version, expected: KeyType },

    #[error("invalid key prefix 0x{0:02x}")]
    InvalidKeyPrefix(u8),

    #[error("key depth is zero, however, parent fingerprint or child number is non-zero")]
    NonZeroMasterLinkage,

    #[error("private key is not in the range 1..n-1")]
    ScalarOutOfRange,

    #[error("public key is not a valid curve point")]
    InvalidPublicKey,

    #[error("invalid or unsupported network `{0}`, allowed networks are mainnet and testnet")]
    InvalidNetwork(String),

    #[error("invalid or unsupported address type `{0}`")]
    InvalidAddressType(String),
}

impl From<bs58::decode::Error> for Error {
    fn from(err: bs58::decode::Error) -> Error {
        use bs58::decode::Error as DecodeError;
        match err {
            DecodeError::InvalidCharacter { character, index } => Error::InvalidBase58Alphabet { character, index },
            DecodeError::NonAsciiCharacter { index } => Error::InvalidBase58Alphabet { character: '?', index },
            DecodeError::InvalidChecksum { .. } => Error::ChecksumMismatch,
            DecodeError::NoChecksum => Error::InvalidLength { expected: hdkeys_hashes::CHECKSUM_SIZE, actual: 0 },
            _ => Error::InvalidLength { expected: 0, actual: 0 },
        }
    }
}
