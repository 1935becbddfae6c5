//! Primitive type aliases shared by the key types.

pub use crate::error::Error;

/// Chain code: extension for both private and public keys which provides an
/// additional 256-bits of entropy.
pub type ChainCode = [u8; KEY_SIZE];

/// Derivation depth.
pub type Depth = u8;

/// BIP32 key fingerprints.
pub type KeyFingerprint = [u8; 4];

/// Bytes which represent a private key.
pub type PrivateKeyBytes = [u8; KEY_SIZE];

/// Bytes which represent a compressed (SEC1 tagged) public key.
pub type PublicKeyBytes = [u8; KEY_SIZE + 1];

/// HMAC with SHA-512
pub type HmacSha512 = hmac::Hmac<sha2::Sha512>;

/// Size of input key material and derived keys.
pub const KEY_SIZE: usize = 32;

/// Order of the secp256k1 group, big-endian.
pub const CURVE_ORDER: [u8; KEY_SIZE] = secp256k1::constants::CURVE_ORDER;
