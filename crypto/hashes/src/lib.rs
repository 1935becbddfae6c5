//!
//! HASH160 (RIPEMD-160 over SHA-256), used for key fingerprints and
//! address payloads.
//!

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

pub const HASH160_SIZE: usize = 20;
/// Base58Check checksum size in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// 20-byte `RIPEMD160(SHA256(data))` digest.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Default, PartialOrd, Ord)]
pub struct Hash160([u8; HASH160_SIZE]);

impl Hash160 {
    pub fn digest(data: impl AsRef<[u8]>) -> Self {
        let digest = Ripemd160::digest(Sha256::digest(data.as_ref()));
        Hash160(digest.into())
    }

    pub const fn from_bytes(bytes: [u8; HASH160_SIZE]) -> Self {
        Hash160(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; HASH160_SIZE] {
        &self.0
    }

    /// First four bytes of the digest, as used for BIP32 parent fingerprints.
    pub fn fingerprint(&self) -> [u8; 4] {
        let mut fingerprint = [0u8; 4];
        fingerprint.copy_from_slice(&self.0[..4]);
        fingerprint
    }
}

impl AsRef<[u8]> for Hash160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Hash160 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut hex = [0u8; HASH160_SIZE * 2];
        f.write_str(faster_hex::hex_encode(&self.0, &mut hex).map_err(|_| std::fmt::Error)?)
    }
}

impl Debug for Hash160 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hash160({self})")
    }
}

impl FromStr for Hash160 {
    type Err = faster_hex::Error;

    fn from_str(hash_str: &str) -> Result<Self, Self::Err> {
        if hash_str.len() != HASH160_SIZE * 2 {
            return Err(faster_hex::Error::InvalidLength(hash_str.len()));
        }
        let mut bytes = [0u8; HASH160_SIZE];
        faster_hex::hex_decode(hash_str.as_bytes(), &mut bytes)?;
        Ok(Hash160(bytes))
    }
}

/// Convenience wrapper for [`Hash160::digest`].
pub fn hash160(data: impl AsRef<[u8]>) -> Hash160 {
    Hash160::digest(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash160_basics() {
        // BIP32 test vector 1 master public key
        let mut public_key = [0u8; 33];
        faster_hex::hex_decode(b"0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2", &mut public_key).unwrap();

        let hash = hash160(public_key);
        assert_eq!(hash.to_string(), "3442193e1bb70916e914552172cd4e2dbc9df811");
        assert_eq!(hash.fingerprint(), [0x34, 0x42, 0x19, 0x3e]);

        let parsed = Hash160::from_str("3442193e1bb70916e914552172cd4e2dbc9df811").unwrap();
        assert_eq!(parsed, hash);
        assert!(Hash160::from_str("3442193e1bb70916e914552172cd4e2dbc9df8").is_err());
    }
}
