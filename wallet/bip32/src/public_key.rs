//! Trait for deriving child keys on a given type.

use crate::{KeyFingerprint, PrivateKeyBytes, PublicKeyBytes, Result, types::Error};
use secp256k1::Scalar;

/// Trait for key types which can be derived using BIP32.
pub trait PublicKey: Sized {
    /// Initialize this key from bytes.
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self>;

    /// Serialize this key as bytes.
    fn to_bytes(&self) -> PublicKeyBytes;

    /// Derive a child key from a parent key and a provided tweak value:
    /// `parent + IL·G`.
    ///
    /// Returns `None` if `IL` is not below the curve order or the result
    /// is the point at infinity.
    fn derive_child(&self, other: PrivateKeyBytes) -> Option<Self>;

    /// Compute a 4-byte key fingerprint for this public key.
    ///
    /// Default implementation uses `RIPEMD160(SHA256(public_key))`.
    fn fingerprint(&self) -> KeyFingerprint {
        hdkeys_hashes::hash160(self.to_bytes()).fingerprint()
    }
}

impl PublicKey for secp256k1::PublicKey {
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self> {
        match bytes[0] {
            0x02 | 0x03 => secp256k1::PublicKey::from_slice(&bytes).map_err(|_| Error::InvalidPublicKey),
            prefix => Err(Error::InvalidKeyPrefix(prefix)),
        }
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        self.serialize()
    }

    fn derive_child(&self, other: PrivateKeyBytes) -> Option<Self> {
        let tweak = Scalar::from_be_bytes(other).ok()?;
        self.add_exp_tweak(secp256k1::SECP256K1, &tweak).ok()
    }
}
