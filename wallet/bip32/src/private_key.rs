//! Trait for deriving child keys on a given type.

use crate::{KeyFingerprint, PrivateKeyBytes, PublicKey, Result, types::Error};
use secp256k1::Scalar;

/// Trait for key types which can be derived using BIP32.
pub trait PrivateKey: Sized {
    /// Public key type which corresponds to this private key.
    type PublicKey: PublicKey;

    /// Initialize this key from bytes.
    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self>;

    /// Serialize this key as bytes.
    fn to_bytes(&self) -> PrivateKeyBytes;

    /// Derive a child key from a parent key and the left half of the
    /// HMAC output (`IL`): `(IL + parent) mod n`.
    ///
    /// Returns `None` if `IL` is not below the curve order or the sum is zero.
    fn derive_child(&self, other: PrivateKeyBytes) -> Option<Self>;

    /// Get the [`Self::PublicKey`] that corresponds to this private key.
    fn public_key(&self) -> Self::PublicKey;

    /// Compute a 4-byte key fingerprint for this private key.
    ///
    /// Default implementation uses `RIPEMD160(SHA256(public_key))`.
    fn fingerprint(&self) -> KeyFingerprint {
        self.public_key().fingerprint()
    }
}

impl PrivateKey for secp256k1::SecretKey {
    type PublicKey = secp256k1::PublicKey;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        secp256k1::SecretKey::from_slice(bytes).map_err(|_| Error::ScalarOutOfRange)
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.secret_bytes()
    }

    fn derive_child(&self, other: PrivateKeyBytes) -> Option<Self> {
        let tweak = Scalar::from_be_bytes(other).ok()?;
        self.add_tweak(&tweak).ok()
    }

    fn public_key(&self) -> Self::PublicKey {
        secp256k1::PublicKey::from_secret_key_global(self)
    }
}
