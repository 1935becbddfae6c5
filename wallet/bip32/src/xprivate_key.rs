use hmac::Mac;
use log::trace;
use std::fmt::{self, Debug};
use std::str::FromStr;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::{
    ChildNumber, DerivationPath, ExtendedKey, ExtendedKeyAttrs, ExtendedPublicKey, PrivateKey, PublicKey, Version, result::Result,
    types::*,
};

/// HMAC key of the master key derivation, `"Bitcoin seed"`.
const MASTER_DOMAIN_SEPARATOR: [u8; 12] = *b"Bitcoin seed";

/// Accepted seed sizes in bytes.
const SEED_LENGTH: std::ops::RangeInclusive<usize> = 16..=64;

/// Extended secp256k1 private key.
pub type XPrv = ExtendedPrivateKey<secp256k1::SecretKey>;

/// Extended private keys derived using BIP32.
///
/// Generic around a [`PrivateKey`] type.
#[derive(Clone)]
pub struct ExtendedPrivateKey<K: PrivateKey> {
    /// Derived private key
    private_key: K,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,
}

impl<K> ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    /// Create the root extended key for the given seed value.
    pub fn new<S>(seed: S) -> Result<Self>
    where
        S: AsRef<[u8]>,
    {
        let seed = seed.as_ref();
        if !SEED_LENGTH.contains(&seed.len()) {
            return Err(Error::InvalidSeed { length: seed.len(), reason: "seed must be between 16 and 64 bytes" });
        }

        let mut hmac = HmacSha512::new_from_slice(&MASTER_DOMAIN_SEPARATOR).map_err(|_| Error::Hmac)?;
        hmac.update(seed);

        let (mut secret_key, chain_code) = split_hmac_output(hmac);
        let private_key = PrivateKey::from_bytes(&secret_key)
            .map_err(|_| Error::InvalidSeed { length: seed.len(), reason: "master key is not a valid scalar" });
        secret_key.zeroize();
        let private_key = private_key?;

        trace!("derived master key from {} byte seed", seed.len());

        Ok(ExtendedPrivateKey { private_key, attrs: ExtendedKeyAttrs::master(chain_code) })
    }

    /// Derive a child key for a particular [`ChildNumber`].
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;

        let mut hmac = HmacSha512::new_from_slice(&self.attrs.chain_code).map_err(|_| Error::Hmac)?;

        if child_number.is_hardened() {
            let mut secret = self.private_key.to_bytes();
            hmac.update(&[0]);
            hmac.update(&secret);
            secret.zeroize();
        } else {
            hmac.update(&self.private_key.public_key().to_bytes());
        }

        hmac.update(&child_number.to_bytes());

        let (mut child_key, chain_code) = split_hmac_output(hmac);

        // BIP32 wallets skip to the next index when `IL >= n` or the child
        // is zero; that choice is left to the caller.
        let private_key = self.private_key.derive_child(child_key).ok_or(Error::InvalidChildKey(child_number));
        child_key.zeroize();

        let attrs =
            ExtendedKeyAttrs { parent_fingerprint: self.private_key.public_key().fingerprint(), child_number, chain_code, depth };

        trace!("derived private child {child_number} at depth {depth}");

        Ok(ExtendedPrivateKey { private_key: private_key?, attrs })
    }

    /// Derive the key at `path`, relative to this key.
    pub fn derive_path(self, path: &DerivationPath) -> Result<Self> {
        path.iter().try_fold(self, |key, child_num| key.derive_child(child_num))
    }

    /// Borrow the derived private key value.
    pub fn private_key(&self) -> &K {
        &self.private_key
    }

    /// Serialize the derived public key as bytes.
    pub fn public_key(&self) -> ExtendedPublicKey<K::PublicKey> {
        self.into()
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// Serialize the raw private key as a byte array.
    pub fn to_bytes(&self) -> PrivateKeyBytes {
        self.private_key.to_bytes()
    }

    /// Serialize this key as an [`ExtendedKey`].
    pub fn to_extended_key(&self, version: Version) -> ExtendedKey {
        // Add leading `0` byte
        let mut key_bytes = [0u8; KEY_SIZE + 1];
        let mut secret = self.to_bytes();
        key_bytes[1..].copy_from_slice(&secret);
        secret.zeroize();

        ExtendedKey { version, attrs: self.attrs.clone(), key_bytes }
    }
}

impl<K> ConstantTimeEq for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut key_a = self.to_bytes();
        let mut key_b = other.to_bytes();

        let result = key_a.ct_eq(&key_b)
            & self.attrs.depth.ct_eq(&other.attrs.depth)
            & self.attrs.parent_fingerprint.ct_eq(&other.attrs.parent_fingerprint)
            & self.attrs.child_number.0.ct_eq(&other.attrs.child_number.0)
            & self.attrs.chain_code.ct_eq(&other.attrs.chain_code);

        key_a.zeroize();
        key_b.zeroize();

        result
    }
}

impl<K> Debug for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPrivateKey").field("private_key", &"...").field("attrs", &self.attrs).finish()
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally
impl<K> Eq for ExtendedPrivateKey<K> where K: PrivateKey {}

/// NOTE: uses [`ConstantTimeEq`] internally
impl<K> PartialEq for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<K> FromStr for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    type Err = Error;

    fn from_str(xprv: &str) -> Result<Self> {
        let key = ExtendedKey::from_str(xprv)?;
        Self::try_from(&key)
    }
}

impl<K> TryFrom<&ExtendedKey> for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    type Error = Error;

    fn try_from(extended_key: &ExtendedKey) -> Result<ExtendedPrivateKey<K>> {
        if !extended_key.is_private() {
            return Err(Error::InvalidKeyPrefix(extended_key.key_bytes[0]));
        }

        let mut secret = [0u8; KEY_SIZE];
        secret.copy_from_slice(&extended_key.key_bytes[1..]);
        let private_key = PrivateKey::from_bytes(&secret);
        secret.zeroize();

        Ok(ExtendedPrivateKey { private_key: private_key?, attrs: extended_key.attrs.clone() })
    }
}

/// Finalize an HMAC-SHA512 and split the output into `IL` and `IR`.
pub(crate) fn split_hmac_output(hmac: HmacSha512) -> (PrivateKeyBytes, ChainCode) {
    let output = hmac.finalize().into_bytes();
    let mut left = [0u8; KEY_SIZE];
    let mut right = [0u8; KEY_SIZE];
    left.copy_from_slice(&output[..KEY_SIZE]);
    right.copy_from_slice(&output[KEY_SIZE..]);
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::XPrv;
    use crate::{ChildNumber, DerivationPath, Error};
    use faster_hex::hex_decode;

    fn seed(hex: &str) -> Vec<u8> {
        let mut seed = vec![0u8; hex.len() / 2];
        hex_decode(hex.as_bytes(), &mut seed).unwrap();
        seed
    }

    #[test]
    fn test_seed_length() {
        assert_eq!(XPrv::new([0u8; 15]), Err(Error::InvalidSeed { length: 15, reason: "seed must be between 16 and 64 bytes" }));
        assert!(matches!(XPrv::new([0u8; 65]), Err(Error::InvalidSeed { length: 65, .. })));
        assert!(XPrv::new([0u8; 16]).is_ok());
        assert!(XPrv::new([0u8; 64]).is_ok());
    }

    #[test]
    fn test_derive_path_is_deterministic() {
        let path: DerivationPath = "m/44'/0'/0'/0/7".parse().unwrap();
        let root = XPrv::new(seed("000102030405060708090a0b0c0d0e0f")).unwrap();
        let a = root.clone().derive_path(&path).unwrap();
        let b = root.clone().derive_path(&path).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.attrs().depth, 5);
        assert_eq!(a.attrs().child_number, ChildNumber(7));
        assert_ne!(a, root);
    }

    #[test]
    fn test_empty_path_returns_root() {
        let root = XPrv::new(seed("000102030405060708090a0b0c0d0e0f")).unwrap();
        assert_eq!(root.clone().derive_path(&DerivationPath::default()).unwrap(), root);
    }

    #[test]
    fn test_debug_is_redacted() {
        let root = XPrv::new(seed("000102030405060708090a0b0c0d0e0f")).unwrap();
        let debug = format!("{root:?}");
        assert!(debug.contains("private_key: \"...\""));
        assert!(!debug.contains("e8f32e72"));
    }
}
