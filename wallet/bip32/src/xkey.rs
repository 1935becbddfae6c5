use crate::{
    ChildNumber, Coin, DerivationPath, Error, ExtendedKeyAttrs, KeyType, Network, PrivateKey, Result, ScriptType, Version, VersionInfo,
    XPrv, XPub, types::*,
};
use core::{
    fmt::{self, Debug, Display},
    str::FromStr,
};
use hdkeys_hashes::CHECKSUM_SIZE;
use zeroize::{Zeroize, Zeroizing};

/// Serialized extended key (e.g. `xprv`, `zpub`).
///
/// Holds the decoded 78-byte payload of a Base58Check string without
/// interpreting the key material; [`XPrv`]/[`XPub`] are obtained from it
/// with `try_from`.
#[derive(Clone, Eq, PartialEq)]
pub struct ExtendedKey {
    /// [Version] of this key.
    pub version: Version,

    /// Extended key attributes.
    pub attrs: ExtendedKeyAttrs,

    /// Key material (may be public or private).
    ///
    /// Includes an extra byte for a public key's SEC1 tag.
    pub key_bytes: [u8; KEY_SIZE + 1],
}

impl ExtendedKey {
    /// Size of an extended key when deserialized into bytes from Base58.
    pub const BYTE_SIZE: usize = 78;

    /// Size of the Base58Check payload including the checksum.
    pub const CHECKED_BYTE_SIZE: usize = Self::BYTE_SIZE + CHECKSUM_SIZE;

    /// Private keys carry a leading `0x00` before the scalar.
    pub fn is_private(&self) -> bool {
        self.key_bytes[0] == 0
    }

    /// Key type implied by the key material.
    pub fn key_type(&self) -> KeyType {
        if self.is_private() { KeyType::Private } else { KeyType::Public }
    }

    /// Registry entry of this key's version.
    pub fn version_info(&self) -> Result<VersionInfo> {
        self.version.info()
    }

    /// Serialize to the 78-byte payload, without checksum.
    pub fn to_bytes(&self) -> Zeroizing<[u8; Self::BYTE_SIZE]> {
        let mut bytes = Zeroizing::new([0u8; Self::BYTE_SIZE]);
        bytes[..4].copy_from_slice(&self.version.to_bytes());
        bytes[4] = self.attrs.depth;
        bytes[5..9].copy_from_slice(&self.attrs.parent_fingerprint);
        bytes[9..13].copy_from_slice(&self.attrs.child_number.to_bytes());
        bytes[13..45].copy_from_slice(&self.attrs.chain_code);
        bytes[45..78].copy_from_slice(&self.key_bytes);
        bytes
    }

    /// Encode as Base58Check.
    ///
    /// The returned string is wiped on drop, as it may hold a private key.
    pub fn to_base58(&self) -> Zeroizing<String> {
        Zeroizing::new(bs58::encode(&self.to_bytes()[..]).with_check().into_string())
    }

    /// Master private key for `seed`, tagged with the private version of
    /// `network` and `script_type`.
    pub fn master_from_seed<S>(seed: S, network: Network, script_type: ScriptType) -> Result<Self>
    where
        S: AsRef<[u8]>,
    {
        let version = Version::lookup(Coin::Btc, network, script_type, KeyType::Private)?;
        Ok(XPrv::new(seed)?.to_extended_key(version))
    }

    /// Derive a single child, private or public depending on this key.
    ///
    /// The version is carried over to the child.
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        if self.is_private() {
            Ok(XPrv::try_from(self)?.derive_child(child_number)?.to_extended_key(self.version))
        } else {
            Ok(XPub::try_from(self)?.derive_child(child_number)?.to_extended_key(self.version))
        }
    }

    /// Derive along `path`; an empty path returns a copy of this key.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        if path.is_empty() {
            return Ok(self.clone());
        }

        if self.is_private() {
            Ok(XPrv::try_from(self)?.derive_path(path)?.to_extended_key(self.version))
        } else {
            Ok(XPub::try_from(self)?.derive_path(path)?.to_extended_key(self.version))
        }
    }

    /// Public counterpart of this key, with the version re-tagged to the
    /// public version of the same network and script type.
    pub fn public_key_of(&self) -> Result<Self> {
        if !self.is_private() {
            return Ok(self.clone());
        }

        let version = self.version.info()?.with_key_type(KeyType::Public).version()?;
        Ok(XPrv::try_from(self)?.public_key().to_extended_key(version))
    }

    /// Compressed public key, computed from the scalar for private keys.
    pub fn public_key(&self) -> Result<secp256k1::PublicKey> {
        if self.is_private() {
            Ok(PrivateKey::public_key(XPrv::try_from(self)?.private_key()))
        } else {
            Ok(XPub::try_from(self)?.public_key)
        }
    }

    /// Private scalar, `None` for public keys.
    pub fn secret_key(&self) -> Result<Option<secp256k1::SecretKey>> {
        if self.is_private() { Ok(Some(*XPrv::try_from(self)?.private_key())) } else { Ok(None) }
    }
}

impl Display for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ExtendedKey");
        debug.field("version", &self.version).field("attrs", &self.attrs);
        if self.is_private() {
            debug.field("key_bytes", &"...");
        } else {
            debug.field("key_bytes", &self.key_bytes);
        }
        debug.finish()
    }
}

impl FromStr for ExtendedKey {
    type Err = Error;

    fn from_str(base58: &str) -> Result<Self> {
        let payload = bs58::decode(base58).with_check(None).into_vec().map_err(|err| match err {
            // too short to carry a checksum: report the decoded size
            bs58::decode::Error::NoChecksum => Error::InvalidLength {
                expected: Self::CHECKED_BYTE_SIZE,
                actual: bs58::decode(base58).into_vec().map_or(0, |bytes| bytes.len()),
            },
            err => Error::from(err),
        })?;
        let payload = Zeroizing::new(payload);

        if payload.len() != Self::BYTE_SIZE {
            return Err(Error::InvalidLength { expected: Self::CHECKED_BYTE_SIZE, actual: payload.len() + CHECKSUM_SIZE });
        }

        let mut version = [0u8; 4];
        let mut parent_fingerprint = KeyFingerprint::default();
        let mut child_number = [0u8; ChildNumber::BYTE_SIZE];
        let mut chain_code = ChainCode::default();
        let mut key_bytes = [0u8; KEY_SIZE + 1];

        version.copy_from_slice(&payload[..4]);
        parent_fingerprint.copy_from_slice(&payload[5..9]);
        child_number.copy_from_slice(&payload[9..13]);
        chain_code.copy_from_slice(&payload[13..45]);
        key_bytes.copy_from_slice(&payload[45..78]);

        let attrs =
            ExtendedKeyAttrs { depth: payload[4], parent_fingerprint, child_number: ChildNumber::from_bytes(child_number), chain_code };

        Ok(ExtendedKey { version: Version::from_be_bytes(version), attrs, key_bytes })
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.key_bytes.zeroize();
    }
}
