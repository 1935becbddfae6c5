//!
//! Structural and range checks on a decoded [`ExtendedKey`].
//!

use crate::{CURVE_ORDER, Error, ExtendedKey, PublicKey, Result};
use log::trace;

impl ExtendedKey {
    /// Check the key against the version registry and the curve.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// version, key type, public key encoding, master linkage, scalar range.
    pub fn validate(&self) -> Result<()> {
        let info = self.version.info()?;

        if info.key_type.is_private() != self.is_private() {
            return Err(Error::KeyTypeVersionMismatch { version: self.version, expected: info.key_type });
        }

        if !self.is_private() {
            <secp256k1::PublicKey as PublicKey>::from_bytes(self.key_bytes)?;
        }

        if !self.attrs.has_master_linkage() {
            return Err(Error::NonZeroMasterLinkage);
        }

        if self.is_private() {
            let scalar = &self.key_bytes[1..];
            if scalar.iter().all(|b| *b == 0) || scalar >= &CURVE_ORDER[..] {
                return Err(Error::ScalarOutOfRange);
            }
        }

        trace!("validated {info} key at depth {}", self.attrs.depth);
        Ok(())
    }
}

/// Decode-independent validation of an extended key.
pub fn validate(key: &ExtendedKey) -> Result<()> {
    key.validate()
}
