//!
//! Wallet Import Format for compressed-key private keys:
//! `version ∥ scalar ∥ 0x01`, Base58Check-encoded.
//!

use crate::{
    base58::{base58check_decode, base58check_encode},
    error::{AddressError, Result},
    network::NetworkParams,
};
use hdkeys_bip32::{KEY_SIZE, Network};
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;
use zeroize::{Zeroize, Zeroizing};

const COMPRESSED_FLAG: u8 = 0x01;

/// A private key together with the network it is meant for.
#[derive(Clone, PartialEq, Eq)]
pub struct Wif {
    network: Network,
    secret_key: secp256k1::SecretKey,
}

impl Wif {
    pub fn new(network: Network, secret_key: secp256k1::SecretKey) -> Self {
        Self { network, secret_key }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn secret_key(&self) -> &secp256k1::SecretKey {
        &self.secret_key
    }

    /// Compressed public key of this private key.
    pub fn public_key(&self) -> secp256k1::PublicKey {
        secp256k1::PublicKey::from_secret_key_global(&self.secret_key)
    }

    pub fn encode(&self) -> Zeroizing<String> {
        let mut payload = [0u8; KEY_SIZE + 1];
        payload[..KEY_SIZE].copy_from_slice(&self.secret_key.secret_bytes());
        payload[KEY_SIZE] = COMPRESSED_FLAG;
        let encoded = base58check_encode(NetworkParams::of(self.network).wif, &payload);
        payload.zeroize();
        Zeroizing::new(encoded)
    }
}

impl Display for Wif {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl Debug for Wif {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wif").field("network", &self.network).field("secret_key", &"...").finish()
    }
}

impl FromStr for Wif {
    type Err = AddressError;

    fn from_str(wif: &str) -> Result<Self> {
        let (version, payload) = base58check_decode(wif)?;
        let params = NetworkParams::from_wif_version(version).ok_or(AddressError::InvalidVersion(version))?;

        if payload.len() != KEY_SIZE + 1 {
            return Err(AddressError::InvalidWifLength(payload.len() + 1));
        }
        if payload[KEY_SIZE] != COMPRESSED_FLAG {
            return Err(AddressError::InvalidWifCompression(payload[KEY_SIZE]));
        }

        let secret_key =
            secp256k1::SecretKey::from_slice(&payload[..KEY_SIZE]).map_err(|_| AddressError::Bip32(hdkeys_bip32::Error::ScalarOutOfRange))?;

        Ok(Self::new(params.network, secret_key))
    }
}
