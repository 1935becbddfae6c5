//!
//! Bitcoin addresses (P2PKH, P2SH-wrapped P2WPKH and native bech32
//! P2WPKH) of compressed secp256k1 public keys, and WIF private keys.
//!

use hdkeys_bip32::{AddressFamily, Network};
use hdkeys_hashes::{HASH160_SIZE, Hash160};
use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod base58;
mod error;
mod network;
mod wif;

pub use base58::{base58check_decode, base58check_encode};
pub use error::{AddressError, Result};
pub use network::{MAINNET_PARAMS, NetworkParams, TESTNET_PARAMS};
pub use wif::Wif;

/// Witness program of a P2WPKH output: `OP_0 PUSH20 <hash160>`.
fn p2wpkh_script(hash: &Hash160) -> [u8; HASH160_SIZE + 2] {
    let mut script = [0u8; HASH160_SIZE + 2];
    script[0] = 0x00;
    script[1] = HASH160_SIZE as u8;
    script[2..].copy_from_slice(hash.as_bytes());
    script
}

///
/// `Address` kind (`PubKeyHash`, `ScriptHash`, `WitnessPubKeyHash`)
///
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Version {
    /// Base58Check P2PKH
    PubKeyHash,
    /// Base58Check P2SH
    ScriptHash,
    /// bech32 witness version 0 key hash
    WitnessPubKeyHash,
}

/// Bitcoin `Address` that serializes to and from its string form, e.g. `bc1qw508...`.
///
/// The payload is the 20-byte hash carried by all three address kinds.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Address {
    pub network: Network,
    pub version: Version,
    pub payload: Hash160,
}

impl Address {
    pub fn new(network: Network, version: Version, payload: Hash160) -> Self {
        Self { network, version, payload }
    }

    /// Legacy pay-to-public-key-hash address.
    pub fn p2pkh(network: Network, public_key: &secp256k1::PublicKey) -> Self {
        Self::new(network, Version::PubKeyHash, Hash160::digest(public_key.serialize()))
    }

    /// P2WPKH program wrapped in pay-to-script-hash.
    pub fn p2sh_p2wpkh(network: Network, public_key: &secp256k1::PublicKey) -> Self {
        let script = p2wpkh_script(&Hash160::digest(public_key.serialize()));
        Self::new(network, Version::ScriptHash, Hash160::digest(script))
    }

    /// Native segwit v0 key hash address.
    pub fn p2wpkh(network: Network, public_key: &secp256k1::PublicKey) -> Self {
        Self::new(network, Version::WitnessPubKeyHash, Hash160::digest(public_key.serialize()))
    }

    /// Address of the kind used by `family`.
    pub fn from_public_key(network: Network, family: AddressFamily, public_key: &secp256k1::PublicKey) -> Self {
        match family {
            AddressFamily::Legacy => Self::p2pkh(network, public_key),
            AddressFamily::NestedSegwit => Self::p2sh_p2wpkh(network, public_key),
            AddressFamily::NativeSegwit => Self::p2wpkh(network, public_key),
        }
    }

    pub fn params(&self) -> &'static NetworkParams {
        NetworkParams::of(self.network)
    }

    /// Convert an address to a string.
    pub fn encode(&self) -> Result<String> {
        let params = self.params();
        match self.version {
            Version::PubKeyHash => Ok(base58check_encode(params.p2pkh, self.payload.as_ref())),
            Version::ScriptHash => Ok(base58check_encode(params.p2sh, self.payload.as_ref())),
            Version::WitnessPubKeyHash => bech32::segwit::encode(params.hrp, bech32::segwit::VERSION_0, self.payload.as_ref())
                .map_err(|err| AddressError::Bech32(err.to_string())),
        }
    }

    fn decode_segwit(address: &str) -> Result<Self> {
        let (hrp, version, program) = bech32::segwit::decode(address).map_err(|err| AddressError::Bech32(err.to_string()))?;
        let params = NetworkParams::from_hrp(&hrp).ok_or_else(|| AddressError::InvalidPrefix(hrp.to_string()))?;

        if version != bech32::segwit::VERSION_0 || program.len() != HASH160_SIZE {
            return Err(AddressError::UnsupportedWitnessProgram { version: version.to_u8(), length: program.len() });
        }

        Ok(Self::new(params.network, Version::WitnessPubKeyHash, Hash160::from_bytes(to_hash(&program)?)))
    }

    fn decode_base58(address: &str) -> Result<Self> {
        let (version, payload) = base58check_decode(address)?;
        let payload = Hash160::from_bytes(to_hash(&payload)?);

        NetworkParams::iter()
            .find_map(|params| {
                if version == params.p2pkh {
                    Some(Self::new(params.network, Version::PubKeyHash, payload))
                } else if version == params.p2sh {
                    Some(Self::new(params.network, Version::ScriptHash, payload))
                } else {
                    None
                }
            })
            .ok_or(AddressError::InvalidVersion(version))
    }
}

fn to_hash(payload: &[u8]) -> Result<[u8; HASH160_SIZE]> {
    payload.try_into().map_err(|_| AddressError::InvalidPayloadLength(payload.len()))
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode().map_err(|_| std::fmt::Error)?)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_ascii_lowercase();
        if NetworkParams::iter().any(|params| lower.starts_with(&format!("{}1", params.hrp))) {
            Self::decode_segwit(value)
        } else {
            Self::decode_base58(value)
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(address: &str) -> Result<Self> {
        Self::try_from(address)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode().map_err(serde::ser::Error::custom)?)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let address = String::deserialize(deserializer)?;
        Address::try_from(address.as_str()).map_err(serde::de::Error::custom)
    }
}

/// The three address forms of one public key.
///
/// All forms are computed at once so that a caller can surface the one
/// matching the requested address type, or all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addresses {
    pub p2pkh: Address,
    pub p2sh_p2wpkh: Address,
    pub p2wpkh: Address,
}

impl Addresses {
    pub fn new(network: Network, public_key: &secp256k1::PublicKey) -> Self {
        let hash = Hash160::digest(public_key.serialize());
        trace!("addresses of key hash {hash} on {network}");
        Self {
            p2pkh: Address::new(network, Version::PubKeyHash, hash),
            p2sh_p2wpkh: Address::new(network, Version::ScriptHash, Hash160::digest(p2wpkh_script(&hash))),
            p2wpkh: Address::new(network, Version::WitnessPubKeyHash, hash),
        }
    }

    pub fn select(&self, family: AddressFamily) -> &Address {
        match family {
            AddressFamily::Legacy => &self.p2pkh,
            AddressFamily::NestedSegwit => &self.p2sh_p2wpkh,
            AddressFamily::NativeSegwit => &self.p2wpkh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faster_hex::hex_decode;

    fn public_key(hex: &str) -> secp256k1::PublicKey {
        let mut bytes = [0u8; 33];
        hex_decode(hex.as_bytes(), &mut bytes).unwrap();
        secp256k1::PublicKey::from_slice(&bytes).unwrap()
    }

    // public key of the private key `1`, the generator point
    const GENERATOR: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    // BIP32 test vector 1 master public key
    const VECTOR_1_MASTER: &str = "0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2";

    #[test]
    fn test_generator_addresses() {
        let key = public_key(GENERATOR);

        let mainnet = Addresses::new(Network::Mainnet, &key);
        assert_eq!(mainnet.p2pkh.to_string(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(mainnet.p2sh_p2wpkh.to_string(), "3JvL6Ymt8MVWiCNHC7oWU6nLeHNJKLZGLN");
        assert_eq!(mainnet.p2wpkh.to_string(), "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");

        let testnet = Addresses::new(Network::Testnet, &key);
        assert_eq!(testnet.p2pkh.to_string(), "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r");
        assert_eq!(testnet.p2sh_p2wpkh.to_string(), "2NAUYAHhujozruyzpsFRP63mbrdaU5wnEpN");
        assert_eq!(testnet.p2wpkh.to_string(), "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx");
    }

    #[test]
    fn test_single_constructors_match_record() {
        let key = public_key(VECTOR_1_MASTER);
        let all = Addresses::new(Network::Mainnet, &key);
        assert_eq!(Address::p2pkh(Network::Mainnet, &key), all.p2pkh);
        assert_eq!(Address::p2sh_p2wpkh(Network::Mainnet, &key), all.p2sh_p2wpkh);
        assert_eq!(Address::p2wpkh(Network::Mainnet, &key), all.p2wpkh);

        assert_eq!(all.select(AddressFamily::Legacy).to_string(), "15mKKb2eos1hWa6tisdPwwDC1a5J1y9nma");
        assert_eq!(all.select(AddressFamily::NestedSegwit).to_string(), "3PpgpssV7mcAGpZRWiCWhodUTnjpoSZg7a");
        assert_eq!(all.select(AddressFamily::NativeSegwit).to_string(), "bc1qx3ppj0smkuy3d6g525sh9n2w9k7fm7q3x30rtg");
        assert_eq!(Address::from_public_key(Network::Mainnet, AddressFamily::NestedSegwit, &key), all.p2sh_p2wpkh);
    }

    #[test]
    fn test_parse() {
        for address in [
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH",
            "3JvL6Ymt8MVWiCNHC7oWU6nLeHNJKLZGLN",
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
            "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r",
            "2NAUYAHhujozruyzpsFRP63mbrdaU5wnEpN",
            "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
        ] {
            let parsed: Address = address.parse().unwrap();
            assert_eq!(parsed.to_string(), address);
        }

        let upper: Address = "BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4".parse().unwrap();
        assert_eq!(upper.version, Version::WitnessPubKeyHash);
        assert_eq!(upper.network, Network::Mainnet);
    }

    #[test]
    fn test_parse_errors() {
        // WIF version byte is not an address version
        assert_eq!(
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn".parse::<Address>(),
            Err(AddressError::InvalidPayloadLength(33))
        );
        assert!(matches!("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t5".parse::<Address>(), Err(AddressError::Bech32(_))));
        assert_eq!(
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ".parse::<Address>(),
            Err(AddressError::Bip32(hdkeys_bip32::Error::ChecksumMismatch))
        );
        assert_eq!(base58check_encode(0x42, &[0u8; 20]).parse::<Address>(), Err(AddressError::InvalidVersion(0x42)));
    }

    #[test]
    fn test_serde() {
        let all = Addresses::new(Network::Testnet, &public_key(GENERATOR));
        let json = serde_json::to_value(all).unwrap();
        assert_eq!(json["p2shP2wpkh"], "2NAUYAHhujozruyzpsFRP63mbrdaU5wnEpN");
        assert_eq!(json["p2wpkh"], "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx");
        assert_eq!(serde_json::from_value::<Addresses>(json).unwrap(), all);
    }
}
