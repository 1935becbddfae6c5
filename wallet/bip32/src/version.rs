//!
//! Registry of extended key version bytes.
//!
//! Every version prefix identifies exactly one (coin, network, script type,
//! key type) tuple and vice versa. Values follow the SLIP-0132 / electrum
//! tables (`xpub`, `ypub`, `Zprv`, ...).
//!

use crate::{ChildNumber, DerivationPath, Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Btc,
}

impl Display for Coin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Coin::Btc => f.write_str("btc"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn iter() -> impl Iterator<Item = Self> {
        static NETWORKS: [Network; 2] = [Network::Mainnet, Network::Testnet];
        NETWORKS.iter().copied()
    }
}

impl FromStr for Network {
    type Err = Error;
    fn from_str(network: &str) -> Result<Self> {
        match network.trim().to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(Error::InvalidNetwork(network.to_string())),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        };
        f.write_str(s)
    }
}

/// Script type an extended key is meant to produce addresses for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ScriptType {
    #[default]
    P2pkhOrP2sh,
    P2wpkhP2sh,
    P2wshP2sh,
    P2wpkh,
    P2wsh,
}

impl ScriptType {
    pub fn iter() -> impl Iterator<Item = Self> {
        static SCRIPT_TYPES: [ScriptType; 5] =
            [ScriptType::P2pkhOrP2sh, ScriptType::P2wpkhP2sh, ScriptType::P2wshP2sh, ScriptType::P2wpkh, ScriptType::P2wsh];
        SCRIPT_TYPES.iter().copied()
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            ScriptType::P2pkhOrP2sh => AddressFamily::Legacy,
            ScriptType::P2wpkhP2sh | ScriptType::P2wshP2sh => AddressFamily::NestedSegwit,
            ScriptType::P2wpkh | ScriptType::P2wsh => AddressFamily::NativeSegwit,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::P2pkhOrP2sh => "p2pkh-or-p2sh",
            ScriptType::P2wpkhP2sh => "p2wpkh-p2sh",
            ScriptType::P2wshP2sh => "p2wsh-p2sh",
            ScriptType::P2wpkh => "p2wpkh",
            ScriptType::P2wsh => "p2wsh",
        }
    }
}

/// Accepts the canonical names as well as the user facing aliases
/// (`legacy`, `p2sh`, `segwit-compatible`, `segwit-native`, `bech32`, `bip32`, `bip44`, `bip49`, `bip84`).
impl FromStr for ScriptType {
    type Err = Error;
    fn from_str(script_type: &str) -> Result<Self> {
        match script_type.trim().to_lowercase().as_str() {
            "p2pkh-or-p2sh" | "p2pkh" | "legacy" | "bip32" | "bip44" | "bip-44" => Ok(ScriptType::P2pkhOrP2sh),
            "p2wpkh-p2sh" | "p2sh" | "segwit-compatible" | "bip49" | "bip-49" => Ok(ScriptType::P2wpkhP2sh),
            "p2wsh-p2sh" => Ok(ScriptType::P2wshP2sh),
            "p2wpkh" | "segwit-native" | "bech32" | "bip84" | "bip-84" => Ok(ScriptType::P2wpkh),
            "p2wsh" => Ok(ScriptType::P2wsh),
            _ => Err(Error::InvalidAddressType(script_type.to_string())),
        }
    }
}

impl TryFrom<String> for ScriptType {
    type Error = Error;
    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl Display for ScriptType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three address families script types collapse into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressFamily {
    /// P2PKH (or plain P2SH).
    Legacy,
    /// SegWit program wrapped in P2SH.
    NestedSegwit,
    /// Native SegWit (bech32).
    NativeSegwit,
}

impl AddressFamily {
    /// BIP44/49/84 purpose number.
    pub fn purpose(&self) -> u32 {
        match self {
            AddressFamily::Legacy => 44,
            AddressFamily::NestedSegwit => 49,
            AddressFamily::NativeSegwit => 84,
        }
    }

    /// Path used when derivation is requested as `auto`: `m/purpose'/0'/0'/0/0`.
    pub fn default_path(&self) -> DerivationPath {
        let hardened = |index: u32| ChildNumber(index | ChildNumber::HARDENED_FLAG);
        [hardened(self.purpose()), hardened(0), hardened(0), ChildNumber(0), ChildNumber(0)].into_iter().collect()
    }

    /// Script type whose versions are used for keys of this family.
    pub fn script_type(&self) -> ScriptType {
        match self {
            AddressFamily::Legacy => ScriptType::P2pkhOrP2sh,
            AddressFamily::NestedSegwit => ScriptType::P2wpkhP2sh,
            AddressFamily::NativeSegwit => ScriptType::P2wpkh,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Public,
    Private,
}

impl KeyType {
    pub fn is_private(&self) -> bool {
        matches!(self, KeyType::Private)
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            KeyType::Public => f.write_str("public"),
            KeyType::Private => f.write_str("private"),
        }
    }
}

/// 4-byte extended key version prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Version([u8; 4]);

impl Version {
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Version(bytes)
    }

    pub const fn from_u32(version: u32) -> Self {
        Version(version.to_be_bytes())
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        self.0
    }

    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Registry lookup: the version for a (coin, network, script type, key type) tuple.
    pub fn lookup(coin: Coin, network: Network, script_type: ScriptType, key_type: KeyType) -> Result<Version> {
        let info = VersionInfo { coin, network, script_type, key_type };
        BY_INFO.get(&info).map(|entry| entry.version).ok_or_else(|| Error::UnknownVersion(info.to_string()))
    }

    /// Reverse registry lookup.
    pub fn info(&self) -> Result<VersionInfo> {
        BY_VERSION.get(self).map(|entry| entry.info).ok_or_else(|| Error::UnknownVersion(self.to_string()))
    }

    /// Human readable base58 prefix of the version (e.g. `xprv`), if registered.
    pub fn prefix(&self) -> Option<&'static str> {
        BY_VERSION.get(self).map(|entry| entry.prefix)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.to_u32())
    }
}

impl Debug for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Version({self})")
    }
}

/// Key of the version registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VersionInfo {
    pub coin: Coin,
    pub network: Network,
    pub script_type: ScriptType,
    pub key_type: KeyType,
}

impl VersionInfo {
    pub fn version(&self) -> Result<Version> {
        Version::lookup(self.coin, self.network, self.script_type, self.key_type)
    }

    /// Same tuple with a different key type.
    pub fn with_key_type(self, key_type: KeyType) -> Self {
        VersionInfo { key_type, ..self }
    }
}

impl Display for VersionInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.coin, self.network, self.script_type, self.key_type)
    }
}

struct Entry {
    info: VersionInfo,
    version: Version,
    prefix: &'static str,
}

const fn entry(network: Network, script_type: ScriptType, key_type: KeyType, version: u32, prefix: &'static str) -> Entry {
    Entry { info: VersionInfo { coin: Coin::Btc, network, script_type, key_type }, version: Version::from_u32(version), prefix }
}

use KeyType::{Private, Public};
use Network::{Mainnet, Testnet};
use ScriptType::{P2pkhOrP2sh, P2wpkh, P2wpkhP2sh, P2wsh, P2wshP2sh};

static REGISTRY: [Entry; 20] = [
    entry(Mainnet, P2pkhOrP2sh, Public, 0x0488b21e, "xpub"),
    entry(Mainnet, P2pkhOrP2sh, Private, 0x0488ade4, "xprv"),
    entry(Testnet, P2pkhOrP2sh, Public, 0x043587cf, "tpub"),
    entry(Testnet, P2pkhOrP2sh, Private, 0x04358394, "tprv"),
    entry(Mainnet, P2wpkhP2sh, Public, 0x049d7cb2, "ypub"),
    entry(Mainnet, P2wpkhP2sh, Private, 0x049d7878, "yprv"),
    entry(Testnet, P2wpkhP2sh, Public, 0x044a5262, "upub"),
    entry(Testnet, P2wpkhP2sh, Private, 0x044a4e28, "uprv"),
    entry(Mainnet, P2wshP2sh, Public, 0x0295b43f, "Ypub"),
    entry(Mainnet, P2wshP2sh, Private, 0x0295b005, "Yprv"),
    entry(Testnet, P2wshP2sh, Public, 0x024289ef, "Upub"),
    entry(Testnet, P2wshP2sh, Private, 0x024285b5, "Uprv"),
    entry(Mainnet, P2wpkh, Public, 0x04b24746, "zpub"),
    entry(Mainnet, P2wpkh, Private, 0x04b2430c, "zprv"),
    entry(Testnet, P2wpkh, Public, 0x045f1cf6, "vpub"),
    entry(Testnet, P2wpkh, Private, 0x045f18bc, "vprv"),
    entry(Mainnet, P2wsh, Public, 0x02aa7ed3, "Zpub"),
    entry(Mainnet, P2wsh, Private, 0x02aa7a99, "Zprv"),
    entry(Testnet, P2wsh, Public, 0x02575483, "Vpub"),
    entry(Testnet, P2wsh, Private, 0x02575048, "Vprv"),
];

static BY_VERSION: Lazy<HashMap<Version, &'static Entry>> = Lazy::new(|| REGISTRY.iter().map(|entry| (entry.version, entry)).collect());

static BY_INFO: Lazy<HashMap<VersionInfo, &'static Entry>> = Lazy::new(|| REGISTRY.iter().map(|entry| (entry.info, entry)).collect());

/// Iterate over all registered `(VersionInfo, Version)` pairs.
pub fn registry() -> impl Iterator<Item = (VersionInfo, Version)> {
    REGISTRY.iter().map(|entry| (entry.info, entry.version))
}
