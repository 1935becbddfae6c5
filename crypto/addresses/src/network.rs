//!
//! Per-network version bytes of Base58Check addresses and WIF keys, and
//! the human readable part of segwit addresses.
//!

use bech32::Hrp;
use hdkeys_bip32::Network;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    pub network: Network,
    /// Version byte of P2PKH addresses.
    pub p2pkh: u8,
    /// Version byte of P2SH addresses.
    pub p2sh: u8,
    /// Version byte of WIF private keys.
    pub wif: u8,
    /// Human readable part of bech32 addresses.
    pub hrp: Hrp,
}

pub const MAINNET_PARAMS: NetworkParams = NetworkParams { network: Network::Mainnet, p2pkh: 0x00, p2sh: 0x05, wif: 0x80, hrp: bech32::hrp::BC };

pub const TESTNET_PARAMS: NetworkParams = NetworkParams { network: Network::Testnet, p2pkh: 0x6f, p2sh: 0xc4, wif: 0xef, hrp: bech32::hrp::TB };

static PARAMS: [NetworkParams; 2] = [MAINNET_PARAMS, TESTNET_PARAMS];

impl NetworkParams {
    pub fn of(network: Network) -> &'static NetworkParams {
        match network {
            Network::Mainnet => &PARAMS[0],
            Network::Testnet => &PARAMS[1],
        }
    }

    pub fn iter() -> impl Iterator<Item = &'static NetworkParams> {
        PARAMS.iter()
    }

    pub fn from_hrp(hrp: &Hrp) -> Option<&'static NetworkParams> {
        let hrp = hrp.to_lowercase();
        PARAMS.iter().find(|params| params.hrp.to_lowercase() == hrp)
    }

    pub fn from_wif_version(version: u8) -> Option<&'static NetworkParams> {
        PARAMS.iter().find(|params| params.wif == version)
    }
}
