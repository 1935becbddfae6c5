//!
//! [`DerivedOutput`] record handed to the command surface for formatting.
//!

use crate::imports::*;

/// Keys and addresses produced by one operation.
///
/// Field names follow the JSON/YAML output of the key tool
/// (`xPrv`, `xPub`, `addr`, `prvKeyWif`, `pubKeyHex`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedOutput {
    #[serde(rename = "xPrv", skip_serializing_if = "Option::is_none")]
    pub xprv: Option<Secret>,
    #[serde(rename = "xPub", skip_serializing_if = "Option::is_none")]
    pub xpub: Option<String>,
    pub addr: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addrs: Option<Addresses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prv_key_wif: Option<Secret>,
    pub pub_key_hex: String,
    pub network: Network,
    pub coin: Coin,
    pub addr_type: ScriptType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivation_path: Option<DerivationPath>,
}

impl DerivedOutput {
    /// Output of an extended key; network and address type are those of
    /// the key's version. The serialized extended keys are only carried
    /// with `show_all_keys`.
    pub(crate) fn from_extended_key(key: &ExtendedKey, derivation_path: Option<DerivationPath>, show_all_keys: bool) -> Result<Self> {
        let info = key.version_info()?;
        let public_key = key.public_key()?;
        let wif = key.secret_key()?.map(|secret_key| Wif::new(info.network, secret_key));

        let mut output = Self::build(info.network, info.coin, info.script_type, &public_key, show_all_keys)
            .with_wif(wif.as_ref())
            .with_derivation_path(derivation_path);
        if show_all_keys {
            let xprv = key.is_private().then(|| Secret::from(key.to_base58()));
            output = output.with_extended_keys(xprv, key.public_key_of()?.to_string());
        }
        Ok(output)
    }

    /// Output of a bare public key: addresses only.
    pub(crate) fn build(
        network: Network,
        coin: Coin,
        script_type: ScriptType,
        public_key: &secp256k1::PublicKey,
        show_all_keys: bool,
    ) -> Self {
        let addrs = Addresses::new(network, public_key);
        DerivedOutput {
            xprv: None,
            xpub: None,
            addr: *addrs.select(script_type.family()),
            addrs: show_all_keys.then_some(addrs),
            prv_key_wif: None,
            pub_key_hex: faster_hex::hex_string(&public_key.serialize()),
            network,
            coin,
            addr_type: script_type,
            derivation_path: None,
        }
    }

    fn with_extended_keys(mut self, xprv: Option<Secret>, xpub: String) -> Self {
        self.xprv = xprv;
        self.xpub = Some(xpub);
        self
    }

    pub(crate) fn with_wif(mut self, wif: Option<&Wif>) -> Self {
        self.prv_key_wif = wif.map(|wif| Secret::from(wif.encode()));
        self
    }

    fn with_derivation_path(mut self, derivation_path: Option<DerivationPath>) -> Self {
        self.derivation_path = derivation_path;
        self
    }
}
