//!
//! Key generation from a seed, derivation from an existing extended key,
//! and address derivation from a bare public key or a WIF private key.
//!

use crate::imports::*;
use hdkeys_bip32::PublicKey;

/// Master key from `seed`, derived along the requested path.
///
/// The versions of the produced keys are those of the requested network
/// and address type; `auto` resolves to the default path of the address
/// family.
pub fn generate(seed: &[u8], options: &Options) -> Result<DerivedOutput> {
    let master = ExtendedKey::master_from_seed(seed, options.network, options.address_type)?;
    let path = options.derivation_path.resolve(options.address_type.family());

    debug!("generating {} {} keys at {path}", options.network, options.address_type);

    let key = master.derive_path(&path)?;
    DerivedOutput::from_extended_key(&key, Some(path), options.show_all_keys)
}

/// Derive from a serialized extended key.
///
/// The key decides the network and address type: `options.network` and
/// `options.address_type` are not consulted, and `auto` resolves by the
/// address family of the key's version.
pub fn derive(xkey: &str, options: &Options) -> Result<DerivedOutput> {
    let key = xkey.trim().parse::<ExtendedKey>()?;
    key.validate()?;

    let info = key.version_info()?;
    let path = options.derivation_path.resolve(info.script_type.family());

    debug!("deriving {info} key at depth {} along {path}", key.attrs.depth);

    let derived = key.derive_path(&path)?;
    DerivedOutput::from_extended_key(&derived, Some(path), options.show_all_keys)
}

/// Addresses of a hex encoded compressed public key.
pub fn from_public_key_hex(public_key_hex: &str, options: &Options) -> Result<DerivedOutput> {
    let public_key_hex = public_key_hex.trim();
    let mut bytes = [0u8; 33];
    if public_key_hex.len() != bytes.len() * 2 {
        return Err(Error::InvalidPublicKeyHex(public_key_hex.len() / 2));
    }
    faster_hex::hex_decode(public_key_hex.as_bytes(), &mut bytes)?;
    let public_key = <secp256k1::PublicKey as PublicKey>::from_bytes(bytes)?;

    debug!("addresses of public key on {}", options.network);

    Ok(DerivedOutput::build(options.network, Coin::Btc, options.address_type, &public_key, options.show_all_keys))
}

/// Public key and addresses of a WIF private key.
///
/// The network is the one encoded in the WIF version byte.
pub fn from_wif(wif: &str, options: &Options) -> Result<DerivedOutput> {
    let wif = wif.trim().parse::<Wif>()?;

    debug!("addresses of WIF key on {}", wif.network());

    Ok(DerivedOutput::build(wif.network(), Coin::Btc, options.address_type, &wif.public_key(), options.show_all_keys)
        .with_wif(Some(&wif)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PathSelection;
    use hdkeys_addresses::AddressError;

    // BIP39 seed of "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
    const SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    const VECTOR_1_XPRV: &str =
        "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi";

    fn seed() -> Vec<u8> {
        let mut seed = vec![0u8; SEED.len() / 2];
        faster_hex::hex_decode(SEED.as_bytes(), &mut seed).unwrap();
        seed
    }

    fn auto(network: Network, address_type: &str) -> Options {
        Options::new(network, address_type.parse().unwrap()).with_derivation_path(PathSelection::Auto)
    }

    #[test]
    fn test_generate_auto_paths() {
        let legacy = generate(&seed(), &auto(Network::Mainnet, "legacy").with_show_all_keys(true)).unwrap();
        assert_eq!(legacy.addr.to_string(), "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
        assert_eq!(legacy.prv_key_wif.as_ref().unwrap().expose(), "L4p2b9VAf8k5aUahF1JCJUzZkgNEAqLfq8DDdQiyAprQAKSbu8hf");
        assert_eq!(legacy.derivation_path.as_ref().unwrap().to_string(), "m/44'/0'/0'/0/0");
        assert!(legacy.xprv.as_ref().unwrap().expose().starts_with("xprv"));
        assert!(legacy.xpub.as_ref().unwrap().starts_with("xpub"));

        let nested = generate(&seed(), &auto(Network::Mainnet, "segwit-compatible").with_show_all_keys(true)).unwrap();
        assert_eq!(nested.addr.to_string(), "37VucYSaXLCAsxYyAPfbSi9eh4iEcbShgf");
        assert!(nested.xprv.as_ref().unwrap().expose().starts_with("yprv"));
        assert!(nested.xpub.as_ref().unwrap().starts_with("ypub"));

        let native = generate(&seed(), &auto(Network::Mainnet, "bech32")).unwrap();
        assert_eq!(native.addr.to_string(), "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
        assert_eq!(native.pub_key_hex, "0330d54fd0dd420a6e5f8d3624f5f3482cae350f79d5f0753bf5beef9c2d91af3c");
        assert_eq!(native.prv_key_wif.as_ref().unwrap().expose(), "KyZpNDKnfs94vbrwhJneDi77V6jF64PWPF8x5cdJb8ifgg2DUc9d");
        assert_eq!(native.addr_type, ScriptType::P2wpkh);
        assert!(native.xprv.is_none());
        assert!(native.xpub.is_none());
        assert!(native.addrs.is_none());
    }

    #[test]
    fn test_generate_testnet_explicit_path() {
        let options = Options::new(Network::Testnet, ScriptType::P2wpkhP2sh)
            .with_derivation_path("m/49'/1'/0'/0/0".parse().unwrap())
            .with_show_all_keys(true);
        let output = generate(&seed(), &options).unwrap();
        assert_eq!(output.addr.to_string(), "2Mww8dCYPUpKHofjgcXcBCEGmniw9CoaiD2");
        assert_eq!(output.prv_key_wif.as_ref().unwrap().expose(), "cULrpoZGXiuC19Uhvykx7NugygA3k86b3hmdCeyvHYQZSxojGyXJ");
        assert!(output.xprv.as_ref().unwrap().expose().starts_with("uprv"));
        assert!(output.xpub.as_ref().unwrap().starts_with("upub"));

        let addrs = output.addrs.unwrap();
        assert_eq!(addrs.p2pkh.to_string(), "mkgBAzmFSVxiR7kAWRuYw6dNBbG69dgEbL");
        assert_eq!(addrs.p2wpkh.to_string(), "tb1q8zt37uunpakpg8vh0tz06jnj0jz5jddn5mlts3");
    }

    #[test]
    fn test_generate_bip32_vector() {
        let mut seed = [0u8; 16];
        faster_hex::hex_decode(b"000102030405060708090a0b0c0d0e0f", &mut seed).unwrap();
        let output = generate(&seed, &Options::default().with_show_all_keys(true)).unwrap();
        assert_eq!(output.xprv.as_ref().unwrap().expose(), VECTOR_1_XPRV);
        assert_eq!(output.addr.to_string(), "15mKKb2eos1hWa6tisdPwwDC1a5J1y9nma");
        assert_eq!(output.prv_key_wif.as_ref().unwrap().expose(), "L52XzL2cMkHxqxBXRyEpnPQZGUs3uKiL3R11XbAdHigRzDozKZeW");
        assert_eq!(output.derivation_path.as_ref().unwrap().to_string(), "m");
    }

    #[test]
    fn test_generate_invalid_seed() {
        assert!(matches!(
            generate(&[0u8; 8], &Options::default()),
            Err(Error::BIP32Error(hdkeys_bip32::Error::InvalidSeed { length: 8, .. }))
        ));
    }

    #[test]
    fn test_derive_from_private_key() {
        let options = Options::default().with_derivation_path("m/0h/1".parse().unwrap()).with_show_all_keys(true);
        let output = derive(VECTOR_1_XPRV, &options).unwrap();
        assert_eq!(
            output.xprv.as_ref().unwrap().expose(),
            "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs"
        );
        assert_eq!(
            output.xpub.as_deref(),
            Some("xpub6ASuArnXKPbfEwhqN6e3mwBcDTgzisQN1wXN9BJcM47sSikHjJf3UFHKkNAWbWMiGj7Wf5uMash7SyYq527Hqck2AxYysAA7xmALppuCkwQ")
        );
    }

    #[test]
    fn test_derive_key_decides_network_and_type() {
        let zprv = "zprvAWgYBBk7JR8Gjrh4UJQ2uJdG1r3WNRRfURiABBE3RvMXYSrRJL62XuezvGdPvG6GFBZduosCc1YP5wixPox7zhZLfiUm8aunE96BBa4Kei5";
        // requested network and address type are ignored
        let output = derive(zprv, &auto(Network::Testnet, "legacy")).unwrap();
        assert_eq!(output.network, Network::Mainnet);
        assert_eq!(output.addr_type, ScriptType::P2wpkh);
        assert_eq!(output.derivation_path.as_ref().unwrap().to_string(), "m/84'/0'/0'/0/0");
        assert_eq!(output.addr.to_string(), "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
    }

    #[test]
    fn test_derive_from_public_key() {
        let zpub = "zpub6rFR7y4Q2AijBEqTUquhVz398htDFrtymD9xYYfG1m4wAcvPhXNfE3EfH1r1ADqtfSdVCToUG868RvUUkgDKf31mGDtKsAYz2oz2AGutZYs";
        let options = Options::default().with_derivation_path("m/0/0".parse().unwrap()).with_show_all_keys(true);
        let output = derive(zpub, &options).unwrap();
        assert_eq!(output.addr.to_string(), "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
        assert!(output.xprv.is_none());
        assert!(output.prv_key_wif.is_none());
        assert!(output.xpub.as_ref().unwrap().starts_with("zpub"));

        let hardened = Options::default().with_derivation_path("m/0h".parse().unwrap());
        assert!(matches!(derive(zpub, &hardened), Err(Error::BIP32Error(hdkeys_bip32::Error::HardenedFromPublic(_)))));
    }

    #[test]
    fn test_extended_keys_follow_show_all_keys() {
        let options = Options::default().with_derivation_path("m/0h/1".parse().unwrap());
        let output = derive(VECTOR_1_XPRV, &options).unwrap();
        assert!(output.xprv.is_none());
        assert!(output.xpub.is_none());
        assert!(output.addrs.is_none());
        assert_eq!(output.prv_key_wif.as_ref().unwrap().expose(), "KyFAjQ5rgrKvhXvNMtFB5PCSKUYD1yyPEe3xr3T34TZSUHycXtMM");

        let json = serde_json::to_value(&output).unwrap();
        let fields = json.as_object().unwrap();
        assert!(!fields.contains_key("xPrv"));
        assert!(!fields.contains_key("xPub"));
        assert!(!fields.contains_key("addrs"));

        let all = derive(VECTOR_1_XPRV, &options.with_show_all_keys(true)).unwrap();
        assert_eq!(all.addr, output.addr);
        assert!(all.xprv.as_ref().unwrap().expose().starts_with("xprv"));
        assert!(all.xpub.as_ref().unwrap().starts_with("xpub"));
        assert!(all.addrs.is_some());
    }

    #[test]
    fn test_derive_rejects_invalid_keys() {
        let corrupted = VECTOR_1_XPRV.replace("Hi", "Hj");
        assert_eq!(derive(&corrupted, &Options::default()), Err(Error::BIP32Error(hdkeys_bip32::Error::ChecksumMismatch)));
    }

    #[test]
    fn test_from_public_key_hex() {
        let options = Options::new(Network::Testnet, ScriptType::P2wpkh).with_show_all_keys(true);
        let output = from_public_key_hex("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798", &options).unwrap();
        assert_eq!(output.addr.to_string(), "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx");
        assert_eq!(output.addrs.unwrap().p2pkh.to_string(), "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r");
        assert!(output.xpub.is_none());
        assert!(output.derivation_path.is_none());

        assert_eq!(from_public_key_hex("0279be", &options), Err(Error::InvalidPublicKeyHex(3)));
        assert!(matches!(
            from_public_key_hex("zz79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798", &options),
            Err(Error::InvalidHex(_))
        ));
        assert_eq!(
            from_public_key_hex("0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798", &options),
            Err(Error::BIP32Error(hdkeys_bip32::Error::InvalidKeyPrefix(0x04)))
        );
    }

    #[test]
    fn test_from_wif() {
        let options = Options::new(Network::Testnet, ScriptType::P2wpkhP2sh);
        let output = from_wif("L52XzL2cMkHxqxBXRyEpnPQZGUs3uKiL3R11XbAdHigRzDozKZeW", &options).unwrap();
        assert_eq!(output.network, Network::Mainnet);
        assert_eq!(output.addr.to_string(), "3PpgpssV7mcAGpZRWiCWhodUTnjpoSZg7a");
        assert_eq!(output.pub_key_hex, "0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2");
        assert_eq!(output.prv_key_wif.as_ref().unwrap().expose(), "L52XzL2cMkHxqxBXRyEpnPQZGUs3uKiL3R11XbAdHigRzDozKZeW");

        assert!(matches!(from_wif("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH", &options), Err(Error::AddressError(AddressError::InvalidVersion(0)))));
    }

    #[test]
    fn test_output_json() {
        let options = auto(Network::Mainnet, "bip84").with_show_all_keys(true);
        let json = serde_json::to_value(generate(&seed(), &options).unwrap()).unwrap();
        assert_eq!(json["addr"], "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
        assert_eq!(json["addrs"]["p2pkh"], "1JaUQDVNRdhfNsVncGkXedaPSM5Gc54Hso");
        assert_eq!(json["addrs"]["p2shP2wpkh"], "3GtVZYzsKF6Feikdjd4bDyPdAiyeHANY9b");
        assert_eq!(json["prvKeyWif"], "KyZpNDKnfs94vbrwhJneDi77V6jF64PWPF8x5cdJb8ifgg2DUc9d");
        assert_eq!(json["network"], "mainnet");
        assert_eq!(json["coin"], "btc");
        assert_eq!(json["addrType"], "p2wpkh");
        assert_eq!(json["derivationPath"], "m/84'/0'/0'/0/0");
        assert!(json["xPrv"].as_str().unwrap().starts_with("zprv"));
        assert!(json["xPub"].as_str().unwrap().starts_with("zpub"));

        let public_only = serde_json::to_value(
            from_public_key_hex("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798", &Options::default()).unwrap(),
        )
        .unwrap();
        let fields = public_only.as_object().unwrap();
        assert!(!fields.contains_key("xPrv"));
        assert!(!fields.contains_key("prvKeyWif"));
        assert!(!fields.contains_key("addrs"));
        assert!(!fields.contains_key("derivationPath"));
    }
}
