//!
//! Decoding and validation of serialized extended keys.
//!

use crate::imports::*;

/// Structured view of every field of a serialized extended key.
///
/// Decoding does not consult the version registry beyond naming the
/// version: registry fields are absent for unknown versions, and a key
/// whose material contradicts its version still decodes (see [`validate`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedKey {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr_type: Option<ScriptType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<KeyType>,
    pub depth: u8,
    pub parent_fingerprint: String,
    pub child_number: u32,
    pub hardened: bool,
    pub chain_code: String,
    pub key: Secret,
    pub is_private: bool,
}

impl From<&ExtendedKey> for DecodedKey {
    fn from(key: &ExtendedKey) -> Self {
        let info = key.version_info().ok();
        DecodedKey {
            version: key.version.to_string(),
            prefix: key.version.prefix(),
            network: info.map(|info| info.network),
            addr_type: info.map(|info| info.script_type),
            key_type: info.map(|info| info.key_type),
            depth: key.attrs.depth,
            parent_fingerprint: faster_hex::hex_string(&key.attrs.parent_fingerprint),
            child_number: key.attrs.child_number.0,
            hardened: key.attrs.child_number.is_hardened(),
            chain_code: faster_hex::hex_string(&key.attrs.chain_code),
            key: Secret::new(faster_hex::hex_string(&key.key_bytes)),
            is_private: key.is_private(),
        }
    }
}

/// Decode a Base58Check extended key into its fields.
pub fn decode(xkey: &str) -> Result<DecodedKey> {
    let key = xkey.trim().parse::<ExtendedKey>()?;
    debug!("decoded key with version {} at depth {}", key.version, key.attrs.depth);
    Ok(DecodedKey::from(&key))
}

/// Decode and validate a Base58Check extended key.
pub fn validate(xkey: &str) -> Result<()> {
    let key = xkey.trim().parse::<ExtendedKey>()?;
    key.validate()?;
    debug!("key with version {} is valid", key.version);
    Ok(())
}
