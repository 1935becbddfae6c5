//! Base58Check with a single leading version byte.

use crate::error::{AddressError, Result};
use hdkeys_hashes::CHECKSUM_SIZE;
use zeroize::Zeroizing;

/// Encode `version ∥ payload ∥ checksum`.
pub fn base58check_encode(version: u8, payload: &[u8]) -> String {
    bs58::encode(payload).with_check_version(version).into_string()
}

/// Decode and verify a Base58Check string, returning the version byte and
/// the payload.
pub fn base58check_decode(encoded: &str) -> Result<(u8, Zeroizing<Vec<u8>>)> {
    let invalid_length = |actual| AddressError::Bip32(hdkeys_bip32::Error::InvalidLength { expected: 1 + CHECKSUM_SIZE, actual });

    let data = bs58::decode(encoded).with_check(None).into_vec().map_err(|err| match err {
        bs58::decode::Error::NoChecksum => invalid_length(bs58::decode(encoded).into_vec().map_or(0, |bytes| bytes.len())),
        err => err.into(),
    })?;
    let data = Zeroizing::new(data);

    let (version, payload) = data.split_first().ok_or_else(|| invalid_length(CHECKSUM_SIZE))?;
    Ok((*version, Zeroizing::new(payload.to_vec())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58check() {
        let encoded = base58check_encode(0x00, &[0u8; 20]);
        assert_eq!(encoded, "1111111111111111111114oLvT2");
        let (version, payload) = base58check_decode(&encoded).unwrap();
        assert_eq!(version, 0x00);
        assert_eq!(payload.as_slice(), &[0u8; 20]);
    }

    #[test]
    fn test_base58check_errors() {
        assert_eq!(base58check_decode("1111111111111111111114oLvT3"), Err(AddressError::Bip32(hdkeys_bip32::Error::ChecksumMismatch)));
        assert_eq!(base58check_decode("11"), Err(AddressError::Bip32(hdkeys_bip32::Error::InvalidLength { expected: 5, actual: 2 })));
        // a valid checksum over nothing: no room for the version byte
        let empty = bs58::encode([0u8; 0]).with_check().into_string();
        assert_eq!(base58check_decode(&empty), Err(AddressError::Bip32(hdkeys_bip32::Error::InvalidLength { expected: 5, actual: 4 })));
        assert!(matches!(
            base58check_decode("1O"),
            Err(AddressError::Bip32(hdkeys_bip32::Error::InvalidBase58Alphabet { character: 'O', index: 1 }))
        ));
    }
}
