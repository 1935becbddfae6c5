use thiserror::Error;

#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum AddressError {
    #[error(transparent)]
    Bip32(#[from] hdkeys_bip32::Error),

    #[error("Invalid version {0:#04x}")]
    InvalidVersion(u8),

    #[error("Invalid payload length {0}, expected 20 bytes")]
    InvalidPayloadLength(usize),

    #[error("Invalid prefix {0}")]
    InvalidPrefix(String),

    #[error("Invalid bech32 address: {0}")]
    Bech32(String),

    #[error("Unsupported witness program: version {version}, {length} bytes")]
    UnsupportedWitnessProgram { version: u8, length: usize },

    #[error("Invalid WIF length {0}, expected 34 bytes")]
    InvalidWifLength(usize),

    #[error("Invalid WIF compression flag {0:#04x}")]
    InvalidWifCompression(u8),
}

impl From<bs58::decode::Error> for AddressError {
    fn from(err: bs58::decode::Error) -> Self {
        AddressError::Bip32(err.into())
    }
}

pub type Result<T, E = AddressError> = std::result::Result<T, E>;
