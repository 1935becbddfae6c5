//! Child numbers

use crate::{Error, Result};
use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};

/// Index of a particular child key for a given (extended) private key.
///
/// The raw value is the serialized BIP32 child number: indices at or above
/// [`ChildNumber::HARDENED_FLAG`] denote hardened children.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Size of a child number when serialized into bytes.
    pub const BYTE_SIZE: usize = 4;

    /// Hardened child keys use indices 2^31 through 2^32-1.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Create new [`ChildNumber`] with the given index and hardened flag.
    ///
    /// Returns an error if the index does not fit in 31 bits.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG == 0 {
            let mut child = index;
            if hardened {
                child |= Self::HARDENED_FLAG;
            }
            Ok(ChildNumber(child))
        } else {
            Err(Error::PathIndexOverflow { segment: None, index: index as u64 })
        }
    }

    /// Parse a child number from its serialized big-endian form.
    pub fn from_bytes(bytes: [u8; Self::BYTE_SIZE]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Serialize this child number as bytes.
    pub fn to_bytes(&self) -> [u8; Self::BYTE_SIZE] {
        self.0.to_be_bytes()
    }

    /// Get the index number for this [`ChildNumber`], i.e. with the hardened flag cleared.
    pub fn index(&self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }

    /// Is this child number within the hardened range?
    pub fn is_hardened(&self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            f.write_str("'")?;
        }

        Ok(())
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}
