use crate::{ChainCode, ChildNumber, Depth, KeyFingerprint};

/// Extended key attributes: fields common to extended keys including depth,
/// fingerprints, child numbers, and chain codes.
#[derive(Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct ExtendedKeyAttrs {
    /// Depth in the key derivation hierarchy.
    pub depth: Depth,

    /// Parent fingerprint.
    pub parent_fingerprint: KeyFingerprint,

    /// Child number.
    pub child_number: ChildNumber,

    /// Chain code.
    pub chain_code: ChainCode,
}

impl ExtendedKeyAttrs {
    /// Attributes of a master key: depth 0 with no parent linkage.
    pub fn master(chain_code: ChainCode) -> Self {
        ExtendedKeyAttrs { chain_code, ..Default::default() }
    }

    /// A depth-0 key must not reference a parent.
    pub fn has_master_linkage(&self) -> bool {
        self.depth != 0 || (self.parent_fingerprint == KeyFingerprint::default() && self.child_number.0 == 0)
    }
}
