//! Derivation paths

use crate::{ChildNumber, Error, Result};
use core::{
    fmt::{self, Display},
    num::IntErrorKind,
    str::FromStr,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Prefix for all derivation paths.
const PREFIX: &str = "m";

/// Derivation paths within a hierarchical keyspace.
///
/// Parsing is lenient the way users type paths: leading and trailing `/`
/// are ignored, case is ignored, an empty string means `m`, and a
/// hardened step may be marked with `'`, `h` or `H`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DerivationPath {
    path: Vec<ChildNumber>,
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<DerivationPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DerivationPathVisitor;
        impl de::Visitor<'_> for DerivationPathVisitor {
            type Value = DerivationPath;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a derivation path string such as m/44'/0'/0'/0/0")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                DerivationPath::from_str(value).map_err(|err| de::Error::custom(err.to_string()))
            }
        }

        deserializer.deserialize_str(DerivationPathVisitor)
    }
}

impl Serialize for DerivationPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl DerivationPath {
    /// Iterate over the [`ChildNumber`] values in this derivation path.
    pub fn iter(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.path.iter().cloned()
    }

    /// Is this derivation path empty? (i.e. the root)
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the count of [`ChildNumber`] values in this derivation path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Get the parent [`DerivationPath`] for the current one.
    ///
    /// Returns `None` if this is already the root path.
    pub fn parent(&self) -> Option<Self> {
        self.path.len().checked_sub(1).map(|n| {
            let mut parent = self.clone();
            parent.path.truncate(n);
            parent
        })
    }
}

/// Parse one `/`-separated step. `segment` is the position of the step in
/// the path, counting the `m` prefix as segment 0.
fn parse_segment(path: &str, segment: usize, part: &str) -> Result<ChildNumber> {
    let invalid = || Error::InvalidPath { path: path.to_string(), segment };

    let (digits, hardened) = match part.strip_suffix(['\'', 'h', 'H']) {
        Some(digits) => (digits, true),
        None => (part, false),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let index = digits.parse::<u64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => Error::PathIndexOverflow { segment: Some(segment), index: u64::MAX },
        _ => invalid(),
    })?;

    let index = u32::try_from(index)
        .ok()
        .filter(|index| index & ChildNumber::HARDENED_FLAG == 0)
        .ok_or(Error::PathIndexOverflow { segment: Some(segment), index })?;

    ChildNumber::new(index, hardened)
}

impl Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;

        for child_number in self.iter() {
            write!(f, "/{}", child_number)?;
        }

        Ok(())
    }
}

impl FromIterator<ChildNumber> for DerivationPath {
    fn from_iter<T: IntoIterator<Item = ChildNumber>>(iter: T) -> Self {
        DerivationPath { path: iter.into_iter().collect() }
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(input: &str) -> Result<DerivationPath> {
        let normalized = input.trim_matches('/').to_lowercase();
        let normalized = if normalized.is_empty() { PREFIX } else { normalized.as_str() };

        let mut parts = normalized.split('/');
        if parts.next() != Some(PREFIX) {
            return Err(Error::InvalidPath { path: input.to_string(), segment: 0 });
        }

        let path = parts.enumerate().map(|(n, part)| parse_segment(input, n + 1, part)).collect::<Result<_>>()?;

        Ok(DerivationPath { path })
    }
}
