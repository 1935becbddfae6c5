//!
//! Serialized secret material (extended private keys, WIF keys) that is
//! wiped from memory when dropped.
//!

use serde::{Serialize, Serializer};
use zeroize::Zeroize;

#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(data: String) -> Self {
        Self(data)
    }

    /// Borrow the secret as a string slice.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Self {
        Secret(s.trim().to_string())
    }
}

impl From<zeroize::Zeroizing<String>> for Secret {
    fn from(s: zeroize::Zeroizing<String>) -> Self {
        Secret(s.as_str().to_string())
    }
}

impl Zeroize for Secret {
    fn zeroize(&mut self) {
        self.0.zeroize()
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.zeroize()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret").field("secret", &"********").finish()
    }
}

/// Secrets are written out in full: producing them is the point of the
/// output records they appear in.
impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
