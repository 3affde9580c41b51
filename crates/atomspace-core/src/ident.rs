// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Atom identifiers and arity classification.

use std::fmt;

/// A 32-byte BLAKE3 content digest, used for every atom id, type-def
/// id, and pattern/template fingerprint.
///
/// Thin newtype over `[u8; 32]`, following the `BlobHash`/`NodeId`
/// pattern used elsewhere in this workspace. Bytes are public for
/// zero-cost access; `Display` renders lowercase hex.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Handle(pub [u8; 32]);

impl Handle {
    /// Reserved wildcard sentinel for pattern fingerprints.
    ///
    /// Never produced by [`crate::hash`]'s functions on ordinary input —
    /// it stands in for a "match anything" slot when building a pattern
    /// fingerprint, never for real atom content.
    pub const WILDCARD: Handle = Handle([0xFF; 32]);

    /// View the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// `true` if this handle is the wildcard sentinel.
    pub fn is_wildcard(&self) -> bool {
        *self == Self::WILDCARD
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl serde::Serialize for Handle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Handle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut bytes = [0u8; 32];
        if s.len() != 64 {
            return Err(serde::de::Error::custom("handle must be 64 hex chars"));
        }
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| serde::de::Error::custom("invalid hex in handle"))?;
        }
        Ok(Handle(bytes))
    }
}

/// Arity bucket a link lives in.
///
/// Links of arity 1 and 2 get their own bucket; arity 3 and above
/// share a single `Many` bucket. A link lives in exactly one bucket,
/// never more than one, never none.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arity {
    /// Exactly one target.
    One,
    /// Exactly two targets.
    Two,
    /// Three or more targets.
    Many,
}

impl Arity {
    /// Classify a target count into its bucket.
    pub fn of(target_count: usize) -> Self {
        match target_count {
            1 => Arity::One,
            2 => Arity::Two,
            _ => Arity::Many,
        }
    }

    /// Index into the three-element arity-bucket array.
    pub fn slot(self) -> usize {
        match self {
            Arity::One => 0,
            Arity::Two => 1,
            Arity::Many => 2,
        }
    }
}
