// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure, stateless content hashing.
//!
//! Four operations build every identifier in the store: a named type's
//! hash, a terminal (node) hash, an expression (link) hash, and a
//! composite hash that folds a list of hashes into one. All four are
//! BLAKE3 digests under a one-byte domain tag so that, e.g., a type
//! named `"x"` and a node named `"x"` of type `""` never collide.

use crate::ident::Handle;

/// Digest of a bare type symbol.
pub fn named_type_hash(name: &str) -> Handle {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"T");
    hasher.update(name.as_bytes());
    Handle(hasher.finalize().into())
}

/// Digest of a node's `(type, name)` pair.
///
/// Length-prefixed so that `("ab", "c")` and `("a", "bc")` hash
/// differently.
pub fn terminal_hash(atom_type: &str, name: &str) -> Handle {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"N");
    hasher.update(&(atom_type.len() as u64).to_le_bytes());
    hasher.update(atom_type.as_bytes());
    hasher.update(&(name.len() as u64).to_le_bytes());
    hasher.update(name.as_bytes());
    Handle(hasher.finalize().into())
}

/// Digest of a link's `(head, ordered children)` shape.
///
/// Order-sensitive: swapping two children changes the digest.
pub fn expression_hash(head: Handle, children: &[Handle]) -> Handle {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"E");
    hasher.update(head.as_bytes());
    for child in children {
        hasher.update(child.as_bytes());
    }
    Handle(hasher.finalize().into())
}

/// Digest over an arbitrary ordered list of hashes.
///
/// Used to collapse a nested composite-type signature bottom-up and to
/// build pattern/template fingerprints.
pub fn composite_hash(items: &[Handle]) -> Handle {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"C");
    for item in items {
        hasher.update(item.as_bytes());
    }
    Handle(hasher.finalize().into())
}
