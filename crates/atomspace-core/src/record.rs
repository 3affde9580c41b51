// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stored atom records: nodes, links, and type definitions.

use serde_json::{Map, Value};

use crate::hash::composite_hash;
use crate::ident::Handle;

/// Arbitrary user-supplied fields carried verbatim on a node or link.
pub type Extra = Map<String, Value>;

/// The nested composite-type signature of a link.
///
/// A `Hash` leaf is a node target's `named_type_hash`; a `Seq` is a
/// sub-link target's own composite type, recursively. The first
/// element of the outermost `Seq` is always the link's own
/// `named_type_hash`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CompositeType {
    /// A single type hash (a node target, or a link's own head).
    Hash(Handle),
    /// A nested composite type (a sub-link target).
    Seq(Vec<CompositeType>),
}

/// Folds a [`CompositeType`] tree into a single [`Handle`], bottom-up.
pub fn fold_composite_type(composite_type: &CompositeType) -> Handle {
    match composite_type {
        CompositeType::Hash(h) => *h,
        CompositeType::Seq(items) => {
            let folded: Vec<Handle> = items.iter().map(fold_composite_type).collect();
            composite_hash(&folded)
        }
    }
}

/// A stored terminal atom.
#[derive(Clone, PartialEq, Debug)]
pub struct NodeRecord {
    /// Content-addressed identity: `terminal_hash(named_type, name)`.
    pub id: Handle,
    /// `named_type_hash(named_type)`.
    pub composite_type_hash: Handle,
    /// The node's declared type.
    pub named_type: String,
    /// The node's name.
    pub name: String,
    /// Caller-supplied extra fields, merged verbatim on first insert.
    pub extra: Extra,
}

/// A stored non-terminal atom.
#[derive(Clone, PartialEq, Debug)]
pub struct LinkRecord {
    /// Content-addressed identity: `expression_hash(named_type_hash(named_type), targets)`.
    pub id: Handle,
    /// Fold of [`LinkRecord::composite_type`] via [`fold_composite_type`].
    pub composite_type_hash: Handle,
    /// The link's declared type.
    pub named_type: String,
    /// `named_type_hash(named_type)`.
    pub named_type_hash: Handle,
    /// Nested structural signature of this link and its targets.
    pub composite_type: CompositeType,
    /// `true` only for the outermost link of an `add_link` call.
    pub is_toplevel: bool,
    /// Ordered target identities; length is this link's arity.
    pub targets: Vec<Handle>,
    /// Caller-supplied extra fields, merged verbatim on first insert.
    pub extra: Extra,
}

/// One declaration of `"<name> : Type"`, derived the first time `name`
/// is seen as a node or link type.
#[derive(Clone, PartialEq, Debug)]
pub struct TypeDefRecord {
    /// `expression_hash(named_type_hash(":"), [named_type_hash(name), named_type_hash("Type")])`.
    pub id: Handle,
    /// Fold of `[":"-hash, name-hash, "Type"-hash]` via `composite_hash`.
    pub composite_type_hash: Handle,
    /// The declared type name.
    pub named_type: String,
    /// `named_type_hash(named_type)`.
    pub named_type_hash: Handle,
}
