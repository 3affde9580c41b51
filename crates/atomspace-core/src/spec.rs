// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Input shapes for atom insertion.
//!
//! `NodeSpec` and `LinkSpec` mirror the node-spec/link-spec mappings
//! described by the external interface: a required type and
//! name-or-targets, plus arbitrary caller-supplied extras that are
//! stored verbatim. `atom_type`/`name`/`targets` are `Option` rather
//! than bare `String`/`Vec` because the store's contract is to reject
//! a spec with a *missing* field (`BadNode`/`BadLink`) at insertion
//! time, not to make that state unrepresentable — callers building a
//! spec from loosely-typed data (a parsed request body, a REPL) need
//! to be able to construct an incomplete one and see it rejected.
//! [`NodeSpec::new`]/[`LinkSpec::new`] are the ergonomic path for
//! callers who already have both fields in hand.

use crate::record::Extra;

/// Input to [`crate::AtomSpace::add_node`].
#[derive(Clone, PartialEq, Debug, Default)]
pub struct NodeSpec {
    /// The node's type, if supplied.
    pub atom_type: Option<String>,
    /// The node's name, if supplied.
    pub name: Option<String>,
    /// Extra fields, merged verbatim on first insert.
    pub extra: Extra,
}

impl NodeSpec {
    /// Build a complete node spec with no extra fields.
    pub fn new(atom_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            atom_type: Some(atom_type.into()),
            name: Some(name.into()),
            extra: Extra::new(),
        }
    }

    /// Attach extra fields to this spec.
    #[must_use]
    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }
}

/// Either a node or a nested link, as a link's target.
#[derive(Clone, PartialEq, Debug)]
pub enum AtomSpec {
    /// A terminal target.
    Node(NodeSpec),
    /// A non-terminal target, inserted recursively before the parent link.
    Link(LinkSpec),
}

impl From<NodeSpec> for AtomSpec {
    fn from(spec: NodeSpec) -> Self {
        AtomSpec::Node(spec)
    }
}

impl From<LinkSpec> for AtomSpec {
    fn from(spec: LinkSpec) -> Self {
        AtomSpec::Link(spec)
    }
}

/// Input to [`crate::AtomSpace::add_link`].
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LinkSpec {
    /// The link's type, if supplied.
    pub atom_type: Option<String>,
    /// Ordered targets, if supplied; each is a node or a nested link spec.
    pub targets: Option<Vec<AtomSpec>>,
    /// Extra fields, merged verbatim on first insert.
    pub extra: Extra,
}

impl LinkSpec {
    /// Build a complete link spec with no extra fields.
    pub fn new(atom_type: impl Into<String>, targets: Vec<AtomSpec>) -> Self {
        Self {
            atom_type: Some(atom_type.into()),
            targets: Some(targets),
            extra: Extra::new(),
        }
    }

    /// Attach extra fields to this spec.
    #[must_use]
    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }
}
