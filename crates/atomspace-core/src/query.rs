// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-side queries over a built [`AtomSpace`]: pattern matching,
//! type/template lookups, and node listing.

use rustc_hash::FxHashSet;

use crate::hash::named_type_hash;
use crate::ident::Handle;
use crate::pattern::query_fingerprint;
use crate::record::NodeRecord;
use crate::store::AtomSpace;

/// A nested type-symbol shape used to query the template index without
/// needing concrete target ids — mirrors [`crate::record::CompositeType`]
/// but built from type names instead of already-resolved hashes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TypeTemplate {
    /// A single named type (a node target, or a link's own head).
    Symbol(String),
    /// A nested template (a sub-link target).
    Seq(Vec<TypeTemplate>),
}

fn fold_template(template: &TypeTemplate) -> Handle {
    match template {
        TypeTemplate::Symbol(name) => named_type_hash(name),
        TypeTemplate::Seq(items) => {
            let folded: Vec<Handle> = items.iter().map(fold_template).collect();
            crate::hash::composite_hash(&folded)
        }
    }
}

impl AtomSpace {
    /// Links matching `[link_type, *target_pattern]`, where
    /// `link_type == "*"` or any element of `target_pattern` equal to
    /// [`Handle::WILDCARD`] matches anything in that position.
    ///
    /// When the pattern contains no wildcards, this short-circuits to a
    /// direct existence check instead of a fingerprint lookup.
    pub fn get_matched_links(&self, link_type: &str, target_pattern: &[Handle]) -> FxHashSet<Handle> {
        let has_wildcard = link_type == "*" || target_pattern.iter().any(Handle::is_wildcard);
        if !has_wildcard {
            return match self.get_link_handle(link_type, target_pattern) {
                Ok(id) => FxHashSet::from_iter([id]),
                Err(_) => FxHashSet::default(),
            };
        }

        let unordered = self
            .config()
            .unordered_link_types
            .contains(link_type);
        let fingerprint = query_fingerprint(link_type, target_pattern, unordered);
        self.patterns().matched_links(fingerprint)
    }

    /// Links whose declared type, or full nested composite type, hashes
    /// to `named_type_hash(link_type)`.
    pub fn get_matched_type(&self, link_type: &str) -> FxHashSet<Handle> {
        self.patterns().matched_type(named_type_hash(link_type))
    }

    /// Links whose full nested type signature matches `template`.
    pub fn get_matched_type_template(&self, template: &TypeTemplate) -> FxHashSet<Handle> {
        self.patterns().matched_type(fold_template(template))
    }

    /// All stored nodes, optionally filtered to one declared type.
    ///
    /// Returns full records rather than a `names: bool`-gated choice
    /// between ids and names — callers read `.id` or `.name` off the
    /// record directly, and `atom_type: None` additionally covers the
    /// "all nodes of any type" case the distilled interface leaves
    /// unstated.
    pub fn get_all_nodes(&self, atom_type: Option<&str>) -> Vec<&NodeRecord> {
        self.all_nodes()
            .filter(|node| atom_type.is_none_or(|t| node.named_type == t))
            .collect()
    }

    /// Ids of nodes, optionally restricted to `atom_type`, whose name
    /// contains `substring`.
    pub fn get_matched_node_name(&self, atom_type: Option<&str>, substring: &str) -> Vec<Handle> {
        self.all_nodes()
            .filter(|node| atom_type.is_none_or(|t| node.named_type == t))
            .filter(|node| node.name.contains(substring))
            .map(|node| node.id)
            .collect()
    }
}
