// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The atom store: five keyed collections plus the two graph indexes,
//! and the insertion/lookup operations over them.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::AtomError;
use crate::hash::{composite_hash, expression_hash, named_type_hash, terminal_hash};
use crate::ident::{Arity, Handle};
use crate::index::RelationIndex;
use crate::pattern::PatternIndex;
use crate::record::{fold_composite_type, CompositeType, LinkRecord, NodeRecord, TypeDefRecord};
use crate::spec::{AtomSpec, LinkSpec, NodeSpec};

#[cfg(feature = "telemetry")]
use crate::telemetry;

/// Knobs that change how an [`AtomSpace`] treats certain link types.
#[derive(Clone, Debug)]
pub struct AtomSpaceConfig {
    /// Cosmetic label; not used to partition storage.
    pub database_name: String,
    /// Link types whose targets are sorted by id when building a
    /// pattern-query fingerprint, so that e.g. a wildcard query against
    /// `Similarity(a, b)` also matches a separately stored
    /// `Similarity(b, a)`. Identity and storage order are unaffected —
    /// `add_link` never consults this set.
    pub unordered_link_types: FxHashSet<String>,
}

impl Default for AtomSpaceConfig {
    fn default() -> Self {
        Self {
            database_name: "das".to_string(),
            unordered_link_types: FxHashSet::default(),
        }
    }
}

/// The in-memory atom database.
pub struct AtomSpace {
    nodes: FxHashMap<Handle, NodeRecord>,
    links: [FxHashMap<Handle, LinkRecord>; 3],
    type_defs: FxHashMap<Handle, TypeDefRecord>,
    names: FxHashMap<Handle, String>,
    relations: RelationIndex,
    patterns: PatternIndex,
    config: AtomSpaceConfig,
}

impl Default for AtomSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomSpace {
    /// An empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(AtomSpaceConfig::default())
    }

    /// An empty store with caller-supplied configuration.
    pub fn with_config(config: AtomSpaceConfig) -> Self {
        Self {
            nodes: FxHashMap::default(),
            links: [
                FxHashMap::default(),
                FxHashMap::default(),
                FxHashMap::default(),
            ],
            type_defs: FxHashMap::default(),
            names: FxHashMap::default(),
            relations: RelationIndex::default(),
            patterns: PatternIndex::default(),
            config,
        }
    }

    /// This store's configuration.
    pub fn config(&self) -> &AtomSpaceConfig {
        &self.config
    }

    /// `true` iff `id` resolves to a stored link, in any arity bucket.
    ///
    /// Matches the reference adapter literally: the name suggests a
    /// check of the link's orderedness, but the implementation only
    /// ever checks existence. Kept as specified rather than corrected.
    pub fn is_ordered(&self, id: &Handle) -> bool {
        self.link_exists(id)
    }

    /// Declare (idempotently) that `name` is a type, returning its
    /// type-definition record. The reference adapter always declares
    /// the parent of a type-def as `"Type"` itself.
    fn register_type_def(&mut self, name: &str) -> TypeDefRecord {
        let name_hash = named_type_hash(name);
        let colon_hash = named_type_hash(":");
        let type_hash = named_type_hash("Type");
        let id = expression_hash(colon_hash, &[name_hash, type_hash]);
        if let Some(existing) = self.type_defs.get(&id) {
            return existing.clone();
        }
        let composite_type_hash = composite_hash(&[colon_hash, name_hash, type_hash]);
        let record = TypeDefRecord {
            id,
            composite_type_hash,
            named_type: name.to_string(),
            named_type_hash: name_hash,
        };
        self.type_defs.insert(id, record.clone());
        record
    }

    /// Insert a node, or return the existing record if its `(type,
    /// name)` identity already exists (first-writer-wins on extras).
    ///
    /// # Errors
    /// Returns [`AtomError::BadNode`] if `spec.atom_type` or
    /// `spec.name` is absent.
    pub fn add_node(&mut self, spec: NodeSpec) -> Result<NodeRecord, AtomError> {
        let atom_type = spec.atom_type.ok_or_else(|| AtomError::BadNode {
            details: "missing 'type'".to_string(),
        })?;
        let name = spec.name.ok_or_else(|| AtomError::BadNode {
            details: "missing 'name'".to_string(),
        })?;

        let id = terminal_hash(&atom_type, &name);
        if let Some(existing) = self.nodes.get(&id) {
            return Ok(existing.clone());
        }

        self.register_type_def(&atom_type);
        let composite_type_hash = named_type_hash(&atom_type);
        let record = NodeRecord {
            id,
            composite_type_hash,
            named_type: atom_type,
            name: name.clone(),
            extra: spec.extra,
        };
        self.nodes.insert(id, record.clone());
        self.names.insert(id, name);

        #[cfg(feature = "telemetry")]
        telemetry::node_inserted(&record.id, &record.named_type, &record.name);

        Ok(record)
    }

    /// Insert a link, recursively inserting any nested link targets
    /// first. Returns the existing record if this link's identity
    /// already exists (first-writer-wins on extras; `is_toplevel` is
    /// never demoted by a later, non-toplevel re-insertion of the same
    /// link).
    ///
    /// # Errors
    /// Returns [`AtomError::BadLink`] if `spec.atom_type` or
    /// `spec.targets` is absent, or if any nested target fails its own
    /// validation.
    pub fn add_link(&mut self, spec: LinkSpec) -> Result<LinkRecord, AtomError> {
        self.add_link_recursive(spec, true)
    }

    fn add_link_recursive(
        &mut self,
        spec: LinkSpec,
        toplevel: bool,
    ) -> Result<LinkRecord, AtomError> {
        let atom_type = spec.atom_type.ok_or_else(|| AtomError::BadLink {
            details: "missing 'type'".to_string(),
        })?;
        let targets = spec.targets.ok_or_else(|| AtomError::BadLink {
            details: "missing 'targets'".to_string(),
        })?;

        let unordered = self.config.unordered_link_types.contains(&atom_type);

        let mut target_ids = Vec::with_capacity(targets.len());
        let mut target_composites = Vec::with_capacity(targets.len());
        for target in targets {
            match target {
                AtomSpec::Node(node_spec) => {
                    let record = self.add_node(node_spec)?;
                    target_composites.push(CompositeType::Hash(record.composite_type_hash));
                    target_ids.push(record.id);
                }
                AtomSpec::Link(link_spec) => {
                    let record = self.add_link_recursive(link_spec, false)?;
                    target_composites.push(record.composite_type.clone());
                    target_ids.push(record.id);
                }
            }
        }

        // Identity and storage always use insertion order, even for an
        // unordered link type — `unordered_link_types` only governs how
        // `patterns` canonicalizes fingerprints (see `PatternIndex::register_link`
        // and `query_fingerprint`), never the link's own id or `Outgoing`.
        self.register_type_def(&atom_type);
        let link_type_hash = named_type_hash(&atom_type);
        let id = expression_hash(link_type_hash, &target_ids);
        let slot = Arity::of(target_ids.len()).slot();

        if let Some(existing) = self.links[slot].get(&id) {
            return Ok(existing.clone());
        }

        let composite_type = CompositeType::Seq(
            std::iter::once(CompositeType::Hash(link_type_hash))
                .chain(target_composites)
                .collect(),
        );
        let composite_type_hash = fold_composite_type(&composite_type);

        let record = LinkRecord {
            id,
            composite_type_hash,
            named_type: atom_type,
            named_type_hash: link_type_hash,
            composite_type,
            is_toplevel: toplevel,
            targets: target_ids.clone(),
            extra: spec.extra,
        };
        self.links[slot].insert(id, record.clone());
        self.relations.commit(id, &target_ids);
        self.patterns
            .register_link(id, link_type_hash, composite_type_hash, &target_ids, unordered);

        #[cfg(feature = "telemetry")]
        telemetry::link_inserted(
            &record.id,
            &record.named_type,
            record.targets.len(),
            record.is_toplevel,
        );

        Ok(record)
    }

    /// `true` if a node with this id is stored.
    pub fn node_exists(&self, id: &Handle) -> bool {
        self.nodes.contains_key(id)
    }

    /// `true` if a link with this id is stored, in any arity bucket.
    pub fn link_exists(&self, id: &Handle) -> bool {
        self.links.iter().any(|bucket| bucket.contains_key(id))
    }

    /// Look up a node's id by `(type, name)`.
    ///
    /// # Errors
    /// Returns [`AtomError::NodeMissing`] if no such node is stored.
    pub fn get_node_handle(&self, atom_type: &str, name: &str) -> Result<Handle, AtomError> {
        let id = terminal_hash(atom_type, name);
        if self.nodes.contains_key(&id) {
            Ok(id)
        } else {
            Err(AtomError::NodeMissing {
                details: format!("{atom_type}:{name}"),
            })
        }
    }

    /// Look up a link's id by its exact `(type, ordered targets)` tuple.
    ///
    /// No canonicalization: `targets` is hashed exactly as given, even
    /// for an unordered link type — matching how the link's identity
    /// was computed at insertion time (insertion order, always).
    ///
    /// # Errors
    /// Returns [`AtomError::LinkMissing`] if no such link is stored.
    pub fn get_link_handle(&self, atom_type: &str, targets: &[Handle]) -> Result<Handle, AtomError> {
        let id = expression_hash(named_type_hash(atom_type), targets);
        if self.link_exists(&id) {
            Ok(id)
        } else {
            Err(AtomError::LinkMissing {
                details: format!("{atom_type}:{targets:?}"),
            })
        }
    }

    /// The stored name for a node id.
    ///
    /// # Errors
    /// Returns [`AtomError::NodeMissing`] if no such node is stored.
    pub fn get_node_name(&self, id: &Handle) -> Result<&str, AtomError> {
        self.names
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| AtomError::NodeMissing {
                details: id.to_string(),
            })
    }

    /// A full node record by id.
    ///
    /// # Errors
    /// Returns [`AtomError::NodeMissing`] if no such node is stored.
    pub fn get_node(&self, id: &Handle) -> Result<&NodeRecord, AtomError> {
        self.nodes.get(id).ok_or_else(|| AtomError::NodeMissing {
            details: id.to_string(),
        })
    }

    /// A full link record by id.
    ///
    /// # Errors
    /// Returns [`AtomError::LinkMissing`] if no such link is stored.
    pub fn get_link(&self, id: &Handle) -> Result<&LinkRecord, AtomError> {
        self.links
            .iter()
            .find_map(|bucket| bucket.get(id))
            .ok_or_else(|| AtomError::LinkMissing {
                details: id.to_string(),
            })
    }

    /// Ordered target ids of a stored link.
    ///
    /// # Errors
    /// Returns [`AtomError::LinkMissing`] if no such link is stored.
    pub fn get_link_targets(&self, id: &Handle) -> Result<&[Handle], AtomError> {
        self.get_link(id).map(|record| record.targets.as_slice())
    }

    /// Links that list `target` anywhere in their targets.
    pub fn incoming(&self, target: &Handle) -> impl Iterator<Item = &Handle> {
        self.relations.incoming(target)
    }

    pub(crate) fn patterns(&self) -> &PatternIndex {
        &self.patterns
    }

    pub(crate) fn all_nodes(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.values()
    }

    pub(crate) fn all_links(&self) -> impl Iterator<Item = &LinkRecord> {
        self.links.iter().flat_map(FxHashMap::values)
    }
}
