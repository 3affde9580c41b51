// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pattern and type-template indexes.
//!
//! Populated at link-insertion time (the distilled reference left both
//! of these as read-only stubs; `SPEC_FULL.md` §4.4 resolves that
//! ambiguity in favor of populating them on every link commit).

use rustc_hash::{FxHashMap, FxHashSet};

use crate::hash::{composite_hash, named_type_hash};
use crate::ident::Handle;

/// Pattern-fingerprint and type-template indexes over committed links.
#[derive(Default)]
pub struct PatternIndex {
    /// Fingerprint hash (wildcard-substituted `[type, *targets]`) → links.
    patterns: FxHashMap<Handle, FxHashSet<Handle>>,
    /// Type-hash or composite-type-hash → links of that shape.
    templates: FxHashMap<Handle, FxHashSet<Handle>>,
}

impl PatternIndex {
    /// Register a newly committed link under every wildcard-substituted
    /// fingerprint of its `[link_type_hash, *targets]` vector, and under
    /// both its head type hash and its full composite-type hash in the
    /// template index.
    ///
    /// `targets` is the link's stored, insertion-order target list —
    /// never sorted, matching the link's own identity. When `unordered`
    /// is `true`, fingerprint construction sorts its own local copy, so
    /// that a later query with either target order resolves to the
    /// same fingerprints; this canonicalization is local to the pattern
    /// index and never touches the stored link or `Outgoing`.
    pub fn register_link(
        &mut self,
        link_id: Handle,
        link_type_hash: Handle,
        composite_type_hash: Handle,
        targets: &[Handle],
        unordered: bool,
    ) {
        self.templates
            .entry(link_type_hash)
            .or_default()
            .insert(link_id);
        self.templates
            .entry(composite_type_hash)
            .or_default()
            .insert(link_id);

        let mut canonical_targets = targets.to_vec();
        if unordered {
            canonical_targets.sort();
        }
        let positions: Vec<Handle> = std::iter::once(link_type_hash)
            .chain(canonical_targets)
            .collect();
        let slot_count = positions.len();
        // Every subset of positions may be wildcarded: 2^(arity+1) fingerprints.
        for mask in 0..(1usize << slot_count) {
            let fingerprint_key: Vec<Handle> = positions
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    if mask & (1 << i) != 0 {
                        Handle::WILDCARD
                    } else {
                        *value
                    }
                })
                .collect();
            let fingerprint = composite_hash(&fingerprint_key);
            self.patterns.entry(fingerprint).or_default().insert(link_id);
        }
    }

    /// Links matching a pattern fingerprint (empty set on miss).
    pub fn matched_links(&self, fingerprint: Handle) -> FxHashSet<Handle> {
        self.patterns.get(&fingerprint).cloned().unwrap_or_default()
    }

    /// Links registered under a template hash (empty set on miss).
    pub fn matched_type(&self, template_hash: Handle) -> FxHashSet<Handle> {
        self.templates.get(&template_hash).cloned().unwrap_or_default()
    }
}

/// Build the pattern fingerprint for a query: `composite_hash([head, *targets])`,
/// where `head` is `Handle::WILDCARD` if the query's link type is itself a
/// wildcard, and `targets` is sorted first if `link_type` is unordered.
pub fn query_fingerprint(link_type: &str, target_pattern: &[Handle], unordered: bool) -> Handle {
    let head = if link_type == "*" {
        Handle::WILDCARD
    } else {
        named_type_hash(link_type)
    };
    let mut targets = target_pattern.to_vec();
    if unordered {
        targets.sort();
    }
    let mut key = Vec::with_capacity(targets.len() + 1);
    key.push(head);
    key.extend(targets);
    composite_hash(&key)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn h(byte: u8) -> Handle {
        Handle([byte; 32])
    }

    #[test]
    fn register_link_populates_exact_match_fingerprint() {
        let mut index = PatternIndex::default();
        let link = h(1);
        let link_type_hash = named_type_hash("Similarity");
        let a = h(10);
        let b = h(11);
        index.register_link(link, link_type_hash, h(99), &[a, b], false);

        let exact = query_fingerprint("Similarity", &[a, b], false);
        assert!(index.matched_links(exact).contains(&link));
    }

    #[test]
    fn register_link_populates_wildcard_fingerprints() {
        let mut index = PatternIndex::default();
        let link = h(1);
        let link_type_hash = named_type_hash("Similarity");
        let a = h(10);
        let b = h(11);
        index.register_link(link, link_type_hash, h(99), &[a, b], false);

        // "*" for link_type, second target fixed to b.
        let head = Handle::WILDCARD;
        let fp = composite_hash(&[head, Handle::WILDCARD, b]);
        assert!(index.matched_links(fp).contains(&link));
    }

    #[test]
    fn register_link_count_is_two_to_the_arity_plus_one() {
        let mut index = PatternIndex::default();
        let link = h(1);
        let link_type_hash = named_type_hash("Inheritance");
        let targets = [h(10), h(11), h(12)];
        index.register_link(link, link_type_hash, h(99), &targets, false);

        // arity 3 -> 2^4 = 16 fingerprints, each containing this link.
        let mut seen = FxHashSet::default();
        for mask in 0..16u32 {
            let mut key = vec![if mask & 1 != 0 { Handle::WILDCARD } else { link_type_hash }];
            for (i, t) in targets.iter().enumerate() {
                let bit = 1 << (i + 1);
                key.push(if mask & bit != 0 { Handle::WILDCARD } else { *t });
            }
            seen.insert(composite_hash(&key));
        }
        assert_eq!(seen.len(), 16);
        for fingerprint in seen {
            assert!(index.matched_links(fingerprint).contains(&link));
        }
    }

    #[test]
    fn matched_type_indexes_head_and_full_signature() {
        let mut index = PatternIndex::default();
        let link = h(1);
        let link_type_hash = named_type_hash("Similarity");
        let composite_type_hash = h(55);
        index.register_link(link, link_type_hash, composite_type_hash, &[h(2), h(3)], false);

        assert!(index.matched_type(link_type_hash).contains(&link));
        assert!(index.matched_type(composite_type_hash).contains(&link));
    }

    #[test]
    fn unregistered_fingerprint_returns_empty() {
        let index = PatternIndex::default();
        assert!(index.matched_links(h(123)).is_empty());
        assert!(index.matched_type(h(123)).is_empty());
    }

    /// `register_link(..., unordered = true)` canonicalizes its own
    /// fingerprints even though `targets` is passed in insertion order
    /// (the order the link was actually stored under) — a link stored
    /// as `(b, a)` registers under the same fingerprints as one stored
    /// as `(a, b)`, so a query built from either order finds it.
    #[test]
    fn register_link_canonicalizes_fingerprints_when_unordered() {
        let mut index = PatternIndex::default();
        let link_type_hash = named_type_hash("Similarity");
        let a = h(10);
        let b = h(11);

        // Stored in reverse (insertion) order: (b, a).
        let link = h(1);
        index.register_link(link, link_type_hash, h(99), &[b, a], true);

        // A query built from the forward order still finds it, because
        // query_fingerprint also sorts when `unordered` is true.
        let exact = query_fingerprint("Similarity", &[a, b], true);
        assert!(index.matched_links(exact).contains(&link));

        let wildcard = composite_hash(&[link_type_hash, Handle::WILDCARD, b]);
        assert!(index.matched_links(wildcard).contains(&link));
    }
}
