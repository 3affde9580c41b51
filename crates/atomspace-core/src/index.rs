// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bidirectional outgoing/incoming relation indexes.
//!
//! Both maps are updated from a single [`RelationIndex::commit`] call
//! made once, right after a new link record lands in its arity bucket —
//! never before, never on re-insertion of an existing link. This is
//! what keeps "L ∈ Incoming[T] iff T ∈ Outgoing[L]" true by
//! construction rather than by careful call-site discipline.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::ident::Handle;

/// Outgoing/incoming adjacency for links.
#[derive(Default)]
pub struct RelationIndex {
    outgoing: FxHashMap<Handle, Vec<Handle>>,
    incoming: FxHashMap<Handle, FxHashSet<Handle>>,
}

impl RelationIndex {
    /// Record a newly inserted link's targets.
    ///
    /// Must be called exactly once per distinct link, after the link's
    /// record has been stored. Calling it twice for the same
    /// `link_id` would double up `incoming` entries; callers guard
    /// this with the arity-bucket exists-check before ever reaching
    /// `commit`.
    pub fn commit(&mut self, link_id: Handle, targets: &[Handle]) {
        self.outgoing.insert(link_id, targets.to_vec());
        for target in targets {
            self.incoming.entry(*target).or_default().insert(link_id);
        }
    }

    /// Ordered targets of `link_id`, if it has been committed.
    pub fn outgoing(&self, link_id: &Handle) -> Option<&[Handle]> {
        self.outgoing.get(link_id).map(Vec::as_slice)
    }

    /// Links that reference `target` anywhere in their targets.
    pub fn incoming(&self, target: &Handle) -> impl Iterator<Item = &Handle> {
        self.incoming.get(target).into_iter().flatten()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn h(byte: u8) -> Handle {
        Handle([byte; 32])
    }

    #[test]
    fn commit_populates_both_directions() {
        let mut index = RelationIndex::default();
        let link = h(1);
        let a = h(2);
        let b = h(3);
        index.commit(link, &[a, b]);

        assert_eq!(index.outgoing(&link).unwrap(), &[a, b]);
        assert!(index.incoming(&a).any(|l| *l == link));
        assert!(index.incoming(&b).any(|l| *l == link));
    }

    #[test]
    fn incoming_accumulates_across_links() {
        let mut index = RelationIndex::default();
        let target = h(9);
        let link_a = h(10);
        let link_b = h(11);
        index.commit(link_a, &[target]);
        index.commit(link_b, &[target]);

        let mut incoming: Vec<_> = index.incoming(&target).copied().collect();
        incoming.sort();
        let mut expected = [link_a, link_b];
        expected.sort();
        assert_eq!(incoming, expected);
    }

    #[test]
    fn outgoing_preserves_insertion_order() {
        let mut index = RelationIndex::default();
        let link = h(20);
        let targets = vec![h(3), h(1), h(2)];
        index.commit(link, &targets);
        assert_eq!(index.outgoing(&link).unwrap(), targets.as_slice());
    }

    #[test]
    fn missing_link_has_no_outgoing() {
        let index = RelationIndex::default();
        assert!(index.outgoing(&h(99)).is_none());
    }
}
