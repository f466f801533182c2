//! Per-tick pending-interaction registries.
//!
//! These sets carry intra-tick state only: they are populated during the
//! behavior and bookkeeping phases, consulted by the resolver and the
//! drain, and cleared unconditionally in the reset phase. Membership tests
//! are the engine's sole idempotency gates — an agent enters the kill set
//! at most once per tick, and a resource takes at most one claimant.

use beaker_core::{AgentId, ResourceId};
use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// Insert-once membership set over stable ids.
#[derive(Clone, Debug, Default)]
pub struct PendingSet<I> {
    set: IndexSet<I>,
}

impl<I: Copy + Eq + Hash> PendingSet<I> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            set: IndexSet::new(),
        }
    }

    /// Record an id. Returns `true` only for the first insertion; callers
    /// use the return value to decide whether to enqueue a matching event.
    pub fn insert(&mut self, id: I) -> bool {
        self.set.insert(id)
    }

    /// Whether the id is already pending.
    pub fn contains(&self, id: I) -> bool {
        self.set.contains(&id)
    }

    /// Withdraw an id. Returns whether it was present.
    pub fn remove(&mut self, id: I) -> bool {
        self.set.shift_remove(&id)
    }

    /// Number of pending ids.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Drop everything. Runs in the reset phase.
    pub fn clear(&mut self) {
        self.set.clear();
    }
}

/// First-claim-wins registry of resource claims.
#[derive(Clone, Debug, Default)]
pub struct PendingConsume {
    claims: IndexMap<ResourceId, AgentId>,
}

impl PendingConsume {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            claims: IndexMap::new(),
        }
    }

    /// Try to claim a resource for a claimant.
    ///
    /// Returns `true` if this is the first claim this tick; later claims
    /// for the same resource leave the original claimant in place.
    pub fn claim(&mut self, resource: ResourceId, claimant: AgentId) -> bool {
        if self.claims.contains_key(&resource) {
            return false;
        }
        self.claims.insert(resource, claimant);
        true
    }

    /// Who holds the claim on a resource, if anyone.
    pub fn claimant(&self, resource: ResourceId) -> Option<AgentId> {
        self.claims.get(&resource).copied()
    }

    /// Number of claimed resources.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether no resource is claimed.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Drop every claim. Runs in the reset phase.
    pub fn clear(&mut self) {
        self.claims.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_set_inserts_once() {
        let mut set = PendingSet::new();
        assert!(set.insert(AgentId(1)));
        assert!(!set.insert(AgentId(1)));
        assert!(set.contains(AgentId(1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn pending_set_clear_resets_membership() {
        let mut set = PendingSet::new();
        set.insert(AgentId(1));
        set.clear();
        assert!(set.is_empty());
        assert!(set.insert(AgentId(1)), "cleared ids can be re-inserted");
    }

    #[test]
    fn first_claim_wins() {
        let mut consume = PendingConsume::new();
        assert!(consume.claim(ResourceId(5), AgentId(1)));
        assert!(!consume.claim(ResourceId(5), AgentId(2)));
        assert_eq!(consume.claimant(ResourceId(5)), Some(AgentId(1)));
        assert_eq!(consume.len(), 1);
    }

    #[test]
    fn distinct_resources_take_distinct_claimants() {
        let mut consume = PendingConsume::new();
        assert!(consume.claim(ResourceId(1), AgentId(1)));
        assert!(consume.claim(ResourceId(2), AgentId(1)));
        assert_eq!(consume.claimant(ResourceId(2)), Some(AgentId(1)));
    }
}
