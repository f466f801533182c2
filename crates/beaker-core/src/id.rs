//! Strongly-typed identifiers.
//!
//! Stable ids are durable: they are minted monotonically by a
//! [`Store`](crate::store::Store) and never reused, so external code can
//! hold them across tick boundaries and resolve them fresh on each access.
//! They are deliberately distinct from any transient slot or body index.

use std::fmt;
use std::hash::Hash;

/// Trait for raw-u64-backed stable identifiers minted by a store.
///
/// Implemented by [`AgentId`] and [`ResourceId`] so the generic
/// [`Store`](crate::store::Store) can mint either kind.
pub trait StableId: Copy + Eq + Hash + fmt::Debug {
    /// Construct an id from its raw counter value.
    fn from_raw(raw: u64) -> Self;
    /// The raw counter value.
    fn raw(self) -> u64;
}

/// Durable identity of an agent.
///
/// Assigned monotonically at insertion; never reused while the process
/// lives, even after the agent dies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u64);

impl StableId for AgentId {
    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
    fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Durable identity of a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u64);

impl StableId for ResourceId {
    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
    fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource#{}", self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the world advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Discrete ecological size bucket derived from a body radius.
///
/// Produced only by [`HeatClassifier`](crate::heat::HeatClassifier), so the
/// interaction rules and the statistics subsystem can never disagree on
/// classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeatClass(pub usize);

impl fmt::Display for HeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_raw() {
        assert_eq!(AgentId::from_raw(7).raw(), 7);
        assert_eq!(ResourceId::from_raw(9).raw(), 9);
    }

    #[test]
    fn display_formats() {
        assert_eq!(AgentId(3).to_string(), "agent#3");
        assert_eq!(ResourceId(4).to_string(), "resource#4");
        assert_eq!(TickId(12).to_string(), "12");
        assert_eq!(HeatClass(2).to_string(), "2");
    }
}
