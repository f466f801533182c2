//! Body handles and owner tags.
//!
//! A [`BodyHandle`] is the transient address of a body on the surface. It
//! is generation-scoped: the generation counter lets the surface reject a
//! handle whose slot has been reused, in O(1), without a lookup table.
//! Handles never leave the process and are never persisted; durable
//! identity lives in the [`OwnerTag`]'s stable id.

use beaker_core::{AgentId, ResourceId};
use std::fmt;

/// What kind of entity a body represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// A live agent.
    Agent,
    /// A grazeable resource.
    Resource,
}

/// Stable identity of the entity a body belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OwnerTag {
    /// The body belongs to an agent.
    Agent(AgentId),
    /// The body belongs to a resource.
    Resource(ResourceId),
}

impl OwnerTag {
    /// The kind of body this owner implies.
    pub fn kind(&self) -> BodyKind {
        match self {
            Self::Agent(_) => BodyKind::Agent,
            Self::Resource(_) => BodyKind::Resource,
        }
    }
}

impl fmt::Display for OwnerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agent(id) => write!(f, "{id}"),
            Self::Resource(id) => write!(f, "{id}"),
        }
    }
}

/// Generation-scoped address of a body slot on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct BodyHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl BodyHandle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index. Transient; meaningful only to the surface.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation the slot had when this handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BodyHandle(slot={}, gen={})", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_tag_kind() {
        assert_eq!(OwnerTag::Agent(AgentId(1)).kind(), BodyKind::Agent);
        assert_eq!(OwnerTag::Resource(ResourceId(1)).kind(), BodyKind::Resource);
    }

    #[test]
    fn handle_display() {
        let h = BodyHandle::new(3, 7);
        assert_eq!(h.to_string(), "BodyHandle(slot=3, gen=7)");
        assert_eq!(h.index(), 3);
        assert_eq!(h.generation(), 7);
    }
}
