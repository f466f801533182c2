//! Population records owned by the world's stores.

use beaker_brain::Behavior;
use beaker_core::HeatClass;
use beaker_surface::{BodyHandle, Facing};

/// One live agent.
///
/// The record owns the agent's behavior and its non-spatial state; the
/// surface owns the spatial state (center, radius) behind `handle`. The
/// heat class is assigned from the radius at spawn and never changes,
/// since radii are immutable for an agent's lifetime.
pub struct Agent {
    /// Surface body backing this agent.
    pub handle: BodyHandle,
    /// Current heading.
    pub facing: Facing,
    /// Current energy.
    pub energy: f64,
    /// Size bucket assigned at spawn.
    pub heat: HeatClass,
    /// What drives the agent each tick.
    pub behavior: Box<dyn Behavior>,
}

/// One resource node.
///
/// Resources are persistent: a drained claim relocates the body rather
/// than removing it, so the record is nothing but the surface link.
pub struct Resource {
    /// Surface body backing this resource.
    pub handle: BodyHandle,
}
