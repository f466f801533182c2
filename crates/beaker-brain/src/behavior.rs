//! The behavior trait and its execution context.

use crate::mutate::ProgramMutator;
use beaker_core::AgentId;
use beaker_surface::{BodyHandle, Facing, OwnerTag, Surface};
use rand_chacha::ChaCha8Rng;

/// One spatial overlap discovered by a scan during the behavior phase.
///
/// Discoveries are raw observations; the engine's interaction resolver
/// decides what, if anything, they mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discovery {
    /// The body that performed the scan.
    pub subject: OwnerTag,
    /// The body it overlapped.
    pub other: OwnerTag,
}

/// Capabilities granted to a behavior for one execution.
///
/// Borrows the surface and the agent's transient state for the duration of
/// [`Behavior::execute`]. Everything a behavior does flows through these
/// methods, so the engine can guarantee that the behavior phase records
/// intents and movement only.
pub struct BehaviorContext<'a> {
    surface: &'a mut Surface,
    handle: BodyHandle,
    subject: AgentId,
    facing: &'a mut Facing,
    energy: f64,
    discoveries: &'a mut Vec<Discovery>,
}

impl<'a> BehaviorContext<'a> {
    /// Assemble a context for one agent's execution.
    pub fn new(
        surface: &'a mut Surface,
        handle: BodyHandle,
        subject: AgentId,
        facing: &'a mut Facing,
        energy: f64,
        discoveries: &'a mut Vec<Discovery>,
    ) -> Self {
        Self {
            surface,
            handle,
            subject,
            facing,
            energy,
            discoveries,
        }
    }

    /// Step one unit forward along the current facing, wrapping at the
    /// surface edges.
    pub fn forward(&mut self) {
        let (dx, dy) = self.facing.unit();
        let moved = self.surface.translate_wrap(self.handle, dx, dy);
        debug_assert!(moved.is_ok(), "agent handle is live for the whole phase");
    }

    /// Rotate the facing by the given degrees (negative = clockwise).
    pub fn turn_degrees(&mut self, degrees: f64) {
        self.facing.rotate_degrees(degrees);
    }

    /// Scan for overlapping bodies, recording each as a [`Discovery`].
    pub fn scan(&mut self) {
        let Ok(hits) = self.surface.find_overlaps(self.handle) else {
            debug_assert!(false, "agent handle is live for the whole phase");
            return;
        };
        let subject = OwnerTag::Agent(self.subject);
        self.discoveries.extend(hits.iter().map(|hit| Discovery {
            subject,
            other: hit.owner,
        }));
    }

    /// The agent's energy at the start of this execution.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// The agent's body radius.
    pub fn radius(&self) -> f64 {
        self.surface.radius(self.handle).unwrap_or_default()
    }

    /// The current facing.
    pub fn facing(&self) -> Facing {
        *self.facing
    }
}

/// Something that drives an agent for its per-tick cycle budget.
///
/// Implementations hold whatever persistent execution state they need (a
/// program counter, registers); [`reset`](Behavior::reset) returns that
/// state to a fresh initial core, which is how offspring start.
pub trait Behavior {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Run for up to `cycle_budget` cycles, acting through `ctx`.
    fn execute(&mut self, ctx: &mut BehaviorContext<'_>, cycle_budget: usize);

    /// Return execution state to a fresh initial core.
    fn reset(&mut self);

    /// Clone into a new boxed behavior (used by the offspring protocol).
    fn boxed_clone(&self) -> Box<dyn Behavior>;

    /// Apply the mutation operator.
    ///
    /// The default is a no-op so fixed behaviors (test doubles, scripted
    /// baselines) are immune to mutation.
    fn mutate(&mut self, mutator: &ProgramMutator, rng: &mut ChaCha8Rng) {
        let _ = (mutator, rng);
    }
}
