//! Scripted behavior programs.
//!
//! A [`Program`] is a looping list of primitive ops with a persistent
//! program counter. It is deliberately tiny: enough expressive power for
//! selection to act on (move, steer, scan), with all interaction semantics
//! left to the engine's resolver.

use crate::behavior::{Behavior, BehaviorContext};
use crate::mutate::ProgramMutator;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Degrees turned by a single steering op.
pub const TURN_STEP_DEGREES: f64 = 5.0;

/// One primitive behavior op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Step one unit along the current facing.
    Forward,
    /// Rotate the facing by +[`TURN_STEP_DEGREES`].
    TurnLeft,
    /// Rotate the facing by -[`TURN_STEP_DEGREES`].
    TurnRight,
    /// Scan for overlapping bodies (feeds the interaction resolver).
    Scan,
    /// Do nothing this cycle.
    Wait,
}

impl Op {
    /// Draw a uniformly random op.
    pub fn random(rng: &mut ChaCha8Rng) -> Self {
        match rng.random_range(0..5) {
            0 => Self::Forward,
            1 => Self::TurnLeft,
            2 => Self::TurnRight,
            3 => Self::Scan,
            _ => Self::Wait,
        }
    }
}

/// A looping op list with a persistent program counter.
///
/// The counter survives across ticks — an agent resumes where its budget
/// ran out — and is rewound by [`reset`](Behavior::reset) when a program
/// is cloned into an offspring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    ops: Vec<Op>,
    counter: usize,
}

impl Program {
    /// Build a program from explicit ops.
    ///
    /// The op list must be non-empty; an empty program has no defined
    /// cycle semantics.
    pub fn new(ops: Vec<Op>) -> Self {
        debug_assert!(!ops.is_empty(), "programs must have at least one op");
        Self { ops, counter: 0 }
    }

    /// Generate a random program with a length drawn from
    /// `[min_len, max_len]`.
    pub fn random(rng: &mut ChaCha8Rng, min_len: usize, max_len: usize) -> Self {
        debug_assert!(min_len >= 1 && min_len <= max_len, "bad length range");
        let len = rng.random_range(min_len..=max_len);
        Self::new((0..len).map(|_| Op::random(rng)).collect())
    }

    /// The op list.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// The current program counter.
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub(crate) fn ops_mut(&mut self) -> &mut Vec<Op> {
        &mut self.ops
    }
}

impl Behavior for Program {
    fn name(&self) -> &str {
        "program"
    }

    fn execute(&mut self, ctx: &mut BehaviorContext<'_>, cycle_budget: usize) {
        if self.ops.is_empty() {
            return;
        }
        for _ in 0..cycle_budget {
            match self.ops[self.counter % self.ops.len()] {
                Op::Forward => ctx.forward(),
                Op::TurnLeft => ctx.turn_degrees(TURN_STEP_DEGREES),
                Op::TurnRight => ctx.turn_degrees(-TURN_STEP_DEGREES),
                Op::Scan => ctx.scan(),
                Op::Wait => {}
            }
            self.counter = (self.counter + 1) % self.ops.len();
        }
    }

    fn reset(&mut self) {
        self.counter = 0;
    }

    fn boxed_clone(&self) -> Box<dyn Behavior> {
        Box::new(self.clone())
    }

    fn mutate(&mut self, mutator: &ProgramMutator, rng: &mut ChaCha8Rng) {
        mutator.apply(self, rng);
        // Mutation can shrink the list below the old counter.
        if !self.ops.is_empty() {
            self.counter %= self.ops.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beaker_core::AgentId;
    use beaker_surface::{Facing, OwnerTag, Point, Surface};
    use rand::SeedableRng;

    fn run(program: &mut Program, budget: usize) -> Point {
        let mut surface = Surface::new(100.0, 100.0);
        let id = AgentId(1);
        let handle = surface.add_body(OwnerTag::Agent(id), Point::new(50.0, 50.0), 4.0);
        let mut facing = Facing::from_degrees(0.0);
        let mut discoveries = Vec::new();
        let mut ctx =
            BehaviorContext::new(&mut surface, handle, id, &mut facing, 0.0, &mut discoveries);
        program.execute(&mut ctx, budget);
        drop(ctx);
        surface.center(handle).unwrap()
    }

    #[test]
    fn counter_persists_across_executions() {
        let mut program = Program::new(vec![Op::Forward, Op::Wait, Op::Wait]);
        run(&mut program, 2);
        assert_eq!(program.counter(), 2);
        run(&mut program, 2);
        assert_eq!(program.counter(), 1);
    }

    #[test]
    fn reset_rewinds_to_a_fresh_core() {
        let mut program = Program::new(vec![Op::Forward, Op::Wait]);
        run(&mut program, 1);
        assert_eq!(program.counter(), 1);
        program.reset();
        assert_eq!(program.counter(), 0);
    }

    #[test]
    fn forward_ops_accumulate_movement() {
        let mut program = Program::new(vec![Op::Forward]);
        let p = run(&mut program, 3);
        assert!((p.x - 53.0).abs() < 1e-12);
        assert!((p.y - 50.0).abs() < 1e-12);
    }

    #[test]
    fn random_program_respects_length_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let program = Program::random(&mut rng, 3, 9);
            assert!((3..=9).contains(&program.ops().len()));
        }
    }

    #[test]
    fn random_program_is_deterministic_per_seed() {
        let a = Program::random(&mut ChaCha8Rng::seed_from_u64(11), 4, 8);
        let b = Program::random(&mut ChaCha8Rng::seed_from_u64(11), 4, 8);
        assert_eq!(a, b);
    }
}
