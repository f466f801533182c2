//! Mutation operators for offspring.
//!
//! [`ProgramMutator`] perturbs a cloned program op-by-op; `mutate_radius`
//! perturbs an offspring's body radius. Both draw from the world's single
//! seeded RNG stream, so offspring are reproducible for a fixed seed.
//! Gaussian draws use the Box-Muller transform to avoid a `rand_distr`
//! dependency.

use crate::program::{Op, Program};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::fmt;

/// Errors from [`ProgramMutator::new`].
#[derive(Clone, Debug, PartialEq)]
pub enum MutatorError {
    /// A mutation rate lies outside `[0, 1]`.
    RateOutOfRange {
        /// Name of the offending rate.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// The program length bounds are unusable.
    BadLengthRange {
        /// Configured minimum length.
        min: usize,
        /// Configured maximum length.
        max: usize,
    },
}

impl fmt::Display for MutatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateOutOfRange { name, value } => {
                write!(f, "{name} must lie in [0, 1], got {value}")
            }
            Self::BadLengthRange { min, max } => {
                write!(f, "program length range [{min}, {max}] is unusable (min >= 1, min <= max)")
            }
        }
    }
}

impl Error for MutatorError {}

/// Per-op mutation operator for behavior programs.
///
/// Each op independently risks substitution; insertions and deletions are
/// likewise drawn per op, bounded so the program length stays inside
/// `[min_len, max_len]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgramMutator {
    substitute_rate: f64,
    insert_rate: f64,
    delete_rate: f64,
    min_len: usize,
    max_len: usize,
}

impl ProgramMutator {
    /// Create a validated mutator.
    ///
    /// # Errors
    ///
    /// [`MutatorError::RateOutOfRange`] for a rate outside `[0, 1]`;
    /// [`MutatorError::BadLengthRange`] if `min_len` is zero or exceeds
    /// `max_len`.
    pub fn new(
        substitute_rate: f64,
        insert_rate: f64,
        delete_rate: f64,
        min_len: usize,
        max_len: usize,
    ) -> Result<Self, MutatorError> {
        for (name, value) in [
            ("substitute_rate", substitute_rate),
            ("insert_rate", insert_rate),
            ("delete_rate", delete_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MutatorError::RateOutOfRange { name, value });
            }
        }
        if min_len == 0 || min_len > max_len {
            return Err(MutatorError::BadLengthRange {
                min: min_len,
                max: max_len,
            });
        }
        Ok(Self {
            substitute_rate,
            insert_rate,
            delete_rate,
            min_len,
            max_len,
        })
    }

    /// Smallest permitted program length.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Largest permitted program length.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Mutate a program in place.
    pub fn apply(&self, program: &mut Program, rng: &mut ChaCha8Rng) {
        let ops = program.ops_mut();

        for op in ops.iter_mut() {
            if rng.random_bool(self.substitute_rate) {
                *op = Op::random(rng);
            }
        }

        // Deletions walk back-to-front so indices stay valid.
        for i in (0..ops.len()).rev() {
            if ops.len() <= self.min_len {
                break;
            }
            if rng.random_bool(self.delete_rate) {
                ops.remove(i);
            }
        }

        for i in (0..ops.len()).rev() {
            if ops.len() >= self.max_len {
                break;
            }
            if rng.random_bool(self.insert_rate) {
                let op = Op::random(rng);
                ops.insert(i, op);
            }
        }
    }
}

impl Default for ProgramMutator {
    fn default() -> Self {
        Self {
            substitute_rate: 0.001,
            insert_rate: 0.001,
            delete_rate: 0.001,
            min_len: 4,
            max_len: 32,
        }
    }
}

/// Standard-normal draw via Box-Muller.
fn unit_normal(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Derive an offspring radius from its parent's.
///
/// With probability `rate`, perturb by a unit-normal draw; the result is
/// always clamped to `[min_radius, max_radius]`.
pub fn mutate_radius(
    parent_radius: f64,
    rate: f64,
    min_radius: f64,
    max_radius: f64,
    rng: &mut ChaCha8Rng,
) -> f64 {
    if rng.random_bool(rate) {
        (parent_radius + unit_normal(rng)).clamp(min_radius, max_radius)
    } else {
        parent_radius.clamp(min_radius, max_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn rejects_out_of_range_rates() {
        let result = ProgramMutator::new(1.5, 0.0, 0.0, 1, 8);
        assert_eq!(
            result,
            Err(MutatorError::RateOutOfRange {
                name: "substitute_rate",
                value: 1.5
            })
        );
    }

    #[test]
    fn rejects_bad_length_range() {
        assert!(matches!(
            ProgramMutator::new(0.0, 0.0, 0.0, 0, 8),
            Err(MutatorError::BadLengthRange { .. })
        ));
        assert!(matches!(
            ProgramMutator::new(0.0, 0.0, 0.0, 9, 8),
            Err(MutatorError::BadLengthRange { .. })
        ));
    }

    #[test]
    fn zero_rates_leave_the_program_untouched() {
        let mutator = ProgramMutator::new(0.0, 0.0, 0.0, 1, 32).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut program = Program::new(vec![Op::Forward, Op::Scan, Op::Wait]);
        let before = program.clone();
        mutator.apply(&mut program, &mut rng);
        assert_eq!(program, before);
    }

    #[test]
    fn length_stays_inside_bounds_under_heavy_mutation() {
        let mutator = ProgramMutator::new(1.0, 1.0, 1.0, 2, 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let mut program = Program::random(&mut rng, 2, 6);
            mutator.apply(&mut program, &mut rng);
            let len = program.ops().len();
            assert!((2..=6).contains(&len), "length {len} escaped bounds");
        }
    }

    #[test]
    fn mutation_is_deterministic_per_seed() {
        let mutator = ProgramMutator::new(0.5, 0.5, 0.5, 2, 16).unwrap();
        let run = || {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let mut program = Program::new(vec![Op::Forward; 8]);
            mutator.apply(&mut program, &mut rng);
            program
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn radius_mutation_clamps_to_config_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..200 {
            let r = mutate_radius(7.9, 1.0, 4.0, 8.0, &mut rng);
            assert!((4.0..=8.0).contains(&r));
        }
    }

    #[test]
    fn zero_rate_radius_mutation_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(mutate_radius(6.0, 0.0, 4.0, 8.0, &mut rng), 6.0);
    }
}
