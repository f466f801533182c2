//! World configuration and startup validation.
//!
//! [`WorldConfig`] carries pure numeric thresholds only — no control flow
//! couples to it beyond reading values. [`validate()`](WorldConfig::validate)
//! runs at world construction, before any tick, and rejects malformed
//! configurations as fatal [`ConfigError`]s.

use crate::error::ConfigError;

/// Lower-bound formula for the predation edibility window.
///
/// The window's upper bound is always
/// `predator_radius + predator_radius * max_ratio`; the lower bound is a
/// named policy with two defensible readings, selected per world rather
/// than hard-coded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdibilityPolicy {
    /// `lower = predator_radius * min_ratio`.
    #[default]
    Scaled,
    /// `lower = predator_radius - predator_radius * min_ratio`.
    Offset,
}

/// Numeric configuration for a Beaker world.
///
/// Construct with struct-update syntax over [`WorldConfig::default()`] and
/// validate before use. All energies are in the same abstract unit; all
/// distances are in surface units.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Seed for the world's deterministic RNG stream.
    pub seed: u64,
    /// Behavior-engine cycles granted to each agent per tick.
    pub cycle_budget: usize,
    /// Energy subtracted from every live agent each tick.
    pub metabolic_cost: f64,
    /// Energy granted to injected and newborn agents.
    pub initial_energy: f64,
    /// Ceiling applied to every energy grant.
    pub energy_cap: f64,
    /// Post-metabolism energy above which an agent queues a birth.
    pub reproduction_threshold: f64,
    /// Divisor applied to the parent's energy when a birth is enqueued.
    /// The cost is paid at enqueue time and is not refunded if the birth
    /// later drops at the population cap.
    pub reproduction_divisor: f64,
    /// Divisor applied to the prey's energy to compute the predator's gain.
    pub eat_divisor: f64,
    /// Lower-bound ratio of the edibility window.
    pub min_ratio: f64,
    /// Upper-bound ratio of the edibility window.
    pub max_ratio: f64,
    /// Which lower-bound formula the edibility window uses.
    pub edibility: EdibilityPolicy,
    /// Smallest agent radius.
    pub min_radius: f64,
    /// Largest agent radius.
    pub max_radius: f64,
    /// Radius of resource bodies on the surface.
    pub resource_radius: f64,
    /// Fraction of the radius range at or below which an agent can graze:
    /// the grazing cutoff is
    /// `min_radius + (max_radius - min_radius) * consume_threshold`.
    pub consume_threshold: f64,
    /// Energy granted for a successfully drained resource claim.
    pub resource_energy: f64,
    /// Hard cap on the live agent population.
    pub max_population: usize,
    /// Number of heat-classifier buckets.
    pub heat_buckets: usize,
    /// Probability that an offspring's radius is perturbed.
    pub radius_mut_rate: f64,
    /// Agents injected by the world's `populate()` at start.
    pub initial_agents: usize,
    /// Resources injected at world start.
    pub initial_resources: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 900.0,
            seed: 2,
            cycle_budget: 5,
            metabolic_cost: 1.0,
            initial_energy: 1000.0,
            energy_cap: 3000.0,
            reproduction_threshold: 2000.0,
            reproduction_divisor: 2.0,
            eat_divisor: 4.0,
            min_ratio: 0.8,
            max_ratio: 0.0,
            edibility: EdibilityPolicy::Scaled,
            min_radius: 4.0,
            max_radius: 8.0,
            resource_radius: 3.0,
            consume_threshold: 0.5,
            resource_energy: 300.0,
            max_population: 3000,
            heat_buckets: 6,
            radius_mut_rate: 0.001,
            initial_agents: 500,
            initial_resources: 500,
        }
    }
}

impl WorldConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: zero bucket count, an empty
    /// radius range, non-positive world extent, negative thresholds,
    /// non-positive divisors, out-of-range rates, or a zero capacity or
    /// cycle budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heat_buckets == 0 {
            return Err(ConfigError::ZeroHeatBuckets);
        }
        if !(self.min_radius < self.max_radius) || !self.min_radius.is_finite() {
            return Err(ConfigError::RadiusRangeEmpty {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(ConfigError::NonPositiveExtent {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("metabolic_cost", self.metabolic_cost),
            ("initial_energy", self.initial_energy),
            ("energy_cap", self.energy_cap),
            ("reproduction_threshold", self.reproduction_threshold),
            ("resource_energy", self.resource_energy),
            ("resource_radius", self.resource_radius),
            ("min_ratio", self.min_ratio),
            ("max_ratio", self.max_ratio),
        ] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ConfigError::NegativeThreshold { name, value });
            }
        }
        for (name, value) in [
            ("reproduction_divisor", self.reproduction_divisor),
            ("eat_divisor", self.eat_divisor),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::NonPositiveDivisor { name, value });
            }
        }
        for (name, value) in [
            ("consume_threshold", self.consume_threshold),
            ("radius_mut_rate", self.radius_mut_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.max_population == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.cycle_budget == 0 {
            return Err(ConfigError::ZeroCycleBudget);
        }
        Ok(())
    }

    /// Radius at or below which an agent can graze resources.
    pub fn consume_radius_cutoff(&self) -> f64 {
        self.min_radius + (self.max_radius - self.min_radius) * self.consume_threshold
    }

    /// Edibility window `(lower, upper)` for a predator of the given radius.
    ///
    /// Prey whose radius lies strictly inside the window can be claimed.
    pub fn edibility_window(&self, predator_radius: f64) -> (f64, f64) {
        let lower = match self.edibility {
            EdibilityPolicy::Scaled => predator_radius * self.min_ratio,
            EdibilityPolicy::Offset => predator_radius - predator_radius * self.min_ratio,
        };
        let upper = predator_radius + predator_radius * self.max_ratio;
        (lower, upper)
    }
}
