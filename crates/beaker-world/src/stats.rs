//! Per-tick world statistics.

use beaker_core::TickId;

/// Snapshot of population state and event counters.
///
/// The heat vectors are recomputed from the live population at the end of
/// every tick; the event counters are cumulative over the world's life.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorldStats {
    /// Tick this snapshot describes.
    pub tick: TickId,
    /// Live agents.
    pub population: usize,
    /// Resource nodes on the surface.
    pub resources: usize,
    /// Live agents per heat class.
    pub heat_counts: Vec<usize>,
    /// Mean body radius per heat class (0.0 for an empty class).
    pub heat_mean_radius: Vec<f64>,
    /// Agents removed after energy fell to zero or below.
    pub deaths_starvation: u64,
    /// Agents removed as claimed prey.
    pub deaths_predation: u64,
    /// Offspring actually instantiated.
    pub births: u64,
    /// Offspring dropped because the population was at capacity.
    /// The parent's reproduction cost is not refunded.
    pub capacity_drops: u64,
    /// Resource claims that drained successfully.
    pub resources_consumed: u64,
    /// Discoveries whose subject was not an agent. Scans tag the subject
    /// themselves, so any count here indicates a resolver misuse bug.
    pub resolver_misuse: u64,
}

impl WorldStats {
    /// Create zeroed statistics sized for the given heat bucket count.
    pub fn new(heat_buckets: usize) -> Self {
        Self {
            heat_counts: vec![0; heat_buckets],
            heat_mean_radius: vec![0.0; heat_buckets],
            ..Self::default()
        }
    }
}
