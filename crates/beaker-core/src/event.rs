//! Per-tick population events.
//!
//! Events record intents discovered during the behavior and bookkeeping
//! phases; they are applied only when the tick controller drains its queue,
//! strictly FIFO in discovery order. Each variant carries its full payload
//! inline — no auxiliary map is needed to recover context at drain time.

use crate::id::{AgentId, ResourceId};

/// Why an agent was marked for death.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathCause {
    /// Energy fell to zero or below after metabolism.
    Starvation,
    /// Claimed as prey by a larger predator.
    Predation,
}

/// A deferred population mutation, applied during the drain phase.
///
/// Duplicate events for the same entity are possible in the queue; the
/// drain phase makes their application at-most-once (a `Kill` for an
/// already-removed agent changes no state and no counters).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Remove an agent from the population.
    Kill {
        /// The agent to remove.
        agent: AgentId,
        /// Why the agent is being removed.
        cause: DeathCause,
    },
    /// Award a claimed resource to the agent that discovered it first.
    Consume {
        /// The claimed resource.
        resource: ResourceId,
        /// The agent credited if it is still alive at drain time.
        claimant: AgentId,
    },
    /// Instantiate an offspring for a parent that crossed the
    /// reproduction threshold.
    Birth {
        /// The reproducing agent.
        parent: AgentId,
    },
}
