//! Tick engine for the Beaker ecology sandbox.
//!
//! The [`World`] owns every subsystem: the population stores, the surface,
//! the pending-interaction registries, the event queue, and the seeded RNG.
//! Each [`World::tick`] runs five phases in a fixed order — behavior,
//! bookkeeping, event drain, registry reset, statistics — and all
//! population mutation is deferred through the FIFO [`EventQueue`], so
//! nothing dies, eats, or is born in the middle of a phase walk.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod pending;
pub mod queue;
pub mod resolver;
pub mod stats;
pub mod world;

pub use agent::{Agent, Resource};
pub use pending::{PendingConsume, PendingSet};
pub use queue::EventQueue;
pub use resolver::Resolution;
pub use stats::WorldStats;
pub use world::World;
