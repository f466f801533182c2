//! Beaker: a tick-based 2D agent ecology sandbox.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Beaker sub-crates. For most users, adding `beaker` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use beaker::prelude::*;
//!
//! // A small world: defaults everywhere, a handful of random agents.
//! let config = WorldConfig {
//!     initial_agents: 50,
//!     initial_resources: 50,
//!     ..WorldConfig::default()
//! };
//! let mut world = World::new(config).unwrap();
//! world.populate();
//! for _ in 0..10 {
//!     world.tick();
//! }
//! assert_eq!(world.stats().tick, beaker::types::TickId(10));
//! assert_eq!(world.stats().resources, 50);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `beaker-core` | Ids, events, config, errors, heat classifier, stable-id store |
//! | [`surface`] | `beaker-surface` | Toroidal surface, body handles, facing |
//! | [`brain`] | `beaker-brain` | Behavior trait, scripted programs, mutation |
//! | [`world`] | `beaker-world` | The world, tick phases, statistics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and the entity store (`beaker-core`).
pub use beaker_core as types;

/// The 2D toroidal surface and body handles (`beaker-surface`).
pub use beaker_surface as surface;

/// The behavior seam and the scripted program engine (`beaker-brain`).
pub use beaker_brain as brain;

/// The tick engine (`beaker-world`).
pub use beaker_world as world;

/// Common imports for typical Beaker usage.
///
/// ```rust
/// use beaker::prelude::*;
/// ```
pub mod prelude {
    // Identity and events
    pub use beaker_core::{AgentId, DeathCause, Event, HeatClass, ResourceId, TickId};

    // Configuration and errors
    pub use beaker_core::{ConfigError, EdibilityPolicy, StoreError, WorldConfig};

    // Surface
    pub use beaker_surface::{BodyHandle, Facing, OwnerTag, Point, Surface, SurfaceError};

    // Behaviors
    pub use beaker_brain::{Behavior, BehaviorContext, Op, Program, ProgramMutator};

    // Engine
    pub use beaker_world::{World, WorldStats};
}
