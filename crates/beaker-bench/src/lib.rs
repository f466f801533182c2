//! Benchmark profiles for the Beaker ecology sandbox.
//!
//! Provides pre-built, populated worlds for benchmarking:
//!
//! - [`reference_world`]: the default configuration (500 agents, 500
//!   resources on a 1400x900 surface)
//! - [`stress_world`]: 2000 agents and 2000 resources on a 2800x1800
//!   surface

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use beaker_core::WorldConfig;
use beaker_world::World;

/// Build and populate the reference profile.
pub fn reference_world(seed: u64) -> World {
    let config = WorldConfig {
        seed,
        ..WorldConfig::default()
    };
    let mut world = World::new(config).expect("reference profile is valid");
    world.populate();
    world
}

/// Build and populate the stress profile: four times the population on
/// four times the area.
pub fn stress_world(seed: u64) -> World {
    let config = WorldConfig {
        seed,
        width: 2800.0,
        height: 1800.0,
        initial_agents: 2000,
        initial_resources: 2000,
        max_population: 12_000,
        ..WorldConfig::default()
    };
    let mut world = World::new(config).expect("stress profile is valid");
    world.populate();
    world
}
