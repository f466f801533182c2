//! The world: construction, injection, and the five-phase tick.

use crate::agent::{Agent, Resource};
use crate::pending::{PendingConsume, PendingSet};
use crate::queue::EventQueue;
use crate::resolver::Resolver;
use crate::stats::WorldStats;
use beaker_brain::{mutate_radius, Behavior, BehaviorContext, Discovery, Program, ProgramMutator};
use beaker_core::{
    AgentId, ConfigError, DeathCause, Event, HeatClass, HeatClassifier, ResourceId, Store,
    StoreError, TickId, WorldConfig,
};
use beaker_surface::{Facing, OwnerTag, Point, Surface};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A complete simulation world.
///
/// All randomness flows through one [`ChaCha8Rng`] seeded from the
/// configuration, and every collection walk is in deterministic insertion
/// order, so two worlds built from equal configurations produce identical
/// histories tick for tick.
pub struct World {
    config: WorldConfig,
    heat: HeatClassifier,
    mutator: ProgramMutator,
    rng: ChaCha8Rng,
    surface: Surface,
    agents: Store<AgentId, Agent>,
    resources: Store<ResourceId, Resource>,
    pending_kill: PendingSet<AgentId>,
    pending_birth: PendingSet<AgentId>,
    pending_consume: PendingConsume,
    events: EventQueue,
    discoveries: Vec<Discovery>,
    tick: TickId,
    stats: WorldStats,
}

impl World {
    /// Build a world from a validated configuration, with the default
    /// program mutator.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the configuration fails validation. Nothing is
    /// constructed on error.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        Self::with_mutator(config, ProgramMutator::default())
    }

    /// Build a world with an explicit program mutator.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the configuration fails validation.
    pub fn with_mutator(
        config: WorldConfig,
        mutator: ProgramMutator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let heat = HeatClassifier::new(config.min_radius, config.max_radius, config.heat_buckets);
        let stats = WorldStats::new(config.heat_buckets);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let surface = Surface::new(config.width, config.height);
        Ok(Self {
            config,
            heat,
            mutator,
            rng,
            surface,
            agents: Store::new(),
            resources: Store::new(),
            pending_kill: PendingSet::new(),
            pending_birth: PendingSet::new(),
            pending_consume: PendingConsume::new(),
            events: EventQueue::new(),
            discoveries: Vec::new(),
            tick: TickId(0),
            stats,
        })
    }

    /// Inject the configured number of random agents and resources.
    ///
    /// Agents get uniform positions and radii, random headings, and random
    /// programs sized by the mutator's length bounds.
    pub fn populate(&mut self) {
        for _ in 0..self.config.initial_agents {
            let center = self.random_point();
            let span = self.config.max_radius - self.config.min_radius;
            let radius = self.config.min_radius + self.rng.random::<f64>() * span;
            let facing = Facing::from_degrees(self.rng.random::<f64>() * 360.0);
            let program =
                Program::random(&mut self.rng, self.mutator.min_len(), self.mutator.max_len());
            self.spawn_agent(center, radius, facing, Box::new(program));
        }
        for _ in 0..self.config.initial_resources {
            let center = self.random_point();
            self.spawn_resource(center);
        }
    }

    /// Inject one agent with the configured initial energy.
    ///
    /// The heat class is derived from the radius here and never again;
    /// radii are immutable for an agent's lifetime. Injection is not
    /// bounded by the population cap — the cap binds births only.
    pub fn spawn_agent(
        &mut self,
        center: Point,
        radius: f64,
        facing: Facing,
        behavior: Box<dyn Behavior>,
    ) -> AgentId {
        let heat = self.heat.classify(radius);
        let energy = self.config.initial_energy;
        let surface = &mut self.surface;
        let id = self.agents.insert_with(|id| Agent {
            handle: surface.add_body(OwnerTag::Agent(id), center, radius),
            facing,
            energy,
            heat,
            behavior,
        });
        self.stats.heat_counts[heat.0] += 1;
        id
    }

    /// Inject one resource node.
    pub fn spawn_resource(&mut self, center: Point) -> ResourceId {
        let radius = self.config.resource_radius;
        let surface = &mut self.surface;
        self.resources.insert_with(|id| Resource {
            handle: surface.add_body(OwnerTag::Resource(id), center, radius),
        })
    }

    /// Advance the world one tick.
    ///
    /// Phases run in a fixed order: behavior, bookkeeping, event drain,
    /// registry reset, statistics. Population membership changes only
    /// during the drain.
    pub fn tick(&mut self) {
        self.tick = TickId(self.tick.0 + 1);
        self.behavior_phase();
        self.bookkeeping_phase();
        self.drain_phase();
        self.reset_phase();
        self.stats_phase();
    }

    /// Phase 1: every agent runs its cycle budget, and each agent's
    /// discoveries are resolved as soon as it yields.
    ///
    /// Agents marked for death earlier in the phase still execute; removal
    /// waits for the drain.
    fn behavior_phase(&mut self) {
        let Self {
            ref config,
            ref mut surface,
            ref mut agents,
            ref resources,
            ref mut pending_kill,
            ref mut pending_consume,
            ref mut events,
            ref mut discoveries,
            ref mut stats,
            ..
        } = *self;

        let ids: Vec<AgentId> = agents.ids().collect();
        for id in ids {
            {
                let record = agents
                    .get_mut(id)
                    .expect("agents collected at phase start stay live all phase");
                let Agent {
                    handle,
                    facing,
                    energy,
                    behavior,
                    ..
                } = record;
                let mut ctx =
                    BehaviorContext::new(surface, *handle, id, facing, *energy, discoveries);
                behavior.execute(&mut ctx, config.cycle_budget);
            }
            if discoveries.is_empty() {
                continue;
            }
            let mut resolver = Resolver {
                config,
                surface: &*surface,
                agents: &mut *agents,
                resources,
                pending_kill: &mut *pending_kill,
                pending_consume: &mut *pending_consume,
                events: &mut *events,
                misuse: &mut stats.resolver_misuse,
            };
            for discovery in discoveries.drain(..) {
                resolver.resolve(discovery);
            }
        }
    }

    /// Phase 2: metabolism, then the death and reproduction thresholds.
    ///
    /// Death takes precedence: an agent already marked for death never
    /// queues a birth, whatever its energy. The reproduction cost is paid
    /// here, at enqueue time, and is never refunded.
    fn bookkeeping_phase(&mut self) {
        let cost = self.config.metabolic_cost;
        let threshold = self.config.reproduction_threshold;
        let divisor = self.config.reproduction_divisor;

        let ids: Vec<AgentId> = self.agents.ids().collect();
        for id in ids {
            let record = self
                .agents
                .get_mut(id)
                .expect("agents collected at phase start stay live all phase");
            record.energy -= cost;
            if record.energy <= 0.0 {
                if self.pending_kill.insert(id) {
                    self.events.push(Event::Kill {
                        agent: id,
                        cause: DeathCause::Starvation,
                    });
                }
            } else if record.energy > threshold
                && !self.pending_kill.contains(id)
                && self.pending_birth.insert(id)
            {
                record.energy /= divisor;
                self.events.push(Event::Birth { parent: id });
            }
        }
    }

    /// Phase 3: apply queued events strictly first-in-first-out.
    fn drain_phase(&mut self) {
        while let Some(event) = self.events.pop() {
            match event {
                Event::Kill { agent, cause } => self.apply_kill(agent, cause),
                Event::Consume { resource, claimant } => self.apply_consume(resource, claimant),
                Event::Birth { parent } => self.apply_birth(parent),
            }
        }
    }

    /// Phase 4: clear every per-tick registry.
    fn reset_phase(&mut self) {
        self.pending_kill.clear();
        self.pending_birth.clear();
        self.pending_consume.clear();
        self.events.clear();
        self.discoveries.clear();
    }

    /// Phase 5: recompute the statistics snapshot from the live
    /// population.
    fn stats_phase(&mut self) {
        let buckets = self.heat.buckets();
        let mut counts = vec![0usize; buckets];
        let mut radius_sums = vec![0.0f64; buckets];
        for (_, record) in self.agents.iter() {
            let radius = self
                .surface
                .radius(record.handle)
                .expect("live record owns a live body");
            counts[record.heat.0] += 1;
            radius_sums[record.heat.0] += radius;
        }
        debug_assert_eq!(
            counts, self.stats.heat_counts,
            "running heat counts drifted from the live population"
        );
        self.stats.heat_mean_radius = counts
            .iter()
            .zip(&radius_sums)
            .map(|(&n, &sum)| if n > 0 { sum / n as f64 } else { 0.0 })
            .collect();
        self.stats.heat_counts = counts;
        self.stats.population = self.agents.len();
        self.stats.resources = self.resources.len();
        self.stats.tick = self.tick;
    }

    /// Remove a killed agent. A second `Kill` for the same agent finds it
    /// already gone and changes nothing, counters included.
    fn apply_kill(&mut self, agent: AgentId, cause: DeathCause) {
        let Ok(record) = self.agents.remove(agent) else {
            return;
        };
        self.surface
            .remove_body(record.handle)
            .expect("live record owns a live body");
        self.stats.heat_counts[record.heat.0] -= 1;
        // Death cancels any birth the agent queued this tick.
        self.pending_birth.remove(agent);
        match cause {
            DeathCause::Starvation => self.stats.deaths_starvation += 1,
            DeathCause::Predation => self.stats.deaths_predation += 1,
        }
    }

    /// Credit a drained claim and relocate the resource.
    ///
    /// A claimant that died earlier in the drain forfeits the claim: no
    /// credit, no relocation, no counter.
    fn apply_consume(&mut self, resource: ResourceId, claimant: AgentId) {
        let grant = self.config.resource_energy;
        let cap = self.config.energy_cap;
        let Ok(record) = self.agents.get_mut(claimant) else {
            return;
        };
        record.energy = (record.energy + grant).min(cap);

        let handle = self
            .resources
            .get(resource)
            .expect("claimed resources are never removed")
            .handle;
        let destination = self.random_point();
        self.surface
            .set_center(handle, destination)
            .expect("live record owns a live body");
        self.stats.resources_consumed += 1;
    }

    /// Instantiate an offspring next to its parent.
    ///
    /// At the population cap the offspring is dropped and counted; the
    /// parent's already-paid reproduction cost stays paid. The child's
    /// behavior is a mutated clone reset to a fresh initial core, its
    /// radius is the parent's possibly perturbed, and its heat class is
    /// derived from that radius, never inherited.
    fn apply_birth(&mut self, parent: AgentId) {
        // A kill earlier in the drain withdraws the parent's registry entry,
        // so a killed parent's birth lapses here.
        if !self.pending_birth.remove(parent) {
            return;
        }
        let Ok(record) = self.agents.get(parent) else {
            return;
        };
        if self.agents.len() >= self.config.max_population {
            self.stats.capacity_drops += 1;
            return;
        }
        let center = self
            .surface
            .center(record.handle)
            .expect("live record owns a live body");
        let parent_radius = self
            .surface
            .radius(record.handle)
            .expect("live record owns a live body");
        let mut behavior = record.behavior.boxed_clone();

        behavior.mutate(&self.mutator, &mut self.rng);
        behavior.reset();
        let radius = mutate_radius(
            parent_radius,
            self.config.radius_mut_rate,
            self.config.min_radius,
            self.config.max_radius,
            &mut self.rng,
        );
        let facing = Facing::from_degrees(self.rng.random::<f64>() * 360.0);
        self.spawn_agent(center, radius, facing, behavior);
        self.stats.births += 1;
    }

    fn random_point(&mut self) -> Point {
        Point::new(
            self.rng.random::<f64>() * self.config.width,
            self.rng.random::<f64>() * self.config.height,
        )
    }

    /// The configuration this world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The latest statistics snapshot (updated at the end of each tick).
    pub fn stats(&self) -> &WorldStats {
        &self.stats
    }

    /// Number of completed ticks.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Live agent count.
    pub fn population(&self) -> usize {
        self.agents.len()
    }

    /// Live resource count.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Whether an agent id is live.
    pub fn contains_agent(&self, agent: AgentId) -> bool {
        self.agents.contains(agent)
    }

    /// Live agent ids in insertion order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.ids()
    }

    /// An agent's current energy.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the agent is not live.
    pub fn agent_energy(&self, agent: AgentId) -> Result<f64, StoreError> {
        Ok(self.agents.get(agent)?.energy)
    }

    /// Overwrite an agent's energy (scenario setup and experiments).
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the agent is not live.
    pub fn set_agent_energy(&mut self, agent: AgentId, energy: f64) -> Result<(), StoreError> {
        self.agents.get_mut(agent)?.energy = energy;
        Ok(())
    }

    /// An agent's heat class.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the agent is not live.
    pub fn agent_heat(&self, agent: AgentId) -> Result<HeatClass, StoreError> {
        Ok(self.agents.get(agent)?.heat)
    }

    /// An agent's position.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the agent is not live.
    pub fn agent_center(&self, agent: AgentId) -> Result<Point, StoreError> {
        let handle = self.agents.get(agent)?.handle;
        Ok(self
            .surface
            .center(handle)
            .expect("live record owns a live body"))
    }

    /// An agent's body radius.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the agent is not live.
    pub fn agent_radius(&self, agent: AgentId) -> Result<f64, StoreError> {
        let handle = self.agents.get(agent)?.handle;
        Ok(self
            .surface
            .radius(handle)
            .expect("live record owns a live body"))
    }

    /// A resource's position.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the resource id is unknown.
    pub fn resource_center(&self, resource: ResourceId) -> Result<Point, StoreError> {
        let handle = self.resources.get(resource)?.handle;
        Ok(self
            .surface
            .center(handle)
            .expect("live record owns a live body"))
    }
}
