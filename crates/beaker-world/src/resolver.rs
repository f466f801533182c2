//! Interaction resolution.
//!
//! The resolver turns raw [`Discovery`] pairs into pending interactions
//! and queued events. It is the only code that interprets an overlap:
//! behaviors observe, the resolver judges, the drain phase applies.
//!
//! Dispatch is on the `(subject, other)` owner pair. The subject of a
//! scan is always an agent, so a resource-subject pair is a routing bug;
//! those arms are explicit, counted, and asserted against in tests rather
//! than folded into a catch-all.

use crate::agent::{Agent, Resource};
use crate::pending::{PendingConsume, PendingSet};
use crate::queue::EventQueue;
use beaker_brain::Discovery;
use beaker_core::{AgentId, DeathCause, Event, ResourceId, Store, WorldConfig};
use beaker_surface::{OwnerTag, Surface};

/// Outcome of resolving one discovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The other agent fell strictly inside the edibility window and was
    /// marked for death; the predator was credited immediately.
    PreyClaimed,
    /// The other agent's radius fell outside the edibility window.
    PreyOutsideWindow,
    /// The other agent was already marked for death this tick; no second
    /// credit is granted.
    PreyAlreadyPending,
    /// The resource was claimed for the scanning agent.
    ResourceClaimed,
    /// Another agent claimed the resource first this tick.
    ResourceAlreadyClaimed,
    /// The scanning agent's radius is above the grazing cutoff.
    TooLargeToGraze,
    /// The discovery's subject was a resource, which scans can never
    /// produce. Counted in [`WorldStats::resolver_misuse`](crate::stats::WorldStats::resolver_misuse).
    MisroutedSubject,
}

/// Borrowed view of the world state the resolver is allowed to touch.
///
/// Resolution mutates pending registries, the event queue, and predator
/// energy; it never removes anything from a store or the surface. All
/// removal is deferred to the drain phase.
pub(crate) struct Resolver<'a> {
    pub config: &'a WorldConfig,
    pub surface: &'a Surface,
    pub agents: &'a mut Store<AgentId, Agent>,
    pub resources: &'a Store<ResourceId, Resource>,
    pub pending_kill: &'a mut PendingSet<AgentId>,
    pub pending_consume: &'a mut PendingConsume,
    pub events: &'a mut EventQueue,
    pub misuse: &'a mut u64,
}

impl Resolver<'_> {
    /// Resolve one discovery, returning what was decided.
    pub(crate) fn resolve(&mut self, discovery: Discovery) -> Resolution {
        let subject = match discovery.subject {
            OwnerTag::Agent(id) => id,
            OwnerTag::Resource(_) => {
                *self.misuse += 1;
                return Resolution::MisroutedSubject;
            }
        };
        match discovery.other {
            OwnerTag::Agent(other) => self.resolve_predation(subject, other),
            OwnerTag::Resource(resource) => self.resolve_claim(subject, resource),
        }
    }

    /// Agent-over-agent arm: predation by strict size window.
    fn resolve_predation(&mut self, predator: AgentId, prey: AgentId) -> Resolution {
        // The membership test is the sole idempotency gate: a prey already
        // marked this tick yields no event and no second credit.
        if self.pending_kill.contains(prey) {
            return Resolution::PreyAlreadyPending;
        }

        let prey_record = self
            .agents
            .get(prey)
            .expect("discovered agents stay live for the whole phase");
        let prey_energy = prey_record.energy;
        let prey_radius = self
            .surface
            .radius(prey_record.handle)
            .expect("live record owns a live body");
        let predator_record = self
            .agents
            .get(predator)
            .expect("scanning agent stays live for the whole phase");
        let predator_radius = self
            .surface
            .radius(predator_record.handle)
            .expect("live record owns a live body");

        let (lower, upper) = self.config.edibility_window(predator_radius);
        if !(prey_radius > lower && prey_radius < upper) {
            return Resolution::PreyOutsideWindow;
        }

        self.pending_kill.insert(prey);
        self.events.push(Event::Kill {
            agent: prey,
            cause: DeathCause::Predation,
        });

        // The credit is computed from the prey's energy at claim time and
        // granted immediately, even though the prey is removed only when
        // the queue drains.
        let gain = prey_energy / self.config.eat_divisor;
        let cap = self.config.energy_cap;
        let predator_record = self
            .agents
            .get_mut(predator)
            .expect("scanning agent stays live for the whole phase");
        predator_record.energy = (predator_record.energy + gain).min(cap);
        Resolution::PreyClaimed
    }

    /// Agent-over-resource arm: grazing claim, first claimant wins.
    fn resolve_claim(&mut self, claimant: AgentId, resource: ResourceId) -> Resolution {
        let record = self
            .agents
            .get(claimant)
            .expect("scanning agent stays live for the whole phase");
        let radius = self
            .surface
            .radius(record.handle)
            .expect("live record owns a live body");
        if radius > self.config.consume_radius_cutoff() {
            return Resolution::TooLargeToGraze;
        }

        debug_assert!(
            self.resources.contains(resource),
            "surface owner tag names a live resource"
        );
        if !self.pending_consume.claim(resource, claimant) {
            return Resolution::ResourceAlreadyClaimed;
        }
        self.events.push(Event::Consume { resource, claimant });
        Resolution::ResourceClaimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beaker_brain::{Behavior, Op, Program};
    use beaker_core::HeatClassifier;
    use beaker_surface::{Facing, Point};

    struct Fixture {
        config: WorldConfig,
        surface: Surface,
        agents: Store<AgentId, Agent>,
        resources: Store<ResourceId, Resource>,
        pending_kill: PendingSet<AgentId>,
        pending_consume: PendingConsume,
        events: EventQueue,
        misuse: u64,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                config: WorldConfig::default(),
                surface: Surface::new(200.0, 200.0),
                agents: Store::new(),
                resources: Store::new(),
                pending_kill: PendingSet::new(),
                pending_consume: PendingConsume::new(),
                events: EventQueue::new(),
                misuse: 0,
            }
        }

        fn spawn_agent(&mut self, center: Point, radius: f64, energy: f64) -> AgentId {
            let heat = HeatClassifier::new(
                self.config.min_radius,
                self.config.max_radius,
                self.config.heat_buckets,
            )
            .classify(radius);
            let surface = &mut self.surface;
            self.agents.insert_with(|id| Agent {
                handle: surface.add_body(OwnerTag::Agent(id), center, radius),
                facing: Facing::default(),
                energy,
                heat,
                behavior: Box::new(Program::new(vec![Op::Wait])) as Box<dyn Behavior>,
            })
        }

        fn spawn_resource(&mut self, center: Point) -> ResourceId {
            let radius = self.config.resource_radius;
            let surface = &mut self.surface;
            self.resources.insert_with(|id| Resource {
                handle: surface.add_body(OwnerTag::Resource(id), center, radius),
            })
        }

        fn resolve(&mut self, subject: OwnerTag, other: OwnerTag) -> Resolution {
            let mut resolver = Resolver {
                config: &self.config,
                surface: &self.surface,
                agents: &mut self.agents,
                resources: &self.resources,
                pending_kill: &mut self.pending_kill,
                pending_consume: &mut self.pending_consume,
                events: &mut self.events,
                misuse: &mut self.misuse,
            };
            resolver.resolve(Discovery { subject, other })
        }
    }

    #[test]
    fn predation_requires_a_strictly_smaller_prey_inside_the_window() {
        let mut fx = Fixture::new();
        let predator = fx.spawn_agent(Point::new(50.0, 50.0), 8.0, 1000.0);
        // Window for radius 8 under the default scaled policy is (6.4, 8.0).
        let too_small = fx.spawn_agent(Point::new(55.0, 50.0), 6.0, 1000.0);
        let equal = fx.spawn_agent(Point::new(45.0, 50.0), 8.0, 1000.0);
        let prey = fx.spawn_agent(Point::new(50.0, 55.0), 7.0, 1000.0);

        let subject = OwnerTag::Agent(predator);
        assert_eq!(
            fx.resolve(subject, OwnerTag::Agent(too_small)),
            Resolution::PreyOutsideWindow
        );
        assert_eq!(
            fx.resolve(subject, OwnerTag::Agent(equal)),
            Resolution::PreyOutsideWindow,
            "the window is strict at both bounds"
        );
        assert_eq!(
            fx.resolve(subject, OwnerTag::Agent(prey)),
            Resolution::PreyClaimed
        );
        assert!(fx.pending_kill.contains(prey));
        assert_eq!(fx.events.len(), 1);
        // Immediate credit: 1000 + 1000 / 4.
        assert_eq!(fx.agents.get(predator).unwrap().energy, 1250.0);
    }

    #[test]
    fn second_claim_on_marked_prey_gains_nothing() {
        let mut fx = Fixture::new();
        let first = fx.spawn_agent(Point::new(50.0, 50.0), 8.0, 1000.0);
        let second = fx.spawn_agent(Point::new(56.0, 50.0), 8.0, 1000.0);
        let prey = fx.spawn_agent(Point::new(53.0, 50.0), 7.0, 1000.0);

        assert_eq!(
            fx.resolve(OwnerTag::Agent(first), OwnerTag::Agent(prey)),
            Resolution::PreyClaimed
        );
        assert_eq!(
            fx.resolve(OwnerTag::Agent(second), OwnerTag::Agent(prey)),
            Resolution::PreyAlreadyPending
        );
        assert_eq!(fx.events.len(), 1, "one kill event for one prey");
        assert_eq!(fx.agents.get(second).unwrap().energy, 1000.0);
    }

    #[test]
    fn predator_credit_is_capped() {
        let mut fx = Fixture::new();
        let predator = fx.spawn_agent(Point::new(50.0, 50.0), 8.0, 2900.0);
        let prey = fx.spawn_agent(Point::new(53.0, 50.0), 7.0, 2000.0);
        fx.resolve(OwnerTag::Agent(predator), OwnerTag::Agent(prey));
        assert_eq!(fx.agents.get(predator).unwrap().energy, 3000.0);
    }

    #[test]
    fn resource_claims_are_first_come_first_served() {
        let mut fx = Fixture::new();
        // Radius 5 is at or below the default grazing cutoff of 6.
        let first = fx.spawn_agent(Point::new(50.0, 50.0), 5.0, 1000.0);
        let second = fx.spawn_agent(Point::new(56.0, 50.0), 5.0, 1000.0);
        let resource = fx.spawn_resource(Point::new(53.0, 50.0));

        assert_eq!(
            fx.resolve(OwnerTag::Agent(first), OwnerTag::Resource(resource)),
            Resolution::ResourceClaimed
        );
        assert_eq!(
            fx.resolve(OwnerTag::Agent(second), OwnerTag::Resource(resource)),
            Resolution::ResourceAlreadyClaimed
        );
        assert_eq!(fx.pending_consume.claimant(resource), Some(first));
        assert_eq!(fx.events.len(), 1);
    }

    #[test]
    fn agents_above_the_cutoff_cannot_graze() {
        let mut fx = Fixture::new();
        let big = fx.spawn_agent(Point::new(50.0, 50.0), 7.0, 1000.0);
        let resource = fx.spawn_resource(Point::new(53.0, 50.0));
        assert_eq!(
            fx.resolve(OwnerTag::Agent(big), OwnerTag::Resource(resource)),
            Resolution::TooLargeToGraze
        );
        assert!(fx.pending_consume.is_empty());
        assert!(fx.events.is_empty());
    }

    #[test]
    fn resource_subjects_are_counted_as_misuse() {
        let mut fx = Fixture::new();
        let agent = fx.spawn_agent(Point::new(50.0, 50.0), 5.0, 1000.0);
        let resource = fx.spawn_resource(Point::new(53.0, 50.0));

        assert_eq!(
            fx.resolve(OwnerTag::Resource(resource), OwnerTag::Agent(agent)),
            Resolution::MisroutedSubject
        );
        assert_eq!(
            fx.resolve(OwnerTag::Resource(resource), OwnerTag::Resource(resource)),
            Resolution::MisroutedSubject
        );
        assert_eq!(fx.misuse, 2);
        assert!(fx.events.is_empty(), "misrouted pairs produce no events");
    }
}
