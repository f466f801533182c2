//! FIFO event queue.

use beaker_core::Event;
use std::collections::VecDeque;

/// Strictly first-in-first-out queue of deferred [`Event`]s.
///
/// Enqueue order is the order effects apply in the drain phase, which is
/// what makes compound outcomes (a claimant killed before its claim
/// drains, a parent killed before its birth drains) well defined.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Append an event.
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Take the oldest event, if any.
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard any remaining events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beaker_core::{AgentId, DeathCause};

    #[test]
    fn pops_in_push_order() {
        let mut queue = EventQueue::new();
        queue.push(Event::Kill {
            agent: AgentId(1),
            cause: DeathCause::Starvation,
        });
        queue.push(Event::Birth {
            parent: AgentId(2),
        });
        assert_eq!(queue.len(), 2);
        assert!(matches!(
            queue.pop(),
            Some(Event::Kill {
                agent: AgentId(1),
                ..
            })
        ));
        assert!(matches!(
            queue.pop(),
            Some(Event::Birth {
                parent: AgentId(2)
            })
        ));
        assert_eq!(queue.pop(), None);
    }
}
