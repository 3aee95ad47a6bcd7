//! Turn events: deterministic draws from the content pool, plus the log

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::content::events::{EventKind, EVENT_POOL};
use crate::core::config::EngineConfig;
use crate::core::types::Turn;

/// A narrative event installed on the state for one turn
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnEvent {
    pub kind: EventKind,
    pub headline: String,
    pub turn: Turn,
}

/// Weighted, seeded source of pending events
///
/// Selection is content-driven; the pipeline only asks for this turn's
/// draw. The RNG is seeded from config so replays are deterministic.
#[derive(Clone, Debug)]
pub struct EventDeck {
    rng: ChaCha8Rng,
    max_per_turn: usize,
}

impl EventDeck {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.event_seed),
            max_per_turn: config.max_events_per_turn,
        }
    }

    /// Draw zero or more events for the given turn
    pub fn draw(&mut self, turn: Turn) -> Vec<TurnEvent> {
        let count = self.rng.gen_range(0..=self.max_per_turn);
        (0..count).map(|_| self.draw_one(turn)).collect()
    }

    fn draw_one(&mut self, turn: Turn) -> TurnEvent {
        let total: u32 = EVENT_POOL.iter().map(|t| t.weight).sum();
        let mut roll = self.rng.gen_range(0..total);
        for template in &EVENT_POOL {
            if roll < template.weight {
                return TurnEvent {
                    kind: template.kind,
                    headline: template.headline.to_string(),
                    turn,
                };
            }
            roll -= template.weight;
        }
        unreachable!("roll bounded by total weight")
    }
}

/// Archive of everything drawn over a game, for presentation and replays
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<TurnEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_all(&mut self, events: &[TurnEvent]) {
        self.events.extend_from_slice(events);
    }

    pub fn events_for_turn(&self, turn: Turn) -> impl Iterator<Item = &TurnEvent> {
        self.events.iter().filter(move |e| e.turn == turn)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
