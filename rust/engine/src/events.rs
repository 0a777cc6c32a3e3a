use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{HandSummary, Street};
use crate::player::Action;

/// A seat's identity and stack when a hand starts.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatStake {
    pub id: String,
    pub name: String,
    pub chips: u32,
}

/// Structured domain events emitted as a hand progresses. Renderers,
/// broadcasters and loggers subscribe instead of the engine printing
/// anything itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    HandStarted {
        hand_number: u64,
        /// Seed of this hand's deck shuffle. Reaches trusted sinks only —
        /// it reconstructs the deck, so it must never be shown to agents.
        seed: u64,
        dealer: usize,
        small_blind: u32,
        big_blind: u32,
        players: Vec<SeatStake>,
    },
    ActionApplied {
        player_id: String,
        street: Street,
        action: Action,
        paid: u32,
        pot: u32,
        all_in: bool,
    },
    RoundAdvanced {
        street: Street,
        community_cards: Vec<Card>,
    },
    HandSettled { summary: HandSummary },
}

/// Subscriber for [`GameEvent`]s. Registered on the engine facade; called
/// synchronously, in registration order, after each state transition.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// Sink that keeps every event in a shared buffer. Clones hand out handles,
/// so an observer can register one copy with the engine and keep reading
/// from another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<GameEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for MemorySink {
    fn on_event(&mut self, event: &GameEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
    }
}
