use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::{ActionError, GameError};
use crate::events::EventSink;
use crate::game::{ActionOutcome, HandState, HandSummary, Street};
use crate::player::{Action, Player};

/// What everyone at the table can see about a seat. Hole cards are absent
/// on purpose.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: String,
    pub name: String,
    pub chips: u32,
    pub current_bet: u32,
    pub is_active: bool,
    pub is_all_in: bool,
}

/// The game as seen by one player: full public table state plus that
/// player's own hole cards and wagers. This is the whole input a decision
/// agent gets; it never contains another player's hole cards or the deck.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub hand_number: u64,
    pub street: Street,
    pub pot: u32,
    pub current_bet: u32,
    pub minimum_raise: u32,
    pub big_blind: u32,
    pub community_cards: Vec<Card>,
    pub your_cards: Vec<Card>,
    pub your_chips: u32,
    pub your_current_bet: u32,
    pub your_total_bet: u32,
    pub is_your_turn: bool,
    pub players: Vec<PlayerPublic>,
}

/// Session facade over the betting state machine.
///
/// Owns the blind configuration, the dealer button and the hand counter
/// across a multi-hand session, derives a per-hand deck seed, and fans
/// domain events out to registered sinks. All action processing delegates
/// to the current [`HandState`].
///
/// The engine is single-threaded by design: a concurrent host must
/// serialize calls into [`Engine::process_action`].
pub struct Engine {
    small_blind: u32,
    big_blind: u32,
    session_seed: Option<u64>,
    hand_number: u64,
    dealer_index: usize,
    hand: Option<HandState>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl Engine {
    pub fn new(small_blind: u32, big_blind: u32) -> Self {
        Self {
            small_blind,
            big_blind,
            session_seed: None,
            hand_number: 0,
            dealer_index: 0,
            hand: None,
            sinks: Vec::new(),
        }
    }

    /// Seeded session: hand `n` shuffles with `seed + n`, so a session
    /// replays identically and each hand is independently reproducible.
    pub fn with_seed(small_blind: u32, big_blind: u32, seed: u64) -> Self {
        let mut engine = Self::new(small_blind, big_blind);
        engine.session_seed = Some(seed);
        engine
    }

    /// Subscribe a sink to all subsequent domain events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }
    pub fn hand(&self) -> Option<&HandState> {
        self.hand.as_ref()
    }
    pub fn current_player_id(&self) -> Option<&str> {
        self.hand.as_ref().and_then(|h| h.current_player_id())
    }
    pub fn last_summary(&self) -> Option<&HandSummary> {
        self.hand.as_ref().and_then(|h| h.summary())
    }

    /// Start the next hand of the session.
    ///
    /// Builds fresh players in the given seat order, carrying chip counts
    /// over from the previous hand when `preserve_chips` is set (new ids
    /// start at `starting_chips`). The dealer button stays at seat 0 for
    /// the first hand and rotates clockwise after that. Blinds are posted
    /// and hole cards dealt before this returns.
    pub fn start_new_hand(
        &mut self,
        player_ids: &[&str],
        player_names: &[&str],
        starting_chips: u32,
        preserve_chips: bool,
    ) -> Result<&HandState, GameError> {
        if player_ids.len() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        let mut players = Vec::with_capacity(player_ids.len());
        for (position, (&id, &name)) in player_ids.iter().zip(player_names).enumerate() {
            let chips = if preserve_chips {
                self.hand
                    .as_ref()
                    .and_then(|h| h.player(id))
                    .map(|p| p.chips())
                    .unwrap_or(starting_chips)
            } else {
                starting_chips
            };
            if chips == 0 {
                return Err(GameError::BustedPlayer {
                    player_id: id.to_string(),
                });
            }
            players.push(Player::new(id, name, chips, position));
        }

        if self.hand.is_some() {
            self.dealer_index = (self.dealer_index + 1) % players.len();
        } else {
            self.dealer_index = 0;
        }
        self.hand_number += 1;

        let seed = match self.session_seed {
            Some(seed) => seed.wrapping_add(self.hand_number),
            None => rand::random(),
        };

        let (hand, events) = HandState::new(
            players,
            self.dealer_index,
            self.small_blind,
            self.big_blind,
            self.hand_number,
            seed,
        )?;
        for event in &events {
            for sink in self.sinks.iter_mut() {
                sink.on_event(event);
            }
        }
        Ok(&*self.hand.insert(hand))
    }

    /// Apply one player action to the current hand. See
    /// [`HandState::process_action`] for the validation contract.
    pub fn process_action(
        &mut self,
        player_id: &str,
        action: Action,
    ) -> Result<ActionOutcome, GameError> {
        let hand = self
            .hand
            .as_mut()
            .ok_or(ActionError::NoActiveHand)?;
        let outcome = hand.process_action(player_id, action)?;
        for event in &outcome.events {
            for sink in self.sinks.iter_mut() {
                sink.on_event(event);
            }
        }
        Ok(outcome)
    }

    /// The redacted projection handed to external decision-makers.
    pub fn state_for(&self, player_id: &str) -> Result<PlayerView, GameError> {
        let hand = self.hand.as_ref().ok_or(ActionError::NoActiveHand)?;
        let player = hand
            .player(player_id)
            .ok_or_else(|| ActionError::UnknownPlayer {
                player_id: player_id.to_string(),
            })?;

        let players = hand
            .players()
            .iter()
            .map(|p| PlayerPublic {
                id: p.id().to_string(),
                name: p.name().to_string(),
                chips: p.chips(),
                current_bet: p.current_bet(),
                is_active: p.is_active(),
                is_all_in: p.is_all_in(),
            })
            .collect();

        Ok(PlayerView {
            hand_number: hand.hand_number(),
            street: hand.street(),
            pot: hand.pot(),
            current_bet: hand.current_bet(),
            minimum_raise: hand.minimum_raise(),
            big_blind: hand.big_blind(),
            community_cards: hand.community_cards().to_vec(),
            your_cards: player.hole_cards().to_vec(),
            your_chips: player.chips(),
            your_current_bet: player.current_bet(),
            your_total_bet: player.total_bet(),
            is_your_turn: hand.current_player_id() == Some(player_id),
            players,
        })
    }
}
