use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{ActionError, EngineFault, GameError};
use crate::events::{GameEvent, SeatStake};
use crate::hand::{compare_hands, evaluate, HandStrength};
use crate::player::{Action, Player};
use crate::pot::PotManager;
use crate::rules::{validate_action, ValidatedAction};

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before the flop (hole cards dealt)
    Preflop,
    /// After the flop (3 community cards)
    Flop,
    /// After the turn (4th community card)
    Turn,
    /// After the river (5th community card)
    River,
    /// Hands revealed, pot paid out
    Showdown,
}

/// Per-player outcome in a settled hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    pub id: String,
    pub name: String,
    pub final_chips: u32,
    pub hole_cards: Vec<Card>,
    pub net_change: i64,
}

/// Result of a settled hand, for orchestrators and telemetry.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandSummary {
    pub hand_number: u64,
    pub pot_distributed: u32,
    pub community_cards: Vec<Card>,
    /// Ids of every player awarded chips from the pot, in seat order.
    pub winners: Vec<String>,
    pub players: Vec<PlayerOutcome>,
}

/// Outcome of one successfully processed action, including any street
/// transitions and settlement it triggered.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub action: Action,
    pub paid: u32,
    pub all_in: bool,
    pub street: Street,
    pub hand_complete: bool,
    pub events: Vec<GameEvent>,
}

/// The root aggregate for one hand: players in fixed seat order, board, pot
/// and the betting state machine. Created by the engine facade, mutated only
/// through [`HandState::process_action`] and the internal transitions, and
/// superseded by the next hand.
#[derive(Debug)]
pub struct HandState {
    players: Vec<Player>,
    community: Vec<Card>,
    pot: u32,
    current_bet: u32,
    dealer_index: usize,
    current_player: usize,
    street: Street,
    deck: Deck,
    small_blind: u32,
    big_blind: u32,
    hand_number: u64,
    /// Smallest legal raise delta; resets each street, grows with each raise.
    minimum_raise: u32,
    /// Sum of stacks when the hand started, for conservation checks.
    chips_at_start: u32,
    starting_stacks: Vec<u32>,
    summary: Option<HandSummary>,
}

impl HandState {
    /// Post blinds, deal hole cards and hand the turn to the first actor.
    /// Degenerate starts (every player all-in from the blinds) run straight
    /// to showdown; the returned events include the settlement if so.
    ///
    /// Building block for custom tables (uneven stacks, scripted seats).
    /// Most callers go through [`crate::engine::Engine::start_new_hand`].
    pub fn new(
        players: Vec<Player>,
        dealer_index: usize,
        small_blind: u32,
        big_blind: u32,
        hand_number: u64,
        seed: u64,
    ) -> Result<(Self, Vec<GameEvent>), GameError> {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let starting_stacks: Vec<u32> = players.iter().map(|p| p.chips()).collect();
        let chips_at_start = starting_stacks.iter().sum();
        let stakes: Vec<SeatStake> = players
            .iter()
            .map(|p| SeatStake {
                id: p.id().to_string(),
                name: p.name().to_string(),
                chips: p.chips(),
            })
            .collect();

        let mut state = Self {
            players,
            community: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            dealer_index,
            current_player: 0,
            street: Street::Preflop,
            deck,
            small_blind,
            big_blind,
            hand_number,
            minimum_raise: big_blind.saturating_sub(small_blind),
            chips_at_start,
            starting_stacks,
            summary: None,
        };

        let mut events = vec![GameEvent::HandStarted {
            hand_number,
            seed,
            dealer: dealer_index,
            small_blind,
            big_blind,
            players: stakes,
        }];

        state.post_blinds();
        state.deal_hole_cards()?;

        while state.street != Street::Showdown && state.is_round_complete() {
            state.advance_round(&mut events)?;
        }
        state.verify_conservation()?;

        Ok((state, events))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn minimum_raise(&self) -> u32 {
        self.minimum_raise
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }
    pub fn current_player_id(&self) -> Option<&str> {
        if self.is_complete() {
            None
        } else {
            self.players.get(self.current_player).map(|p| p.id())
        }
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }
    pub fn summary(&self) -> Option<&HandSummary> {
        self.summary.as_ref()
    }

    /// Validate and apply one action for `player_id`, then advance the turn
    /// and any completed streets (through showdown if the hand ends).
    ///
    /// Illegal actions leave the state untouched and report a specific
    /// [`ActionError`]; an [`EngineFault`] means the engine itself broke an
    /// invariant and the hand is unusable.
    pub fn process_action(
        &mut self,
        player_id: &str,
        action: Action,
    ) -> Result<ActionOutcome, GameError> {
        if self.is_complete() {
            return Err(ActionError::NoActiveHand.into());
        }
        let seat = self
            .players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or_else(|| ActionError::UnknownPlayer {
                player_id: player_id.to_string(),
            })?;
        if seat != self.current_player {
            return Err(ActionError::NotYourTurn {
                player_id: player_id.to_string(),
            }
            .into());
        }

        let validated = validate_action(
            &self.players[seat],
            self.current_bet,
            self.minimum_raise,
            action,
        )?;

        let paid = self.apply(seat, validated);
        self.players[seat].mark_acted();

        let mut events = vec![GameEvent::ActionApplied {
            player_id: player_id.to_string(),
            street: self.street,
            action,
            paid,
            pot: self.pot,
            all_in: self.players[seat].is_all_in(),
        }];

        self.next_player();
        while self.street != Street::Showdown && self.is_round_complete() {
            self.advance_round(&mut events)?;
        }
        self.verify_conservation()?;

        Ok(ActionOutcome {
            action,
            paid,
            all_in: self.players[seat].is_all_in(),
            street: self.street,
            hand_complete: self.is_complete(),
            events,
        })
    }

    /// Chip movement and table-bet bookkeeping for a validated action.
    /// Returns the chips moved into the pot.
    fn apply(&mut self, seat: usize, validated: ValidatedAction) -> u32 {
        match validated {
            ValidatedAction::Fold => {
                self.players[seat].fold();
                0
            }
            ValidatedAction::Check => 0,
            ValidatedAction::Call { pay, .. } => {
                let paid = self.players[seat].commit(pay);
                self.pot += paid;
                paid
            }
            ValidatedAction::Raise { to, pay, .. } => {
                let paid = self.players[seat].commit(pay);
                self.pot += paid;
                // A short all-in can land below the table bet; only a true
                // raise moves the wager level and re-opens the betting.
                if to > self.current_bet {
                    self.minimum_raise = to - self.current_bet;
                    self.current_bet = to;
                    for (i, p) in self.players.iter_mut().enumerate() {
                        if i != seat && p.can_act() && p.current_bet() < to {
                            p.require_action();
                        }
                    }
                }
                paid
            }
        }
    }

    fn post_blinds(&mut self) {
        let n = self.players.len();
        // Heads-up, the dealer posts the small blind.
        let (sb_seat, bb_seat) = if n == 2 {
            (self.dealer_index, (self.dealer_index + 1) % n)
        } else {
            ((self.dealer_index + 1) % n, (self.dealer_index + 2) % n)
        };
        let sb = self.small_blind;
        let bb = self.big_blind;
        let paid_sb = self.players[sb_seat].commit(sb);
        self.pot += paid_sb;
        let paid_bb = self.players[bb_seat].commit(bb);
        self.pot += paid_bb;
        self.current_bet = paid_bb;
        self.minimum_raise = bb.saturating_sub(sb);
        // First to act preflop: the seat after the big blind.
        self.current_player = self
            .first_to_act_from((bb_seat + 1) % n)
            .unwrap_or(bb_seat);
    }

    fn deal_hole_cards(&mut self) -> Result<(), EngineFault> {
        for _ in 0..2 {
            for seat in 0..self.players.len() {
                if self.players[seat].is_active() {
                    let cards = self.deck.deal(1)?;
                    self.players[seat].give_card(cards[0]);
                }
            }
        }
        Ok(())
    }

    /// A player owes action when they can still act and either trail the
    /// table bet or have not acted since the last (re-)opening of betting.
    fn owes_action(&self, seat: usize) -> bool {
        let p = &self.players[seat];
        p.can_act() && (p.current_bet() < self.current_bet || !p.has_acted_this_round())
    }

    /// First seat owing action, scanning clockwise from `start` inclusive.
    fn first_to_act_from(&self, start: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n).map(|k| (start + k) % n).find(|&s| self.owes_action(s))
    }

    /// Advance the turn pointer past the actor who just moved. When nobody
    /// owes action the pointer stays put and round completion takes over.
    fn next_player(&mut self) {
        if let Some(seat) = self.first_to_act_from((self.current_player + 1) % self.players.len())
        {
            self.current_player = seat;
        }
    }

    /// A betting round is complete once at most one player is contesting,
    /// or nobody contesting can still act, or every player who can act has
    /// both acted this round and matched the table bet.
    fn is_round_complete(&self) -> bool {
        let active = self.players.iter().filter(|p| p.is_active()).count();
        if active <= 1 {
            return true;
        }
        if !self.players.iter().any(|p| p.can_act()) {
            return true;
        }
        self.players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.has_acted_this_round() && p.current_bet() == self.current_bet)
    }

    /// Move to the next street (or settle). Per-round wagers reset, the pot
    /// does not: it only ever drains at payout.
    fn advance_round(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let active = self.players.iter().filter(|p| p.is_active()).count();
        if active <= 1 {
            // Hand decided by folds. Run out the board for observers; it has
            // no bearing on who wins.
            let missing = 5 - self.community.len();
            if missing > 0 {
                let mut cards = self.deck.deal(missing)?;
                self.community.append(&mut cards);
            }
            self.street = Street::Showdown;
            self.settle(events)?;
            return Ok(());
        }

        for p in self.players.iter_mut() {
            p.reset_for_round();
        }
        self.current_bet = 0;
        self.minimum_raise = self.big_blind.saturating_sub(self.small_blind);

        let (next_street, to_deal) = match self.street {
            Street::Preflop => (Street::Flop, 3),
            Street::Flop => (Street::Turn, 1),
            Street::Turn => (Street::River, 1),
            Street::River | Street::Showdown => {
                self.street = Street::Showdown;
                self.settle(events)?;
                return Ok(());
            }
        };
        let mut cards = self.deck.deal(to_deal)?;
        self.community.append(&mut cards);
        self.street = next_street;
        events.push(GameEvent::RoundAdvanced {
            street: self.street,
            community_cards: self.community.clone(),
        });

        // Postflop action starts with the first player clockwise from the
        // dealer who can still act.
        let n = self.players.len();
        if let Some(seat) = self.first_to_act_from((self.dealer_index + 1) % n) {
            self.current_player = seat;
        }
        Ok(())
    }

    /// Pay out the pot: the whole pot to a lone survivor, otherwise each
    /// side-pot layer to the best evaluated hand(s) among its eligible
    /// seats. Any split remainder goes to the tied winner earliest in seat
    /// order. The pot must land on exactly zero with total chips conserved.
    fn settle(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let pot_at_settle = self.pot;
        let mut awarded = vec![0u32; self.players.len()];

        let active_seats: Vec<usize> = (0..self.players.len())
            .filter(|&s| self.players[s].is_active())
            .collect();

        if active_seats.len() == 1 {
            awarded[active_seats[0]] = pot_at_settle;
        } else {
            let strengths: Vec<Option<HandStrength>> = self
                .players
                .iter()
                .map(|p| {
                    if p.is_active() {
                        let mut cards: Vec<Card> = p.hole_cards().to_vec();
                        cards.extend_from_slice(&self.community);
                        Some(evaluate(&cards))
                    } else {
                        None
                    }
                })
                .collect();

            let contributions: Vec<(u32, bool)> = self
                .players
                .iter()
                .map(|p| (p.total_bet(), p.is_active()))
                .collect();
            let pots = PotManager::from_contributions(&contributions);

            for layer in pots.layers() {
                let mut winners: Vec<usize> = Vec::new();
                for &seat in &layer.eligible {
                    let strength = match &strengths[seat] {
                        Some(s) => s,
                        None => continue,
                    };
                    match winners.first().and_then(|&w| strengths[w].as_ref()) {
                        None => winners.push(seat),
                        Some(best) => match compare_hands(strength, best) {
                            std::cmp::Ordering::Greater => {
                                winners.clear();
                                winners.push(seat);
                            }
                            std::cmp::Ordering::Equal => winners.push(seat),
                            std::cmp::Ordering::Less => {}
                        },
                    }
                }
                if winners.is_empty() {
                    continue;
                }
                let share = layer.amount / winners.len() as u32;
                let remainder = layer.amount % winners.len() as u32;
                for &w in &winners {
                    awarded[w] += share;
                }
                awarded[winners[0]] += remainder;
            }
        }

        let distributed: u32 = awarded.iter().sum();
        if distributed != pot_at_settle {
            debug_assert_eq!(distributed, pot_at_settle, "pot not fully distributed");
            return Err(EngineFault::PotMismatch {
                pot: pot_at_settle,
                distributed,
            }
            .into());
        }
        for (seat, &amount) in awarded.iter().enumerate() {
            self.players[seat].award(amount);
        }
        self.pot = 0;
        self.verify_conservation()?;

        let winners: Vec<String> = awarded
            .iter()
            .enumerate()
            .filter(|&(_, &amount)| amount > 0)
            .map(|(seat, _)| self.players[seat].id().to_string())
            .collect();
        let players: Vec<PlayerOutcome> = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| PlayerOutcome {
                id: p.id().to_string(),
                name: p.name().to_string(),
                final_chips: p.chips(),
                hole_cards: p.hole_cards().to_vec(),
                net_change: i64::from(p.chips()) - i64::from(self.starting_stacks[seat]),
            })
            .collect();
        let summary = HandSummary {
            hand_number: self.hand_number,
            pot_distributed: pot_at_settle,
            community_cards: self.community.clone(),
            winners,
            players,
        };
        events.push(GameEvent::HandSettled {
            summary: summary.clone(),
        });
        self.summary = Some(summary);
        Ok(())
    }

    /// Chips on the table (stacks + pot) must always equal the stacks the
    /// hand started with. A mismatch is a defect, surfaced, never patched.
    fn verify_conservation(&self) -> Result<(), EngineFault> {
        let actual: u32 = self.players.iter().map(|p| p.chips()).sum::<u32>() + self.pot;
        if actual != self.chips_at_start {
            debug_assert_eq!(actual, self.chips_at_start, "chip conservation violated");
            return Err(EngineFault::ChipConservation {
                expected: self.chips_at_start,
                actual,
            });
        }
        Ok(())
    }
}
