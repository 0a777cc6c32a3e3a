use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A player decision for one turn. The closed set of table actions; unknown
/// action strings cannot exist past deserialization.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid with nothing to call)
    Check,
    /// Call the current bet
    Call,
    /// Raise so that this player's total current-round bet becomes the given
    /// amount ("raise to", never "raise by")
    Raise(u32),
    /// Commit the entire remaining stack
    AllIn,
}

/// One seat at the table for the duration of a hand. Chip movement goes
/// through the crate-internal mutators only; nothing outside the state
/// machine edits a stack or wager directly.
#[derive(Debug, Clone)]
pub struct Player {
    id: String,
    name: String,
    chips: u32,
    hole: Vec<Card>,
    current_bet: u32,
    total_bet: u32,
    is_active: bool,
    is_all_in: bool,
    has_acted_this_round: bool,
    position: usize,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, chips: u32, position: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chips,
            hole: Vec::with_capacity(2),
            current_bet: 0,
            total_bet: 0,
            is_active: true,
            is_all_in: false,
            has_acted_this_round: false,
            position,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn total_bet(&self) -> u32 {
        self.total_bet
    }
    pub fn is_active(&self) -> bool {
        self.is_active
    }
    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }
    pub fn has_acted_this_round(&self) -> bool {
        self.has_acted_this_round
    }
    pub fn position(&self) -> usize {
        self.position
    }

    /// Still contesting the pot and able to take a turn.
    pub fn can_act(&self) -> bool {
        self.is_active && !self.is_all_in && self.chips > 0
    }

    pub(crate) fn give_card(&mut self, c: Card) {
        self.hole.push(c);
    }

    /// Move chips from the stack into the current wager, clamped at the
    /// stack (table stakes). Exhausting the stack marks the player all-in.
    /// Returns the amount actually moved.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let pay = amount.min(self.chips);
        self.chips -= pay;
        self.current_bet += pay;
        self.total_bet += pay;
        if self.chips == 0 {
            self.is_all_in = true;
        }
        pay
    }

    pub(crate) fn fold(&mut self) {
        self.is_active = false;
    }

    pub(crate) fn mark_acted(&mut self) {
        self.has_acted_this_round = true;
    }

    /// A raise re-opens the betting: this player owes another decision.
    pub(crate) fn require_action(&mut self) {
        self.has_acted_this_round = false;
    }

    /// Per-round reset when a street completes. The hand-long `total_bet`
    /// and the pot are untouched.
    pub(crate) fn reset_for_round(&mut self) {
        self.current_bet = 0;
        self.has_acted_this_round = false;
    }

    pub(crate) fn award(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }
}
