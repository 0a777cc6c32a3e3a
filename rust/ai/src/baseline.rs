//! Built-in baseline strategies.
//!
//! Reference opponents for harness runs and benchmarking: a passive
//! calling station, a rule-based tight-aggressive player, and a maniac.
//! None of them is meant to be strong; they are meant to be legal,
//! deterministic under a fixed seed, and distinguishable in style.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use felt_engine::cards::Card;
use felt_engine::engine::PlayerView;
use felt_engine::hand::{Category, evaluate};
use felt_engine::player::Action;

use crate::Agent;

fn to_call(view: &PlayerView) -> u32 {
    view.current_bet.saturating_sub(view.your_current_bet)
}

/// Smallest legal raise-to amount, or `None` when raising is pointless
/// (no chips behind beyond the call).
fn min_raise_to(view: &PlayerView) -> Option<u32> {
    let target = view.current_bet + view.minimum_raise;
    let max_affordable = view.your_current_bet + view.your_chips;
    if max_affordable <= view.current_bet {
        return None;
    }
    Some(target.min(max_affordable))
}

/// Preflop hand strength on a 0-10 scale.
///
/// - 9-10: premium (AA-JJ, AK)
/// - 7-8: strong (TT-99, AQ, KQs)
/// - 5-6: playable (medium pairs, big suited cards)
/// - 0-4: the rest
fn preflop_strength(hole: &[Card]) -> u8 {
    if hole.len() != 2 {
        return 0;
    }
    let r1 = hole[0].rank as u8;
    let r2 = hole[1].rank as u8;
    let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
    let suited = hole[0].suit == hole[1].suit;

    if r1 == r2 {
        return match high {
            14 | 13 => 10,
            12 | 11 => 9,
            10 => 8,
            9 => 7,
            8 => 6,
            7 => 5,
            _ => 4,
        };
    }
    match (high, low) {
        (14, 13) => {
            if suited {
                10
            } else {
                9
            }
        }
        (14, 12) => {
            if suited {
                8
            } else {
                7
            }
        }
        (13, 12) => {
            if suited {
                7
            } else {
                6
            }
        }
        (14, 11) | (13, 11) | (12, 11) => 6,
        (14, _) => 5,
        (h, l) if h - l == 1 && suited => 5,
        (h, l) if h - l <= 2 && suited => 4,
        (h, _) if h >= 12 => 3,
        _ => 2,
    }
}

/// Checks when free, calls anything, never raises, never folds.
#[derive(Debug, Clone, Default)]
pub struct CallingStation;

impl CallingStation {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for CallingStation {
    fn act(&mut self, view: &PlayerView) -> Action {
        if to_call(view) == 0 {
            Action::Check
        } else {
            Action::Call
        }
    }

    fn name(&self) -> &str {
        "CallingStation"
    }
}

/// Rule-based tight-aggressive player: raises its strong range, calls when
/// the price is right, folds the junk.
#[derive(Debug, Clone, Default)]
pub struct TightAggressive;

impl TightAggressive {
    pub fn new() -> Self {
        Self
    }

    fn preflop(&self, view: &PlayerView) -> Action {
        let strength = preflop_strength(&view.your_cards);
        let owe = to_call(view);
        if strength >= 8 {
            if let Some(raise_to) = min_raise_to(view) {
                if raise_to > view.your_current_bet {
                    return Action::Raise(raise_to);
                }
            }
            return if owe == 0 { Action::Check } else { Action::Call };
        }
        if strength >= 5 {
            // Call when cheap relative to the blind, fold to real pressure.
            return if owe == 0 {
                Action::Check
            } else if owe <= view.big_blind * 2 {
                Action::Call
            } else {
                Action::Fold
            };
        }
        if owe == 0 { Action::Check } else { Action::Fold }
    }

    fn postflop(&self, view: &PlayerView) -> Action {
        let mut cards = view.your_cards.clone();
        cards.extend_from_slice(&view.community_cards);
        let strength = evaluate(&cards);
        let owe = to_call(view);

        if strength.category >= Category::TwoPair {
            if let Some(raise_to) = min_raise_to(view) {
                if raise_to > view.your_current_bet {
                    return Action::Raise(raise_to);
                }
            }
            return if owe == 0 { Action::Check } else { Action::Call };
        }
        if strength.category >= Category::Pair {
            // Continue at a fair price: a third of the pot.
            return if owe == 0 {
                Action::Check
            } else if owe * 3 <= view.pot {
                Action::Call
            } else {
                Action::Fold
            };
        }
        if owe == 0 { Action::Check } else { Action::Fold }
    }
}

impl Agent for TightAggressive {
    fn act(&mut self, view: &PlayerView) -> Action {
        if view.community_cards.is_empty() {
            self.preflop(view)
        } else {
            self.postflop(view)
        }
    }

    fn name(&self) -> &str {
        "TightAggressive"
    }
}

/// Raises most turns regardless of holdings; occasionally shoves.
#[derive(Debug)]
pub struct Maniac {
    rng: StdRng,
}

impl Maniac {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for Maniac {
    fn act(&mut self, view: &PlayerView) -> Action {
        let roll: f64 = self.rng.random();
        if roll < 0.05 {
            return Action::AllIn;
        }
        if roll < 0.65 {
            if let Some(raise_to) = min_raise_to(view) {
                if raise_to > view.your_current_bet {
                    return Action::Raise(raise_to);
                }
            }
        }
        if to_call(view) == 0 {
            Action::Check
        } else {
            Action::Call
        }
    }

    fn name(&self) -> &str {
        "Maniac"
    }
}
