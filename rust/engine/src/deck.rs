use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineFault;

/// A 52-card deck with its own seeded RNG stream. One deck is built per hand
/// and consumed without replacement; cards are never re-dealt.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Restore the full 52 cards and deal from a fresh uniform permutation.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Remove and return the next `n` cards. Running out of cards cannot
    /// happen in correct play, so it surfaces as a fatal fault rather than
    /// an empty result.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EngineFault> {
        if n > self.remaining() {
            return Err(EngineFault::InsufficientCards {
                requested: n,
                remaining: self.remaining(),
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
