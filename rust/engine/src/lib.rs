//! # felt-engine: No-Limit Hold'em Engine Core
//!
//! A no-limit Texas Hold'em betting and hand-evaluation engine built to be
//! driven turn-by-turn by external decision-makers. It enforces exact poker
//! rules (blinds, turn order, minimum raise, all-in handling, side pots,
//! showdown) with hard chip-conservation invariants, and emits structured
//! domain events instead of rendering anything itself.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`player`] - Player state, wagers, and the table [`player::Action`] set
//! - [`rules`] - Betting-action validation
//! - [`pot`] - Side-pot layering by contribution level
//! - [`game`] - The betting state machine ([`game::HandState`])
//! - [`engine`] - Session facade, per-player redacted views
//! - [`events`] - Structured domain events and sinks
//! - [`logger`] - JSONL hand-history records
//! - [`errors`] - Protocol errors and internal-consistency faults
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::engine::Engine;
//! use felt_engine::player::Action;
//!
//! let mut engine = Engine::with_seed(10, 20, 7);
//! engine
//!     .start_new_hand(&["p1", "p2"], &["Alice", "Bob"], 1_000, false)
//!     .unwrap();
//!
//! // Heads-up: the dealer posts the small blind and acts first preflop.
//! let first = engine.current_player_id().unwrap().to_string();
//! engine.process_action(&first, Action::Call).unwrap();
//! assert_eq!(engine.hand().unwrap().pot(), 40);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All hand outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use felt_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.deal(5).unwrap(), deck2.deal(5).unwrap());
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_engine::hand::{evaluate, Category};
//!
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//! assert_eq!(evaluate(&cards).category, Category::RoyalFlush);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
