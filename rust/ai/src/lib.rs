//! # felt-ai: Decision Agents for the Hold'em Engine
//!
//! Pluggable decision-makers that drive the poker engine turn by turn.
//! Every agent decides from a [`PlayerView`] — the redacted projection the
//! engine hands to external players — and nothing else: no deck, no other
//! player's hole cards.
//!
//! The orchestrator contract is a single blocking call per turn. Timeouts,
//! transport failures and malformed decisions are the orchestrator's
//! problem; it substitutes a fold and moves on.
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::create_agent;
//!
//! let agent = create_agent("calling-station", 0).unwrap();
//! assert_eq!(agent.name(), "CallingStation");
//! ```

use felt_engine::engine::PlayerView;
use felt_engine::player::Action;

pub mod baseline;

/// A poker decision-maker. Implementations may keep internal state (seeded
/// RNG, opponent models); the engine only ever consumes the returned
/// [`Action`].
pub trait Agent: Send {
    /// Choose an action for the turn described by `view`. The engine
    /// validates the result; an illegal choice is rejected there and the
    /// orchestrator decides whether to retry or fold.
    fn act(&mut self, view: &PlayerView) -> Action;

    /// Identifier for rosters and telemetry.
    fn name(&self) -> &str;
}

/// Create a built-in agent by kind. `seed` feeds any randomized strategy so
/// sessions stay reproducible. Returns `None` for an unknown kind.
pub fn create_agent(kind: &str, seed: u64) -> Option<Box<dyn Agent>> {
    match kind {
        "calling-station" => Some(Box::new(baseline::CallingStation::new())),
        "tag" => Some(Box::new(baseline::TightAggressive::new())),
        "maniac" => Some(Box::new(baseline::Maniac::new(seed))),
        _ => None,
    }
}
