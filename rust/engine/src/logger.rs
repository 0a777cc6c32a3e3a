use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::events::{EventSink, GameEvent};
use crate::game::Street;
use crate::player::Action;

/// Records a single player action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player_id: String,
    /// The betting street when this action occurred
    pub street: Street,
    pub action: Action,
}

/// Information about how the hand was decided.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Ids of the players awarded chips
    pub winners: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of a poker hand including all actions, board cards, and
/// outcome. Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    pub hand_number: u64,
    /// Deck seed (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// Human-readable outcome line
    pub result: Option<String>,
    /// Timestamp when the hand was recorded (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends one JSON object per settled hand to a history file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Id generation without a backing file, for tests.
    pub fn with_date(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

/// Event sink that assembles a [`HandRecord`] per hand and writes it when
/// the hand settles. Write failures are kept for the host to inspect; the
/// game itself never stalls on history IO.
pub struct RecordingSink {
    logger: HandLogger,
    current: Option<HandRecord>,
    last_error: Option<std::io::Error>,
}

impl RecordingSink {
    pub fn new(logger: HandLogger) -> Self {
        Self {
            logger,
            current: None,
            last_error: None,
        }
    }

    pub fn last_error(&self) -> Option<&std::io::Error> {
        self.last_error.as_ref()
    }
}

impl EventSink for RecordingSink {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::HandStarted {
                hand_number, seed, ..
            } => {
                self.current = Some(HandRecord {
                    hand_id: self.logger.next_id(),
                    hand_number: *hand_number,
                    seed: Some(*seed),
                    actions: Vec::new(),
                    board: Vec::new(),
                    result: None,
                    ts: None,
                    meta: None,
                    showdown: None,
                });
            }
            GameEvent::ActionApplied {
                player_id,
                street,
                action,
                ..
            } => {
                if let Some(rec) = &mut self.current {
                    rec.actions.push(ActionRecord {
                        player_id: player_id.clone(),
                        street: *street,
                        action: *action,
                    });
                }
            }
            GameEvent::RoundAdvanced {
                community_cards, ..
            } => {
                if let Some(rec) = &mut self.current {
                    rec.board = community_cards.clone();
                }
            }
            GameEvent::HandSettled { summary } => {
                if let Some(mut rec) = self.current.take() {
                    rec.board = summary.community_cards.clone();
                    rec.result = Some(format!(
                        "pot {} to {}",
                        summary.pot_distributed,
                        summary.winners.join(", ")
                    ));
                    rec.showdown = Some(ShowdownInfo {
                        winners: summary.winners.clone(),
                        notes: None,
                    });
                    if let Err(e) = self.logger.write(&rec) {
                        self.last_error = Some(e);
                    }
                }
            }
        }
    }
}
