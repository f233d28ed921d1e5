use serde::{Deserialize, Serialize};

use crate::model::game_state::GameKind;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    PromptsExhausted,
    TimeUp,
    Closed,
}

/// Final report of one mini-game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub kind: GameKind,
    pub title: String,
    pub score: u32,
    pub correct: u32,
    pub answered: u32,
    pub end: EndReason,
    pub gauge: Option<i32>,
}

impl SessionOutcome {
    pub fn headline(&self) -> String {
        match self.end {
            EndReason::PromptsExhausted => format!("{} complete! You scored {} points.", self.title, self.score),
            EndReason::TimeUp => format!("Time's up! {} finished with {} points.", self.title, self.score),
            EndReason::Closed => format!("You left {} with {} points.", self.title, self.score),
        }
    }
}
