use crate::engine::challenges::{Proof, SpinReward};
use crate::engine::session::Resolution;
use crate::model::catalog::{ChallengeRecord, LessonRecord};
use crate::model::event_result::SessionOutcome;
use crate::model::game_state::{GameKind, SessionView};
use crate::model::profile::{Avatar, ProfileSnapshot};

pub enum EngineCommand {
    OpenGame(GameKind),
    Choose { session_id: u64, choice: usize },
    Tick { session_id: u64 },
    CloseGame { session_id: u64 },

    AskCoach(String),

    CompleteLesson(String),
    CompleteChallenge { id: String, proof: Proof },
    SpinWheel,

    SaveProfile { name: String, avatar: Avatar },

    /// Tickers hold a sender into the engine queue, so the loop never sees
    /// a disconnect on its own.
    Shutdown,
}

/// What the challenges screen renders.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub challenges: Vec<ChallengeRecord>,
    pub completed: usize,
    pub streak: u32,
    pub max_streak: u32,
    pub can_spin: bool,
    pub multiplier: Option<u32>,
}

pub enum EngineResponse {
    SessionStarted(SessionView),
    SessionUpdated {
        view: SessionView,
        last: Option<Resolution>,
    },
    SessionFinished {
        session_id: u64,
        outcome: SessionOutcome,
    },

    CoachReply(String),

    ProfileChanged(ProfileSnapshot),
    LessonsChanged(Vec<LessonRecord>),
    ChallengesChanged(BoardSnapshot),
    SpinResult(SpinReward),

    /// One-line feedback for the status bar.
    Notice(String),
}
