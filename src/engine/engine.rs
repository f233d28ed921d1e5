use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::engine::challenges::{ChallengeBoard, Proof, SpinReward};
use crate::engine::chat::ChatResponder;
use crate::engine::games;
use crate::engine::lessons::LessonBook;
use crate::engine::profile_store::ProfileStore;
use crate::engine::protocol::{BoardSnapshot, EngineCommand, EngineResponse};
use crate::engine::session::{GameSession, SessionError};
use crate::engine::ticker::Ticker;
use crate::model::event_result::SessionOutcome;
use crate::model::game_state::GameKind;
use crate::model::profile::Avatar;

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub tick_interval: Duration,
    pub chat_reply_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            chat_reply_delay: Duration::from_millis(1000),
        }
    }
}

struct ActiveSession {
    id: u64,
    session: GameSession,
    // Dropped last so the thread is joined after the session goes away.
    _ticker: Option<Ticker>,
}

pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    loopback: Sender<EngineCommand>,

    config: EngineConfig,
    rng: StdRng,

    profile: ProfileStore,
    coach: ChatResponder,
    lessons: LessonBook,
    board: ChallengeBoard,

    active: Option<ActiveSession>,
    next_session_id: u64,
    finished_tx: Sender<(u64, SessionOutcome)>,
    finished_rx: Receiver<(u64, SessionOutcome)>,
}

impl Engine {
    /// `loopback` must feed the same queue as `rx`; tickers post into it.
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        loopback: Sender<EngineCommand>,
        profile: ProfileStore,
        config: EngineConfig,
    ) -> Self {
        let (finished_tx, finished_rx) = mpsc::channel();

        Self {
            rx,
            tx,
            loopback,
            config,
            rng: StdRng::from_entropy(),
            profile,
            coach: ChatResponder,
            lessons: LessonBook::default(),
            board: ChallengeBoard::default(),
            active: None,
            next_session_id: 1,
            finished_tx,
            finished_rx,
        }
    }

    #[cfg(test)]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[cfg(test)]
    fn has_ticker(&self) -> bool {
        self.active.as_ref().is_some_and(|active| active._ticker.is_some())
    }

    pub fn run(&mut self) {
        self.publish_all();

        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::OpenGame(kind) => self.open_game(kind),

                EngineCommand::Choose { session_id, choice } => {
                    self.choose(session_id, choice)
                }

                EngineCommand::Tick { session_id } => self.tick(session_id),

                EngineCommand::CloseGame { session_id } => self.close_game(session_id),

                EngineCommand::AskCoach(text) => self.ask_coach(text),

                EngineCommand::CompleteLesson(id) => {
                    if self.lessons.complete(&id) {
                        debug!(completed = self.lessons.completed_count(), "lesson progress");
                        self.send(EngineResponse::LessonsChanged(
                            self.lessons.lessons().to_vec(),
                        ));
                        self.open_game(GameKind::EcoQuiz);
                    } else {
                        self.notice(format!("Unknown lesson {id}"));
                    }
                }

                EngineCommand::CompleteChallenge { id, proof } => {
                    self.complete_challenge(&id, &proof)
                }

                EngineCommand::SpinWheel => self.spin_wheel(),

                EngineCommand::SaveProfile { name, avatar } => self.save_profile(&name, avatar),

                EngineCommand::Shutdown => {
                    self.shutdown();
                    break;
                }
            }

            self.collect_finished();
        }

        debug!("engine loop exited");
    }

    /* =========================
       Game sessions
       ========================= */

    fn open_game(&mut self, kind: GameKind) {
        if let Some(mut old) = self.active.take() {
            if !old.session.is_finished() {
                let _ = old.session.close();
            }
            // old ticker joins here
        }

        let id = self.next_session_id;
        self.next_session_id += 1;

        let (descriptor, prompts) = games::deal(kind, &mut self.rng);
        let finished_tx = self.finished_tx.clone();
        let session = GameSession::start(descriptor, prompts, move |outcome| {
            let _ = finished_tx.send((id, outcome));
        });

        let ticker = (!session.is_finished())
            .then(|| Ticker::spawn(self.config.tick_interval, id, self.loopback.clone()));

        info!(session_id = id, game = kind.title(), "game opened");
        self.send(EngineResponse::SessionStarted(session.view(id)));

        self.active = Some(ActiveSession {
            id,
            session,
            _ticker: ticker,
        });
    }

    fn current(&mut self, session_id: u64) -> Option<&mut ActiveSession> {
        match self.active.as_mut() {
            Some(active) if active.id == session_id => Some(active),
            _ => None,
        }
    }

    fn choose(&mut self, session_id: u64, choice: usize) {
        let Some(active) = self.current(session_id) else {
            debug!(session_id, "choice for an inactive session ignored");
            return;
        };

        match active.session.resolve(choice) {
            Ok(resolution) => {
                let view = active.session.view(session_id);
                self.send(EngineResponse::SessionUpdated {
                    view,
                    last: Some(resolution),
                });
            }
            Err(SessionError::Finished) => {}
            Err(e) => warn!(session_id, error = %e, "choice rejected"),
        }
    }

    fn tick(&mut self, session_id: u64) {
        let Some(active) = self.current(session_id) else {
            debug!(session_id, "stale tick ignored");
            return;
        };

        if let Ok(last) = active.session.tick() {
            let view = active.session.view(session_id);
            self.send(EngineResponse::SessionUpdated { view, last });
        }
    }

    fn close_game(&mut self, session_id: u64) {
        if let Some(active) = self.current(session_id) {
            let _ = active.session.close();
        }
    }

    /// Banks the score of every session that reached a terminal state and
    /// stops its ticker.
    fn collect_finished(&mut self) {
        if self
            .active
            .as_ref()
            .is_some_and(|active| active.session.is_finished())
        {
            self.active = None;
        }

        while let Ok((session_id, outcome)) = self.finished_rx.try_recv() {
            info!(
                session_id,
                game = outcome.kind.title(),
                score = outcome.score,
                end = ?outcome.end,
                "game finished"
            );

            if let Err(e) = self.profile.add_points(outcome.score) {
                warn!(error = %e, "could not save points");
            }

            self.send(EngineResponse::SessionFinished {
                session_id,
                outcome,
            });
            self.send(EngineResponse::ProfileChanged(self.profile.snapshot()));
        }
    }

    /* =========================
       Coach
       ========================= */

    fn ask_coach(&mut self, text: String) {
        let reply = self.coach.respond(&text, &mut self.rng).to_string();
        let delay = self.config.chat_reply_delay;

        if delay.is_zero() {
            self.send(EngineResponse::CoachReply(reply));
            return;
        }

        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name("coach-reply".into())
            .spawn(move || {
                thread::sleep(delay);
                let _ = tx.send(EngineResponse::CoachReply(reply));
            });

        if let Err(e) = spawned {
            warn!(error = %e, "could not delay coach reply");
        }
    }

    /* =========================
       Challenges
       ========================= */

    fn complete_challenge(&mut self, id: &str, proof: &Proof) {
        match self.board.complete(id, proof) {
            Ok(points) => {
                self.bank(points);
                self.notice(format!("Challenge complete! +{points} points"));
                self.send(EngineResponse::ChallengesChanged(self.board_snapshot()));
            }
            Err(e) => self.notice(e.to_string()),
        }
    }

    fn spin_wheel(&mut self) {
        match self.board.spin(&mut self.rng) {
            Ok(reward) => {
                if let SpinReward::Points(points) = reward {
                    self.bank(points);
                }
                self.send(EngineResponse::SpinResult(reward));
                self.send(EngineResponse::ChallengesChanged(self.board_snapshot()));
            }
            Err(e) => self.notice(e.to_string()),
        }
    }

    fn board_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            challenges: self.board.challenges().to_vec(),
            completed: self.board.completed_count(),
            streak: self.board.streak,
            max_streak: self.board.max_streak,
            can_spin: self.board.can_spin(),
            multiplier: self.board.pending_multiplier(),
        }
    }

    /* =========================
       Profile
       ========================= */

    fn bank(&mut self, points: u32) {
        if let Err(e) = self.profile.add_points(points) {
            warn!(error = %e, "could not save points");
        }
        self.send(EngineResponse::ProfileChanged(self.profile.snapshot()));
    }

    fn save_profile(&mut self, name: &str, avatar: Avatar) {
        let name_saved = if name.trim().is_empty() {
            Ok(())
        } else {
            self.profile.set_display_name(name)
        };

        match name_saved.and_then(|()| self.profile.set_avatar(avatar)) {
            Ok(()) => self.notice("Profile saved".to_string()),
            Err(e) => {
                warn!(error = %e, "could not save profile");
                self.notice("Profile could not be saved".to_string());
            }
        }

        self.send(EngineResponse::ProfileChanged(self.profile.snapshot()));
    }

    /* =========================
       Plumbing
       ========================= */

    fn publish_all(&self) {
        self.send(EngineResponse::ProfileChanged(self.profile.snapshot()));
        self.send(EngineResponse::LessonsChanged(self.lessons.lessons().to_vec()));
        self.send(EngineResponse::ChallengesChanged(self.board_snapshot()));
    }

    fn shutdown(&mut self) {
        if let Some(mut active) = self.active.take() {
            let _ = active.session.close();
        }
        self.collect_finished();
        info!("engine shut down");
    }

    fn notice(&self, text: String) {
        self.send(EngineResponse::Notice(text));
    }

    fn send(&self, response: EngineResponse) {
        let _ = self.tx.send(response);
    }
}
