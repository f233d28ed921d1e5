use thiserror::Error;
use tracing::debug;

use crate::model::event_result::{EndReason, SessionOutcome};
use crate::model::game_state::{GameKind, GaugeView, PromptView, SessionView};

/// Points earned by a correct choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    Fixed(u32),
    /// Use the prompt's own `points`
    PerPrompt,
    /// `max(min, per_second * seconds left)`, reading the prompt clock when
    /// the game has one and the session clock otherwise
    TimeBonus { per_second: u32, min: u32 },
    /// The chosen option's entry in `Prompt::option_points`, paid on every
    /// choice whether or not it counts as correct
    PerOption,
}

/// What a wrong choice does to the current prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissPolicy {
    Advance,
    Retry,
}

/// What happens after the last prompt is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustPolicy {
    Finish,
    Cycle,
}

/// How a choice moves the gauge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GaugeMove {
    /// One table for every prompt, indexed by the chosen option and split
    /// by whether the choice was correct
    ByOutcome { hit: Vec<i32>, miss: Vec<i32> },
    /// Each prompt carries its own `gauge_delta` per option
    PerOption,
}

/// End-of-game bonus threshold on the final gauge reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeBonus {
    AtMost(i32, u32),
    AtLeast(i32, u32),
}

impl GaugeBonus {
    fn pays(self, value: i32) -> Option<u32> {
        match self {
            GaugeBonus::AtMost(limit, points) => (value <= limit).then_some(points),
            GaugeBonus::AtLeast(limit, points) => (value >= limit).then_some(points),
        }
    }
}

/// A secondary meter moved by each choice (air quality, soil health…).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeRule {
    pub label: String,
    pub initial: i32,
    pub min: i32,
    pub max: i32,
    /// Whether a high reading is the good end of the scale
    pub high_is_good: bool,
    pub moves: GaugeMove,

    /// Paid once when every prompt has been played. First match wins.
    pub bonus: Vec<GaugeBonus>,
}

impl GaugeRule {
    fn apply(&self, value: i32, prompt: &Prompt, choice: usize, correct: bool) -> i32 {
        let deltas = match &self.moves {
            GaugeMove::ByOutcome { hit, .. } if correct => hit,
            GaugeMove::ByOutcome { miss, .. } => miss,
            GaugeMove::PerOption => &prompt.gauge_delta,
        };
        let delta = deltas.get(choice).copied().unwrap_or(0);
        value.saturating_add(delta).clamp(self.min, self.max)
    }

    fn bonus_for(&self, value: i32) -> u32 {
        self.bonus
            .iter()
            .find_map(|b| b.pays(value))
            .unwrap_or(0)
    }
}

/// Declarative configuration of one mini-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDescriptor {
    pub kind: GameKind,
    pub title: String,
    pub duration_secs: u32,
    pub prompt_time_limit_secs: Option<u32>,
    pub reward: Reward,
    pub penalty: u32,
    pub on_miss: MissPolicy,
    pub on_exhausted: ExhaustPolicy,
    pub gauge: Option<GaugeRule>,
}

impl GameDescriptor {
    pub fn new(kind: GameKind, duration_secs: u32, reward: Reward) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            duration_secs,
            prompt_time_limit_secs: None,
            reward,
            penalty: 0,
            on_miss: MissPolicy::Advance,
            on_exhausted: ExhaustPolicy::Finish,
            gauge: None,
        }
    }
}

/// One decision point: an item to classify or a question to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub id: u32,
    pub label: String,
    pub icon: String,
    pub detail: String,
    pub options: Vec<String>,
    /// Indices into `options` that count as correct
    pub correct: Vec<usize>,
    pub points: u32,
    /// Per-option payout for `Reward::PerOption`
    pub option_points: Vec<u32>,
    /// Per-option gauge movement for `GaugeMove::PerOption`
    pub gauge_delta: Vec<i32>,
}

impl Prompt {
    pub fn accepts(&self, choice: usize) -> bool {
        self.correct.contains(&choice)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("the session has already finished")]
    Finished,

    #[error("choice {choice} is out of range ({options} options)")]
    InvalidChoice { choice: usize, options: usize },
}

/// Result of resolving one prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub correct: bool,
    pub points_delta: i64,
    pub gauge: Option<i32>,
    pub finished: bool,
}

type CompletionCallback = Box<dyn FnOnce(SessionOutcome) + Send>;

/// One bounded play-through of a mini-game.
///
/// The session is driven from outside: `tick` once per clock interval,
/// `resolve` on every player choice, `close` when the player leaves.
/// The completion callback runs on the first terminal transition and never
/// again, whichever path got there.
pub struct GameSession {
    descriptor: GameDescriptor,
    prompts: Vec<Prompt>,
    index: usize,

    score: u32,
    remaining_secs: u32,
    prompt_remaining_secs: Option<u32>,
    gauge: Option<i32>,

    correct: u32,
    answered: u32,

    outcome: Option<SessionOutcome>,
    on_complete: Option<CompletionCallback>,
}

impl GameSession {
    pub fn start<F>(descriptor: GameDescriptor, prompts: Vec<Prompt>, on_complete: F) -> Self
    where
        F: FnOnce(SessionOutcome) + Send + 'static,
    {
        let mut session = Self {
            remaining_secs: descriptor.duration_secs,
            prompt_remaining_secs: descriptor.prompt_time_limit_secs,
            gauge: descriptor.gauge.as_ref().map(|g| g.initial),
            descriptor,
            prompts,
            index: 0,
            score: 0,
            correct: 0,
            answered: 0,
            outcome: None,
            on_complete: Some(Box::new(on_complete)),
        };

        debug!(
            game = ?session.descriptor.kind,
            prompts = session.prompts.len(),
            duration = session.remaining_secs,
            "session started"
        );

        if session.prompts.is_empty() {
            session.finish(EndReason::PromptsExhausted);
        } else if session.remaining_secs == 0 {
            session.finish(EndReason::TimeUp);
        }

        session
    }

    #[cfg(test)]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_prompt(&self) -> Option<&Prompt> {
        if self.is_finished() {
            return None;
        }
        self.prompts.get(self.index)
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    #[cfg(test)]
    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }

    /// Advance both clocks by one second.
    ///
    /// Returns the resolution when the prompt clock ran out, which counts as
    /// a miss and always moves on to the next prompt.
    pub fn tick(&mut self) -> Result<Option<Resolution>, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.finish(EndReason::TimeUp);
            return Ok(None);
        }

        if let Some(left) = self.prompt_remaining_secs.as_mut() {
            *left = left.saturating_sub(1);
            if *left == 0 {
                return Ok(Some(self.apply(None)));
            }
        }

        Ok(None)
    }

    pub fn resolve(&mut self, choice: usize) -> Result<Resolution, SessionError> {
        let Some(prompt) = self.current_prompt() else {
            return Err(SessionError::Finished);
        };

        if choice >= prompt.options.len() {
            return Err(SessionError::InvalidChoice {
                choice,
                options: prompt.options.len(),
            });
        }

        Ok(self.apply(Some(choice)))
    }

    /// Player left early. The accumulated score is still reported.
    pub fn close(&mut self) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        self.finish(EndReason::Closed);
        Ok(())
    }

    pub fn view(&self, session_id: u64) -> SessionView {
        SessionView {
            session_id,
            kind: self.descriptor.kind,
            title: self.descriptor.title.clone(),
            score: self.score,
            remaining_secs: self.remaining_secs,
            duration_secs: self.descriptor.duration_secs,
            prompt_remaining_secs: self.prompt_remaining_secs,
            round: self.index.min(self.prompts.len().saturating_sub(1)),
            rounds: self.prompts.len(),
            prompt: self.current_prompt().map(|p| PromptView {
                label: p.label.clone(),
                icon: p.icon.clone(),
                detail: p.detail.clone(),
                options: p.options.clone(),
            }),
            gauge: self
                .descriptor
                .gauge
                .as_ref()
                .zip(self.gauge)
                .map(|(rule, value)| GaugeView {
                    label: rule.label.clone(),
                    value,
                    min: rule.min,
                    max: rule.max,
                    high_is_good: rule.high_is_good,
                }),
        }
    }

    /* =========================
       Internals
       ========================= */

    /// `None` means the prompt timed out.
    fn apply(&mut self, choice: Option<usize>) -> Resolution {
        let before = self.score;
        let prompt = &self.prompts[self.index];
        let correct = choice.is_some_and(|c| prompt.accepts(c));

        let earned = choice.map_or(0, |c| self.payout(prompt, c, correct));
        let gauge = match (&self.descriptor.gauge, self.gauge, choice) {
            (Some(rule), Some(value), Some(c)) => Some(rule.apply(value, prompt, c, correct)),
            _ => self.gauge,
        };

        self.answered += 1;
        self.gauge = gauge;
        self.score = self.score.saturating_add(earned);
        if correct {
            self.correct += 1;
        } else {
            self.score = self.score.saturating_sub(self.descriptor.penalty);
        }

        let moves_on =
            correct || choice.is_none() || self.descriptor.on_miss == MissPolicy::Advance;
        if moves_on {
            self.advance();
        }

        Resolution {
            correct,
            points_delta: i64::from(self.score) - i64::from(before),
            gauge: self.gauge,
            finished: self.is_finished(),
        }
    }

    fn payout(&self, prompt: &Prompt, choice: usize, correct: bool) -> u32 {
        match self.descriptor.reward {
            Reward::PerOption => prompt.option_points.get(choice).copied().unwrap_or(0),
            _ if !correct => 0,
            Reward::Fixed(points) => points,
            Reward::PerPrompt => prompt.points,
            Reward::TimeBonus { per_second, min } => {
                let left = self.prompt_remaining_secs.unwrap_or(self.remaining_secs);
                per_second.saturating_mul(left).max(min)
            }
        }
    }

    fn advance(&mut self) {
        self.prompt_remaining_secs = self.descriptor.prompt_time_limit_secs;
        self.index += 1;

        if self.index < self.prompts.len() {
            return;
        }

        match self.descriptor.on_exhausted {
            ExhaustPolicy::Cycle => self.index = 0,
            ExhaustPolicy::Finish => {
                if let (Some(rule), Some(value)) = (&self.descriptor.gauge, self.gauge) {
                    self.score = self.score.saturating_add(rule.bonus_for(value));
                }
                self.finish(EndReason::PromptsExhausted);
            }
        }
    }

    fn finish(&mut self, end: EndReason) {
        let outcome = SessionOutcome {
            kind: self.descriptor.kind,
            title: self.descriptor.title.clone(),
            score: self.score,
            correct: self.correct,
            answered: self.answered,
            end,
            gauge: self.gauge,
        };

        debug!(game = ?outcome.kind, score = outcome.score, end = ?end, "session finished");

        if let Some(on_complete) = self.on_complete.take() {
            on_complete(outcome.clone());
        }
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn prompt(id: u32, options: &[&str], correct: usize, points: u32) -> Prompt {
        Prompt {
            id,
            label: format!("prompt {id}"),
            icon: String::new(),
            detail: String::new(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct: vec![correct],
            points,
            option_points: Vec::new(),
            gauge_delta: Vec::new(),
        }
    }

    fn bins(n: u32) -> Vec<Prompt> {
        (0..n).map(|i| prompt(i, &["a", "b", "c"], (i % 3) as usize, 10)).collect()
    }

    fn started(
        descriptor: GameDescriptor,
        prompts: Vec<Prompt>,
    ) -> (GameSession, mpsc::Receiver<SessionOutcome>) {
        let (tx, rx) = mpsc::channel();
        let session = GameSession::start(descriptor, prompts, move |outcome| {
            let _ = tx.send(outcome);
        });
        (session, rx)
    }

    fn quiz(duration: u32) -> GameDescriptor {
        GameDescriptor::new(GameKind::EcoQuiz, duration, Reward::Fixed(1))
    }

    #[test]
    fn correct_answers_accumulate_and_finish() {
        let (mut s, rx) = started(quiz(60), bins(3));

        for i in 0..3 {
            let res = s.resolve(i % 3).unwrap();
            assert!(res.correct);
            assert_eq!(res.points_delta, 1);
        }

        let outcome = rx.try_recv().unwrap();
        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.end, EndReason::PromptsExhausted);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn penalty_never_drives_score_below_zero() {
        let mut d = quiz(60);
        d.reward = Reward::Fixed(5);
        d.penalty = 3;
        d.on_miss = MissPolicy::Retry;
        let (mut s, _rx) = started(d, bins(2));

        s.resolve(1).unwrap();
        assert_eq!(s.score(), 0);

        s.resolve(0).unwrap();
        assert_eq!(s.score(), 5);
        s.resolve(0).unwrap();
        assert_eq!(s.score(), 2);
        s.resolve(0).unwrap();
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn retry_keeps_the_same_prompt() {
        let mut d = quiz(60);
        d.on_miss = MissPolicy::Retry;
        let (mut s, _rx) = started(d, bins(2));

        s.resolve(2).unwrap();
        assert_eq!(s.current_prompt().map(|p| p.id), Some(0));
        s.resolve(0).unwrap();
        assert_eq!(s.current_prompt().map(|p| p.id), Some(1));
    }

    #[test]
    fn cycling_games_only_end_on_time() {
        let mut d = quiz(3);
        d.on_exhausted = ExhaustPolicy::Cycle;
        let (mut s, rx) = started(d, bins(2));

        s.resolve(0).unwrap();
        s.resolve(1).unwrap();
        assert_eq!(s.current_prompt().map(|p| p.id), Some(0));
        assert!(!s.is_finished());

        s.tick().unwrap();
        s.tick().unwrap();
        s.tick().unwrap();
        let outcome = rx.try_recv().unwrap();
        assert_eq!(outcome.end, EndReason::TimeUp);
        assert_eq!(outcome.score, 2);
    }

    #[test]
    fn time_up_counts_only_resolved_prompts() {
        let (mut s, rx) = started(quiz(2), bins(5));

        s.resolve(0).unwrap();
        s.resolve(1).unwrap();
        s.tick().unwrap();
        s.tick().unwrap();

        assert!(s.is_finished());
        assert_eq!(s.resolve(2), Err(SessionError::Finished));
        assert_eq!(s.tick(), Err(SessionError::Finished));

        let outcome = rx.try_recv().unwrap();
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.end, EndReason::TimeUp);
    }

    #[test]
    fn close_reports_accumulated_score_once() {
        let (mut s, rx) = started(quiz(60), bins(4));
        s.resolve(0).unwrap();

        s.close().unwrap();
        assert_eq!(s.close(), Err(SessionError::Finished));
        assert_eq!(s.tick(), Err(SessionError::Finished));

        let outcomes: Vec<_> = rx.try_iter().collect();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].score, 1);
        assert_eq!(outcomes[0].end, EndReason::Closed);
    }

    #[test]
    fn invalid_choice_leaves_state_alone() {
        let (mut s, rx) = started(quiz(60), bins(2));

        assert_eq!(
            s.resolve(7),
            Err(SessionError::InvalidChoice { choice: 7, options: 3 })
        );
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_prompt().map(|p| p.id), Some(0));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn empty_prompt_list_finishes_immediately() {
        let (s, rx) = started(quiz(60), Vec::new());
        assert!(s.is_finished());
        assert_eq!(rx.try_recv().unwrap().score, 0);
    }

    #[test]
    fn prompt_clock_expiry_is_a_miss() {
        let mut d = quiz(100);
        d.prompt_time_limit_secs = Some(2);
        d.on_miss = MissPolicy::Retry;
        let (mut s, _rx) = started(d, bins(2));

        assert_eq!(s.tick().unwrap(), None);
        let res = s.tick().unwrap().expect("prompt should time out");
        assert!(!res.correct);
        assert_eq!(s.current_prompt().map(|p| p.id), Some(1));
        assert_eq!(s.view(1).prompt_remaining_secs, Some(2));
    }

    #[test]
    fn time_bonus_reads_prompt_clock() {
        let mut d = quiz(100);
        d.prompt_time_limit_secs = Some(15);
        d.reward = Reward::TimeBonus { per_second: 2, min: 10 };
        let (mut s, _rx) = started(d, bins(2));

        s.tick().unwrap();
        assert_eq!(s.resolve(0).unwrap().points_delta, 28);

        for _ in 0..12 {
            s.tick().unwrap();
        }
        assert_eq!(s.resolve(1).unwrap().points_delta, 10);
    }

    #[test]
    fn gauge_clamps_and_pays_bonus_at_the_end() {
        let mut d = quiz(60);
        d.reward = Reward::Fixed(25);
        d.gauge = Some(GaugeRule {
            label: "AQI".into(),
            initial: 40,
            min: 0,
            max: 300,
            high_is_good: false,
            moves: GaugeMove::ByOutcome {
                hit: vec![-20, 15],
                miss: vec![10, -10],
            },
            bonus: vec![GaugeBonus::AtMost(50, 50), GaugeBonus::AtMost(100, 25)],
        });
        let prompts = vec![prompt(0, &["good", "bad"], 0, 0), prompt(1, &["good", "bad"], 0, 0)];
        let (mut s, rx) = started(d, prompts);

        assert_eq!(s.resolve(0).unwrap().gauge, Some(20));
        let last = s.resolve(0).unwrap();
        assert_eq!(last.gauge, Some(0));
        assert!(last.finished);

        let outcome = rx.try_recv().unwrap();
        assert_eq!(outcome.score, 25 + 25 + 50);
        assert_eq!(outcome.gauge, Some(0));
    }

    #[test]
    fn view_hides_prompt_after_finish() {
        let (mut s, _rx) = started(quiz(60), bins(1));
        assert!(s.view(3).prompt.is_some());
        s.resolve(0).unwrap();
        let view = s.view(3);
        assert!(view.prompt.is_none());
        assert_eq!(view.session_id, 3);
        assert_eq!(view.rounds, 1);
    }

    #[test]
    fn per_option_reward_pays_on_misses_too() {
        let mut d = quiz(60);
        d.reward = Reward::PerOption;
        d.penalty = 0;
        let mut first = prompt(0, &["a", "b", "c"], 1, 0);
        first.option_points = vec![4, 30, 0];
        let mut second = prompt(1, &["a", "b", "c"], 0, 0);
        second.option_points = vec![12, 7];
        let (mut s, rx) = started(d, vec![first, second]);

        let miss = s.resolve(0).unwrap();
        assert!(!miss.correct);
        assert_eq!(miss.points_delta, 4);

        // no entry for the third option
        let last = s.resolve(2).unwrap();
        assert_eq!(last.points_delta, 0);
        assert!(last.finished);

        let outcome = rx.try_recv().unwrap();
        assert_eq!(outcome.score, 4);
        assert_eq!(outcome.correct, 0);
        assert_eq!(outcome.answered, 2);
    }

    #[test]
    fn per_prompt_gauge_and_lower_bound_bonus() {
        let mut d = quiz(60);
        d.reward = Reward::Fixed(0);
        d.gauge = Some(GaugeRule {
            label: "Soil".into(),
            initial: 50,
            min: 0,
            max: 100,
            high_is_good: true,
            moves: GaugeMove::PerOption,
            bonus: vec![GaugeBonus::AtLeast(70, 50), GaugeBonus::AtLeast(50, 25)],
        });
        let mut up = prompt(0, &["good", "bad"], 0, 0);
        up.gauge_delta = vec![10, -6];
        let mut down = prompt(1, &["good", "bad"], 0, 0);
        down.gauge_delta = vec![8, -6];
        let (mut s, rx) = started(d, vec![up, down]);

        assert_eq!(s.resolve(0).unwrap().gauge, Some(60));
        assert_eq!(s.resolve(1).unwrap().gauge, Some(54));

        let outcome = rx.try_recv().unwrap();
        assert_eq!(outcome.gauge, Some(54));
        assert_eq!(outcome.score, 25);
    }

    #[test]
    fn bonus_thresholds_are_checked_in_order() {
        let rule = GaugeRule {
            label: "AQI".into(),
            initial: 0,
            min: 0,
            max: 300,
            high_is_good: false,
            moves: GaugeMove::PerOption,
            bonus: vec![GaugeBonus::AtMost(50, 50), GaugeBonus::AtMost(100, 25)],
        };
        assert_eq!(rule.bonus_for(50), 50);
        assert_eq!(rule.bonus_for(51), 25);
        assert_eq!(rule.bonus_for(101), 0);
    }
}
