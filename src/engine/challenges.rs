use std::path::{Path, PathBuf};

use anyhow::Context;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::catalog::{challenge_catalog, ChallengeRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChallengeError {
    #[error("no challenge with id {0}")]
    NotFound(String),

    #[error("challenge {0} is already completed")]
    AlreadyCompleted(String),

    #[error("describe what you did before submitting")]
    EmptyProof,

    #[error("the wheel has already been spun today")]
    AlreadySpun,
}

/* =========================
   Proof
   ========================= */

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoProof {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub description: String,
    pub photo: Option<PhotoProof>,
}

/// Reads only the image header, so large photos are cheap to attach.
pub fn load_photo_proof(path: &Path) -> anyhow::Result<PhotoProof> {
    let (width, height) = image::image_dimensions(path)
        .with_context(|| format!("{} is not a readable image", path.display()))?;

    Ok(PhotoProof {
        path: path.to_path_buf(),
        width,
        height,
    })
}

/* =========================
   Spin wheel
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinReward {
    Points(u32),
    Streak(u32),
    Multiplier(u32),
}

impl SpinReward {
    pub fn label(self) -> String {
        match self {
            SpinReward::Points(p) => format!("+{p} Points"),
            SpinReward::Streak(d) => format!("+{d} Day Streak"),
            SpinReward::Multiplier(m) => format!("{m}x Multiplier"),
        }
    }
}

pub const WHEEL: [SpinReward; 8] = [
    SpinReward::Points(50),
    SpinReward::Points(25),
    SpinReward::Streak(1),
    SpinReward::Points(75),
    SpinReward::Points(30),
    SpinReward::Multiplier(2),
    SpinReward::Points(40),
    SpinReward::Points(60),
];

/* =========================
   Streak tree
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeStage {
    Seedling,
    Sprout,
    YoungTree,
    MatureTree,
    AncientTree,
}

impl TreeStage {
    pub fn for_streak(days: u32) -> Self {
        match days {
            0..=2 => TreeStage::Seedling,
            3..=6 => TreeStage::Sprout,
            7..=13 => TreeStage::YoungTree,
            14..=29 => TreeStage::MatureTree,
            _ => TreeStage::AncientTree,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TreeStage::Seedling => "Seedling",
            TreeStage::Sprout => "Sprout",
            TreeStage::YoungTree => "Young Tree",
            TreeStage::MatureTree => "Mature Tree",
            TreeStage::AncientTree => "Ancient Tree",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            TreeStage::Seedling => "🌱",
            TreeStage::Sprout => "🌿",
            TreeStage::YoungTree => "🪴",
            TreeStage::MatureTree => "🌳",
            TreeStage::AncientTree => "🌲",
        }
    }

    /// Days still needed to reach the next stage, `None` at the top.
    pub fn days_to_next(days: u32) -> Option<u32> {
        let next = match TreeStage::for_streak(days) {
            TreeStage::Seedling => 3,
            TreeStage::Sprout => 7,
            TreeStage::YoungTree => 14,
            TreeStage::MatureTree => 30,
            TreeStage::AncientTree => return None,
        };
        Some(next - days)
    }
}

/* =========================
   Board
   ========================= */

#[derive(Debug, Clone)]
pub struct ChallengeBoard {
    challenges: Vec<ChallengeRecord>,
    pub streak: u32,
    pub max_streak: u32,
    can_spin: bool,
    multiplier: Option<u32>,
}

impl Default for ChallengeBoard {
    fn default() -> Self {
        Self::new(challenge_catalog(), 7, 15)
    }
}

impl ChallengeBoard {
    pub fn new(challenges: Vec<ChallengeRecord>, streak: u32, max_streak: u32) -> Self {
        Self {
            challenges,
            streak,
            max_streak: max_streak.max(streak),
            can_spin: true,
            multiplier: None,
        }
    }

    pub fn challenges(&self) -> &[ChallengeRecord] {
        &self.challenges
    }

    pub fn completed_count(&self) -> usize {
        self.challenges.iter().filter(|c| c.completed).count()
    }

    pub fn can_spin(&self) -> bool {
        self.can_spin
    }

    pub fn pending_multiplier(&self) -> Option<u32> {
        self.multiplier
    }

    /// Marks a challenge done and returns the points it pays.
    pub fn complete(&mut self, id: &str, proof: &Proof) -> Result<u32, ChallengeError> {
        if proof.description.trim().is_empty() {
            return Err(ChallengeError::EmptyProof);
        }

        let challenge = self
            .challenges
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ChallengeError::NotFound(id.to_string()))?;

        if challenge.completed {
            return Err(ChallengeError::AlreadyCompleted(id.to_string()));
        }
        challenge.completed = true;

        let factor = self.multiplier.take().unwrap_or(1);
        let points = challenge.points.saturating_mul(factor);

        self.streak = self.streak.saturating_add(1);
        self.max_streak = self.max_streak.max(self.streak);

        info!(
            challenge = %challenge.title,
            points,
            factor,
            photo = proof.photo.is_some(),
            "challenge completed"
        );
        Ok(points)
    }

    /// One spin per board. Points rewards are returned for the caller to bank.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SpinReward, ChallengeError> {
        if !self.can_spin {
            return Err(ChallengeError::AlreadySpun);
        }
        self.can_spin = false;

        let reward = WHEEL[rng.gen_range(0..WHEEL.len())];
        match reward {
            SpinReward::Streak(days) => {
                self.streak = self.streak.saturating_add(days);
                self.max_streak = self.max_streak.max(self.streak);
            }
            SpinReward::Multiplier(m) => self.multiplier = Some(m),
            SpinReward::Points(_) => {}
        }

        info!(reward = %reward.label(), "wheel spun");
        Ok(reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn proof(text: &str) -> Proof {
        Proof {
            description: text.to_string(),
            photo: None,
        }
    }

    #[test]
    fn completing_pays_catalog_points_once() {
        let mut board = ChallengeBoard::default();
        assert_eq!(board.complete("1", &proof("used a cloth bag")), Ok(50));
        assert_eq!(
            board.complete("1", &proof("again")),
            Err(ChallengeError::AlreadyCompleted("1".into()))
        );
        assert_eq!(board.completed_count(), 1);
        assert_eq!(board.streak, 8);
    }

    #[test]
    fn blank_proof_is_rejected_without_side_effects() {
        let mut board = ChallengeBoard::default();
        assert_eq!(board.complete("2", &proof("   ")), Err(ChallengeError::EmptyProof));
        assert_eq!(board.completed_count(), 0);
        assert_eq!(board.streak, 7);
    }

    #[test]
    fn unknown_challenge() {
        let mut board = ChallengeBoard::default();
        assert_eq!(
            board.complete("99", &proof("did it")),
            Err(ChallengeError::NotFound("99".into()))
        );
    }

    #[test]
    fn wheel_spins_once() {
        let mut board = ChallengeBoard::default();
        let mut rng = StdRng::seed_from_u64(3);
        let reward = board.spin(&mut rng).unwrap();
        assert!(WHEEL.contains(&reward));
        assert_eq!(board.spin(&mut rng), Err(ChallengeError::AlreadySpun));
        assert!(!board.can_spin());
    }

    #[test]
    fn multiplier_doubles_next_completion_only() {
        let mut board = ChallengeBoard::default();
        board.multiplier = Some(2);

        assert_eq!(board.complete("2", &proof("walked")), Ok(150));
        assert_eq!(board.pending_multiplier(), None);
        assert_eq!(board.complete("3", &proof("planted")), Ok(60));
    }

    #[test]
    fn some_seed_lands_on_streak() {
        for seed in 0..200 {
            let mut board = ChallengeBoard::new(challenge_catalog(), 7, 7);
            let mut rng = StdRng::seed_from_u64(seed);
            if board.spin(&mut rng) == Ok(SpinReward::Streak(1)) {
                assert_eq!(board.streak, 8);
                assert_eq!(board.max_streak, 8);
                return;
            }
        }
        panic!("no seed in range hit the streak segment");
    }

    #[test]
    fn tree_grows_with_streak() {
        assert_eq!(TreeStage::for_streak(0), TreeStage::Seedling);
        assert_eq!(TreeStage::for_streak(3), TreeStage::Sprout);
        assert_eq!(TreeStage::for_streak(7), TreeStage::YoungTree);
        assert_eq!(TreeStage::for_streak(14), TreeStage::MatureTree);
        assert_eq!(TreeStage::for_streak(30), TreeStage::AncientTree);
        assert_eq!(TreeStage::days_to_next(7), Some(7));
        assert_eq!(TreeStage::days_to_next(45), None);
    }

    #[test]
    fn missing_photo_is_an_error() {
        let err = load_photo_proof(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(err.to_string().contains("not a readable image"));
    }
}
