use serde::{Deserialize, Serialize};

/// Every mini-game the app ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    WasteSorting,
    AirQuality,
    PlasticPollution,
    EcoQuiz,
    RenewableEnergyQuiz,
    WildlifeQuiz,
    Biodiversity,
    ClimateChange,
    SustainableFarming,
}

impl GameKind {
    /// Games listed on the games page. The eco quiz is reached through lessons.
    pub const ARCADE: [GameKind; 8] = [
        GameKind::WasteSorting,
        GameKind::AirQuality,
        GameKind::PlasticPollution,
        GameKind::RenewableEnergyQuiz,
        GameKind::WildlifeQuiz,
        GameKind::Biodiversity,
        GameKind::ClimateChange,
        GameKind::SustainableFarming,
    ];

    pub fn title(self) -> &'static str {
        match self {
            GameKind::WasteSorting => "Waste Sorting Puzzle",
            GameKind::AirQuality => "Air Quality Hero",
            GameKind::PlasticPollution => "Plastic Pollution Cleanup",
            GameKind::EcoQuiz => "Eco Quiz",
            GameKind::RenewableEnergyQuiz => "Renewable Energy Quiz",
            GameKind::WildlifeQuiz => "India Wildlife Quiz",
            GameKind::Biodiversity => "India Biodiversity Explorer",
            GameKind::ClimateChange => "Climate Action Hero",
            GameKind::SustainableFarming => "Sustainable Farming",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            GameKind::WasteSorting => "♻",
            GameKind::AirQuality => "💨",
            GameKind::PlasticPollution => "🛍",
            GameKind::EcoQuiz => "📝",
            GameKind::RenewableEnergyQuiz => "☀",
            GameKind::WildlifeQuiz => "🐅",
            GameKind::Biodiversity => "🦏",
            GameKind::ClimateChange => "🌡",
            GameKind::SustainableFarming => "🌾",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            GameKind::WasteSorting => "Sort the items into the correct bins!",
            GameKind::AirQuality => "Decide which actions clean the air and which pollute it.",
            GameKind::PlasticPollution => "Send each piece of plastic to where it was found.",
            GameKind::EcoQuiz => "Check what you learned in the lesson.",
            GameKind::RenewableEnergyQuiz => "Answer fast for bonus points!",
            GameKind::WildlifeQuiz => "Test your knowledge about India's amazing wildlife!",
            GameKind::Biodiversity => "Match each animal to the habitat it lives in.",
            GameKind::ClimateChange => "Pick the best response to climate events across India.",
            GameKind::SustainableFarming => "Run a farm and keep the soil healthy.",
        }
    }
}

/// A snapshot of the running session sent to the UI.
/// This is READ-ONLY outside the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: u64,
    pub kind: GameKind,
    pub title: String,
    pub score: u32,
    pub remaining_secs: u32,
    pub duration_secs: u32,
    pub prompt_remaining_secs: Option<u32>,

    /// Zero-based position in the prompt sequence
    pub round: usize,
    pub rounds: usize,

    pub prompt: Option<PromptView>,
    pub gauge: Option<GaugeView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptView {
    pub label: String,
    pub icon: String,
    pub detail: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeView {
    pub label: String,
    pub value: i32,
    pub min: i32,
    pub max: i32,
    pub high_is_good: bool,
}

impl GaugeView {
    pub fn fraction(&self) -> f32 {
        let span = (self.max - self.min).max(1) as f32;
        ((self.value - self.min) as f32 / span).clamp(0.0, 1.0)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_fraction_is_clamped_to_the_scale() {
        let mut gauge = GaugeView {
            label: "AQI".into(),
            value: 150,
            min: 0,
            max: 300,
            high_is_good: false,
        };
        assert_eq!(gauge.fraction(), 0.5);
        gauge.value = 400;
        assert_eq!(gauge.fraction(), 1.0);
    }

    #[test]
    fn every_kind_but_the_lesson_quiz_is_on_the_games_page() {
        assert!(!GameKind::ARCADE.contains(&GameKind::EcoQuiz));
        assert!(GameKind::ARCADE.contains(&GameKind::SustainableFarming));
    }
}
