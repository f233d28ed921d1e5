use serde::{Deserialize, Serialize};

/* =========================
   Lessons
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonCategory {
    Basics,
    Advanced,
    Action,
}

impl LessonCategory {
    pub const ALL: [LessonCategory; 3] = [
        LessonCategory::Basics,
        LessonCategory::Advanced,
        LessonCategory::Action,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LessonCategory::Basics => "Basics",
            LessonCategory::Advanced => "Advanced",
            LessonCategory::Action => "Take Action",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub category: LessonCategory,
    pub level: LessonLevel,
    pub minutes: u32,
    pub completed: bool,
}

fn lesson(
    id: &str,
    title: &str,
    icon: &str,
    category: LessonCategory,
    level: LessonLevel,
    minutes: u32,
) -> LessonRecord {
    LessonRecord {
        id: id.into(),
        title: title.into(),
        icon: icon.into(),
        category,
        level,
        minutes,
        completed: false,
    }
}

pub fn lesson_catalog() -> Vec<LessonRecord> {
    use LessonCategory::*;
    use LessonLevel as L;

    let mut lessons = vec![
        lesson("1", "What is Climate Change?", "🌡", Basics, L::Beginner, 10),
        lesson("2", "The Water Cycle", "💧", Basics, L::Beginner, 8),
        lesson("3", "Renewable Energy", "⚡", Advanced, L::Intermediate, 12),
        lesson("4", "Biodiversity & Ecosystems", "🦋", Advanced, L::Advanced, 15),
        lesson("5", "Reduce, Reuse, Recycle", "♻", Action, L::Beginner, 6),
        lesson("6", "Sustainable Living", "🏡", Action, L::Intermediate, 20),
        lesson("7", "Ocean Conservation", "🌊", Basics, L::Intermediate, 14),
        lesson("8", "Forest Ecosystems", "🌲", Basics, L::Beginner, 16),
        lesson("9", "Carbon Footprint", "👣", Advanced, L::Intermediate, 11),
        lesson("10", "Green Transportation", "🚲", Action, L::Beginner, 9),
        lesson("11", "Wildlife Protection", "🐾", Action, L::Advanced, 18),
        lesson("12", "Monsoon & Water Conservation", "🌧", Basics, L::Beginner, 12),
    ];
    lessons[0].completed = true;
    lessons
}

/* =========================
   Challenges
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub points: u32,
    pub difficulty: Difficulty,
    pub cadence: Cadence,
    pub completed: bool,
}

fn challenge(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    points: u32,
    difficulty: Difficulty,
    cadence: Cadence,
) -> ChallengeRecord {
    ChallengeRecord {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        points,
        difficulty,
        cadence,
        completed: false,
    }
}

pub fn challenge_catalog() -> Vec<ChallengeRecord> {
    use Cadence::*;
    use Difficulty::*;

    vec![
        challenge("1", "Plant a Seed", "Plant a seed in a pot or your garden and take a photo!", "🌱", 50, Easy, Daily),
        challenge("2", "Water Conservation", "Turn off the tap while brushing your teeth for a week", "💧", 75, Medium, Weekly),
        challenge("3", "Recycle Hunt", "Find 5 recyclable items in your home and sort them properly", "♻", 60, Easy, Daily),
        challenge("4", "Energy Saver", "Unplug electronics when not in use for 3 days", "⚡", 80, Medium, Daily),
        challenge("5", "Nature Walk", "Take a 30-minute walk in nature and collect interesting leaves", "🍃", 40, Easy, Daily),
        challenge("6", "Eco Lunch Week", "Pack waste-free lunches for an entire school week", "🥪", 120, Hard, Weekly),
        challenge("7", "Plastic-Free Day", "Go an entire day without using any single-use plastic items", "🚫", 90, Hard, Daily),
        challenge("8", "Bike to School Week", "Use a bicycle or walk to school for 5 consecutive days", "🚲", 150, Hard, Weekly),
        challenge("9", "Compost Creator", "Start a small compost bin and add organic waste for 3 days", "🗂", 70, Medium, Daily),
        challenge("10", "Wildlife Helper", "Create a bird feeder or bee-friendly garden space", "🐦", 85, Medium, Daily),
        challenge("11", "Monsoon Water Harvesting", "Set up a simple rainwater collection system during monsoon season", "🌧", 100, Medium, Daily),
        challenge("12", "Festival Eco-Celebration", "Celebrate a festival using only eco-friendly decorations and practices", "🪔", 110, Medium, Weekly),
    ]
}
