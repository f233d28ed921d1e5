use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::session::{
    ExhaustPolicy, GameDescriptor, GaugeBonus, GaugeMove, GaugeRule, MissPolicy, Prompt, Reward,
};
use crate::model::game_state::GameKind;

/* =========================
   Prompt banks
   ========================= */

const WASTE_BINS: [&str; 3] = ["♻ Recyclable", "🌱 Organic", "🗑 Trash"];

// (name, icon, bin)
const WASTE_ITEMS: [(&str, &str, usize); 8] = [
    ("Plastic Bottle", "🍼", 0),
    ("Apple Core", "🍎", 1),
    ("Newspaper", "📰", 0),
    ("Banana Peel", "🍌", 1),
    ("Candy Wrapper", "🍬", 2),
    ("Glass Jar", "🫙", 0),
    ("Food Scraps", "🥬", 1),
    ("Broken Toy", "🧸", 2),
];

const AIR_CHOICES: [&str; 2] = ["👍 Helps the air", "👎 Harms the air"];

// (action, icon, choice, description)
const AIR_ACTIONS: [(&str, &str, usize, &str); 8] = [
    ("Plant Trees", "🌳", 0, "Trees absorb CO2 and produce oxygen"),
    ("Use Public Transport", "🚌", 0, "Reduces vehicle emissions"),
    ("Burn Crop Stubble", "🔥", 1, "Major cause of air pollution in North India"),
    ("Use Solar Energy", "☀", 0, "Clean energy reduces coal burning"),
    ("Industrial Emissions", "🏭", 1, "Factories release harmful pollutants"),
    ("Cycle to Work", "🚴", 0, "Zero emissions transportation"),
    ("Burn Garbage", "🗑", 1, "Releases toxic fumes into air"),
    ("Use Air Purifiers", "💨", 0, "Cleans indoor air quality"),
];

const PLASTIC_PLACES: [&str; 3] = ["🏞 River", "🏙 Street", "🏖 Beach"];

// (name, icon, place, points)
const PLASTIC_ITEMS: [(&str, &str, usize, u32); 8] = [
    ("Plastic Bottle", "🍼", 0, 15),
    ("Shopping Bag", "🛍", 1, 10),
    ("Food Container", "🥡", 2, 12),
    ("Straw", "🥤", 0, 8),
    ("Plastic Cup", "🥤", 1, 10),
    ("Bottle Cap", "🔴", 2, 5),
    ("Plastic Wrap", "📦", 0, 12),
    ("Disposable Plate", "🍽", 1, 8),
];

// (question, icon, options, answer, explanation)
type Question = (&'static str, &'static str, [&'static str; 4], usize, &'static str);

const ECO_QUIZ: [Question; 13] = [
    (
        "What is the main cause of climate change?",
        "🌡",
        ["Natural weather patterns", "Greenhouse gas emissions from human activities", "Solar radiation changes", "Ocean currents"],
        1,
        "Human activities like burning fossil fuels release greenhouse gases that trap heat in our atmosphere.",
    ),
    (
        "Which of these is a renewable energy source?",
        "☀",
        ["Coal", "Oil", "Solar power", "Natural gas"],
        2,
        "Solar power comes from the sun and will never run out.",
    ),
    (
        "What do the 3 R's stand for?",
        "♻",
        ["Reduce, Reuse, Recycle", "Read, Run, Rest", "Red, Round, Rough", "Rain, River, Rock"],
        0,
        "Reduce (use less), Reuse (use again), and Recycle (make into something new)!",
    ),
    (
        "When does the monsoon season typically occur in India?",
        "🌧",
        ["December to February", "March to May", "June to September", "October to November"],
        2,
        "The monsoon brings vital rainfall from June to September.",
    ),
    (
        "What are sacred groves in India?",
        "🌳",
        ["Modern parks in cities", "Forest patches protected by local communities", "Government wildlife reserves", "Tourist destinations"],
        1,
        "Communities protect sacred groves for cultural reasons, preserving unique biodiversity.",
    ),
    (
        "Which river is considered the most sacred in India?",
        "🏞",
        ["Yamuna", "Narmada", "Ganges", "Godavari"],
        2,
        "The Ganges is worshipped as a goddess by millions of people.",
    ),
    (
        "What is crop rotation in traditional Indian farming?",
        "🌾",
        ["Growing the same crop every season", "Growing different crops in sequence on the same land", "Moving crops to different locations", "Harvesting crops at different times"],
        1,
        "Rotating crops keeps the soil fertile and reduces pests naturally.",
    ),
    (
        "What is the main cause of air pollution in Indian cities?",
        "🏭",
        ["Natural dust storms", "Vehicle emissions and industrial activities", "Ocean winds", "Forest fires only"],
        1,
        "Vehicles, industry and burning fossil fuels pollute city air the most.",
    ),
    (
        "Why are Himalayan glaciers important for India?",
        "🏔",
        ["They provide tourism revenue", "They are the source of major rivers", "They control the weather", "They prevent earthquakes"],
        1,
        "Glaciers feed the Ganges, Yamuna and Brahmaputra.",
    ),
    (
        "What is the biggest source of plastic pollution in Indian rivers?",
        "🛍",
        ["Industrial waste", "Single-use plastics and packaging", "Agricultural runoff", "Natural disasters"],
        1,
        "Bottles, bags and food packaging are the biggest contributors.",
    ),
    (
        "Which state in India leads in solar energy production?",
        "☀",
        ["Maharashtra", "Tamil Nadu", "Rajasthan", "Gujarat"],
        2,
        "Rajasthan's sunshine powers large parks like Bhadla Solar Park.",
    ),
    (
        "How many tigers are estimated to live in India currently?",
        "🐅",
        ["Around 1,000", "Around 2,000", "Around 3,000", "Around 4,000"],
        2,
        "About 3,000 tigers, roughly 70% of the world's wild tigers.",
    ),
    (
        "What is the Smart Cities Mission in India focused on?",
        "🏙",
        ["Building more shopping malls", "Creating sustainable and technology-enabled urban areas", "Increasing car ownership", "Building more factories"],
        1,
        "It aims for better infrastructure, waste management and quality of life.",
    ),
];

const ENERGY_QUIZ: [Question; 8] = [
    ("Which energy source is renewable?", "☀", ["Coal", "Solar", "Natural Gas", "Oil"], 1, "Solar energy comes from the sun and is unlimited!"),
    ("What does a wind turbine convert wind into?", "💨", ["Heat", "Light", "Electricity", "Sound"], 2, "Spinning blades generate electricity!"),
    ("Which is NOT a renewable energy source?", "⚡", ["Hydroelectric", "Geothermal", "Nuclear", "Biomass"], 2, "Nuclear energy uses uranium, which is a finite resource."),
    ("How much of Earth's energy comes from the sun?", "🌍", ["25%", "50%", "75%", "99.9%"], 3, "Almost all energy on Earth originally comes from the sun!"),
    ("Which country leads in renewable energy production?", "🏭", ["USA", "China", "Germany", "Japan"], 1, "China produces the most renewable energy globally!"),
    ("What is the main advantage of renewable energy?", "♻", ["Cheaper", "Unlimited supply", "Faster", "Louder"], 1, "Renewable sources won't run out like fossil fuels!"),
    ("Which renewable energy works best at night?", "🌙", ["Solar", "Wind", "Tidal", "All of them"], 1, "Wind can blow 24/7!"),
    ("What do solar panels convert sunlight into?", "🔋", ["Heat only", "Electricity only", "Both heat and electricity", "Nothing"], 2, "Solar collectors can make both electricity and heat."),
];

const WILDLIFE_QUIZ: [Question; 8] = [
    ("Which is India's national animal?", "🐅", ["Lion", "Tiger", "Elephant", "Leopard"], 1, "The Bengal Tiger symbolizes strength and grace."),
    ("Where do Asiatic Lions live in India?", "🦁", ["Sundarbans", "Gir Forest", "Western Ghats", "Himalayas"], 1, "Gir Forest in Gujarat is their only wild home."),
    ("Which bird is known as the 'King of Birds' in India?", "🦚", ["Peacock", "Eagle", "Vulture", "Crane"], 0, "The Indian Peacock is the national bird."),
    ("What do Indian elephants primarily eat?", "🐘", ["Meat", "Fish", "Plants and fruits", "Insects"], 2, "Elephants are herbivores."),
    ("Which snake is considered sacred in Indian culture?", "🐍", ["Python", "Cobra", "Viper", "Krait"], 1, "The Cobra is revered and associated with Lord Shiva."),
    ("Where do snow leopards live in India?", "🐆", ["Thar Desert", "Coastal areas", "Himalayan regions", "Deccan Plateau"], 2, "They live high in the Himalayas."),
    ("Which is the largest deer species in India?", "🦌", ["Chital", "Sambar", "Barasingha", "Mouse deer"], 1, "The Sambar is the largest deer in Indian forests."),
    ("What is the main threat to Indian wildlife?", "🌍", ["Climate change", "Habitat loss", "Poaching", "All of the above"], 3, "Wildlife faces all of these threats at once."),
];

const HABITATS: [&str; 4] = ["🌳 Forest", "🌾 Grassland", "💧 Wetland", "🏔 Mountain"];

// (name, icon, habitat, status)
const ANIMALS: [(&str, &str, usize, &str); 8] = [
    ("Bengal Tiger", "🐅", 0, "Endangered"),
    ("Indian Elephant", "🐘", 0, "Threatened"),
    ("One-horned Rhinoceros", "🦏", 1, "Threatened"),
    ("Snow Leopard", "🐆", 3, "Endangered"),
    ("Indian Peacock", "🦚", 0, "Safe"),
    ("Gharial Crocodile", "🐊", 2, "Endangered"),
    ("Asiatic Lion", "🦁", 1, "Endangered"),
    ("Red Panda", "🐼", 3, "Endangered"),
];

/// Rarer animals are worth more.
fn status_points(status: &str) -> u32 {
    match status {
        "Endangered" => 30,
        "Threatened" => 25,
        _ => 20,
    }
}

// (situation, icon, location, [(response, impact)])
type Scenario = (&'static str, &'static str, &'static str, [(&'static str, i32); 3]);

const CLIMATE_SCENARIOS: [Scenario; 5] = [
    (
        "Extreme heat wave hits Delhi. What's the best immediate action?",
        "🌡",
        "Delhi",
        [("Install more AC units", -10), ("Create cool public spaces", 20), ("Do nothing", -20)],
    ),
    (
        "Monsoon patterns are changing in Kerala. How to adapt farming?",
        "🌧",
        "Kerala",
        [("Switch to drought-resistant crops", 25), ("Use more chemical fertilizers", -15), ("Abandon farming", -25)],
    ),
    (
        "Sea levels rising near Mumbai coastline. What's the priority?",
        "🌊",
        "Mumbai",
        [("Build sea walls", 15), ("Relocate all coastal communities", -10), ("Restore mangrove forests", 30)],
    ),
    (
        "Air pollution worsens during winter in North India. Best solution?",
        "🌫",
        "North India",
        [("Ban all vehicles", -5), ("Promote electric vehicles and public transport", 25), ("Use artificial rain", 10)],
    ),
    (
        "Glaciers melting in Himalayas affecting river flow. What to do?",
        "🏔",
        "Himalayas",
        [("Build more dams", 5), ("Improve water conservation", 20), ("Artificial glacier creation", 30)],
    ),
];

// (method, sustainability, yield, cost, description)
type FarmChoice = (&'static str, i32, u32, u32, &'static str);

const FARM_SCENARIOS: [(&str, &str, [FarmChoice; 3]); 5] = [
    (
        "Your crops need nutrients. What fertilizer approach do you choose?",
        "🌱",
        [
            ("Chemical Fertilizers", 2, 9, 7, "High yield but harms soil health"),
            ("Organic Compost", 9, 7, 4, "Sustainable and improves soil over time"),
            ("Mixed Approach", 6, 8, 6, "Balanced but still some chemical impact"),
        ],
    ),
    (
        "Pests are attacking your crops. How do you protect them?",
        "🐛",
        [
            ("Chemical Pesticides", 1, 8, 8, "Effective but kills beneficial insects too"),
            ("Neem-based Solutions", 8, 6, 5, "Traditional Indian method, eco-friendly"),
            ("Companion Planting", 10, 7, 3, "Natural pest control using plant partnerships"),
        ],
    ),
    (
        "Water is scarce during dry season. What's your irrigation strategy?",
        "💧",
        [
            ("Flood Irrigation", 3, 6, 4, "Wastes a lot of water through evaporation"),
            ("Drip Irrigation", 9, 8, 8, "Efficient water use, higher initial cost"),
            ("Rainwater Harvesting", 10, 7, 6, "Sustainable water collection and storage"),
        ],
    ),
    (
        "You want to improve soil health. What method do you use?",
        "🌾",
        [
            ("Crop Rotation", 9, 8, 5, "Different crops restore soil nutrients naturally"),
            ("Monoculture", 2, 7, 6, "Same crop depletes specific soil nutrients"),
            ("Cover Crops", 8, 6, 4, "Protects and enriches soil between seasons"),
        ],
    ),
    (
        "Energy is needed for farm operations. What power source do you choose?",
        "⚡",
        [
            ("Diesel Generators", 2, 8, 7, "Reliable but polluting and expensive fuel"),
            ("Solar Power", 10, 8, 9, "Clean energy, high setup cost but free operation"),
            ("Biogas from Waste", 9, 7, 5, "Uses farm waste to generate clean energy"),
        ],
    ),
];

/// Choices at or above this sustainability count as the good answer.
const SUSTAINABLE: i32 = 7;

fn climate_prompt(id: usize, (situation, icon, location, responses): &Scenario) -> Prompt {
    Prompt {
        id: id as u32 + 1,
        label: situation.to_string(),
        icon: icon.to_string(),
        detail: format!("📍 {location}"),
        options: responses.iter().map(|(text, _)| text.to_string()).collect(),
        correct: (0..responses.len()).filter(|&i| responses[i].1 > 0).collect(),
        points: 0,
        option_points: responses.iter().map(|(_, impact)| (*impact).max(0).unsigned_abs()).collect(),
        gauge_delta: Vec::new(),
    }
}

fn farm_prompt(id: usize, situation: &str, icon: &str, choices: &[FarmChoice]) -> Prompt {
    Prompt {
        id: id as u32 + 1,
        label: situation.to_string(),
        icon: icon.to_string(),
        detail: String::new(),
        options: choices
            .iter()
            .map(|(method, _, _, _, description)| format!("{method}: {description}"))
            .collect(),
        correct: (0..choices.len()).filter(|&i| choices[i].1 >= SUSTAINABLE).collect(),
        points: 0,
        option_points: choices
            .iter()
            .map(|(_, sustainability, crop_yield, cost, _)| {
                sustainability.unsigned_abs() * 3 + crop_yield + 10u32.saturating_sub(*cost)
            })
            .collect(),
        gauge_delta: choices.iter().map(|(_, sustainability, ..)| (sustainability - 5) * 2).collect(),
    }
}

fn classify(id: usize, name: &str, icon: &str, detail: &str, options: &[&str], answer: usize, points: u32) -> Prompt {
    Prompt {
        id: id as u32 + 1,
        label: name.to_string(),
        icon: icon.to_string(),
        detail: detail.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct: vec![answer],
        points,
        option_points: Vec::new(),
        gauge_delta: Vec::new(),
    }
}

fn questions(bank: &[Question], points: u32) -> Vec<Prompt> {
    bank.iter()
        .enumerate()
        .map(|(i, (question, icon, options, answer, explanation))| {
            classify(i, question, icon, explanation, options, *answer, points)
        })
        .collect()
}

/* =========================
   Descriptors
   ========================= */

pub fn descriptor(kind: GameKind) -> GameDescriptor {
    match kind {
        GameKind::WasteSorting => GameDescriptor::new(kind, 60, Reward::Fixed(20)),

        GameKind::AirQuality => GameDescriptor {
            gauge: Some(GaugeRule {
                label: "Air Quality Index".into(),
                initial: 150,
                min: 0,
                max: 300,
                high_is_good: false,
                moves: GaugeMove::ByOutcome {
                    hit: vec![-20, 15],
                    miss: vec![10, -10],
                },
                bonus: vec![GaugeBonus::AtMost(50, 50), GaugeBonus::AtMost(100, 25)],
            }),
            ..GameDescriptor::new(kind, 90, Reward::Fixed(25))
        },

        GameKind::PlasticPollution => GameDescriptor {
            on_miss: MissPolicy::Retry,
            on_exhausted: ExhaustPolicy::Cycle,
            ..GameDescriptor::new(kind, 60, Reward::PerPrompt)
        },

        GameKind::EcoQuiz => GameDescriptor::new(kind, 120, Reward::Fixed(1)),

        GameKind::RenewableEnergyQuiz => GameDescriptor {
            prompt_time_limit_secs: Some(15),
            ..GameDescriptor::new(
                kind,
                15 * ENERGY_QUIZ.len() as u32 + 1,
                Reward::TimeBonus { per_second: 2, min: 10 },
            )
        },

        GameKind::WildlifeQuiz => GameDescriptor::new(kind, 90, Reward::Fixed(25)),

        GameKind::Biodiversity => GameDescriptor {
            on_miss: MissPolicy::Retry,
            ..GameDescriptor::new(kind, 180, Reward::PerPrompt)
        },

        GameKind::ClimateChange => GameDescriptor::new(kind, 180, Reward::PerOption),

        GameKind::SustainableFarming => GameDescriptor {
            gauge: Some(GaugeRule {
                label: "Sustainability".into(),
                initial: 50,
                min: 0,
                max: 100,
                high_is_good: true,
                moves: GaugeMove::PerOption,
                bonus: vec![GaugeBonus::AtLeast(70, 50), GaugeBonus::AtLeast(50, 25)],
            }),
            ..GameDescriptor::new(kind, 180, Reward::PerOption)
        },
    }
}

/// The full, unshuffled bank for a game.
pub fn prompt_bank(kind: GameKind) -> Vec<Prompt> {
    match kind {
        GameKind::WasteSorting => WASTE_ITEMS
            .iter()
            .enumerate()
            .map(|(i, (name, icon, bin))| classify(i, name, icon, "", &WASTE_BINS, *bin, 20))
            .collect(),

        GameKind::AirQuality => AIR_ACTIONS
            .iter()
            .enumerate()
            .map(|(i, (action, icon, choice, description))| {
                classify(i, action, icon, description, &AIR_CHOICES, *choice, 25)
            })
            .collect(),

        GameKind::PlasticPollution => PLASTIC_ITEMS
            .iter()
            .enumerate()
            .map(|(i, (name, icon, place, points))| {
                classify(i, name, icon, &format!("+{points} points"), &PLASTIC_PLACES, *place, *points)
            })
            .collect(),

        GameKind::EcoQuiz => questions(&ECO_QUIZ, 1),
        GameKind::RenewableEnergyQuiz => questions(&ENERGY_QUIZ, 0),
        GameKind::WildlifeQuiz => questions(&WILDLIFE_QUIZ, 25),

        GameKind::Biodiversity => ANIMALS
            .iter()
            .enumerate()
            .map(|(i, (name, icon, habitat, status))| {
                let points = status_points(status);
                classify(i, name, icon, &format!("{status} · +{points} points"), &HABITATS, *habitat, points)
            })
            .collect(),

        GameKind::ClimateChange => CLIMATE_SCENARIOS
            .iter()
            .enumerate()
            .map(|(i, scenario)| climate_prompt(i, scenario))
            .collect(),

        GameKind::SustainableFarming => FARM_SCENARIOS
            .iter()
            .enumerate()
            .map(|(i, (situation, icon, choices))| farm_prompt(i, situation, icon, choices))
            .collect(),
    }
}

/// How many prompts one play-through draws from the bank.
pub fn draw_size(kind: GameKind) -> usize {
    match kind {
        GameKind::WasteSorting => 5,
        GameKind::AirQuality | GameKind::Biodiversity => 6,
        _ => usize::MAX,
    }
}

/// Descriptor plus a freshly shuffled prompt list, ready for `GameSession::start`.
pub fn deal<R: Rng + ?Sized>(kind: GameKind, rng: &mut R) -> (GameDescriptor, Vec<Prompt>) {
    let mut prompts = prompt_bank(kind);
    prompts.shuffle(rng);
    prompts.truncate(draw_size(kind));
    (descriptor(kind), prompts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::session::GameSession;
    use crate::model::event_result::{EndReason, SessionOutcome};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::mpsc;

    fn play<F>(kind: GameKind, seed: u64, mut pick: F) -> SessionOutcome
    where
        F: FnMut(&Prompt) -> usize,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let (descriptor, prompts) = deal(kind, &mut rng);
        let (tx, rx) = mpsc::channel();
        let mut session = GameSession::start(descriptor, prompts, move |o| {
            let _ = tx.send(o);
        });

        while let Some(prompt) = session.current_prompt() {
            let choice = pick(prompt);
            session.resolve(choice).unwrap();
        }

        let outcome = rx.try_recv().unwrap();
        assert!(rx.try_recv().is_err());
        outcome
    }

    fn right(p: &Prompt) -> usize {
        p.correct[0]
    }

    fn wrong(p: &Prompt) -> usize {
        (p.correct[0] + 1) % p.options.len()
    }

    #[test]
    fn waste_sorting_deals_five_of_eight() {
        let mut rng = StdRng::seed_from_u64(7);
        let (_, prompts) = deal(GameKind::WasteSorting, &mut rng);
        assert_eq!(prompts.len(), 5);
        assert_eq!(prompt_bank(GameKind::WasteSorting).len(), 8);
    }

    #[test]
    fn waste_sorting_all_correct_scores_one_hundred() {
        for seed in 0..5 {
            let outcome = play(GameKind::WasteSorting, seed, right);
            assert_eq!(outcome.score, 100);
            assert_eq!(outcome.correct, 5);
        }
    }

    #[test]
    fn waste_sorting_all_wrong_scores_zero() {
        let outcome = play(GameKind::WasteSorting, 3, wrong);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.answered, 5);
    }

    #[test]
    fn eco_quiz_scores_one_per_correct_answer() {
        let outcome = play(GameKind::EcoQuiz, 11, right);
        assert_eq!(outcome.score, ECO_QUIZ.len() as u32);
        assert_eq!(outcome.end, EndReason::PromptsExhausted);
    }

    #[test]
    fn eco_quiz_time_up_counts_answers_before_expiry() {
        let mut rng = StdRng::seed_from_u64(2);
        let (descriptor, prompts) = deal(GameKind::EcoQuiz, &mut rng);
        let duration = descriptor.duration_secs;
        let mut session = GameSession::start(descriptor, prompts, |_| {});

        let first = session.current_prompt().cloned().unwrap();
        session.resolve(first.correct[0]).unwrap();
        let second = session.current_prompt().cloned().unwrap();
        session.resolve(wrong(&second)).unwrap();
        let third = session.current_prompt().cloned().unwrap();
        session.resolve(third.correct[0]).unwrap();

        for _ in 0..duration {
            let _ = session.tick();
        }

        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.end, EndReason::TimeUp);
        assert_eq!(outcome.score, 2);
    }

    #[test]
    fn clean_air_earns_gauge_bonus() {
        // Six correct answers. Every "helps" answer lowers the AQI by 20 and
        // every "harms" answer raises it by 15, so the final bonus depends on
        // the mix that was dealt.
        let outcome = play(GameKind::AirQuality, 5, right);
        let aqi = outcome.gauge.unwrap();
        let bonus = if aqi <= 50 { 50 } else if aqi <= 100 { 25 } else { 0 };
        assert_eq!(outcome.score, 6 * 25 + bonus);
    }

    #[test]
    fn plastic_cleanup_cycles_until_time_runs_out() {
        let mut rng = StdRng::seed_from_u64(9);
        let (descriptor, prompts) = deal(GameKind::PlasticPollution, &mut rng);
        let bank_points: u32 = prompts.iter().map(|p| p.points).sum();
        let mut session = GameSession::start(descriptor, prompts, |_| {});

        for _ in 0..8 {
            let p = session.current_prompt().cloned().unwrap();
            session.resolve(p.correct[0]).unwrap();
        }
        assert!(!session.is_finished());
        assert_eq!(session.score(), bank_points);

        while !session.is_finished() {
            session.tick().unwrap();
        }
        assert_eq!(session.outcome().unwrap().end, EndReason::TimeUp);
    }

    fn best(p: &Prompt) -> usize {
        (0..p.options.len()).max_by_key(|&i| p.option_points[i]).unwrap()
    }

    #[test]
    fn eco_quiz_covers_the_whole_lesson_bank() {
        assert_eq!(prompt_bank(GameKind::EcoQuiz).len(), 13);
    }

    #[test]
    fn biodiversity_retries_misses_and_pays_by_status() {
        let mut rng = StdRng::seed_from_u64(4);
        let (descriptor, prompts) = deal(GameKind::Biodiversity, &mut rng);
        assert_eq!(prompts.len(), 6);
        let expected: u32 = prompts.iter().map(|p| p.points).sum();
        let mut session = GameSession::start(descriptor, prompts, |_| {});

        while let Some(p) = session.current_prompt().cloned() {
            let miss = session.resolve(wrong(&p)).unwrap();
            assert!(!miss.correct);
            assert_eq!(miss.points_delta, 0);
            assert_eq!(session.current_prompt().map(|q| q.id), Some(p.id));
            session.resolve(p.correct[0]).unwrap();
        }

        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.end, EndReason::PromptsExhausted);
        assert_eq!(outcome.score, expected);
        assert_eq!(outcome.answered, 12);
        assert_eq!(outcome.correct, 6);
    }

    #[test]
    fn rarer_animals_are_worth_more() {
        let bank = prompt_bank(GameKind::Biodiversity);
        let points = |name: &str| bank.iter().find(|p| p.label == name).unwrap().points;
        assert_eq!(points("Bengal Tiger"), 30);
        assert_eq!(points("Indian Elephant"), 25);
        assert_eq!(points("Indian Peacock"), 20);
    }

    #[test]
    fn climate_best_responses_score_every_impact() {
        let outcome = play(GameKind::ClimateChange, 6, best);
        assert_eq!(outcome.score, 20 + 25 + 30 + 25 + 30);
        assert_eq!(outcome.correct, 5);
    }

    #[test]
    fn climate_harmful_responses_earn_nothing() {
        let worst = |p: &Prompt| (0..p.options.len()).min_by_key(|&i| p.option_points[i]).unwrap();
        let outcome = play(GameKind::ClimateChange, 6, worst);
        // every glacier response helps a little, dams the least
        assert_eq!(outcome.score, 5);
        assert_eq!(outcome.correct, 1);
        assert_eq!(outcome.answered, 5);
    }

    #[test]
    fn sustainable_farm_earns_the_top_bonus() {
        let greenest = |p: &Prompt| (0..p.options.len()).max_by_key(|&i| p.gauge_delta[i]).unwrap();
        let outcome = play(GameKind::SustainableFarming, 1, greenest);
        assert_eq!(outcome.gauge, Some(96));
        assert_eq!(outcome.score, 40 + 44 + 41 + 40 + 39 + 50);
        assert_eq!(outcome.correct, 5);
    }

    #[test]
    fn depleted_farm_still_pays_for_yield() {
        let harshest = |p: &Prompt| (0..p.options.len()).min_by_key(|&i| p.gauge_delta[i]).unwrap();
        let outcome = play(GameKind::SustainableFarming, 1, harshest);
        assert_eq!(outcome.gauge, Some(20));
        assert_eq!(outcome.score, 18 + 13 + 21 + 17 + 17);
        assert_eq!(outcome.correct, 0);
    }
}
