use rand::seq::SliceRandom;
use rand::Rng;

struct Topic {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const TOPICS: [Topic; 8] = [
    Topic {
        keywords: &["pollution", "air quality"],
        reply: "Air pollution is a major concern in India! Cities like Delhi and Mumbai face serious air quality issues. You can help by using public transport, planting trees, and avoiding burning waste. Did you know that a single tree can absorb 22kg of CO2 per year?",
    },
    Topic {
        keywords: &["water", "river"],
        reply: "Water conservation is crucial in India! The Ganges, Yamuna, and other rivers face pollution challenges. Simple actions like fixing leaky taps, rainwater harvesting, and not throwing waste in water bodies can make a big difference. Every drop counts!",
    },
    Topic {
        keywords: &["plastic", "waste"],
        reply: "India generates about 26,000 tonnes of plastic waste daily! You can help by using reusable bags, avoiding single-use plastics, and participating in clean-up drives. Remember the 3 R's: Reduce, Reuse, Recycle!",
    },
    Topic {
        keywords: &["climate", "global warming"],
        reply: "Climate change affects India through extreme weather, monsoon changes, and rising sea levels. You can fight climate change by saving energy, using renewable sources like solar power, and spreading awareness. Small actions create big changes!",
    },
    Topic {
        keywords: &["forest", "tree"],
        reply: "India has lost significant forest cover, but we can help! Trees provide oxygen, prevent soil erosion, and support wildlife. You can plant native trees, support afforestation programs, and avoid paper waste.",
    },
    Topic {
        keywords: &["energy", "electricity"],
        reply: "India is moving towards renewable energy! Solar and wind power are growing fast. You can save energy by using LED bulbs, unplugging devices, and using natural light. Energy conservation helps reduce pollution and saves money too!",
    },
    Topic {
        keywords: &["animal", "wildlife"],
        reply: "India has amazing biodiversity with tigers, elephants, and many unique species! Habitat loss threatens wildlife. You can help by supporting conservation efforts and creating wildlife-friendly spaces.",
    },
    Topic {
        keywords: &["food", "agriculture"],
        reply: "Sustainable farming is important for India's future! Organic farming, reducing food waste, and eating local produce helps the environment. Food waste adds greenhouse gases too, so let's not waste food!",
    },
];

const ENCOURAGEMENTS: [&str; 4] = [
    "That's a great question about the environment! Every small action you take helps protect our planet. What specific area would you like to explore more?",
    "I love your curiosity about environmental issues! Learning is the first step to making a positive change. How can I help you learn more?",
    "Environmental protection starts with awareness, and you're already on the right path by asking questions! What would you like to discover next?",
    "Your interest in environmental topics is wonderful! Together, we can learn how to make our planet healthier. What aspect interests you most?",
];

pub const GREETING: &str =
    "Hi! I'm EcoBuddy 🌱 Ask me about pollution, water, plastic, climate, forests, energy, wildlife or food!";

/// Keyword-matched eco coach. No model behind it, just a lookup table.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChatResponder;

impl ChatResponder {
    /// Topic reply for the first topic whose keyword appears in `input`.
    pub fn topic_reply(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();
        TOPICS
            .iter()
            .find(|topic| topic.keywords.iter().any(|k| input.contains(k)))
            .map(|topic| topic.reply)
    }

    pub fn respond<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> &'static str {
        self.topic_reply(input)
            .or_else(|| ENCOURAGEMENTS.choose(rng).copied())
            .unwrap_or(ENCOURAGEMENTS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn keyword_match_is_case_insensitive() {
        let coach = ChatResponder;
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(coach.respond("Why is the RIVER dirty?", &mut rng), TOPICS[1].reply);
        assert_eq!(coach.respond("tell me about Global Warming", &mut rng), TOPICS[3].reply);
    }

    #[test]
    fn same_keyword_always_same_reply() {
        let coach = ChatResponder;
        let mut rng = StdRng::seed_from_u64(99);
        let first = coach.respond("plastic bags", &mut rng);
        for _ in 0..20 {
            assert_eq!(coach.respond("plastic bags", &mut rng), first);
        }
    }

    #[test]
    fn earlier_topics_win() {
        let coach = ChatResponder;
        // "water" (topic 2) and "plastic" (topic 3) both match.
        assert_eq!(coach.topic_reply("plastic in the water"), Some(TOPICS[1].reply));
    }

    #[test]
    fn unknown_input_falls_back_to_encouragement() {
        let coach = ChatResponder;
        let mut rng = StdRng::seed_from_u64(5);
        for input in ["hello", "", "what is 2+2", "🦖"] {
            let reply = coach.respond(input, &mut rng);
            assert!(!reply.is_empty());
            assert!(ENCOURAGEMENTS.contains(&reply));
        }
    }
}
