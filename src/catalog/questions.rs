//! The fixed forced-choice question catalog.
//!
//! Thirty items, six per category. Each item carries a positive weight;
//! option 2 is always the category-affine choice. The catalog is immutable
//! and defined at compile time, so per-category maxima are constants too.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Analytical,
    Natural,
    Creative,
    Social,
    Practical,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Analytical,
        Category::Natural,
        Category::Creative,
        Category::Social,
        Category::Practical,
    ];

    pub fn letter(self) -> char {
        match self {
            Category::Analytical => 'A',
            Category::Natural => 'N',
            Category::Creative => 'C',
            Category::Social => 'S',
            Category::Practical => 'P',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Analytical => "Analytical",
            Category::Natural => "Natural",
            Category::Creative => "Creative",
            Category::Social => "Social",
            Category::Practical => "Practical",
        }
    }

    /// Score a category would reach if every one of its questions were
    /// answered with option 2. Used as the tie-break input.
    pub fn max_possible(self) -> f32 {
        QUESTIONS
            .iter()
            .filter(|question| question.category == self)
            .map(|question| question.weight)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionItem {
    pub id: u32,
    pub category: Category,
    pub weight: f32,
    pub prompt: &'static str,
    pub option_one: &'static str,
    pub option_two: &'static str,
}

/// Question id whose option-1 answer (symptom lookup over comforting)
/// steers the bio cluster away from health sciences.
pub const NON_MEDICAL_SIGNAL_QUESTION: u32 = 7;

pub const QUESTIONS: [QuestionItem; 30] = [
    QuestionItem {
        id: 1,
        category: Category::Analytical,
        weight: 1.0,
        prompt: "When making a big decision (like picking a new phone):",
        option_one: "I go with my gut feeling or what looks cool.",
        option_two: "I watch review videos and compare specs first.",
    },
    QuestionItem {
        id: 2,
        category: Category::Analytical,
        weight: 1.5,
        prompt: "An app keeps crashing on your phone. You:",
        option_one: "Get annoyed and stop using it.",
        option_two: "Google the problem to see if there's a fix.",
    },
    QuestionItem {
        id: 3,
        category: Category::Analytical,
        weight: 1.5,
        prompt: "When packing a bag for a trip:",
        option_one: "I throw things in until it's full.",
        option_two: "I organize it perfectly like Tetris to save space.",
    },
    QuestionItem {
        id: 4,
        category: Category::Analytical,
        weight: 1.5,
        prompt: "When doing chores, I:",
        option_one: "Just start the first one I see.",
        option_two: "Plan the exact order to finish fastest.",
    },
    QuestionItem {
        id: 5,
        category: Category::Analytical,
        weight: 1.0,
        prompt: "I prefer stories where:",
        option_one: "Everything is explained at the end.",
        option_two: "I have to solve the mystery myself.",
    },
    QuestionItem {
        id: 6,
        category: Category::Analytical,
        weight: 2.0,
        prompt: "If I had free time, I would rather:",
        option_one: "Write a short story.",
        option_two: "Write code to make a robot move.",
    },
    QuestionItem {
        id: 7,
        category: Category::Natural,
        weight: 1.5,
        prompt: "A friend is sick or hurt. Your immediate reaction is to:",
        option_one: "Google their symptoms to see what's wrong logically.",
        option_two: "Bring them water/blankets and try to comfort them.",
    },
    QuestionItem {
        id: 8,
        category: Category::Natural,
        weight: 1.5,
        prompt: "When it rains heavily, I:",
        option_one: "Just use my umbrella.",
        option_two: "Wonder where all the gutter water flows to.",
    },
    QuestionItem {
        id: 9,
        category: Category::Natural,
        weight: 1.5,
        prompt: "You are stuck on a hard riddle or puzzle. You:",
        option_one: "Check the answer key after 5 minutes.",
        option_two: "Refuse to look at the answer until you solve it.",
    },
    QuestionItem {
        id: 10,
        category: Category::Natural,
        weight: 1.0,
        prompt: "I like animals because:",
        option_one: "They are cute.",
        option_two: "I want to know how they communicate.",
    },
    QuestionItem {
        id: 11,
        category: Category::Natural,
        weight: 1.5,
        prompt: "When I look at food, I'd rather:",
        option_one: "Learn how to cook it.",
        option_two: "Learn what the vitamins do to my body.",
    },
    QuestionItem {
        id: 12,
        category: Category::Natural,
        weight: 2.0,
        prompt: "If I saw a science experiment video:",
        option_one: "I'd watch it and laugh.",
        option_two: "I'd buy the ingredients to try it myself.",
    },
    QuestionItem {
        id: 13,
        category: Category::Creative,
        weight: 1.5,
        prompt: "When using a new app, I often think:",
        option_one: "'This works fine.'",
        option_two: "'The buttons are in the wrong spot, I'd move them.'",
    },
    QuestionItem {
        id: 14,
        category: Category::Creative,
        weight: 1.5,
        prompt: "In group projects, I usually suggest:",
        option_one: "The safe, standard ideas.",
        option_two: "The crazy, weird ideas.",
    },
    QuestionItem {
        id: 15,
        category: Category::Creative,
        weight: 1.0,
        prompt: "You have to do a slide presentation. You spend the most time on:",
        option_one: "Writing the script so I say the right words.",
        option_two: "Finding the perfect images and slide transitions.",
    },
    QuestionItem {
        id: 16,
        category: Category::Creative,
        weight: 2.0,
        prompt: "In a customizable game (Minecraft/Sims/Roblox), I prefer to:",
        option_one: "Play the game exactly how it's supposed to be played.",
        option_two: "Spend hours building custom houses, skins, or maps.",
    },
    QuestionItem {
        id: 17,
        category: Category::Creative,
        weight: 1.0,
        prompt: "When I finish a really good movie or show:",
        option_one: "I just move on to the next one.",
        option_two: "I go online to read theories and hidden details.",
    },
    QuestionItem {
        id: 18,
        category: Category::Creative,
        weight: 2.0,
        prompt: "With YouTube/TikTok, I prefer to:",
        option_one: "Watch and scroll.",
        option_two: "Film, edit, and upload my own.",
    },
    QuestionItem {
        id: 19,
        category: Category::Social,
        weight: 2.0,
        prompt: "You see a rare item at a thrift store for $5 that sells for $50 online. You:",
        option_one: "Leave it there.",
        option_two: "Buy it immediately to resell it for profit.",
    },
    QuestionItem {
        id: 20,
        category: Category::Social,
        weight: 2.0,
        prompt: "Your friend group is trying to plan a meetup but no one can decide. You:",
        option_one: "Wait for someone else to pick a spot.",
        option_two: "Create a poll or specific plan to force a decision.",
    },
    QuestionItem {
        id: 21,
        category: Category::Social,
        weight: 1.5,
        prompt: "If I love a movie, I:",
        option_one: "Just enjoy it myself.",
        option_two: "Try hard to convince my friends to watch it.",
    },
    QuestionItem {
        id: 22,
        category: Category::Social,
        weight: 1.5,
        prompt: "When friends are fighting, I:",
        option_one: "Walk away.",
        option_two: "Try to mediate and fix the problem.",
    },
    QuestionItem {
        id: 23,
        category: Category::Social,
        weight: 1.5,
        prompt: "Explaining things to others makes me:",
        option_one: "Annoyed if they don't get it.",
        option_two: "Happy when they have an 'Aha!' moment.",
    },
    QuestionItem {
        id: 24,
        category: Category::Social,
        weight: 1.0,
        prompt: "Speaking in front of the class makes me:",
        option_one: "Want to hide.",
        option_two: "Secretly enjoy the attention.",
    },
    QuestionItem {
        id: 25,
        category: Category::Practical,
        weight: 1.5,
        prompt: "You see a weird machine you don't recognize. Your first instinct is to:",
        option_one: "Ignore it.",
        option_two: "Look at the back or press buttons to see how it works.",
    },
    QuestionItem {
        id: 26,
        category: Category::Practical,
        weight: 1.0,
        prompt: "With phones, I care more about:",
        option_one: "The apps and games.",
        option_two: "The camera specs and processor speed.",
    },
    QuestionItem {
        id: 27,
        category: Category::Practical,
        weight: 2.0,
        prompt: "I would rather:",
        option_one: "Draw a picture of a house.",
        option_two: "Build a model house with glue/cardboard.",
    },
    QuestionItem {
        id: 28,
        category: Category::Practical,
        weight: 1.5,
        prompt: "If the WiFi stops, I:",
        option_one: "Call my parents.",
        option_two: "Check the cables and router myself.",
    },
    QuestionItem {
        id: 29,
        category: Category::Practical,
        weight: 2.0,
        prompt: "I prefer working with:",
        option_one: "My keyboard/screen.",
        option_two: "My hands (tools, cooking, building).",
    },
    QuestionItem {
        id: 30,
        category: Category::Practical,
        weight: 1.5,
        prompt: "Have you ever taken a pen apart?",
        option_one: "No, never.",
        option_two: "Yes, to see the spring inside.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_questions_per_category() {
        for category in Category::ALL {
            let count = QUESTIONS
                .iter()
                .filter(|question| question.category == category)
                .count();
            assert_eq!(count, 6, "category {} should have 6 questions", category.name());
        }
    }

    #[test]
    fn question_ids_are_sequential_and_unique() {
        for (index, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(question.id, index as u32 + 1);
        }
    }

    #[test]
    fn weights_are_positive() {
        assert!(QUESTIONS.iter().all(|question| question.weight > 0.0));
    }

    #[test]
    fn max_possible_matches_known_totals() {
        assert_eq!(Category::Analytical.max_possible(), 8.5);
        assert_eq!(Category::Natural.max_possible(), 9.0);
        assert_eq!(Category::Creative.max_possible(), 9.0);
        assert_eq!(Category::Social.max_possible(), 9.5);
        assert_eq!(Category::Practical.max_possible(), 9.5);
    }
}
