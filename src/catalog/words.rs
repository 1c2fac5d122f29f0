use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: &'static str,
    #[serde(rename = "type")]
    pub word_type: &'static str,
    pub meaning: &'static str,
    pub example: &'static str,
    pub level: &'static str,
    pub image_url: &'static str,
}

pub const WORDS: &[WordEntry] = &[
    WordEntry {
        word: "Runway",
        word_type: "Noun [run-way]",
        meaning: "a strip of hard ground along which aircraft take off and land",
        example: "The plane gathered speed on the runway before takeoff.",
        level: "Beginner",
        image_url: "https://images.pexels.com/photos/5963182/pexels-photo-5963182.jpeg",
    },
    WordEntry {
        word: "Serene",
        word_type: "Adjective",
        meaning: "calm, peaceful, and untroubled",
        example: "The lake looked serene under the morning mist.",
        level: "Intermediate",
        image_url: "https://images.pexels.com/photos/358319/pexels-photo-358319.jpeg",
    },
    WordEntry {
        word: "Resilient",
        word_type: "Adjective",
        meaning: "able to recover quickly from difficult conditions",
        example: "She is a resilient person who never gives up.",
        level: "Advanced",
        image_url: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg",
    },
];

pub fn random_word() -> &'static WordEntry {
    random_word_with(&mut rand::thread_rng())
}

pub fn random_word_with<R: Rng + ?Sized>(rng: &mut R) -> &'static WordEntry {
    // WORDS is a non-empty constant
    WORDS.choose(rng).unwrap_or(&WORDS[0])
}
