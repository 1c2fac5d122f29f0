//! Fixed mock data served to the dashboard and word-of-the-day views.

mod summary;
mod words;

pub use summary::{ScoreHistoryItem, SkillSummaryItem, SummaryResponse, summary};
pub use words::{WORDS, WordEntry, random_word, random_word_with};
