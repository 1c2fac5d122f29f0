use super::types::EvaluationResult;
use crate::config::FallbackConfig;
use rand::{Rng, seq::SliceRandom};

pub fn synthesize(sentence: &str, config: &FallbackConfig) -> EvaluationResult {
    synthesize_with(&mut rand::thread_rng(), sentence, config)
}

pub fn synthesize_with<R: Rng + ?Sized>(
    rng: &mut R,
    sentence: &str,
    config: &FallbackConfig,
) -> EvaluationResult {
    let (min, max) = (config.score_min, config.score_max);
    let raw = if min < max { rng.gen_range(min..=max) } else { min };
    // one decimal, never outside the configured range
    let score = ((raw * 10.0).round() / 10.0).clamp(min, max);

    let level = config
        .levels
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string());

    let corrected_sentence = if config.capitalize {
        capitalize(sentence)
    } else {
        sentence.to_string()
    };

    EvaluationResult {
        score,
        level,
        suggestion: config.suggestion.clone(),
        corrected_sentence,
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
