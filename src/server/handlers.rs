use super::types::{BannerResponse, ErrorResponse, ValidateSentenceRequest};
use crate::{
    catalog::{self, SummaryResponse, WordEntry},
    config::EmptySentencePolicy,
    relay::{Evaluation, Relay},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
    pub banner: Arc<str>,
    pub empty_sentence: EmptySentencePolicy,
}

pub async fn root(State(state): State<AppState>) -> Json<BannerResponse> {
    Json(BannerResponse {
        message: state.banner.to_string(),
    })
}

pub async fn summary() -> Json<SummaryResponse> {
    Json(catalog::summary())
}

pub async fn word_of_the_day() -> Json<&'static WordEntry> {
    let entry = catalog::random_word();
    debug!("Serving word of the day: {}", entry.word);
    Json(entry)
}

pub async fn validate_sentence(
    State(state): State<AppState>,
    Json(request): Json<ValidateSentenceRequest>,
) -> Result<Json<Evaluation>, (StatusCode, Json<ErrorResponse>)> {
    let word = request.word.unwrap_or_default();
    let sentence = request.sentence.unwrap_or_default();

    match state.relay.evaluate(&word, &sentence).await {
        Ok(evaluation) => {
            info!(
                "Sentence evaluated ({})",
                if evaluation.is_fallback() { "fallback" } else { "webhook" }
            );
            Ok(Json(evaluation))
        }
        Err(e) => {
            warn!("Rejected sentence validation request: {}", e);
            let status = match state.empty_sentence {
                EmptySentencePolicy::Reject => StatusCode::BAD_REQUEST,
                EmptySentencePolicy::ErrorBody => StatusCode::OK,
            };
            Err((
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
