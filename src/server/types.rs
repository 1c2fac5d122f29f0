use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ValidateSentenceRequest {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub sentence: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
