use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Prediction,
    pub probability: Probability,
    pub sentiment: Sentiment,
    pub text_stats: TextStats,
}

#[derive(Debug, Serialize)]
pub struct Prediction {
    pub label: String,
    pub is_fake: bool,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct Probability {
    pub fake: f64,
    pub real: f64,
}

#[derive(Debug, Serialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Serialize)]
pub struct TextStats {
    pub length: usize,
    pub word_count: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
