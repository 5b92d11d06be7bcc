use super::types::{
    ErrorResponse, HealthResponse, PredictRequest, PredictResponse, Prediction, Probability,
    Sentiment, TextStats,
};
use crate::artifact::{CLASS_FAKE, CLASS_REAL, ModelArtifact};
use crate::sentiment::SentimentAnalyzer;
use crate::{Error, text};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Minimum trimmed length accepted by the predict endpoint.
const MIN_TEXT_LEN: usize = 10;

/// Shared per-process state. The artifact is `None` when startup loading
/// failed; the service then reports unhealthy and refuses predictions.
#[derive(Clone)]
pub struct AppState {
    pub artifact: Option<Arc<ModelArtifact>>,
    pub analyzer: Arc<SentimentAnalyzer>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_loaded = state.artifact.is_some();
    Json(HealthResponse {
        status: if model_loaded { "healthy" } else { "error" }.to_string(),
        model_loaded,
    })
}

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Received prediction request");

    match run_inference(&state, request) {
        Ok(response) => {
            info!(
                label = %response.prediction.label,
                confidence = response.prediction.confidence,
                "Prediction served"
            );
            Ok(Json(response))
        }
        Err(e) => {
            match &e {
                Error::InvalidInput(_) => info!("Rejected prediction request: {}", e),
                _ => error!("Prediction error: {}", e),
            }
            Err(error_response(e))
        }
    }
}

fn run_inference(state: &AppState, request: PredictRequest) -> crate::Result<PredictResponse> {
    let Some(text) = request.text else {
        return Err(Error::invalid_input("No text provided"));
    };
    if text.trim().chars().count() < MIN_TEXT_LEN {
        return Err(Error::invalid_input("Text too short"));
    }

    let artifact = state
        .artifact
        .as_deref()
        .ok_or_else(|| Error::inference("model artifact not loaded"))?;

    let processed = text::preprocess(&text);
    let features = artifact.vectorizer.transform(&processed);
    let (class, probabilities) = artifact.classifier.predict(&features)?;

    // Sentiment and statistics cover the original text, not the canonical
    // form fed to the vectorizer
    let sentiment = state.analyzer.analyze(&text);

    Ok(PredictResponse {
        prediction: Prediction {
            label: if class == CLASS_REAL {
                "Real News"
            } else {
                "Fake News"
            }
            .to_string(),
            is_fake: class == CLASS_FAKE,
            confidence: probabilities[CLASS_FAKE].max(probabilities[CLASS_REAL]),
        },
        probability: Probability {
            fake: probabilities[CLASS_FAKE],
            real: probabilities[CLASS_REAL],
        },
        sentiment: Sentiment {
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
        },
        text_stats: TextStats {
            length: text::char_count(&text),
            word_count: text::word_count(&text),
        },
    })
}

/// Client-input errors map to 400, everything else to 500; the bare message
/// is exposed either way.
fn error_response(e: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
