use axum::Router;
use std::collections::HashMap;
use std::sync::Arc;
use veridict::artifact::{LinearClassifier, ModelArtifact, TfidfVectorizer};
use veridict::sentiment::SentimentAnalyzer;
use veridict::server::{AppState, router};

/// Builds a small artifact whose vocabulary is enough to exercise the
/// prediction flow end to end.
pub fn create_test_artifact() -> ModelArtifact {
    let vocabulary: HashMap<String, usize> = [
        "breaking", "news", "report", "official", "shocking", "secret",
    ]
    .into_iter()
    .enumerate()
    .map(|(index, token)| (token.to_string(), index))
    .collect();

    ModelArtifact {
        vectorizer: TfidfVectorizer {
            vocabulary,
            idf: vec![1.4, 1.0, 1.2, 1.6, 2.0, 2.2],
        },
        classifier: LinearClassifier {
            weights: vec![0.3, 0.5, 0.6, 0.9, -1.2, -1.0],
            intercept: 0.1,
        },
    }
}

/// Router backed by a loaded artifact.
pub fn create_test_app() -> Router {
    create_app(Some(Arc::new(create_test_artifact())))
}

/// Router in the degraded state where startup loading failed.
pub fn create_unloaded_app() -> Router {
    create_app(None)
}

fn create_app(artifact: Option<Arc<ModelArtifact>>) -> Router {
    router(AppState {
        artifact,
        analyzer: Arc::new(SentimentAnalyzer::default()),
    })
}
