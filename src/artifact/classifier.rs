use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Class index the artifact assigns to fake articles.
pub const CLASS_FAKE: usize = 0;
/// Class index the artifact assigns to real articles.
pub const CLASS_REAL: usize = 1;

/// Binary logistic-regression head over TF-IDF features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LinearClassifier {
    /// Per-class probabilities `[p_fake, p_real]` for a feature vector.
    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2]> {
        if features.len() != self.weights.len() {
            return Err(Error::inference(format!(
                "feature vector has {} dimensions, classifier expects {}",
                features.len(),
                self.weights.len()
            )));
        }

        let logit = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        let p_real = sigmoid(logit);

        Ok([1.0 - p_real, p_real])
    }

    /// Predicted class index and the probability pair it was derived from.
    pub fn predict(&self, features: &[f64]) -> Result<(usize, [f64; 2])> {
        let probabilities = self.predict_proba(features)?;
        let class = if probabilities[CLASS_REAL] > probabilities[CLASS_FAKE] {
            CLASS_REAL
        } else {
            CLASS_FAKE
        };
        Ok((class, probabilities))
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
