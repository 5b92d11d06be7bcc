//! The serialized model artifact: a text vectorizer paired with a binary
//! classifier, loaded once at startup and shared read-only by every request.

mod classifier;
mod vectorizer;

pub use classifier::{CLASS_FAKE, CLASS_REAL, LinearClassifier};
pub use vectorizer::TfidfVectorizer;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearClassifier,
}

impl ModelArtifact {
    /// Loads and validates an artifact from a JSON file.
    ///
    /// One-time startup operation, never retried. Failures are reported to
    /// the caller, which keeps the process alive in a degraded state instead
    /// of aborting.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::artifact(format!("failed to read {}: {}", path.display(), e)))?;
        let artifact: Self = serde_json::from_str(&raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Checks that the vectorizer and classifier agree on dimensions.
    fn validate(&self) -> Result<()> {
        let vocabulary_size = self.vectorizer.vocabulary_size();
        if self.vectorizer.idf.len() != vocabulary_size {
            return Err(Error::artifact(format!(
                "IDF table has {} entries for a vocabulary of {}",
                self.vectorizer.idf.len(),
                vocabulary_size
            )));
        }
        if self.classifier.weights.len() != vocabulary_size {
            return Err(Error::artifact(format!(
                "classifier has {} weights for a vocabulary of {}",
                self.classifier.weights.len(),
                vocabulary_size
            )));
        }
        if let Some((token, &index)) = self
            .vectorizer
            .vocabulary
            .iter()
            .find(|&(_, &index)| index >= vocabulary_size)
        {
            return Err(Error::artifact(format!(
                "vocabulary index {} for token {:?} is out of bounds",
                index, token
            )));
        }
        Ok(())
    }
}
