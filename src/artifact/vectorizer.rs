use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// TF-IDF vectorizer over a fixed vocabulary learned offline.
///
/// The vocabulary maps a token to its column index and `idf` holds the
/// inverse document frequency per column. Input is expected to already be
/// canonical (see [`crate::text::preprocess`]), so tokenization is a plain
/// whitespace split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Transforms a canonical document into an L2-normalized TF-IDF vector.
    ///
    /// Tokens outside the vocabulary contribute nothing; an empty document
    /// maps to the zero vector. Deterministic and total.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let tokens: Vec<&str> = document.split_whitespace().collect();
        let mut features = vec![0.0; self.idf.len()];

        for token in &tokens {
            if let Some(&index) = self.vocabulary.get(*token) {
                features[index] += 1.0;
            }
        }

        // Term counts normalized by document length, then scaled by IDF
        if !tokens.is_empty() {
            let doc_length = tokens.len() as f64;
            for (index, value) in features.iter_mut().enumerate() {
                *value = *value / doc_length * self.idf[index];
            }
        }

        // L2 normalize
        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_vectorizer() -> TfidfVectorizer {
        let vocabulary: HashMap<String, usize> = [("breaking", 0), ("news", 1), ("story", 2)]
            .into_iter()
            .map(|(token, index)| (token.to_string(), index))
            .collect();
        TfidfVectorizer {
            vocabulary,
            idf: vec![2.0, 1.0, 1.5],
        }
    }

    #[test]
    fn transform_produces_a_unit_vector_for_known_tokens() {
        let vectorizer = sample_vectorizer();
        let features = vectorizer.transform("breaking news");

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        // "breaking" carries the larger IDF, so it dominates the direction
        assert!(features[0] > features[1]);
        assert_eq!(features[2], 0.0);
    }

    #[test]
    fn unknown_tokens_contribute_nothing() {
        let vectorizer = sample_vectorizer();
        let with_noise = vectorizer.transform("breaking news qwerty zxcvb");
        let without_noise = vectorizer.transform("breaking news");

        // Same direction; the noise tokens only change raw counts, which the
        // L2 normalization cancels out
        for (a, b) in with_noise.iter().zip(&without_noise) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_document_maps_to_the_zero_vector() {
        let vectorizer = sample_vectorizer();
        assert_eq!(vectorizer.transform(""), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn fully_unknown_document_maps_to_the_zero_vector() {
        let vectorizer = sample_vectorizer();
        assert_eq!(vectorizer.transform("qwerty zxcvb"), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn repeated_tokens_increase_their_weight() {
        let vectorizer = sample_vectorizer();
        let single = vectorizer.transform("news story");
        let repeated = vectorizer.transform("news news news story");
        assert!(repeated[1] > single[1]);
    }
}
