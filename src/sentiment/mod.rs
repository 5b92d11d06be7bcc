//! Lexicon-based sentiment scoring.
//!
//! Maps words to (polarity, subjectivity) pairs and averages the scores of
//! matched tokens. Polarity is in `[-1, 1]`, subjectivity in `[0, 1]`.

mod analyzer;
mod lexicon;

pub use analyzer::{SentimentAnalyzer, SentimentScore};
