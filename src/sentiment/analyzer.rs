use super::lexicon;
use std::collections::{HashMap, HashSet};

/// Negation inverts and dampens the polarity of the following word.
const NEGATION_FACTOR: f64 = -0.5;
/// Intensifiers scale the polarity of the following word.
const INTENSITY_BOOST: f64 = 1.3;

/// Polarity and subjectivity for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// Negative-to-positive valence in `[-1, 1]`.
    pub polarity: f64,
    /// Objective-to-subjective framing in `[0, 1]`.
    pub subjectivity: f64,
}

impl SentimentScore {
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

/// Lexicon-based analyzer. Cheap to build and shared read-only across
/// requests.
#[derive(Debug)]
pub struct SentimentAnalyzer {
    entries: HashMap<&'static str, (f64, f64)>,
    negators: HashSet<&'static str>,
    intensifiers: HashSet<&'static str>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self {
            entries: lexicon::ENTRIES
                .iter()
                .map(|&(token, polarity, subjectivity)| (token, (polarity, subjectivity)))
                .collect(),
            negators: lexicon::NEGATORS.iter().copied().collect(),
            intensifiers: lexicon::INTENSIFIERS.iter().copied().collect(),
        }
    }
}

impl SentimentAnalyzer {
    /// Scores raw (non-preprocessed) text. Total: text without any lexicon
    /// word scores exactly neutral.
    pub fn analyze(&self, text: &str) -> SentimentScore {
        let lowered = text.to_lowercase();

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut matched = 0usize;
        let mut negated = false;
        let mut boost = 1.0;

        for raw_token in lowered.split_whitespace() {
            let token = raw_token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            if token.is_empty() {
                continue;
            }
            if self.negators.contains(token) {
                negated = true;
                continue;
            }
            if self.intensifiers.contains(token) {
                boost = INTENSITY_BOOST;
                continue;
            }
            if let Some(&(polarity, subjectivity)) = self.entries.get(token) {
                let mut polarity = polarity * boost;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                polarity_sum += polarity;
                subjectivity_sum += subjectivity;
                matched += 1;
            }
            negated = false;
            boost = 1.0;
        }

        if matched == 0 {
            return SentimentScore::NEUTRAL;
        }

        SentimentScore {
            polarity: (polarity_sum / matched as f64).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / matched as f64).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::default()
    }

    #[test]
    fn positive_text_scores_positive() {
        let score = analyzer().analyze("What a wonderful and honest report");
        assert!(score.polarity > 0.0);
        assert!(score.subjectivity > 0.0);
    }

    #[test]
    fn negative_text_scores_negative() {
        let score = analyzer().analyze("A terrible hoax full of lies");
        assert!(score.polarity < 0.0);
    }

    #[test]
    fn lexicon_free_text_is_exactly_neutral() {
        let score = analyzer().analyze("The committee convened on a Tuesday afternoon.");
        assert_eq!(score, SentimentScore::NEUTRAL);
    }

    #[test]
    fn empty_text_is_exactly_neutral() {
        assert_eq!(analyzer().analyze(""), SentimentScore::NEUTRAL);
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = analyzer().analyze("the results were good");
        let negated = analyzer().analyze("the results were not good");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
    }

    #[test]
    fn intensifier_amplifies_polarity() {
        let plain = analyzer().analyze("a good outcome");
        let boosted = analyzer().analyze("a very good outcome");
        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn punctuation_does_not_hide_lexicon_words() {
        let score = analyzer().analyze("\"Shocking!\" they wrote.");
        assert!(score.polarity < 0.0);
    }

    #[test]
    fn scores_stay_in_range() {
        let texts = [
            "very wonderful excellent perfect awesome",
            "extremely terrible horrible awful dreadful",
            "not very good, not very bad",
            "neutral words only here",
        ];
        for text in texts {
            let score = analyzer().analyze(text);
            assert!(score.polarity >= -1.0 && score.polarity <= 1.0, "{}", text);
            assert!(
                score.subjectivity >= 0.0 && score.subjectivity <= 1.0,
                "{}",
                text
            );
        }
    }
}
