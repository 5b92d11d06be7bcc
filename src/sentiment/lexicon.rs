//! Default word table for the sentiment analyzer.
//!
//! Each entry is `(token, polarity, subjectivity)` with polarity in
//! `[-1, 1]` and subjectivity in `[0, 1]`.

pub(crate) const ENTRIES: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("brilliant", 0.9, 0.9),
    ("calm", 0.3, 0.7),
    ("celebrated", 0.4, 0.6),
    ("clear", 0.1, 0.35),
    ("confident", 0.5, 0.8),
    ("credible", 0.4, 0.6),
    ("effective", 0.6, 0.7),
    ("excellent", 1.0, 1.0),
    ("fair", 0.7, 0.9),
    ("genuine", 0.5, 0.6),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.5),
    ("honest", 0.6, 0.9),
    ("hopeful", 0.5, 0.8),
    ("important", 0.4, 1.0),
    ("impressive", 0.75, 0.9),
    ("improved", 0.4, 0.5),
    ("innovative", 0.5, 0.7),
    ("love", 0.5, 0.6),
    ("perfect", 1.0, 1.0),
    ("popular", 0.4, 0.6),
    ("positive", 0.45, 0.6),
    ("progress", 0.4, 0.4),
    ("promising", 0.5, 0.7),
    ("reliable", 0.5, 0.6),
    ("remarkable", 0.75, 0.75),
    ("safe", 0.5, 0.5),
    ("strong", 0.45, 0.6),
    ("succeeded", 0.6, 0.6),
    ("success", 0.7, 0.7),
    ("successful", 0.75, 0.75),
    ("trusted", 0.5, 0.6),
    ("truthful", 0.6, 0.8),
    ("valuable", 0.5, 0.6),
    ("verified", 0.4, 0.5),
    ("win", 0.8, 0.6),
    ("wonderful", 1.0, 1.0),
    ("absurd", -0.6, 0.9),
    ("alarming", -0.6, 0.8),
    ("angry", -0.5, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.65),
    ("bogus", -0.7, 0.9),
    ("catastrophic", -0.9, 0.9),
    ("corrupt", -0.8, 0.9),
    ("crisis", -0.6, 0.6),
    ("dangerous", -0.6, 0.7),
    ("deceptive", -0.7, 0.9),
    ("dire", -0.7, 0.8),
    ("disaster", -0.8, 0.7),
    ("dishonest", -0.7, 0.9),
    ("doubtful", -0.4, 0.8),
    ("dreadful", -0.9, 1.0),
    ("fail", -0.6, 0.5),
    ("failed", -0.6, 0.5),
    ("failure", -0.65, 0.6),
    ("fake", -0.6, 0.8),
    ("false", -0.6, 0.7),
    ("fraud", -0.8, 0.9),
    ("fraudulent", -0.8, 0.9),
    ("hate", -0.8, 0.9),
    ("hoax", -0.7, 0.9),
    ("horrible", -1.0, 1.0),
    ("lie", -0.7, 0.8),
    ("lies", -0.7, 0.8),
    ("misleading", -0.6, 0.8),
    ("outrage", -0.7, 0.9),
    ("outrageous", -0.75, 1.0),
    ("panic", -0.6, 0.7),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("scam", -0.8, 0.9),
    ("scandal", -0.6, 0.7),
    ("shocking", -0.5, 0.9),
    ("terrible", -1.0, 1.0),
    ("threat", -0.5, 0.6),
    ("ugly", -0.7, 0.9),
    ("unreliable", -0.5, 0.7),
    ("untrue", -0.6, 0.8),
    ("worst", -1.0, 0.3),
    ("wrong", -0.5, 0.5),
];

/// Tokens that invert and dampen the polarity of the following word.
pub(crate) const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "can't", "don't", "doesn't", "didn't",
    "isn't", "wasn't", "won't", "wouldn't", "dont", "doesnt", "didnt", "isnt", "wasnt",
];

/// Tokens that amplify the polarity of the following word.
pub(crate) const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "absolutely",
    "completely",
    "totally",
    "utterly",
    "highly",
    "incredibly",
];
