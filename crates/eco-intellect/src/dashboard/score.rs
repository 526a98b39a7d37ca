use serde::{Deserialize, Serialize};

pub const GOOD_SCORE_THRESHOLD: f64 = 85.0;
pub const WARN_SCORE_THRESHOLD: f64 = 70.0;

/// Qualitative presentation class for an eco-score.
///
/// Text colour, card background, and card border all derive from the same
/// band so the score card can never mix severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    Warn,
    Bad,
}

impl ScoreBand {
    /// Scores outside 0..=100 are banded with the same thresholds; NaN is `Bad`.
    pub fn from_score(score: f64) -> Self {
        if score >= GOOD_SCORE_THRESHOLD {
            Self::Good
        } else if score >= WARN_SCORE_THRESHOLD {
            Self::Warn
        } else {
            Self::Bad
        }
    }

    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Good => "text-green-600",
            Self::Warn => "text-yellow-600",
            Self::Bad => "text-red-600",
        }
    }

    pub const fn background_class(self) -> &'static str {
        match self {
            Self::Good => "bg-green-100",
            Self::Warn => "bg-yellow-100",
            Self::Bad => "bg-red-100",
        }
    }

    pub const fn border_class(self) -> &'static str {
        match self {
            Self::Good => "border-green-300",
            Self::Warn => "border-yellow-300",
            Self::Bad => "border-red-300",
        }
    }
}

pub fn band(score: f64) -> ScoreBand {
    ScoreBand::from_score(score)
}
