//! Label and score to presentation category. Label matching ignores case.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasCategory {
    Left,
    Right,
    Center,
    Neutral,
    Unknown,
}

impl BiasCategory {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "left" => BiasCategory::Left,
            "right" => BiasCategory::Right,
            "center" => BiasCategory::Center,
            "neutral" => BiasCategory::Neutral,
            _ => BiasCategory::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BiasCategory::Left => "left",
            BiasCategory::Right => "right",
            BiasCategory::Center => "center",
            BiasCategory::Neutral => "neutral",
            BiasCategory::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentCategory {
    Positive,
    Negative,
    /// Anything else, including an explicit "neutral".
    Neutral,
}

impl SentimentCategory {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => SentimentCategory::Positive,
            "negative" => SentimentCategory::Negative,
            _ => SentimentCategory::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentCategory::Positive => "positive",
            SentimentCategory::Negative => "negative",
            SentimentCategory::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredibilityTier {
    High,
    Medium,
    Low,
}

impl CredibilityTier {
    /// `>= 0.8` high, `>= 0.6` medium, otherwise low.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            CredibilityTier::High
        } else if score >= 0.6 {
            CredibilityTier::Medium
        } else {
            CredibilityTier::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CredibilityTier::High => "high",
            CredibilityTier::Medium => "medium",
            CredibilityTier::Low => "low",
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(BiasCategory, SentimentCategory, CredibilityTier);
