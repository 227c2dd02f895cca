//! Projection of an [`AnalysisResult`] into display strings.
//!
//! Nested scores are shown as percentages; the top-level `truth_score` and
//! `confidence` are shown as the raw numbers the backend sent.

mod category;
mod text;

pub use category::{BiasCategory, CredibilityTier, SentimentCategory};
pub use text::render_text;

use crate::model::AnalysisResult;

/// `round(score * 100)` with half-up rounding.
pub fn percent(score: f64) -> i64 {
    (score * 100.0 + 0.5).floor() as i64
}

pub fn format_percent(score: f64) -> String {
    format!("{}%", percent(score))
}

/// Shortest decimal form, so `0.9` stays `0.9` and `1.0` prints as `1`.
pub fn format_raw(value: f64) -> String {
    value.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiasCard {
    pub label: String,
    pub category: BiasCategory,
    pub confidence: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredibilityCard {
    pub score: String,
    pub tier: CredibilityTier,
    /// `None` when the backend sent no factors.
    pub factors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentCard {
    pub label: String,
    pub category: SentimentCategory,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactualityCard {
    pub score: String,
    pub claims_verified: u64,
    /// `None` when no issues were found.
    pub issues: Option<Vec<String>>,
}

/// Everything the result view shows. A `None` section is not rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub title: Option<String>,
    pub truth_score: String,
    pub confidence: String,
    pub bias: Option<BiasCard>,
    pub credibility: Option<CredibilityCard>,
    pub sentiment: Option<SentimentCard>,
    pub factuality: Option<FactualityCard>,
    pub summary: Option<String>,
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| items.to_vec())
}

impl AnalysisReport {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            title: result.title.clone(),
            truth_score: format_raw(result.truth_score),
            confidence: format_raw(result.confidence),
            bias: result.bias.as_ref().map(|b| BiasCard {
                label: b.label.clone(),
                category: BiasCategory::from_label(&b.label),
                confidence: format_percent(b.confidence),
                explanation: b.explanation.clone(),
            }),
            credibility: result.credibility.as_ref().map(|c| CredibilityCard {
                score: format_percent(c.score),
                tier: CredibilityTier::from_score(c.score),
                factors: non_empty(&c.factors),
            }),
            sentiment: result.sentiment.as_ref().map(|s| SentimentCard {
                label: s.label.clone(),
                category: SentimentCategory::from_label(&s.label),
                score: format_percent(s.score),
            }),
            factuality: result.factuality.as_ref().map(|f| FactualityCard {
                score: format_percent(f.score),
                claims_verified: f.claims_verified,
                issues: non_empty(&f.issues_found),
            }),
            summary: result.summary.clone(),
        }
    }
}
