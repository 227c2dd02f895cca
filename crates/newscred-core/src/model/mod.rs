//! Request and response bodies of the analysis API.
//!
//! The result is received once and then only read: the controller shares it
//! as `Arc<AnalysisResult>` and the renderer projects it into strings.

mod parse;

pub use parse::{parse_analysis_body, parse_health_body};

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/analyze/url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}

/// Analysis returned by the backend. Only `truth_score` and `confidence` are
/// required; each optional section is displayed iff present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Echo of the submitted URL. Not used for display.
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias: Option<BiasAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility: Option<CredibilityAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factuality: Option<FactualityAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Composite reliability score, displayed unscaled.
    pub truth_score: f64,
    /// Backend's overall confidence, displayed unscaled.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasAssessment {
    pub label: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityAssessment {
    /// In `[0, 1]`.
    pub score: f64,
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAssessment {
    pub label: String,
    /// In `[0, 1]`.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactualityAssessment {
    /// In `[0, 1]`.
    pub score: f64,
    pub claims_verified: u64,
    pub issues_found: Vec<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
