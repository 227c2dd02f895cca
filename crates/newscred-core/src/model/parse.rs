//! Decode response bodies, separating "not JSON" from "JSON of the wrong shape".

use super::{AnalysisResult, HealthStatus};
use crate::error::AnalysisError;
use serde::de::DeserializeOwned;

/// Decode a 2xx analysis body.
///
/// A body that is not JSON is reported like a transport failure. JSON that
/// does not match [`AnalysisResult`], or that carries a nested score outside
/// `[0, 1]`, is `InvalidResponse`.
pub fn parse_analysis_body(body: &[u8]) -> Result<AnalysisResult, AnalysisError> {
    let result: AnalysisResult = decode(body)?;
    check_scores(&result)?;
    Ok(result)
}

pub fn parse_health_body(body: &[u8]) -> Result<HealthStatus, AnalysisError> {
    decode(body)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, AnalysisError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| AnalysisError::transport(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| AnalysisError::InvalidResponse {
        reason: e.to_string(),
    })
}

fn check_scores(result: &AnalysisResult) -> Result<(), AnalysisError> {
    let nested = [
        ("bias.confidence", result.bias.as_ref().map(|b| b.confidence)),
        ("credibility.score", result.credibility.as_ref().map(|c| c.score)),
        ("sentiment.score", result.sentiment.as_ref().map(|s| s.score)),
        ("factuality.score", result.factuality.as_ref().map(|f| f.score)),
    ];
    for (field, score) in nested {
        if let Some(score) = score {
            if !(0.0..=1.0).contains(&score) {
                return Err(AnalysisError::InvalidResponse {
                    reason: format!("{field} {score} is outside [0, 1]"),
                });
            }
        }
    }
    Ok(())
}
