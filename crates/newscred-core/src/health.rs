//! Backend health probe (`GET /health`).

use crate::cancel::CancelToken;
use crate::endpoint::Endpoint;
use crate::error::AnalysisError;
use crate::model::{self, HealthStatus};
use crate::transport::Transport;

/// Ask the analysis service whether it is up.
pub fn check_health<T: Transport>(
    transport: &T,
    endpoint: &Endpoint,
) -> Result<HealthStatus, AnalysisError> {
    let target = endpoint.health_url();
    tracing::debug!("GET {}", target);
    let response = transport
        .get(&target, &CancelToken::new())
        .map_err(|e| AnalysisError::transport(e.to_string()))?;
    if !response.is_success() {
        tracing::warn!("health probe {} returned HTTP {}", target, response.status);
        return Err(AnalysisError::AnalysisFailed {
            status: response.status,
        });
    }
    model::parse_health_body(&response.body)
}
