//! Lifecycle of one analysis operation.

use crate::error::FailureKind;
use crate::model::AnalysisResult;
use std::sync::Arc;

/// Where the controller is in the current submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Validating,
    InFlight,
    Succeeded(Arc<AnalysisResult>),
    Failed(FailureKind),
}

impl AnalysisState {
    /// True while a submission owns the controller.
    pub fn is_busy(&self) -> bool {
        matches!(self, AnalysisState::Validating | AnalysisState::InFlight)
    }

    pub fn result(&self) -> Option<&Arc<AnalysisResult>> {
        match self {
            AnalysisState::Succeeded(r) => Some(r),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FailureKind> {
        match self {
            AnalysisState::Failed(k) => Some(k),
            _ => None,
        }
    }
}
