//! Error taxonomy for a single analysis submission.

use std::fmt;
use thiserror::Error;

/// Description used when a transport failure carries no usable message.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to analyze article";

/// Notice shown for rejected input.
pub const INVALID_URL_NOTICE: &str = "Please enter a valid URL starting with http:// or https://";

/// Why a submission did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Input did not parse as an absolute URL. Never reaches the network.
    #[error("invalid URL: {input:?}")]
    InvalidInput { input: String },
    /// Server answered with a non-2xx status. The body is not surfaced.
    #[error("Analysis failed: {status}")]
    AnalysisFailed { status: u32 },
    /// Network failure or a body that is not JSON at all.
    #[error("{message}")]
    Transport { message: String },
    /// JSON parsed but does not match the analysis result shape.
    #[error("invalid analysis response: {reason}")]
    InvalidResponse { reason: String },
    /// Another submission is still in flight on this controller.
    #[error("an analysis is already in flight")]
    Busy,
    /// The controller was torn down; any response is discarded.
    #[error("analysis cancelled")]
    Cancelled,
}

impl AnalysisError {
    /// Transport error with the generic fallback when `message` is blank.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        AnalysisError::Transport { message }
    }

    /// The terminal failure this error records in controller state, if any.
    /// `Busy` and `Cancelled` leave no failure behind.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            AnalysisError::InvalidInput { .. } => Some(FailureKind::InvalidInput),
            AnalysisError::AnalysisFailed { status } => Some(FailureKind::AnalysisFailed(*status)),
            AnalysisError::Transport { message } => Some(FailureKind::Transport(message.clone())),
            AnalysisError::InvalidResponse { reason } => {
                Some(FailureKind::InvalidResponse(reason.clone()))
            }
            AnalysisError::Busy | AnalysisError::Cancelled => None,
        }
    }

    /// User-facing notice for this error, if it warrants one.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            AnalysisError::InvalidInput { .. } => Some(Notice::new("Invalid URL", INVALID_URL_NOTICE)),
            AnalysisError::Busy | AnalysisError::Cancelled => None,
            other => Some(Notice::new("Analysis Error", other.to_string())),
        }
    }
}

/// Failure recorded in [`crate::controller::AnalysisState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    AnalysisFailed(u32),
    Transport(String),
    InvalidResponse(String),
}

/// Transient, dismissable message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
