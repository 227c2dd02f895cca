//! Analysis request controller.
//!
//! Owns the lifecycle of one analyze-URL operation: validate the typed URL,
//! POST it to the analysis endpoint, bind the response, surface failures as
//! notices. At most one request is in flight per controller; the lock around
//! the state is never held across the network call.

mod state;


pub use state::AnalysisState;

use crate::cancel::CancelToken;
use crate::endpoint::Endpoint;
use crate::error::{AnalysisError, Notice};
use crate::input;
use crate::model::{self, AnalysisRequest, AnalysisResult};
use crate::transport::{Transport, TransportError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Inner {
    state: AnalysisState,
    /// Result currently on screen. Survives an invalid-input failure, cleared on dispatch.
    displayed: Option<Arc<AnalysisResult>>,
    notices: VecDeque<Notice>,
}

impl Inner {
    /// Record a terminal failure and queue its notice. Returns `err` for propagation.
    fn fail(&mut self, err: AnalysisError) -> AnalysisError {
        if let Some(kind) = err.failure_kind() {
            self.state = AnalysisState::Failed(kind);
        }
        if let Some(notice) = err.notice() {
            self.notices.push_back(notice);
        }
        err
    }
}

pub struct AnalysisController<T: Transport> {
    endpoint: Endpoint,
    transport: T,
    cancel: CancelToken,
    inner: Mutex<Inner>,
}

impl<T: Transport> AnalysisController<T> {
    pub fn new(endpoint: Endpoint, transport: T) -> Self {
        Self {
            endpoint,
            transport,
            cancel: CancelToken::new(),
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn state(&self) -> AnalysisState {
        self.lock().state.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.lock().state.is_busy()
    }

    /// Whether the submit control is enabled for the current input.
    pub fn can_submit(&self, input: &str) -> bool {
        !input.is_empty() && !self.is_in_flight() && !self.cancel.is_cancelled()
    }

    /// The result currently displayed, if any.
    pub fn displayed_result(&self) -> Option<Arc<AnalysisResult>> {
        self.lock().displayed.clone()
    }

    /// Take all pending notices (the UI dismisses them once shown).
    pub fn drain_notices(&self) -> Vec<Notice> {
        self.lock().notices.drain(..).collect()
    }

    /// Signal cancellation for this controller's lifetime. An in-flight
    /// transfer is aborted and a late response is discarded; later
    /// submissions are refused.
    pub fn teardown(&self) {
        if !self.cancel.is_cancelled() {
            tracing::debug!("analysis controller torn down");
        }
        self.cancel.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Validate `raw_url`, send it for analysis and bind the outcome.
    ///
    /// Issues at most one HTTP request. Returns `Busy` without side effects if
    /// another submission is in flight.
    pub fn submit(&self, raw_url: &str) -> Result<Arc<AnalysisResult>, AnalysisError> {
        if self.cancel.is_cancelled() {
            return Err(AnalysisError::Cancelled);
        }

        {
            let mut inner = self.lock();
            if inner.state.is_busy() {
                tracing::debug!("submit ignored: analysis already in flight");
                return Err(AnalysisError::Busy);
            }
            inner.state = AnalysisState::Validating;
            if let Err(err) = input::validate_article_url(raw_url) {
                tracing::warn!("rejected article URL {:?}", raw_url);
                return Err(inner.fail(err));
            }
            inner.displayed = None;
            inner.state = AnalysisState::InFlight;
        }

        let guard = InFlightGuard::arm(&self.inner);
        let outcome = self.dispatch(raw_url);
        guard.disarm();

        let mut inner = self.lock();
        if self.cancel.is_cancelled() {
            tracing::debug!("discarding analysis response after teardown");
            inner.state = AnalysisState::Idle;
            return Err(AnalysisError::Cancelled);
        }
        match outcome {
            Ok(result) => {
                let result = Arc::new(result);
                tracing::info!(
                    "analysis of {} succeeded: truth_score={} confidence={}",
                    raw_url,
                    result.truth_score,
                    result.confidence
                );
                inner.displayed = Some(Arc::clone(&result));
                inner.state = AnalysisState::Succeeded(Arc::clone(&result));
                Ok(result)
            }
            Err(err) => {
                tracing::warn!("analysis of {} failed: {}", raw_url, err);
                Err(inner.fail(err))
            }
        }
    }

    fn dispatch(&self, raw_url: &str) -> Result<AnalysisResult, AnalysisError> {
        let request = AnalysisRequest {
            url: raw_url.to_string(),
        };
        let body =
            serde_json::to_vec(&request).map_err(|e| AnalysisError::transport(e.to_string()))?;
        let target = self.endpoint.analyze_url();
        tracing::debug!("POST {} for {}", target, raw_url);

        let response = self
            .transport
            .post_json(&target, &body, &self.cancel)
            .map_err(|e| match e {
                TransportError::Aborted => AnalysisError::Cancelled,
                other => AnalysisError::transport(other.to_string()),
            })?;

        if !response.is_success() {
            return Err(AnalysisError::AnalysisFailed {
                status: response.status,
            });
        }
        model::parse_analysis_body(&response.body)
    }
}

/// Clears `InFlight` if dispatch unwinds before the outcome is bound.
struct InFlightGuard<'a> {
    inner: &'a Mutex<Inner>,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn arm(inner: &'a Mutex<Inner>) -> Self {
        Self { inner, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.state == AnalysisState::InFlight {
            tracing::warn!("analysis dispatch aborted abnormally; clearing in-flight state");
            inner.state = AnalysisState::Idle;
        }
    }
}

impl<T: Transport> Drop for AnalysisController<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
